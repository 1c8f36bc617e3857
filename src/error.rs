use miette::Diagnostic;
use thiserror::Error;

/// Main error type for arthash operations.
///
/// The derivation pipeline itself is total; errors only arise at the I/O
/// boundary when writing encoded images to storage.
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    #[diagnostic(code(arthash::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(arthash::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ArtError>;
