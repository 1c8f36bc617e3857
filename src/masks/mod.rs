//! Shape and border mask catalogs.
//!
//! Both catalogs are closed enumerations: each variant carries its own pure
//! generation rule, evaluated fresh on every call. Nothing is registered at
//! runtime and nothing is mutated after compile, so concurrent lookups are
//! safe by construction.

mod borders;
mod templates;

pub use borders::BorderKind;
pub use templates::ShapeKind;
