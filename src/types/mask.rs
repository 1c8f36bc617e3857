//! Boolean occupancy masks.

/// Width and height of the base icon grid.
pub const GRID_SIZE: usize = 16;

/// A 16×16 boolean occupancy grid marking which cells belong to a shape
/// or border.
///
/// Writes through [`Mask::set`] are clipped to the grid, so hand-authored
/// geometry may overshoot the edges without corrupting neighbouring memory.
/// Transformations return a new mask; an existing mask is never mutated by
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Mask {
    /// Create an empty mask.
    pub const fn empty() -> Self {
        Self {
            cells: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Whether the cell at (x, y) is set. Out-of-range reads are `false`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE && self.cells[y][x]
    }

    /// Set the cell at (x, y), silently discarding out-of-range coordinates.
    pub fn set(&mut self, x: i32, y: i32) {
        if (0..GRID_SIZE as i32).contains(&x) && (0..GRID_SIZE as i32).contains(&y) {
            self.cells[y as usize][x as usize] = true;
        }
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell)
            .count()
    }

    /// Whether no cell is set.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Mirror the mask horizontally, mapping column x to 15−x in every row.
    pub fn flip_horizontal(&self) -> Self {
        let mut out = Self::empty();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.cells[y][x] {
                    out.cells[y][GRID_SIZE - 1 - x] = true;
                }
            }
        }
        out
    }

    /// Iterate over the coordinates of set cells in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_SIZE)
            .flat_map(move |y| (0..GRID_SIZE).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.cells[y][x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut m = Mask::empty();
        m.set(3, 5);
        assert!(m.get(3, 5));
        assert!(!m.get(5, 3));
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn test_set_clips_out_of_range() {
        let mut m = Mask::empty();
        m.set(-1, 0);
        m.set(0, -1);
        m.set(16, 0);
        m.set(0, 16);
        m.set(100, 100);
        assert!(m.is_empty());
    }

    #[test]
    fn test_get_out_of_range_is_false() {
        let m = Mask::empty();
        assert!(!m.get(16, 0));
        assert!(!m.get(0, 16));
    }

    #[test]
    fn test_flip_mirrors_columns() {
        let mut m = Mask::empty();
        m.set(0, 4);
        m.set(2, 9);

        let flipped = m.flip_horizontal();
        assert!(flipped.get(15, 4));
        assert!(flipped.get(13, 9));
        assert!(!flipped.get(0, 4));
    }

    #[test]
    fn test_flip_is_involution() {
        let mut m = Mask::empty();
        m.set(1, 2);
        m.set(7, 7);
        m.set(15, 0);
        m.set(4, 11);

        assert_eq!(m.flip_horizontal().flip_horizontal(), m);
    }

    #[test]
    fn test_flip_does_not_mutate_input() {
        let mut m = Mask::empty();
        m.set(0, 0);
        let copy = m;

        let _ = m.flip_horizontal();
        assert_eq!(m, copy);
    }

    #[test]
    fn test_iter_set() {
        let mut m = Mask::empty();
        m.set(2, 1);
        m.set(0, 0);

        let cells: Vec<_> = m.iter_set().collect();
        assert_eq!(cells, vec![(0, 0), (2, 1)]);
    }
}
