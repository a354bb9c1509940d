/// Number of rows in the simulated board
pub const ROWS: usize = 25;
/// Number of columns in the simulated board
pub const COLUMNS: usize = 25;

/// A fixed-size 2-D board of dead/alive cells
///
/// The outermost ring of cells is the border. The engine never writes to it,
/// so it only holds live cells if they were placed there directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Creates a grid where only the given `(row, col)` cells are alive
    pub fn from_alive<I>(rows: usize, columns: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, columns);
        for (row, col) in alive {
            grid.set(row, col, true);
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let offset = self.offset(row, col);
        self.cells[offset] = alive;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.columns]
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.columns
    }
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && !self.is_border(row, col)
    }

    /// Live cells as `(row, col)` pairs, in row-major order
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.columns, "cell out of bounds");
        row * self.columns + col
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(ROWS, COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::default();

        assert_eq!(grid.rows(), ROWS);
        assert_eq!(grid.columns(), COLUMNS);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn alive_is_row_major() {
        let grid = Grid::from_alive(4, 5, [(2, 1), (0, 4), (2, 0)]);

        let alive: Vec<_> = grid.alive().collect();
        assert_eq!(alive, vec![(0, 4), (2, 0), (2, 1)]);
    }

    #[test]
    fn row_slices_follow_columns() {
        let grid = Grid::from_alive(3, 4, [(1, 2)]);

        assert_eq!(grid.row(1), &[false, false, true, false]);
        assert_eq!(grid.row(2), &[false; 4]);
    }

    #[test]
    fn border_ring_is_detected() {
        let grid = Grid::new(5, 6);

        assert!(grid.is_border(0, 3));
        assert!(grid.is_border(4, 3));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(2, 5));
        assert!(grid.is_interior(1, 1));
        assert!(grid.is_interior(3, 4));
        assert!(!grid.is_interior(5, 1));
    }
}
