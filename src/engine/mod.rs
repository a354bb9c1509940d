mod index;

use crate::grid::{COLUMNS, Grid, ROWS};
use rayon::prelude::*;

/// Cells of the starting pattern as `(row, col)`
const SEED: [(usize, usize); 5] = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

/// The starting pattern on a `ROWS` x `COLUMNS` grid
#[inline]
pub fn seed() -> Grid {
    seed_for(ROWS, COLUMNS)
}

/// The starting pattern on a grid of the given size
pub fn seed_for(rows: usize, columns: usize) -> Grid {
    Grid::from_alive(rows, columns, SEED)
}

/// The outcome of computing one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The computed successor was adopted
    Continued(Grid),
    /// A live cell reached the last interior row or column, so the
    /// computed successor was discarded for the seed
    Restarted(Grid),
}

impl Generation {
    #[inline]
    pub fn is_restart(&self) -> bool {
        matches!(self, Self::Restarted(_))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        match self {
            Self::Continued(grid) | Self::Restarted(grid) => grid,
        }
    }

    #[inline]
    pub fn into_grid(self) -> Grid {
        match self {
            Self::Continued(grid) | Self::Restarted(grid) => grid,
        }
    }

    fn resolve(current: &Grid, next: Grid, restart: bool) -> Self {
        if restart {
            Self::Restarted(seed_for(current.rows(), current.columns()))
        } else {
            Self::Continued(next)
        }
    }
}

/// Computes the generation following `current`
///
/// Border cells of the result are always dead. If any cell on the last
/// interior row or column comes alive, the result is the seed instead.
pub fn step(current: &Grid) -> Generation {
    let mut next = Grid::new(current.rows(), current.columns());
    let columns = current.columns();

    let mut restart = false;
    for row in 1..current.rows().saturating_sub(1) {
        let out = &mut next.cells_mut()[row * columns..(row + 1) * columns];
        restart |= next_row(current, row, out);
    }
    Generation::resolve(current, next, restart)
}

/// Same as [`step`], computing rows on the rayon thread pool
pub fn step_parallel(current: &Grid) -> Generation {
    let mut next = Grid::new(current.rows(), current.columns());
    let interior = 1..current.rows().saturating_sub(1);

    let restart = next
        .cells_mut()
        .par_chunks_mut(current.columns().max(1))
        .enumerate()
        .filter(|(row, _)| interior.contains(row))
        .map(|(row, out)| next_row(current, row, out))
        .reduce(|| false, |a, b| a || b);
    Generation::resolve(current, next, restart)
}

/// Writes the next state of every interior cell of `row` into `out`
///
/// Returns whether one of those cells triggers a restart
fn next_row(current: &Grid, row: usize, out: &mut [bool]) -> bool {
    let last_row = current.rows().saturating_sub(2);
    let last_col = current.columns().saturating_sub(2);
    let rules = index::get_gol_index();

    let mut restart = false;
    for col in 1..current.columns().saturating_sub(1) {
        let alive = rules[neighborhood(current, row, col)];
        if alive && (row == last_row || col == last_col) {
            restart = true;
        }
        out[col] = alive;
    }
    restart
}

/// Packs the 3x3 window centered on `(row, col)` into 9 bits, row by row
fn neighborhood(grid: &Grid, row: usize, col: usize) -> usize {
    let mut bits = 0;
    for (i, r) in (row - 1..=row + 1).enumerate() {
        let cells = &grid.row(r)[col - 1..=col + 1];
        for (j, &alive) in cells.iter().enumerate() {
            bits |= usize::from(alive) << (i * 3 + j);
        }
    }
    bits
}

/// Owns the current generation of the simulation
#[derive(Debug, Clone)]
pub struct GameOfLife {
    current: Grid,
}

impl GameOfLife {
    /// Starts from the seed
    pub fn new() -> Self {
        Self::from_grid(seed())
    }

    #[inline]
    pub fn from_grid(current: Grid) -> Self {
        Self { current }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Advances one generation, returning whether the simulation restarted
    pub fn next_generation(&mut self) -> bool {
        self.adopt(step(&self.current))
    }

    pub fn next_generation_parallel(&mut self) -> bool {
        self.adopt(step_parallel(&self.current))
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    fn adopt(&mut self, generation: Generation) -> bool {
        let restarted = generation.is_restart();
        if restarted {
            log::debug!("pattern reached the edge, restarting from seed");
        }
        self.current = generation.into_grid();
        restarted
    }
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self::new()
    }
}
