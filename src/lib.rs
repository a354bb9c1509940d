//! Conway's Game of Life on a small fixed board, redrawn in place on a terminal.

pub mod engine;
pub mod grid;
pub mod render;
pub mod sim;
pub mod stats;

pub use engine::{GameOfLife, Generation, seed, step, step_parallel};
pub use grid::{COLUMNS, Grid, ROWS};
pub use render::{Frame, TerminalRenderer, clear_previous_frame, render_frame, set_window_size};
pub use sim::{Simulation, Sleep, Tick};
