//! Engine module: the 4x4 cell grid and the move/merge, spawn and
//! terminal-detection operations. Public API stays small and ergonomic.
//!
//! - `Grid` is the owned board state with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `attempt_move`).
//! - Operations take the grid by `&mut` and keep no state of their own.

mod ops;
pub mod state;

pub use state::{Cell, Direction, Grid, GRID_SIZE};

pub use ops::{attempt_move, has_legal_move, highest_tile, spawn_tile, spawn_tile_thread};
