//! Rule engine for a 4x4 sliding-tile puzzle (2048 family).
//!
//! - [`engine`]: the grid model and the move/spawn/terminal operations.
//!   Stateless transformations over a caller-owned [`Grid`].
//! - [`game`]: a small session type that owns the grid and the RNG and
//!   sequences move -> conditional spawn -> terminal check for a driver
//!   loop.
//!
//! Front ends (terminal UI, bots) consume per-cell values via
//! [`Grid::tile_value`] and the terminal flag via [`Game::is_over`].

pub mod engine;
pub mod game;

pub use engine::{Cell, Direction, Grid, GRID_SIZE};
pub use game::Game;
