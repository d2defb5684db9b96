//! Game session: owns the grid and the RNG, and sequences one accepted
//! move per call (move -> conditional spawn -> terminal check). The
//! driver loop stays free of rule knowledge.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::engine::{self, Direction, Grid};

/// A running game over one exclusively-owned [`Grid`].
///
/// ```
/// use shift48_core::Game;
/// let game = Game::new(Some(7));
/// assert_eq!(game.grid().count_empty(), 14);
/// assert!(!game.is_over());
/// ```
pub struct Game {
    grid: Grid,
    rng: SmallRng,
    over: bool,
}

impl Game {
    /// Start a fresh game with two spawned tiles. `seed` makes the run
    /// reproducible; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Game::with_rng(rng)
    }

    fn with_rng(mut rng: SmallRng) -> Self {
        let mut grid = Grid::EMPTY;
        engine::spawn_tile(&mut grid, &mut rng);
        engine::spawn_tile(&mut grid, &mut rng);
        Game {
            grid,
            rng,
            over: false,
        }
    }

    /// Apply one move. If the board changed and an empty cell exists, a
    /// new tile spawns; the terminal state is then recomputed. Returns
    /// the changed flag; a step on a finished game is a no-op.
    ///
    /// The empty-cell re-check matters: a move that only merges can
    /// report a change on a board that was full before the merges freed
    /// cells, so spawning never assumes emptiness from `changed` alone.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.over {
            return false;
        }
        let changed = engine::attempt_move(&mut self.grid, direction);
        if changed && self.grid.count_empty() > 0 {
            engine::spawn_tile(&mut self.grid, &mut self.rng);
        }
        self.over = !engine::has_legal_move(&self.grid);
        changed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True once no legal move remains.
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[cfg(test)]
    pub(crate) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.over = !engine::has_legal_move(&self.grid);
    }
}
