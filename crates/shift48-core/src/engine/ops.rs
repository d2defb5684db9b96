use rand::Rng;

use super::state::{Cell, Direction, Grid, GRID_SIZE};

/// Slide and merge tiles toward `direction`, mutating `grid` in place.
/// Returns true iff at least one cell's value changed position or
/// magnitude.
///
/// The board is scanned repeatedly until a full scan moves nothing. Each
/// scan advances every movable tile by one cell, so a tile can traverse
/// the whole board within the `GRID_SIZE * GRID_SIZE` scan bound; the
/// early exit makes that bound a worst case, not the typical cost.
///
/// Merge rules: a tile merges at most once per move (tracked by the
/// per-cell flag, which travels with a tile that keeps sliding after its
/// merge), and in a chain of equal tiles the pair nearest the target edge
/// merges first.
pub fn attempt_move(grid: &mut Grid, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    let order = scan_order(direction);
    grid.clear_merged();

    let mut changed = false;
    for _ in 0..GRID_SIZE * GRID_SIZE {
        let mut advanced = false;
        for &(x, y) in &order {
            let cell = grid.get(x, y);
            if cell.is_empty() {
                continue;
            }
            let Some((nx, ny)) = step_toward(x, y, dx, dy) else {
                continue;
            };
            let ahead = grid.get(nx, ny);
            if ahead.is_empty() {
                grid.set(nx, ny, cell);
                grid.set(x, y, Cell::EMPTY);
                advanced = true;
            } else if ahead.value == cell.value && !ahead.merged && !cell.merged {
                grid.set(
                    nx,
                    ny,
                    Cell {
                        value: cell.value * 2,
                        merged: true,
                    },
                );
                grid.set(x, y, Cell::EMPTY);
                advanced = true;
            }
            // Otherwise blocked by a different value; nothing to do for
            // this cell on this scan.
        }
        if !advanced {
            break;
        }
        changed = true;
    }
    changed
}

/// Scan coordinates for one pass, cells nearest the target edge first.
/// Edge-first order is what makes a chain of equal tiles merge the pair
/// closest to that edge.
fn scan_order(direction: Direction) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            order.push(match direction {
                Direction::Up | Direction::Left => (x, y),
                Direction::Down => (x, GRID_SIZE - 1 - y),
                Direction::Right => (GRID_SIZE - 1 - x, y),
            });
        }
    }
    order
}

/// The cell one step along `(dx, dy)` from `(x, y)`, or `None` at the
/// board edge. Bounds are enforced here by checked index arithmetic, so
/// the move scan never needs runtime range checks.
#[inline]
fn step_toward(x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < GRID_SIZE && ny < GRID_SIZE).then_some((nx, ny))
}

/// Place a new tile (2 with probability 9/10, else 4) on a uniformly
/// chosen empty cell, using the provided RNG.
///
/// Panics if no empty cell exists. That is a caller-side invariant breach
/// (spawning is only legal after confirming an empty cell), not a
/// recoverable runtime condition.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let empty = grid.empty_cells();
    assert!(!empty.is_empty(), "spawn_tile called on a full grid");
    let (x, y) = empty[rng.gen_range(0..empty.len())];
    grid.set(
        x,
        y,
        Cell {
            value: generate_tile_value(rng),
            merged: false,
        },
    );
}

/// Convenience: like `spawn_tile` but uses thread-local RNG.
///
/// For reproducible behavior, prefer `spawn_tile(&mut grid, &mut impl Rng)`.
pub fn spawn_tile_thread(grid: &mut Grid) {
    let mut rng = rand::thread_rng();
    spawn_tile(grid, &mut rng);
}

pub(crate) fn generate_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 {
        2
    } else {
        4
    }
}

/// True while any legal move remains: an empty cell exists, or two
/// horizontally or vertically adjacent cells share a value. Pure, O(N^2).
pub fn has_legal_move(grid: &Grid) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let value = grid.tile_value(x, y);
            if value == 0 {
                return true;
            }
            if x + 1 < GRID_SIZE && grid.tile_value(x + 1, y) == value {
                return true;
            }
            if y + 1 < GRID_SIZE && grid.tile_value(x, y + 1) == value {
                return true;
            }
        }
    }
    false
}

/// The highest tile value on the board (0 when the board is empty).
pub fn highest_tile(grid: &Grid) -> u32 {
    (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| grid.tile_value(x, y)))
        .max()
        .unwrap_or(0)
}
