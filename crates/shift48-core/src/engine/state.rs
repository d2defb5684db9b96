use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ops;

/// Side length of the square board.
pub const GRID_SIZE: usize = 4;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` pointing toward the target edge.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One board cell: a tile value (0 = empty, otherwise a power of two >= 2)
/// plus a flag marking that the cell already took part in a merge during
/// the move currently being resolved.
///
/// The flag is transient: it is cleared at the start of every move attempt
/// and is meaningless outside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub value: u32,
    pub(crate) merged: bool,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell {
        value: 0,
        merged: false,
    };

    #[inline]
    pub fn is_empty(self) -> bool {
        self.value == 0
    }
}

/// A 4x4 board of cells, addressed by `(x, y)` = (column, row) with the
/// origin at the top-left corner. Row-major storage; neighbors are looked
/// up by index arithmetic, never by stored references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Grid::EMPTY
    }
}

impl Grid {
    /// A constant empty board.
    pub const EMPTY: Grid = Grid {
        cells: [[Cell::EMPTY; GRID_SIZE]; GRID_SIZE],
    };

    /// Build a grid from plain tile values, row by row. Merge flags start
    /// clear.
    ///
    /// ```
    /// use shift48_core::{Direction, Grid};
    /// let mut g = Grid::from_values([
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ]);
    /// assert!(g.attempt_move(Direction::Left));
    /// assert_eq!(g.to_values()[0], [4, 0, 0, 0]);
    /// ```
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Grid::EMPTY;
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                grid.cells[y][x] = Cell {
                    value,
                    merged: false,
                };
            }
        }
        grid
    }

    /// Snapshot of the tile values, row by row.
    pub fn to_values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                out[y][x] = cell.value;
            }
        }
        out
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// The tile value at `(x, y)`; 0 for an empty cell.
    #[inline]
    pub fn tile_value(&self, x: usize, y: usize) -> u32 {
        self.cells[y][x].value
    }

    /// Coordinates of every empty cell, in raster order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.cells[y][x].is_empty() {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    /// Count the number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Reset every per-move merge flag. Called at the start of each move
    /// attempt.
    pub(crate) fn clear_merged(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.merged = false;
            }
        }
    }

    /// Slide/merge tiles toward `direction`, in place. Returns true iff
    /// any cell's value changed position or magnitude.
    #[inline]
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        ops::attempt_move(self, direction)
    }

    /// Place a new tile (2 with probability 9/10, else 4) on a uniformly
    /// chosen empty cell, using the provided RNG.
    ///
    /// Panics if the grid is full; callers check `count_empty` first.
    #[inline]
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        ops::spawn_tile(self, rng)
    }

    /// Convenience: like `spawn_tile` but uses thread-local RNG.
    #[inline]
    pub fn spawn_tile_thread(&mut self) {
        ops::spawn_tile_thread(self)
    }

    /// Return true while any legal move remains (an empty cell, or two
    /// equal 4-neighbors anywhere).
    #[inline]
    pub fn has_legal_move(&self) -> bool {
        ops::has_legal_move(self)
    }

    /// The highest tile value present on the board (0 when empty).
    #[inline]
    pub fn highest_tile(&self) -> u32 {
        ops::highest_tile(self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let line: Vec<String> = row.iter().map(|cell| format_val(cell.value)).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(value: u32) -> String {
    if value == 0 {
        return String::from("       ");
    }
    let mut text = value.to_string();
    while text.len() < 7 {
        match text.len() {
            6 => text = format!(" {}", text),
            _ => text = format!(" {} ", text),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_round_trips_values() {
        let values = [
            [2, 0, 4, 0],
            [0, 8, 0, 16],
            [32, 0, 64, 0],
            [0, 128, 0, 256],
        ];
        assert_eq!(Grid::from_values(values).to_values(), values);
    }

    #[test]
    fn it_enumerates_empty_cells() {
        let grid = Grid::from_values([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 4, 0],
            [0, 0, 0, 0],
        ]);
        assert_eq!(grid.count_empty(), 14);
        let empty = grid.empty_cells();
        assert_eq!(empty.len(), 14);
        assert!(!empty.contains(&(0, 0)));
        assert!(!empty.contains(&(2, 2)));
        assert!(empty.contains(&(1, 0)));
    }

    #[test]
    fn it_maps_directions_to_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn it_formats_the_board() {
        let grid = Grid::from_values([
            [2, 0, 0, 0],
            [0, 16, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 2048],
        ]);
        let text = grid.to_string();
        assert!(text.contains('2'));
        assert!(text.contains("16"));
        assert!(text.contains("2048"));
        assert_eq!(text.lines().count(), 7);
    }
}
