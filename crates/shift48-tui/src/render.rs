//! Terminal renderer: one colored rectangle per cell with the tile value
//! printed in its center, plus a GAME OVER overlay. All commands are
//! batched with `queue!` and flushed once per frame.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use shift48_core::{Grid, GRID_SIZE};

/// Terminal footprint of one board cell.
pub const CELL_WIDTH: u16 = 9;
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16;

/// The color shared by every tile of 4096 and above.
const DARK: Color = Color::Rgb {
    r: 60,
    g: 58,
    b: 50,
};

/// Fixed palette keyed by exact tile value. Everything >= 4096 shares the
/// one dark color.
pub fn tile_color(value: u32) -> Color {
    match value {
        0 => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        2 => Color::Rgb {
            r: 238,
            g: 228,
            b: 218,
        },
        4 => Color::Rgb {
            r: 237,
            g: 224,
            b: 200,
        },
        8 => Color::Rgb {
            r: 242,
            g: 177,
            b: 121,
        },
        16 => Color::Rgb {
            r: 245,
            g: 149,
            b: 99,
        },
        32 => Color::Rgb {
            r: 246,
            g: 124,
            b: 95,
        },
        64 => Color::Rgb {
            r: 246,
            g: 94,
            b: 59,
        },
        128 => Color::Rgb {
            r: 237,
            g: 207,
            b: 114,
        },
        256 => Color::Rgb {
            r: 237,
            g: 204,
            b: 97,
        },
        512 => Color::Rgb {
            r: 237,
            g: 200,
            b: 80,
        },
        1024 => Color::Rgb {
            r: 237,
            g: 197,
            b: 63,
        },
        2048 => Color::Rgb {
            r: 237,
            g: 194,
            b: 46,
        },
        _ => DARK,
    }
}

/// Draw the whole board (and the overlay when the game is over), then
/// flush once.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, game_over: bool) -> io::Result<()> {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            draw_cell(out, x, y, grid.tile_value(x, y))?;
        }
    }
    if game_over {
        draw_game_over(out)?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

fn draw_cell<W: Write>(out: &mut W, x: usize, y: usize, value: u32) -> io::Result<()> {
    let left = x as u16 * CELL_WIDTH;
    let top = y as u16 * CELL_HEIGHT;
    let background = tile_color(value);
    // Black digits read fine on every light tile; the dark >= 4096 tiles
    // need light text.
    let foreground = if value >= 4096 {
        Color::White
    } else {
        Color::Black
    };

    for row in 0..CELL_HEIGHT {
        let text = if row == CELL_HEIGHT / 2 {
            centered_label(value)
        } else {
            " ".repeat(CELL_WIDTH as usize)
        };
        queue!(
            out,
            MoveTo(left, top + row),
            SetBackgroundColor(background),
            SetForegroundColor(foreground),
            Print(text),
        )?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W) -> io::Result<()> {
    let message = " GAME OVER ";
    let left = (BOARD_WIDTH - message.len() as u16) / 2;
    let top = BOARD_HEIGHT / 2 - 1;
    queue!(
        out,
        MoveTo(left, top),
        SetBackgroundColor(DARK),
        SetForegroundColor(Color::White),
        Print(message),
    )
}

/// The tile value centered in a `CELL_WIDTH`-wide field; blank for empty
/// cells.
fn centered_label(value: u32) -> String {
    let width = CELL_WIDTH as usize;
    if value == 0 {
        return " ".repeat(width);
    }
    let text = value.to_string();
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{:left$}{}{:right$}", "", text, "", right = pad - left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keys_colors_by_exact_value() {
        assert_ne!(tile_color(2), tile_color(4));
        assert_ne!(tile_color(0), tile_color(2));
        assert_eq!(
            tile_color(2048),
            Color::Rgb {
                r: 237,
                g: 194,
                b: 46
            }
        );
    }

    #[test]
    fn it_shares_one_dark_color_above_2048() {
        assert_eq!(tile_color(4096), DARK);
        assert_eq!(tile_color(8192), DARK);
        assert_eq!(tile_color(16384), DARK);
        assert_ne!(tile_color(2048), DARK);
    }

    #[test]
    fn it_centers_labels_at_cell_width() {
        assert_eq!(centered_label(0).len(), CELL_WIDTH as usize);
        assert_eq!(centered_label(2), "    2    ");
        assert_eq!(centered_label(2048), "  2048   ");
        assert_eq!(centered_label(16).len(), CELL_WIDTH as usize);
    }

    #[test]
    fn it_draws_a_full_frame_without_error() {
        let grid = Grid::from_values([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [0, 0, 0, 0],
        ]);
        let mut buf = Vec::new();
        draw(&mut buf, &grid, true).unwrap();
        let frame = String::from_utf8_lossy(&buf);
        assert!(frame.contains("2048"));
        assert!(frame.contains("GAME OVER"));
    }
}
