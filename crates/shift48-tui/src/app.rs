//! The per-frame driver loop: read one input event, apply at most one
//! move, redraw. Strictly sequential; the grid has a single owner here
//! and is lent to the core for the duration of each call.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use shift48_core::Game;

use crate::input::{self, InputEvent};
use crate::render;

/// Where the loop is within one frame: accepting input, or resolving a
/// move it already accepted. Local to the loop on purpose; no global
/// "animating" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Resolving,
}

/// Set up the terminal, run the game, and restore the terminal even when
/// the loop errors out.
pub fn run(seed: Option<u64>) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = play(&mut stdout, seed);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn play(stdout: &mut Stdout, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(seed);
    let mut phase = Phase::Idle;

    execute!(stdout, Clear(ClearType::All))?;
    render::draw(stdout, game.grid(), game.is_over())?;

    loop {
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(_, _) => {
                execute!(stdout, Clear(ClearType::All))?;
                render::draw(stdout, game.grid(), game.is_over())?;
                continue;
            }
            _ => continue,
        };

        debug_assert_eq!(phase, Phase::Idle);
        match input::map_key(key) {
            Some(InputEvent::Quit) => break,
            Some(InputEvent::Move(direction)) => {
                phase = Phase::Resolving;
                let was_over = game.is_over();
                let changed = game.step(direction);
                debug!("move {:?}: changed={}", direction, changed);
                if changed {
                    render::draw(stdout, game.grid(), game.is_over())?;
                }
                if game.is_over() && !was_over {
                    render::draw(stdout, game.grid(), true)?;
                    info!(
                        "game over (highest tile: {})",
                        game.grid().highest_tile()
                    );
                }
                phase = Phase::Idle;
            }
            None => {}
        }
    }
    Ok(())
}
