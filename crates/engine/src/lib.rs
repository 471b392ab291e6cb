//! Game loop controller - the fixed-tick scheduler shared by all games.
//!
//! One loop iteration is: poll the latest decoded command (non-blocking),
//! advance the simulation one step, render, then sleep a fixed interval.
//! Frame time is additive: the sleep is never shortened to compensate for
//! processing time, keeping step sizes deterministic and easy to reason
//! about.
//!
//! The world is owned exclusively by this loop's thread; the input pump
//! only ever touches its channel, so no locking is needed anywhere.

mod games;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal;

use term_arcade_input::InputPump;
use term_arcade_term::{FrameBuffer, TerminalRenderer, Viewport};
use term_arcade_types::InputCommand;

pub use term_arcade_core as core;

/// How a game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player quit mid-game; no end screen is shown.
    Quit,
    /// The game reached its terminal state and the end screen was
    /// acknowledged.
    Over,
}

/// One playable game, as seen by the loop controller.
pub trait Game {
    /// Fixed duration of one simulation step.
    fn tick_interval(&self) -> Duration;

    /// Apply one decoded command. Must be total: commands that do not apply
    /// are ignored.
    fn handle_command(&mut self, cmd: InputCommand);

    /// Advance the simulation one step. Must be total.
    fn tick(&mut self);

    /// Draw the current state into the framebuffer.
    fn render(&self, vp: Viewport, fb: &mut FrameBuffer);

    /// True once the game has reached a terminal state.
    fn is_over(&self) -> bool;

    /// The end-screen text, one entry per line.
    fn end_lines(&self) -> Vec<String>;
}

fn viewport() -> Viewport {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Run a game to completion on a fixed tick.
///
/// At most one command is consumed per tick; `Quit` returns immediately,
/// bypassing the end screen so the caller can release the terminal and let
/// the process exit. Reaching the terminal state renders the end screen and
/// blocks until the player acknowledges it through the pump.
pub fn run<G: Game>(term: &mut TerminalRenderer, pump: &InputPump, game: &mut G) -> Result<Outcome> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        match pump.poll() {
            Some(InputCommand::Quit) => return Ok(Outcome::Quit),
            Some(cmd) => game.handle_command(cmd),
            None => {}
        }

        game.tick();

        game.render(viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.is_over() {
            break;
        }
        thread::sleep(game.tick_interval());
    }

    show_end_screen(term, game, &mut fb)?;
    pump.wait_ack();
    Ok(Outcome::Over)
}

/// Overlay the end-of-game message, centered, over the final frame.
fn show_end_screen<G: Game>(
    term: &mut TerminalRenderer,
    game: &G,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let vp = viewport();
    game.render(vp, fb);

    let lines = game.end_lines();
    let start = (vp.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        fb.put_text_centered(start + i as u16, line, Default::default());
    }

    term.draw_swap(fb)
}
