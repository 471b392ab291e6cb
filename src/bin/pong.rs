//! Pong: two paddles, one ball, first miss loses.
//!
//! Left paddle: `w`/`s`. Right paddle: arrow keys. `p` pauses, `q` quits.

use anyhow::Result;
use crossterm::terminal;

use term_arcade::core::PongGame;
use term_arcade::engine;
use term_arcade::input::{self, InputPump};
use term_arcade::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The play field is the physical screen, captured once.
    let (width, height) = terminal::size()?;
    show_intro(term, Viewport::new(width, height))?;
    let _ = input::wait_for_enter()?;

    let mut game = PongGame::new(width as i32, height as i32);
    let pump = InputPump::spawn();
    engine::run(term, &pump, &mut game)?;
    Ok(())
}

fn show_intro(term: &mut TerminalRenderer, vp: Viewport) -> Result<()> {
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    fb.put_text_centered(
        (vp.height / 2).saturating_sub(1),
        "Welcome to Pong\nPress Enter to start",
        Default::default(),
    );
    term.draw_swap(&mut fb)
}
