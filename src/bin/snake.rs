//! Snake: eat apples, grow, and stay off the walls and yourself.
//!
//! `w`/`a`/`s`/`d` steer, `p` pauses, `q` quits.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use term_arcade::core::SnakeGame;
use term_arcade::engine;
use term_arcade::input::InputPump;
use term_arcade::term::TerminalRenderer;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = SnakeGame::new(clock_seed());
    let pump = InputPump::spawn();
    engine::run(term, &pump, &mut game)?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
