//! Key mapping from terminal events to game commands.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::InputCommand;

/// Map one keyboard event to a command.
///
/// Unknown keys decode to `None` and are silently ignored; they are never an
/// error. `w/a/s/d` move the player, the arrow keys drive pong's second
/// paddle, and `q`, `Esc`, and `Ctrl-C` all quit.
pub fn decode(key: KeyEvent) -> Option<InputCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputCommand::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(InputCommand::MoveUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputCommand::MoveDown),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputCommand::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(InputCommand::MoveRight),

        KeyCode::Up => Some(InputCommand::PlayerTwoUp),
        KeyCode::Down => Some(InputCommand::PlayerTwoDown),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::TogglePause),
        KeyCode::Enter => Some(InputCommand::Fire),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputCommand::Quit),

        _ => None,
    }
}

/// Block on the device until Enter (true) or Escape (false).
///
/// Only valid before the [`crate::InputPump`] is spawned (the pong intro
/// screen); once the pump runs, it owns the device's event stream and
/// acknowledgments go through [`crate::InputPump::wait_ack`] instead.
pub fn wait_for_enter() -> std::io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(true),
                KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}
