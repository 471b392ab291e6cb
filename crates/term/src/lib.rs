//! Terminal rendering module.
//!
//! - [`fb`]: a 2D framebuffer of styled character cells, the unit the games
//!   draw into. Out-of-bounds writes are clamped no-ops, never errors.
//! - [`renderer`]: flushes framebuffers to the real terminal with changed-run
//!   diffing between frames.
//! - [`view`]: maps game state onto a framebuffer - play-field centering,
//!   borders, score line, and the three per-game views.

pub mod fb;
pub mod renderer;
pub mod view;

pub use term_arcade_core as core;
pub use term_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use view::{draw_pong, draw_snake, draw_zombies, Viewport};
