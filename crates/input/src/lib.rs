//! Terminal input module.
//!
//! Key events are decoded into [`InputCommand`] values exactly once, at this
//! boundary; nothing downstream ever sees a raw key code. The [`InputPump`]
//! runs the decoder on a background thread so the blocking device read never
//! stalls the fixed-tick game loop.

pub mod map;
pub mod pump;

pub use term_arcade_types as types;

pub use map::{decode, wait_for_enter};
pub use pump::InputPump;
