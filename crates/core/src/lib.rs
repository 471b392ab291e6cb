//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rule engines for all three games. It has zero
//! dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical run
//! - **Testable**: every rule is exercised without a terminal
//! - **Total**: per-tick logic always produces a valid next state; illegal
//!   moves are rejected by look-ahead checks, never attempted and rolled back
//!
//! # Module Structure
//!
//! - [`object`]: multi-cell game objects with velocity and grid geometry
//! - [`rng`]: seedable LCG used for apple placement and zombie spawning
//! - [`pong`]: two paddles and a bouncing ball
//! - [`snake`]: growing snake chasing an apple on a bordered frame
//! - [`zombies`]: shooter with randomly spawning enemies and bullets
//!
//! Each game exposes `handle_command` for decoded input and `tick` for one
//! fixed simulation step; `Quit` is handled by the loop controller and never
//! reaches a rule engine.

pub mod object;
pub mod pong;
pub mod rng;
pub mod snake;
pub mod zombies;

pub use term_arcade_types as types;

pub use object::GameObject;
pub use pong::{PongGame, Winner};
pub use rng::SimpleRng;
pub use snake::SnakeGame;
pub use zombies::ZombieGame;
