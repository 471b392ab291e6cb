//! Terminal arcade (workspace facade crate).
//!
//! This package keeps the `term_arcade::{core,engine,input,term,types}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use term_arcade_core as core;
pub use term_arcade_engine as engine;
pub use term_arcade_input as input;
pub use term_arcade_term as term;
pub use term_arcade_types as types;
