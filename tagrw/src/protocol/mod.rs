// tagrw/src/protocol/mod.rs
//! Typed vocabulary exchanged with the tag engine.

pub mod commands;
pub mod events;

pub use commands::*;
pub use events::*;
