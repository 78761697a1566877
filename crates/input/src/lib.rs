//! Terminal input module.
//!
//! Maps `crossterm` key events into logical [`GameAction`]s. One key-down
//! produces at most one action; terminal auto-repeat is filtered by the
//! caller (the game loop ignores `KeyEventKind::Repeat`).
//!
//! [`GameAction`]: blockfall_types::GameAction

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
