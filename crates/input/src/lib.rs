//! Terminal input module (core-facing).
//!
//! Maps `crossterm` key events into [`GameEvent`]s. The mapping is
//! context-free: whether an event is currently valid is the state machine's
//! concern, not the keyboard's.

pub mod map;

pub use tui_tower_types as types;

pub use map::{handle_key_event, should_quit};
