//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view maps a core snapshot
//! into a framebuffer of styled character cells, and the renderer flushes
//! that framebuffer to a raw-mode terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (no I/O) so it can be unit-tested

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tower_core as core;
pub use tui_tower_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{TowerView, Viewport};
pub use renderer::TerminalRenderer;
