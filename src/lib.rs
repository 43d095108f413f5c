//! TUI Tower (workspace facade crate).
//!
//! This package keeps the `tui_tower::{core,input,store,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_tower_core as core;
pub use tui_tower_input as input;
pub use tui_tower_store as store;
pub use tui_tower_term as term;
pub use tui_tower_types as types;
