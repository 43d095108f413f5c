//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical lane sequences
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tower`]: the placed-segment stack plus the single active segment
//! - [`game_state`]: complete round state including motion, landing, the
//!   gold ledger, and the playing/game-over lifecycle
//! - [`scoring`]: score and landing-grade rules for a clipped drop
//! - [`snapshot`]: presentation-facing copy of the round state
//! - [`rng`]: seedable lane selection
//!
//! # Game Rules
//!
//! - The active segment sweeps horizontally at constant speed, bouncing off
//!   the play-area edges, until a drop request flips it into free fall.
//! - A drop that overlaps the segment below is clipped to the overlapping
//!   region; the clipped width scores `ceil(width / 10)` points and pays a
//!   fixed gold reward. A drop with no overlap ends the round.
//! - Once the stacked height reaches half the play area, the whole tower is
//!   shifted down one segment so the play region stays bounded.
//! - At game over the player may reset for free, or pay gold to continue:
//!   the failed drop and its predecessor are discarded and the round resumes
//!   on a narrower rewind segment.

pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tower;

pub use tui_tower_types as types;

pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, SegmentView};
pub use tower::{clip_overlap, ActiveSegment, Segment, Tower};
