//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Play Area
//!
//! The simulation runs in a fixed world coordinate space:
//!
//! - **Width**: 600 world units
//! - **Height**: 600 world units, Y grows downward
//! - **Segment height**: 60 units for every block in the tower
//!
//! # Timing
//!
//! One logical tick per rendered frame at ~60 Hz (`TICK_MS`). Motion is
//! constant-velocity per tick: the suspended segment sweeps `SWEEP_SPEED`
//! units horizontally, the dropped segment falls `FALL_SPEED` units.

/// Play-area dimensions in world units.
pub const PLAY_WIDTH: i32 = 600;
pub const PLAY_HEIGHT: i32 = 600;

/// Every tower block has the same height.
pub const SEGMENT_HEIGHT: i32 = 60;

/// World units moved per tick.
pub const FALL_SPEED: i32 = 7;
pub const SWEEP_SPEED: i32 = 5;

/// Segment widths.
pub const BASE_WIDTH: i32 = 300;
pub const CONTINUE_WIDTH: i32 = 150;

/// Height of the ground strip at the bottom of the play area.
pub const GROUND_HEIGHT: i32 = 20;

/// Vertical spawn position for a new suspended segment.
pub const SPAWN_Y: i32 = PLAY_HEIGHT / 2 - SEGMENT_HEIGHT - 20;

/// Top edge of the base segment (it rests on the ground strip).
pub const FLOOR_Y: i32 = PLAY_HEIGHT - SEGMENT_HEIGHT - GROUND_HEIGHT;

/// Accumulated stack height at which the whole tower is shifted down by one
/// segment, keeping the visible stack within the upper half of the screen.
pub const SCROLL_THRESHOLD: i32 = PLAY_HEIGHT / 2 - SEGMENT_HEIGHT;

/// Ledger tuning.
pub const GOLD_PER_LANDING: u32 = 20;
pub const CONTINUE_COST: u32 = 1000;

/// One score point per this many world units of clipped width (rounded up).
pub const SCORE_DIVISOR: i32 = 10;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;
pub const MESSAGE_MS: u32 = 500;
pub const GOLD_NOTICE_MS: u32 = 2000;

/// Landing grade gates, as percentages of the width below that stayed
/// covered after clipping.
pub const PERFECT_PCT: i32 = 96;
pub const EXCELLENT_PCT: i32 = 90;

/// Phase of the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Sweeping horizontally, waiting for a drop request.
    Suspended,
    /// Falling at a fixed rate toward the stack.
    Dropping,
}

/// External events the simulation reacts to.
///
/// Validity is the state machine's concern: an event arriving in the wrong
/// state is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Release the suspended segment (valid while playing).
    Drop,
    /// Rebuild the round from scratch (valid at game over).
    Reset,
    /// Pay gold to rewind past the failed drop (valid at game over).
    Continue,
}

/// Classification of a successful landing by how much of the segment below
/// stayed covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingGrade {
    Perfect,
    Excellent,
}

impl LandingGrade {
    /// On-screen flash text for this grade.
    pub fn message(&self) -> &'static str {
        match self {
            LandingGrade::Perfect => "Perfectly!",
            LandingGrade::Excellent => "Excellent!",
        }
    }
}

/// Last round transition (consumed by the caller via `take_last_event`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A drop was clipped onto the stack and the round continues.
    Landed {
        width: i32,
        score_delta: u32,
        grade: Option<LandingGrade>,
    },
    /// A drop missed; the round is over with this final score.
    RoundOver { score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_positions() {
        assert_eq!(SPAWN_Y, 220);
        assert_eq!(FLOOR_Y, 520);
        assert_eq!(SCROLL_THRESHOLD, 240);
    }

    #[test]
    fn test_grade_messages() {
        assert_eq!(LandingGrade::Perfect.message(), "Perfectly!");
        assert_eq!(LandingGrade::Excellent.message(), "Excellent!");
    }
}
