//! Tower module - the placed-segment stack plus the single active segment
//!
//! The stack is an explicit split: an ordered list of frozen placed segments
//! (bottom to top) and at most one active segment the motion and collision
//! rules operate on. Placed geometry only ever changes through the uniform
//! downward shift applied by compaction.

use crate::rng::SimpleRng;
use crate::types::{Phase, BASE_WIDTH, FLOOR_Y, PLAY_WIDTH, SPAWN_Y, SWEEP_SPEED};

/// One placed tower block. Immutable after landing except for compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Left edge in world units.
    pub x: i32,
    /// Top edge in world units (Y grows downward).
    pub y: i32,
    pub width: i32,
}

impl Segment {
    pub fn new(x: i32, y: i32, width: i32) -> Self {
        debug_assert!(width > 0);
        Self { x, y, width }
    }

    /// One past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// The segment currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSegment {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    /// Horizontal sweep velocity; sign flips at the play-area edges.
    pub speed: i32,
    pub phase: Phase,
}

impl ActiveSegment {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Horizontal intersection of a dropped segment with the segment below.
///
/// Returns the clipped `(x, width)`, or `None` when the ranges do not
/// overlap. Touching edges do not count as overlap.
pub fn clip_overlap(active: &ActiveSegment, below: &Segment) -> Option<(i32, i32)> {
    let left = active.x.max(below.x);
    let right = active.right().min(below.right());
    if right > left {
        Some((left, right - left))
    } else {
        None
    }
}

/// Ordered tower stack.
#[derive(Debug, Clone, Default)]
pub struct Tower {
    placed: Vec<Segment>,
    active: Option<ActiveSegment>,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed segments, bottom to top.
    pub fn placed(&self) -> &[Segment] {
        &self.placed
    }

    /// The topmost placed segment (the one a drop is clipped against).
    pub fn top(&self) -> Option<&Segment> {
        self.placed.last()
    }

    pub fn active(&self) -> Option<ActiveSegment> {
        self.active
    }

    /// Drop the stack back to a single centered base segment on the floor.
    pub fn reset_to_base(&mut self) {
        self.placed.clear();
        self.placed
            .push(Segment::new((PLAY_WIDTH - BASE_WIDTH) / 2, FLOOR_Y, BASE_WIDTH));
        self.active = None;
    }

    /// Spawn the next suspended segment at one of three lanes chosen
    /// uniformly at random: flush-left, centered, or flush-right.
    pub fn spawn_next(&mut self, width: i32, rng: &mut SimpleRng) {
        let x = match rng.next_range(3) {
            0 => 1,
            1 => (PLAY_WIDTH - width) / 2,
            _ => PLAY_WIDTH - width - 1,
        };
        self.active = Some(ActiveSegment {
            x,
            y: SPAWN_Y,
            width,
            speed: SWEEP_SPEED,
            phase: Phase::Suspended,
        });
    }

    pub(crate) fn set_active(&mut self, active: ActiveSegment) {
        self.active = Some(active);
    }

    pub(crate) fn clear_active(&mut self) {
        self.active = None;
    }

    pub(crate) fn push_placed(&mut self, segment: Segment) {
        self.placed.push(segment);
    }

    /// Discard the two most recent placed segments (the failed drop and its
    /// predecessor) when a paid continue rewinds the round.
    pub(crate) fn rewind_two(&mut self) {
        self.placed.pop();
        self.placed.pop();
    }

    /// Shift every placed segment down by `dy` world units.
    pub(crate) fn shift_down(&mut self, dy: i32) {
        for segment in &mut self.placed {
            segment.y += dy;
        }
    }
}
