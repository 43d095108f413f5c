//! Game state module - manages the complete round state
//!
//! This module ties together the tower stack, per-tick motion, the landing
//! algorithm, the score/gold ledger, and the round lifecycle
//! (playing → game over → reset/continue).

use crate::rng::SimpleRng;
use crate::scoring::{grade_overlap, score_for_width};
use crate::snapshot::{GameSnapshot, SegmentView};
use crate::tower::{clip_overlap, ActiveSegment, Segment, Tower};
use crate::types::{
    GameEvent, LandingGrade, Phase, RoundEvent, BASE_WIDTH, CONTINUE_COST, CONTINUE_WIDTH,
    FALL_SPEED, GOLD_NOTICE_MS, GOLD_PER_LANDING, GROUND_HEIGHT, MESSAGE_MS, PLAY_HEIGHT,
    PLAY_WIDTH, SCROLL_THRESHOLD, SEGMENT_HEIGHT,
};

/// Timed landing-grade message, read by the presentation layer until expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Notice {
    grade: LandingGrade,
    expires_at_ms: u64,
}

/// Complete round state.
///
/// All mutation happens inside [`tick`](GameState::tick) and
/// [`apply_event`](GameState::apply_event); there are no hidden statics.
#[derive(Debug, Clone)]
pub struct GameState {
    tower: Tower,
    rng: SimpleRng,
    score: u32,
    gold: u32,
    /// Accumulated stacked height since the last compaction shift.
    stacked_height: i32,
    game_over: bool,
    started: bool,
    /// Logical clock advanced by `tick`; notices expire against it.
    now_ms: u64,
    notice: Option<Notice>,
    gold_notice_until_ms: Option<u64>,
    /// Last landing/round-over transition (consumed by the caller).
    last_event: Option<RoundEvent>,
}

impl GameState {
    /// Create a new round with the given RNG seed and an empty purse.
    pub fn new(seed: u32) -> Self {
        Self {
            tower: Tower::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            gold: 0,
            stacked_height: 0,
            game_over: false,
            started: false,
            now_ms: 0,
            notice: None,
            gold_notice_until_ms: None,
            last_event: None,
        }
    }

    /// Create a new round seeded with a previously persisted gold balance.
    pub fn with_gold(seed: u32, gold: u32) -> Self {
        let mut state = Self::new(seed);
        state.gold = gold;
        state
    }

    /// Start the round: base segment plus the first suspended segment.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_first();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn stacked_height(&self) -> i32 {
        self.stacked_height
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Unexpired landing-grade flash and its remaining display time in ms.
    pub fn notice(&self) -> Option<(LandingGrade, u32)> {
        let notice = self.notice?;
        let remaining = notice.expires_at_ms.saturating_sub(self.now_ms);
        if remaining == 0 {
            None
        } else {
            Some((notice.grade, remaining as u32))
        }
    }

    /// Remaining display time of the "not enough coins" notice, 0 if none.
    pub fn gold_notice_ms(&self) -> u32 {
        match self.gold_notice_until_ms {
            Some(until) => until.saturating_sub(self.now_ms) as u32,
            None => 0,
        }
    }

    /// Take and clear the last landing/round-over event.
    pub fn take_last_event(&mut self) -> Option<RoundEvent> {
        self.last_event.take()
    }

    /// Main game tick: advance the logical clock and move the active
    /// segment one step. Returns whether gameplay advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.now_ms += u64::from(elapsed_ms);

        if !self.started || self.game_over {
            return false;
        }

        let Some(mut active) = self.tower.active() else {
            return false;
        };

        match active.phase {
            Phase::Suspended => {
                // Undamped constant-velocity sweep, bouncing off the edges.
                if active.x <= 0 || active.right() >= PLAY_WIDTH {
                    active.speed = -active.speed;
                }
                active.x += active.speed;
                self.tower.set_active(active);
            }
            Phase::Dropping => {
                active.y += FALL_SPEED;
                match self.tower.top().copied() {
                    Some(below) if active.y >= below.y - SEGMENT_HEIGHT => {
                        self.land(active, below);
                    }
                    _ => self.tower.set_active(active),
                }
            }
        }

        true
    }

    /// Apply an external event. Events arriving in the wrong state are
    /// silently ignored and return `false`.
    pub fn apply_event(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::Drop => self.request_drop(),
            GameEvent::Reset => self.reset_round(),
            GameEvent::Continue => self.continue_round(),
        }
    }

    /// Flip the suspended segment into free fall.
    fn request_drop(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        let Some(mut active) = self.tower.active() else {
            return false;
        };
        if active.phase == Phase::Dropping {
            return false;
        }
        active.phase = Phase::Dropping;
        self.tower.set_active(active);
        true
    }

    /// Full reinitialization, valid only at game over.
    fn reset_round(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        self.spawn_first();
        true
    }

    /// Paid rewind: discard the failed drop and its predecessor, resume on a
    /// narrower centered segment. Refused (with a transient notice) when the
    /// purse cannot cover the cost.
    fn continue_round(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        if self.gold < CONTINUE_COST {
            self.gold_notice_until_ms = Some(self.now_ms + u64::from(GOLD_NOTICE_MS));
            return false;
        }

        self.gold -= CONTINUE_COST;
        self.tower.rewind_two();
        // The rewind segment is positioned from the current accumulated
        // height, which is not rewound.
        self.tower.push_placed(Segment::new(
            (PLAY_WIDTH - CONTINUE_WIDTH) / 2,
            PLAY_HEIGHT - self.stacked_height - SEGMENT_HEIGHT - GROUND_HEIGHT,
            CONTINUE_WIDTH,
        ));
        self.tower.spawn_next(CONTINUE_WIDTH, &mut self.rng);
        self.game_over = false;
        self.gold_notice_until_ms = None;
        true
    }

    /// Rebuild the stack to base + one suspended segment and zero the round.
    fn spawn_first(&mut self) {
        self.tower.reset_to_base();
        self.score = 0;
        self.stacked_height = 0;
        self.game_over = false;
        self.notice = None;
        self.gold_notice_until_ms = None;
        self.tower.spawn_next(BASE_WIDTH, &mut self.rng);
    }

    /// The dropped segment reached the landing threshold: clip it against
    /// the segment below, or end the round.
    fn land(&mut self, mut active: ActiveSegment, below: Segment) {
        // Settled: no further vertical motion either way.
        active.phase = Phase::Suspended;

        let on_floor = active.y >= PLAY_HEIGHT - SEGMENT_HEIGHT;
        match clip_overlap(&active, &below) {
            Some((left, width)) if !on_floor => {
                let score_delta = score_for_width(width);
                let grade = grade_overlap(width, below.width);

                self.score += score_delta;
                self.gold += GOLD_PER_LANDING;
                self.stacked_height += SEGMENT_HEIGHT;
                self.notice = grade.map(|grade| Notice {
                    grade,
                    expires_at_ms: self.now_ms + u64::from(MESSAGE_MS),
                });

                self.tower.clear_active();
                self.tower.push_placed(Segment::new(left, active.y, width));

                if self.stacked_height >= SCROLL_THRESHOLD {
                    self.tower.shift_down(SEGMENT_HEIGHT);
                    self.stacked_height -= SEGMENT_HEIGHT;
                }

                self.last_event = Some(RoundEvent::Landed {
                    width,
                    score_delta,
                    grade,
                });
                self.tower.spawn_next(width, &mut self.rng);
            }
            _ => {
                // No overlap, or the drop ran past the floor. The failed
                // segment stays on the stack unclipped; a later continue
                // rewinds past it.
                self.tower.clear_active();
                self.tower
                    .push_placed(Segment::new(active.x, active.y, active.width));
                self.game_over = true;
                self.last_event = Some(RoundEvent::RoundOver { score: self.score });
            }
        }
    }

    /// Write the presentation snapshot, reusing the caller's buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.placed.extend(self.tower.placed().iter().map(|s| SegmentView {
            x: s.x,
            y: s.y,
            width: s.width,
        }));
        out.active = self.tower.active().map(|a| SegmentView {
            x: a.x,
            y: a.y,
            width: a.width,
        });
        out.score = self.score;
        out.gold = self.gold;
        out.game_over = self.game_over;
        out.notice = self.notice();
        out.gold_notice_ms = self.gold_notice_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
