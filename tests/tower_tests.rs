//! Tower tests - stack geometry and the clipping rule

use tui_tower::core::{clip_overlap, ActiveSegment, Segment, SimpleRng, Tower};
use tui_tower::types::{Phase, BASE_WIDTH, FLOOR_Y, PLAY_WIDTH, SPAWN_Y, SWEEP_SPEED};

fn active_at(x: i32, width: i32) -> ActiveSegment {
    ActiveSegment {
        x,
        y: SPAWN_Y,
        width,
        speed: SWEEP_SPEED,
        phase: Phase::Dropping,
    }
}

#[test]
fn test_reset_to_base_builds_centered_floor_segment() {
    let mut tower = Tower::new();
    tower.reset_to_base();

    assert_eq!(tower.placed().len(), 1);
    let base = tower.placed()[0];
    assert_eq!(base.x, (PLAY_WIDTH - BASE_WIDTH) / 2);
    assert_eq!(base.y, FLOOR_Y);
    assert_eq!(base.width, BASE_WIDTH);
    assert_eq!(tower.top(), Some(&base));
    assert!(tower.active().is_none());
}

#[test]
fn test_spawn_next_uses_the_three_lanes() {
    let mut tower = Tower::new();
    let mut rng = SimpleRng::new(11);
    let width = 120;

    let expected = [1, (PLAY_WIDTH - width) / 2, PLAY_WIDTH - width - 1];
    for _ in 0..60 {
        tower.spawn_next(width, &mut rng);
        let active = tower.active().unwrap();
        assert!(expected.contains(&active.x), "unexpected lane {}", active.x);
        assert_eq!(active.width, width);
        assert_eq!(active.speed, SWEEP_SPEED);
        assert_eq!(active.phase, Phase::Suspended);
    }
}

#[test]
fn test_clip_is_the_exact_intersection() {
    let below = Segment::new(150, FLOOR_Y, 300);

    assert_eq!(clip_overlap(&active_at(150, 300), &below), Some((150, 300)));
    assert_eq!(clip_overlap(&active_at(100, 300), &below), Some((150, 250)));
    assert_eq!(clip_overlap(&active_at(300, 300), &below), Some((300, 150)));
    assert_eq!(clip_overlap(&active_at(449, 300), &below), Some((449, 1)));
}

#[test]
fn test_clip_rejects_touching_and_disjoint_ranges() {
    let below = Segment::new(150, FLOOR_Y, 300);

    // Touching at the left edge: [0, 150) vs [150, 450).
    assert_eq!(clip_overlap(&active_at(0, 150), &below), None);
    // Touching at the right edge.
    assert_eq!(clip_overlap(&active_at(450, 150), &below), None);
    // Fully disjoint.
    assert_eq!(clip_overlap(&active_at(500, 90), &below), None);
}

#[test]
fn test_clip_width_bounded_by_both_segments() {
    let below = Segment::new(200, FLOOR_Y, 180);

    for x in -50..550 {
        if let Some((left, width)) = clip_overlap(&active_at(x, 130), &below) {
            assert!(width > 0);
            assert!(width <= 130);
            assert!(width <= below.width);
            assert!(left >= below.x);
            assert!(left + width <= below.right());
        }
    }
}
