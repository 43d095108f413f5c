//! Rendering tests for the tower game view

use tui_tower::core::{GameSnapshot, SegmentView};
use tui_tower::term::{FrameBuffer, TowerView, Viewport};
use tui_tower::types::{LandingGrade, BASE_WIDTH, FLOOR_Y, PLAY_WIDTH};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot_with_base() -> GameSnapshot {
    GameSnapshot {
        placed: vec![SegmentView {
            x: (PLAY_WIDTH - BASE_WIDTH) / 2,
            y: FLOOR_Y,
            width: BASE_WIDTH,
        }],
        active: Some(SegmentView {
            x: 1,
            y: 220,
            width: BASE_WIDTH,
        }),
        score: 45,
        gold: 120,
        ..GameSnapshot::default()
    }
}

#[test]
fn test_hud_shows_score_and_gold() {
    let view = TowerView::default();
    let fb = view.render(&snapshot_with_base(), 0, Viewport::new(80, 40));
    let screen = screen_text(&fb);

    assert!(screen.contains("Score: 45"));
    assert!(screen.contains("Gold: 120"));
    // Both the base and the active segment are drawn.
    assert!(screen.contains('█'));
}

#[test]
fn test_grade_flash_is_shown_while_unexpired() {
    let view = TowerView::default();

    let mut snap = snapshot_with_base();
    snap.notice = Some((LandingGrade::Perfect, 200));
    let screen = screen_text(&view.render(&snap, 0, Viewport::new(80, 40)));
    assert!(screen.contains("Perfectly!"));

    snap.notice = Some((LandingGrade::Excellent, 200));
    let screen = screen_text(&view.render(&snap, 0, Viewport::new(80, 40)));
    assert!(screen.contains("Excellent!"));

    snap.notice = None;
    let screen = screen_text(&view.render(&snap, 0, Viewport::new(80, 40)));
    assert!(!screen.contains("Perfectly!"));
    assert!(!screen.contains("Excellent!"));
}

#[test]
fn test_gold_notice_is_shown() {
    let view = TowerView::default();

    let mut snap = snapshot_with_base();
    snap.gold_notice_ms = 1500;
    let screen = screen_text(&view.render(&snap, 0, Viewport::new(80, 40)));
    assert!(screen.contains("Not enough coins!"));
}

#[test]
fn test_game_over_overlay() {
    let view = TowerView::default();

    let mut snap = snapshot_with_base();
    snap.active = None;
    snap.game_over = true;
    let screen = screen_text(&view.render(&snap, 99, Viewport::new(80, 40)));

    assert!(screen.contains("GAME OVER"));
    assert!(screen.contains("Score: 45"));
    assert!(screen.contains("High Score: 99"));
    assert!(screen.contains("Enter restart | C continue | Q quit"));
}

#[test]
fn test_segments_below_the_floor_are_clipped() {
    let view = TowerView::default();

    let mut snap = snapshot_with_base();
    // Compaction pushed an old segment entirely out of the play area.
    snap.placed.push(SegmentView {
        x: 150,
        y: 660,
        width: BASE_WIDTH,
    });
    // Must not panic, and the frame border row stays intact.
    let fb = view.render(&snap, 0, Viewport::new(80, 40));
    let screen = screen_text(&fb);
    assert!(screen.contains('└'));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let view = TowerView::default();
    let fb = view.render(&snapshot_with_base(), 0, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
