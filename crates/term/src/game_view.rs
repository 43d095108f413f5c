//! TowerView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World units are mapped onto character cells at a fixed scale (10 units
//! per column, 20 per row), so the 600x600 play area becomes a 60x30 play
//! frame centered in the viewport. Which color a segment gets is decided
//! here by a width-bucket table; the core only exposes the numeric width.

use crate::core::snapshot::{GameSnapshot, SegmentView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GROUND_HEIGHT, PLAY_HEIGHT, PLAY_WIDTH, SEGMENT_HEIGHT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tower game.
pub struct TowerView {
    /// World units per terminal column.
    px_per_col: i32,
    /// World units per terminal row.
    px_per_row: i32,
}

impl Default for TowerView {
    fn default() -> Self {
        // 10x20 compensates for typical terminal glyph aspect ratio.
        Self {
            px_per_col: 10,
            px_per_row: 20,
        }
    }
}

impl TowerView {
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    fn cols(&self) -> i32 {
        PLAY_WIDTH / self.px_per_col
    }

    fn rows(&self) -> i32 {
        PLAY_HEIGHT / self.px_per_row
    }

    /// Render the snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, high_score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = self.cols() as u16 + 2;
        let frame_h = self.rows() as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Ground scenery disappears once the tower grows past it.
        let tower_count = snap.placed.len() + usize::from(snap.active.is_some());
        if tower_count < 6 {
            self.draw_ground(&mut fb, start_x, start_y);
        }

        for segment in &snap.placed {
            self.draw_segment(&mut fb, start_x, start_y, segment, segment_style(segment.width));
        }
        if let Some(active) = &snap.active {
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bold: true,
                ..CellStyle::default()
            };
            self.draw_segment(&mut fb, start_x, start_y, active, style);
        }

        self.draw_hud(&mut fb, snap, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(&mut fb, snap, high_score, start_x, start_y, frame_w);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_ground(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 170, 90),
            ..CellStyle::default()
        };
        let row = (PLAY_HEIGHT - GROUND_HEIGHT) / self.px_per_row;
        for col in 0..self.cols() {
            fb.put_char(
                start_x + 1 + col as u16,
                start_y + 1 + row as u16,
                '▒',
                style,
            );
        }
    }

    /// Draw one segment, clipped to the play frame (compaction can push old
    /// segments below the visible floor).
    fn draw_segment(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        segment: &SegmentView,
        style: CellStyle,
    ) {
        let col0 = segment.x / self.px_per_col;
        let row0 = segment.y / self.px_per_row;
        let w = (segment.width / self.px_per_col).max(1);
        let h = (SEGMENT_HEIGHT / self.px_per_row).max(1);

        for row in row0..row0 + h {
            if row < 0 || row >= self.rows() {
                continue;
            }
            for col in col0..col0 + w {
                if col < 0 || col >= self.cols() {
                    continue;
                }
                fb.put_char(
                    start_x + 1 + col as u16,
                    start_y + 1 + row as u16,
                    '█',
                    style,
                );
            }
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let text = CellStyle::default();
        let gold = CellStyle {
            fg: Rgb::new(255, 210, 0),
            ..CellStyle::default()
        };
        fb.put_str(start_x + 1, start_y + 1, &format!("Score: {}", snap.score), text);
        fb.put_str(start_x + 1, start_y + 2, &format!("Gold: {}", snap.gold), gold);

        if snap.gold_notice_ms > 0 {
            let style = CellStyle {
                fg: Rgb::new(255, 0, 0),
                bold: true,
                ..CellStyle::default()
            };
            self.put_centered(fb, start_x, frame_w, start_y + 3, "Not enough coins!", style);
        }

        if !snap.game_over {
            if let Some((grade, _remaining)) = snap.notice {
                let style = CellStyle {
                    fg: Rgb::new(200, 100, 30),
                    bold: true,
                    ..CellStyle::default()
                };
                self.put_centered(fb, start_x, frame_w, start_y + 9, grade.message(), style);
            }
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        high_score: u32,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let title = CellStyle {
            fg: Rgb::new(255, 60, 60),
            bold: true,
            ..CellStyle::default()
        };
        let text = CellStyle::default();

        let mid = start_y + (self.rows() as u16 / 2) - 2;
        self.put_centered(fb, start_x, frame_w, mid, "GAME OVER", title);
        self.put_centered(fb, start_x, frame_w, mid + 2, &format!("Score: {}", snap.score), text);
        self.put_centered(
            fb,
            start_x,
            frame_w,
            mid + 3,
            &format!("High Score: {}", high_score),
            text,
        );
        self.put_centered(
            fb,
            start_x,
            frame_w,
            mid + 5,
            "Enter restart | C continue | Q quit",
            text,
        );
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let len = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(len) / 2;
        fb.put_str(x, y, text, style);
    }
}

/// Width-bucket color table (the presentation-side equivalent of the
/// original per-width sprite selection).
fn segment_style(width: i32) -> CellStyle {
    let fg = if width >= 300 {
        Rgb::new(180, 120, 80)
    } else if width >= 250 {
        Rgb::new(200, 160, 90)
    } else if width >= 200 {
        Rgb::new(150, 170, 200)
    } else if width >= 150 {
        Rgb::new(120, 190, 140)
    } else if width >= 100 {
        Rgb::new(210, 140, 180)
    } else if width >= 85 {
        Rgb::new(220, 200, 120)
    } else {
        Rgb::new(200, 90, 90)
    };
    CellStyle {
        fg,
        ..CellStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(segment_style(300).fg, Rgb::new(180, 120, 80));
        assert_eq!(segment_style(299).fg, Rgb::new(200, 160, 90));
        assert_eq!(segment_style(250).fg, Rgb::new(200, 160, 90));
        assert_eq!(segment_style(100).fg, Rgb::new(210, 140, 180));
        assert_eq!(segment_style(99).fg, Rgb::new(220, 200, 120));
        assert_eq!(segment_style(84).fg, Rgb::new(200, 90, 90));
        assert_eq!(segment_style(1).fg, Rgb::new(200, 90, 90));
    }
}
