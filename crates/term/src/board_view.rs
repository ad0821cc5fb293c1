//! BoardView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn with `y = rows` on the top line, since `Up` increases y.

use crate::core::GameSnapshot;
use crate::fb::{Cell, FrameBuffer, Tone};
use crate::types::Position;

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

/// Lines drawn under the board frame
const HUD_LINES: u16 = 2;

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Top-left corner of the board frame inside `viewport`
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h.saturating_add(HUD_LINES)) / 2;
        (x, y)
    }

    /// Frame size in terminal cells, saturating for boards wider than a terminal
    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let cols = u16::try_from(snap.columns.max(0)).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.rows.max(0)).unwrap_or(u16::MAX);
        (
            cols.saturating_mul(self.cell_w).saturating_add(2),
            rows.saturating_add(2),
        )
    }

    /// Screen cell of the left edge of board cell `pos`, if it is on the board
    pub fn screen_pos(&self, snap: &GameSnapshot, viewport: Viewport, pos: Position) -> Option<(u16, u16)> {
        if pos.x < 1 || pos.x > snap.columns || pos.y < 1 || pos.y > snap.rows {
            return None;
        }
        let (ox, oy) = self.origin(snap, viewport);
        let col = u16::try_from(pos.x - 1).ok()?;
        let row = u16::try_from(snap.rows - pos.y).ok()?;
        let sx = col.checked_mul(self.cell_w)?.checked_add(ox + 1)?;
        let sy = row.checked_add(oy + 1)?;
        Some((sx, sy))
    }

    /// Render the snapshot into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (ox, oy) = self.origin(snap, viewport);
        let (frame_w, frame_h) = self.frame_size(snap);
        self.draw_frame(fb, ox, oy, frame_w, frame_h, snap.border_enabled);

        let visible_cols = (viewport.width / self.cell_w) as i32;
        let visible_rows = viewport.height as i32;
        // `y = rows` is the top line, so a tall board keeps its highest rows.
        for y in (snap.rows - visible_rows + 1).max(1)..=snap.rows {
            for x in 1..=snap.columns.min(visible_cols) {
                self.draw_cell(fb, snap, viewport, Position::new(x, y), '.', Tone::Dim);
            }
        }

        if let Some(fruit) = snap.fruit {
            self.draw_cell(fb, snap, viewport, fruit, '●', Tone::Fruit);
        }
        for block in &snap.snake_tail {
            self.draw_cell(fb, snap, viewport, *block, '▓', Tone::Tail);
        }
        if let Some(head) = snap.snake_head {
            self.draw_cell(fb, snap, viewport, head, '█', Tone::Head);
        }

        self.draw_hud(fb, snap, ox, oy.saturating_add(frame_h));
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, solid: bool) {
        let (horiz, vert, tone) = if solid {
            ('─', '│', Tone::Border)
        } else {
            ('┄', '┆', Tone::Dim)
        };
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        for cx in x + 1..right {
            fb.set(cx, y, Cell::new(horiz, tone));
            fb.set(cx, bottom, Cell::new(horiz, tone));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, Cell::new(vert, tone));
            fb.set(right, cy, Cell::new(vert, tone));
        }
        for (cx, cy, ch) in [(x, y, '┌'), (right, y, '┐'), (x, bottom, '└'), (right, bottom, '┘')] {
            fb.set(cx, cy, Cell::new(ch, tone));
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        pos: Position,
        ch: char,
        tone: Tone,
    ) {
        let Some((sx, sy)) = self.screen_pos(snap, viewport, pos) else {
            return;
        };
        // Snake blocks fill the whole cell width; dots and fruit take one column.
        let fill = match tone {
            Tone::Head | Tone::Tail => self.cell_w,
            _ => 1,
        };
        for dx in 0..self.cell_w {
            let c = if dx < fill { ch } else { ' ' };
            fb.set(sx.saturating_add(dx), sy, Cell::new(c, tone));
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let stats = format!(
            "score {}  best {}  speed x{:.2}  turn {}",
            snap.score, snap.best_score, snap.speed_multiplier, snap.turn
        );
        fb.put_str(x, y, &stats, Tone::Plain);

        let (hint, tone) = if snap.running {
            ("arrows/wasd/hjkl steer, q quits", Tone::Dim)
        } else if snap.session_id == 0 {
            ("press r to start, q quits", Tone::Alert)
        } else {
            ("game over! press r to play again, q quits", Tone::Alert)
        };
        fb.put_str(x, y.saturating_add(1), hint, tone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> GameSnapshot {
        GameSnapshot {
            snake_head: Some(Position::new(1, 9)),
            snake_tail: vec![Position::new(2, 9)],
            fruit: Some(Position::new(16, 1)),
            running: true,
            columns: 16,
            rows: 9,
            speed_multiplier: 1.0,
            session_id: 1,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_top_row_is_highest_y() {
        let view = BoardView::default();
        let vp = Viewport::new(34, 13);
        assert_eq!(view.origin(&snap(), vp), (0, 0));
        assert_eq!(view.screen_pos(&snap(), vp, Position::new(1, 9)), Some((1, 1)));
        assert_eq!(view.screen_pos(&snap(), vp, Position::new(16, 1)), Some((31, 9)));
        assert_eq!(view.screen_pos(&snap(), vp, Position::new(17, 1)), None);
    }

    #[test]
    fn test_renders_snake_and_fruit() {
        let view = BoardView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap(), Viewport::new(34, 13), &mut fb);

        assert_eq!(fb.get(1, 1), Some(Cell::new('█', Tone::Head)));
        assert_eq!(fb.get(2, 1), Some(Cell::new('█', Tone::Head)));
        assert_eq!(fb.get(3, 1), Some(Cell::new('▓', Tone::Tail)));
        assert_eq!(fb.get(31, 9), Some(Cell::new('●', Tone::Fruit)));
        assert_eq!(fb.get(0, 0), Some(Cell::new('┌', Tone::Dim)));
        assert_eq!(fb.get(5, 1), Some(Cell::new('.', Tone::Dim)));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = BoardView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap(), Viewport::new(5, 3), &mut fb);
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn test_board_wider_than_terminal_is_clipped() {
        let wide = GameSnapshot {
            columns: 40000,
            rows: 9,
            snake_head: Some(Position::new(39999, 9)),
            fruit: Some(Position::new(3, 1)),
            ..snap()
        };
        let view = BoardView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&wide, Viewport::new(80, 24), &mut fb);

        let vp = Viewport::new(80, 24);
        assert_eq!(view.origin(&wide, vp), (0, 5));
        assert_eq!(view.screen_pos(&wide, vp, Position::new(39999, 9)), None);
        assert_eq!(fb.get(0, 5), Some(Cell::new('┌', Tone::Dim)));
        assert_eq!(fb.get(5, 14), Some(Cell::new('●', Tone::Fruit)));
        assert_eq!(fb.get(79, 6), Some(Cell::new('.', Tone::Dim)));
    }
}
