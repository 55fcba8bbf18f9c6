//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Host-side state shown next to the well
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub muted: bool,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

/// Minimum side panel width worth drawing
const PANEL_MIN_W: u16 = 12;

/// Terminal renderer for the well, the HUD and the status overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Screen position of the bordered well
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, hud: HudView, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        // Locked cells with the active piece overlaid. Active cells above
        // row 0 fall outside this loop and are clipped.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let (ch, style) = match snap.cell_at(x, y) {
                    Some(color) => ('█', CellStyle::new(color_rgb(color), WELL_BG).bold()),
                    None => ('·', EMPTY),
                };
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame);

        match snap.status {
            GameStatus::Idle => self.draw_overlay_text(fb, frame, "PRESS P"),
            GameStatus::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            GameStatus::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, cell_x: u16, cell_y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: HudView, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y += 1;
        fb.put_padded_u32(panel_x, y, snap.score, 4, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "LINES", LABEL);
        y += 1;
        fb.put_padded_u32(panel_x, y, snap.lines, 1, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "STATUS", LABEL);
        y += 1;
        fb.put_str(panel_x, y, status_label(snap.status), VALUE);
        y += 2;

        fb.put_str(panel_x, y, "SOUND", LABEL);
        y += 1;
        fb.put_str(panel_x, y, if hud.muted { "OFF" } else { "ON" }, VALUE);
        y += 2;

        let help = VALUE.dim();
        for line in ["←→ move", "↑ rotate", "↓ drop", "p play/pause", "m mute", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "READY",
        GameStatus::Playing => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceSource;
    use crate::core::{Board, GameState};
    use crate::types::PieceKind;

    const VIEW: Viewport = Viewport {
        width: 60,
        height: 24,
    };

    fn frame_origin() -> (u16, u16) {
        // 22x22 frame centered in 60x24.
        ((60 - 22) / 2, (24 - 22) / 2)
    }

    #[test]
    fn locked_cell_is_drawn_two_columns_wide() {
        let mut board = Board::new();
        board.fill(0, 19, Color::Red);
        let game = GameState::playing_with(
            board,
            crate::core::ActivePiece::new(PieceKind::O),
            SequenceSource::repeat(PieceKind::O),
        );
        let fb = GameView::default().render(&game.snapshot(), HudView::default(), VIEW);

        let (fx, fy) = frame_origin();
        let left = fb.get(fx + 1, fy + 1 + 19).unwrap();
        let right = fb.get(fx + 2, fy + 1 + 19).unwrap();
        assert_eq!(left.ch, '█');
        assert_eq!(right.ch, '█');
        assert_eq!(left.style.fg, color_rgb(Color::Red));
        assert_eq!(fb.get(fx + 3, fy + 1 + 19).unwrap().ch, '·');
    }

    #[test]
    fn active_piece_is_overlaid() {
        let mut game = GameState::new(SequenceSource::repeat(PieceKind::O));
        game.start();
        let fb = GameView::default().render(&game.snapshot(), HudView::default(), VIEW);

        // O at (3, 0) covers columns 3..=4 of rows 0..=1.
        let (fx, fy) = frame_origin();
        let cell = fb.get(fx + 1 + 3 * 2, fy + 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Yellow));
    }

    #[test]
    fn overlay_text_follows_status() {
        let mut game = GameState::new(SequenceSource::repeat(PieceKind::T));
        let view = GameView::default();

        let fb = view.render(&game.snapshot(), HudView::default(), VIEW);
        assert!(fb.contains_text("PRESS P"));

        game.start();
        let fb = view.render(&game.snapshot(), HudView::default(), VIEW);
        assert!(!fb.contains_text("PRESS P"));
        assert!(fb.contains_text("PLAYING"));

        game.toggle_pause();
        let fb = view.render(&game.snapshot(), HudView::default(), VIEW);
        assert!(fb.contains_text("PAUSED"));
    }

    #[test]
    fn side_panel_shows_padded_score_and_mute() {
        let game = GameState::new(SequenceSource::repeat(PieceKind::T));
        let fb = GameView::default().render(&game.snapshot(), HudView { muted: true }, VIEW);

        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("0000"));
        assert!(fb.contains_text("SOUND"));
        assert!(fb.contains_text("OFF"));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let game = GameState::new(SequenceSource::repeat(PieceKind::T));
        let fb = GameView::default().render(&game.snapshot(), HudView::default(), Viewport::new(24, 24));
        assert!(!fb.contains_text("SCORE"));
        assert!(fb.contains_text("PRESS P"));
    }
}
