//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeMatrix};
use crate::fb::{FrameBuffer, Glyph, GlyphStyle};
use crate::types::Rgb;

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_FG: Rgb = Rgb::new(70, 70, 80);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

/// Lays out the board, the side panel and the overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a terminal cell.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner of the board frame inside the viewport
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        // Sides past u16::MAX cannot be shown; clamp instead of wrapping.
        let cols = u16::try_from(snap.width).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.height).unwrap_or(u16::MAX);
        let board_w = cols.saturating_mul(self.cell_w);
        let board_h = rows.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for y in 0..rows {
            for x in 0..cols {
                match snap.cell(x as usize, y as usize).flatten() {
                    Some(color) => self.draw_block(fb, origin, x, y, color),
                    None => self.draw_empty(fb, origin, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                if x < cols && y < rows {
                    self.draw_block(fb, origin, x, y, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.game_over() {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16) {
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), PANEL_BG);
        let right = o.x.saturating_add(w - 1);
        let bottom = o.y.saturating_add(h - 1);

        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(right, o.y, '┐', style);
        fb.put_char(o.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in o.x + 1..right {
            fb.put_char(x, o.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in o.y + 1..bottom {
            fb.put_char(o.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn cell_rect(&self, o: Origin, x: u16, y: u16) -> (u16, u16) {
        (
            o.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            o.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, o: Origin, x: u16, y: u16) {
        let (px, py) = self.cell_rect(o, x, y);
        let style = GlyphStyle::new(GRID_FG, PLAYFIELD_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, o: Origin, x: u16, y: u16, color: Rgb) {
        let (px, py) = self.cell_rect(o, x, y);
        let style = GlyphStyle::new(color, PLAYFIELD_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let panel_x = o.x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = GlyphStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = o.y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y + 1, &next.matrix, next.color);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, matrix: &ShapeMatrix, color: Rgb) {
        let style = GlyphStyle::new(color, PANEL_BG).bold();
        for (dx, dy) in matrix.filled_cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, o: Origin, frame_w: u16, frame_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = o.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = o.y.saturating_add(frame_h / 2);
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
