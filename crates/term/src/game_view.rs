//! GameView: lays a core `RenderFrame` out into a framebuffer.
//!
//! Pure layout code with no terminal I/O, so it can be unit-tested.

use gridfall_core::{spawn_mask, RenderFrame};
use gridfall_types::{PieceKind, GRID_WIDTH, VISIBLE_ROWS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_COLS: u16 = 12;

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

/// Screen position of the bordered well, centered in the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Draws one game frame: bordered well, side panel, overlays.
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    /// Well cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is resized here when the terminal size changes.
    pub fn render_into(&self, frame: &RenderFrame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let lay = self.layout(viewport);
        self.draw_well(fb, frame, lay);
        self.draw_panel(fb, frame, lay, viewport);

        // Game over outranks pause: an ended game stays ended on screen.
        if frame.game_over {
            self.draw_overlay(fb, lay, "GAME OVER");
        } else if frame.paused {
            self.draw_overlay(fb, lay, "PAUSED");
        }
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, frame: &RenderFrame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = u16::from(GRID_WIDTH) * self.cell_w + 2;
        let frame_h = u16::from(VISIBLE_ROWS) * self.cell_h + 2;
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, frame: &RenderFrame, lay: Layout) {
        self.draw_border(fb, lay);

        // Every interior cell is painted, so no background pre-fill is needed.
        for (row, cols) in frame.cells.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                let px = lay.x + 1 + col as u16 * self.cell_w;
                let py = lay.y + 1 + row as u16 * self.cell_h;
                let (ch, style) = match cell {
                    Some(kind) => ('█', block_style(*kind)),
                    None => ('·', empty_style()),
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, lay: Layout) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let (x, y, w, h) = (lay.x, lay.y, lay.frame_w, lay.frame_h);
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

    fn draw_panel(&self, fb: &mut FrameBuffer, frame: &RenderFrame, lay: Layout, viewport: Viewport) {
        let x = lay.x.saturating_add(lay.frame_w).saturating_add(2);
        if viewport.width.saturating_sub(x) < PANEL_MIN_COLS {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = lay.y;
        for (name, val) in [
            ("SCORE", frame.score),
            ("LEVEL", frame.level),
            ("LINES", frame.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, val, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, x, y + 1, frame.next);
    }

    /// Next-piece preview: the spawn mask on a small backdrop.
    ///
    /// The backdrop is sized for the widest piece so every kind lines up.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        fb.fill_rect(x, y, 4 * self.cell_w, 2 * self.cell_h, ' ', empty_style());

        let style = block_style(kind);
        for (mx, my) in spawn_mask(kind).cells() {
            let px = x + u16::from(mx) * self.cell_w;
            let py = y + u16::from(my) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, lay: Layout, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let text_w = text.chars().count() as u16;
        let x = lay.x + lay.frame_w.saturating_sub(text_w) / 2;
        let y = lay.y + lay.frame_h / 2;
        fb.put_str(x, y, text, style);
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        fg,
        bg: WELL_BG,
        bold: true,
        dim: false,
    }
}

fn empty_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: WELL_BG,
        bold: false,
        dim: true,
    }
}
