use gridfall_types::{Cell, PieceKind, GRID_WIDTH, VISIBLE_ROWS};

/// Flat copy of everything a display layer needs for one frame
///
/// `cells` covers only the visible rows, active piece already composited
/// over the settled grid. `paused` belongs to the session layer; the
/// playfield never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    pub cells: [[Cell; GRID_WIDTH as usize]; VISIBLE_ROWS as usize],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub next: PieceKind,
    pub paused: bool,
    pub game_over: bool,
}

impl RenderFrame {
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_WIDTH as usize]; VISIBLE_ROWS as usize];
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.next = PieceKind::I;
        self.paused = false;
        self.game_over = false;
    }
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_WIDTH as usize]; VISIBLE_ROWS as usize],
            score: 0,
            level: 0,
            lines: 0,
            next: PieceKind::I,
            paused: false,
            game_over: false,
        }
    }
}
