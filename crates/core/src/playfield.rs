//! Playfield module - owns the settled grid and drives the active piece
//!
//! One [`update`](Playfield::update) call is one logical tick. It promotes
//! the next piece when the previous one locked, runs the piece's own tick,
//! and validates the result against walls, floor, and settled cells. An
//! illegal result is reverted wholesale from the pre-tick snapshot; that
//! snapshot discipline is the only consistency mechanism the grid needs.

use gridfall_types::{
    Action, ClearCategory, PieceKind, GRID_HEIGHT, GRID_WIDTH, HIDDEN_ROWS, VISIBLE_ROWS,
};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::render::RenderFrame;
use crate::rng::PieceDealer;
use crate::scoring;

/// One game's worth of simulation state
#[derive(Debug, Clone)]
pub struct Playfield {
    settled: Grid,
    active: Option<Piece>,
    next: PieceKind,
    dealer: PieceDealer,
    score: u32,
    level: u32,
    lines: u32,
    goal_progress: u32,
    game_over: bool,
}

impl Playfield {
    /// Create a fresh game with the given piece-sequence seed
    ///
    /// No piece is spawned yet; the first [`update`](Playfield::update) call
    /// performs the initial promotion.
    pub fn new(seed: u32) -> Self {
        let mut dealer = PieceDealer::new(seed);
        let next = dealer.deal();
        Self {
            settled: Grid::new(),
            active: None,
            next,
            dealer,
            score: 0,
            level: 0,
            lines: 0,
            goal_progress: 0,
            game_over: false,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// `action` is the one buffered player input for this tick, `soft_drop`
    /// is the held drop modifier, and `now_ms` is the session clock. Safe to
    /// call once per frame; after game over it does nothing.
    pub fn update(&mut self, action: Option<Action>, soft_drop: bool, now_ms: u64) {
        if self.game_over {
            return;
        }

        let needs_promotion = match &self.active {
            None => true,
            Some(piece) => piece.locked,
        };
        if needs_promotion {
            if let Some(piece) = self.active.take() {
                self.commit(&piece);
                self.resolve_lines();
            }
            self.promote(now_ms);
            if self.spawn_blocked() {
                // The blocked piece stays in the active slot so the final
                // frame still shows it.
                self.game_over = true;
                return;
            }
        }

        if let Some(piece) = self.active.as_mut() {
            let snapshot = piece.snapshot();
            piece.tick(action, soft_drop, now_ms);
            if bump(&self.settled, piece, snapshot.row) {
                piece.revert(snapshot);
            }
        }
    }

    /// Settle a locked piece's cells into the grid
    fn commit(&mut self, piece: &Piece) {
        // The lock tick already validated this position, so settle cannot fail.
        let _settled = self.settled.settle(piece.cells(), piece.kind);
        debug_assert!(_settled, "locked piece overlaps settled cells");
    }

    /// Clear full rows and apply scoring and level progression
    fn resolve_lines(&mut self) {
        let cleared = self.settled.collapse_full_rows();
        let rows = cleared.len();
        let Some(category) = ClearCategory::from_rows(rows, self.settled.is_empty()) else {
            return;
        };

        self.score += scoring::clear_score(category, rows, self.level);
        self.lines += rows as u32;
        self.goal_progress += category.goal_points();
        if self.goal_progress >= scoring::level_goal(self.level) {
            self.level += 1;
            self.goal_progress = 0;
        }
    }

    /// Move the preview piece into play and draw a new preview
    ///
    /// The spawned piece captures the gravity interval of the current level;
    /// later level-ups do not speed up a piece already in play.
    fn promote(&mut self, now_ms: u64) {
        let kind = self.next;
        self.next = self.dealer.deal();
        let interval = scoring::fall_interval_ms(self.level);
        self.active = Some(Piece::spawn(kind, interval, now_ms));
    }

    /// Game-over check, run right after a promotion
    ///
    /// Over when the freshly spawned piece overlaps settled cells, or when
    /// any settled cell has reached the top hidden row.
    fn spawn_blocked(&self) -> bool {
        if let Some(piece) = &self.active {
            let overlaps = piece
                .cells()
                .iter()
                .any(|&(col, row)| self.settled.is_occupied(col, row));
            if overlaps {
                return true;
            }
        }
        (0..GRID_WIDTH as i8).any(|col| self.settled.is_occupied(col, 0))
    }

    /// Copy the visible grid, the active piece, and the counters into `frame`
    ///
    /// Rows inside the hidden band are left out. The pause flag is owned by
    /// the session layer and not written here.
    pub fn render_into(&self, frame: &mut RenderFrame) {
        for row in 0..VISIBLE_ROWS as i8 {
            for col in 0..GRID_WIDTH as i8 {
                frame.cells[row as usize][col as usize] =
                    self.settled.get(col, row + HIDDEN_ROWS as i8).flatten();
            }
        }

        if let Some(piece) = &self.active {
            for (col, row) in piece.cells() {
                let visible_row = row - HIDDEN_ROWS as i8;
                if visible_row >= 0 {
                    frame.cells[visible_row as usize][col as usize] = Some(piece.kind);
                }
            }
        }

        frame.score = self.score;
        frame.level = self.level;
        frame.lines = self.lines;
        frame.next = self.next;
        frame.game_over = self.game_over;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.settled
    }

    /// Dealer state, used to seed the next game on restart
    pub fn dealer_state(&self) -> u32 {
        self.dealer.state()
    }

    /// Direct access to the active slot for tests
    #[cfg(test)]
    pub fn active_mut(&mut self) -> &mut Option<Piece> {
        &mut self.active
    }
}

/// Collision check run after every piece tick
///
/// Returns true when the piece must revert. Walls are checked first, then
/// the floor, then overlap with settled cells. Hitting the floor always
/// lands the piece. An overlap lands it only when the row grew during this
/// tick, which separates touching down from a blocked lateral move or
/// rotation.
fn bump(settled: &Grid, piece: &mut Piece, prev_row: i8) -> bool {
    if piece.col < 0 {
        return true;
    }
    if piece.col + piece.mask.width() as i8 > GRID_WIDTH as i8 {
        return true;
    }
    if piece.row + piece.mask.height() as i8 > GRID_HEIGHT as i8 {
        piece.falling = false;
        return true;
    }
    for (col, row) in piece.cells() {
        if settled.is_occupied(col, row) {
            if prev_row < piece.row {
                piece.falling = false;
            }
            return true;
        }
    }
    false
}
