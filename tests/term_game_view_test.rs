//! GameView layout tests on a hand-built render frame

use gridfall::core::RenderFrame;
use gridfall::term::{FrameBuffer, GameView, Viewport};
use gridfall::types::PieceKind;

fn text_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (0..len)
        .map(|dx| fb.get(x + dx, y).map(|c| c.ch).unwrap_or('?'))
        .collect()
}

fn render_default(frame: &RenderFrame) -> FrameBuffer {
    GameView::default().render(frame, Viewport::new(80, 24))
}

#[test]
fn test_well_frame_is_centered_in_the_viewport() {
    let fb = render_default(&RenderFrame::default());

    // 20x2+2 = 22 columns and 20x1+2 = 22 rows, centered in 80x24.
    assert_eq!(fb.get(29, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(50, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(29, 22).unwrap().ch, '└');
    assert_eq!(fb.get(50, 22).unwrap().ch, '┘');
    assert_eq!(fb.get(30, 1).unwrap().ch, '─');
    assert_eq!(fb.get(29, 2).unwrap().ch, '│');
}

#[test]
fn test_cells_are_two_columns_wide() {
    let mut frame = RenderFrame::default();
    frame.cells[0][0] = Some(PieceKind::I);
    let fb = render_default(&frame);

    // The filled cell covers two columns inside the border.
    assert_eq!(fb.get(30, 2).unwrap().ch, '█');
    assert_eq!(fb.get(31, 2).unwrap().ch, '█');
    // The neighboring empty cell renders as a dim dot.
    assert_eq!(fb.get(32, 2).unwrap().ch, '·');
    assert_eq!(fb.get(33, 2).unwrap().ch, '·');
}

#[test]
fn test_side_panel_shows_the_counters() {
    let mut frame = RenderFrame::default();
    frame.score = 1234;
    frame.level = 7;
    frame.lines = 42;
    let fb = render_default(&frame);

    assert_eq!(text_at(&fb, 53, 1, 5), "SCORE");
    assert_eq!(text_at(&fb, 53, 2, 5), "1234 ");
    assert_eq!(text_at(&fb, 53, 4, 5), "LEVEL");
    assert_eq!(text_at(&fb, 53, 5, 2), "7 ");
    assert_eq!(text_at(&fb, 53, 7, 5), "LINES");
    assert_eq!(text_at(&fb, 53, 8, 3), "42 ");
    assert_eq!(text_at(&fb, 53, 10, 4), "NEXT");
}

#[test]
fn test_next_preview_draws_the_spawn_mask() {
    let mut frame = RenderFrame::default();
    frame.next = PieceKind::O;
    let fb = render_default(&frame);

    // O fills a 2x2 box: four columns of blocks over two rows.
    assert_eq!(text_at(&fb, 53, 11, 8), "████    ");
    assert_eq!(text_at(&fb, 53, 12, 8), "████    ");

    frame.next = PieceKind::I;
    let fb = render_default(&frame);
    // I is a flat bar across the full preview width.
    assert_eq!(text_at(&fb, 53, 11, 8), "████████");
    assert_eq!(text_at(&fb, 53, 12, 8), "        ");
}

#[test]
fn test_game_over_overlay_outranks_pause() {
    let mut frame = RenderFrame::default();
    frame.paused = true;
    let fb = render_default(&frame);
    assert_eq!(text_at(&fb, 37, 12, 6), "PAUSED");

    frame.game_over = true;
    let fb = render_default(&frame);
    assert_eq!(text_at(&fb, 35, 12, 9), "GAME OVER");
}

#[test]
fn test_no_panel_in_a_narrow_viewport() {
    let mut frame = RenderFrame::default();
    frame.score = 999;
    let fb = GameView::default().render(&frame, Viewport::new(40, 24));

    // Frame sits at x=9..=30; the leftover margin is too narrow for
    // the panel, so nothing is drawn there.
    assert_eq!(fb.get(9, 1).unwrap().ch, '┌');
    for x in 31..40 {
        assert_eq!(fb.get(x, 1).unwrap().ch, ' ', "column {}", x);
    }
}

#[test]
fn test_tiny_viewports_render_without_panicking() {
    let frame = RenderFrame::default();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (21, 10), (80, 2)] {
        let fb = view.render(&frame, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn test_custom_cell_size_changes_the_frame() {
    let frame = RenderFrame::default();
    let fb = GameView::new(1, 1).render(&frame, Viewport::new(80, 24));

    // 10x1+2 = 12 columns wide, centered at x=34.
    assert_eq!(fb.get(34, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(45, 1).unwrap().ch, '┐');
}
