use tui_2048::core::{start_game, Board, GameSession, GameSnapshot, SimpleRng};
use tui_2048::term::{FrameBuffer, GameView, Hud, Viewport};
use tui_2048::types::Mode;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn hardcore_board_frame_is_placed_left_of_panel() {
    let session = start_game(Mode::Hardcore, &mut SimpleRng::new(3));
    let snap = GameSnapshot::from(&session);
    let fb = GameView::default().render(&snap, &Hud::default(), Viewport::new(80, 24));

    // 5 cells of 8x4 plus gap and border: 43x23, centered with the 14-column panel.
    assert_eq!(fb.get(11, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(53, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(11, 22).unwrap().ch, '└');
    assert_eq!(fb.get(53, 22).unwrap().ch, '┘');

    let text = screen_text(&fb);
    assert!(text.contains("hardcore 5x5"));
}

#[test]
fn dead_board_shows_game_over_and_message() {
    let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let session = GameSession::from_board(Mode::Classic, board).unwrap();
    let snap = GameSnapshot::from(&session);
    assert!(snap.game_over);

    let hud = Hud {
        message: Some("I scored 0 on 2048 (classic mode)"),
    };
    let text = screen_text(&GameView::default().render(&snap, &hud, Viewport::new(80, 24)));

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("I scored 0 on 2048"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let snap = GameSnapshot::from(&start_game(Mode::Hardcore, &mut SimpleRng::new(9)));
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 8)] {
        let fb = GameView::default().render(&snap, &Hud::default(), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
