//! Tests for the frontend-neutral view model.

use noughts::view::{BoardView, Status};
use noughts::{Game, GameEvent, Player, Position};

fn play(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in moves {
        game.dispatch(GameEvent::Cell(index));
    }
    game
}

#[test]
fn test_turn_status_alternates() {
    assert_eq!(*BoardView::of(&play(&[])).status(), Status::Turn(Player::X));
    assert_eq!(*BoardView::of(&play(&[4])).status(), Status::Turn(Player::O));
    assert_eq!(*BoardView::of(&play(&[4, 0])).status(), Status::Turn(Player::X));
}

#[test]
fn test_win_disables_board_and_highlights_line() {
    let view = BoardView::of(&play(&[0, 3, 1, 4, 2]));

    assert_eq!(view.status().to_string(), "Player X Wins!");
    assert!(!*view.accepting_input());
    assert!(view.cells().iter().all(|c| !*c.clickable()));

    let highlighted: Vec<Position> = view
        .cells()
        .iter()
        .filter(|c| *c.highlighted())
        .map(|c| *c.position())
        .collect();
    assert_eq!(
        highlighted,
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_draw_view() {
    let view = BoardView::of(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));

    assert_eq!(view.status().to_string(), "It's a Draw!");
    assert!(!*view.accepting_input());
    assert!(view.cells().iter().all(|c| !*c.highlighted()));

    let labels: Vec<&str> = view.cells().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
}

#[test]
fn test_ignored_click_leaves_view_unchanged() {
    let mut game = play(&[4]);
    let before = BoardView::of(&game);
    game.dispatch(GameEvent::Cell(4));
    assert_eq!(BoardView::of(&game), before);
}

#[test]
fn test_restart_view() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    game.dispatch(GameEvent::Restart);
    assert_eq!(BoardView::of(&game), BoardView::of(&Game::new()));
}

#[test]
fn test_status_follows_outcome() {
    use noughts::Outcome;

    for moves in [&[][..], &[0, 3, 1, 4, 2][..], &[3, 0, 4, 1, 8, 2][..], &[0, 1, 2, 4, 3, 5, 7, 6, 8][..]] {
        let game = play(moves);
        let expected = match game.evaluate() {
            Outcome::InProgress => Status::Turn(game.to_move()),
            Outcome::Won(player) => Status::Won(player),
            Outcome::Draw => Status::Draw,
        };
        assert_eq!(*BoardView::of(&game).status(), expected, "{moves:?}");
    }
    assert_eq!(
        BoardView::of(&play(&[3, 0, 4, 1, 8, 2])).status().to_string(),
        "Player O Wins!"
    );
}
