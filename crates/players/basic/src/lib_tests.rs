use super::*;
use player_core::parse_move;

#[test]
fn random_player_returns_a_legal_move() {
    let mut player = RandomPlayer::new();
    player.set_side(Color::White);
    let board = Board::default();

    let text = player.next_move(&board);
    assert!(parse_move(&board, &text).is_ok());
}

#[test]
fn random_player_returns_empty_on_terminal_position() {
    let mut player = RandomPlayer::new();
    player.set_side(Color::Black);
    // Scholar's mate: black has no legal moves.
    let board: Board = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1"
        .parse()
        .unwrap();

    assert_eq!(player.next_move(&board), "");
}

#[test]
fn manual_player_forwards_input_lines() {
    let mut player = ManualPlayer::from_reader(Box::new("e2e4\ng1f3\n".as_bytes()));
    let board = Board::default();

    assert_eq!(player.next_move(&board), "e2e4");
    assert_eq!(player.next_move(&board), "g1f3");
    // Exhausted source yields an empty string for the caller to reject.
    assert_eq!(player.next_move(&board), "");
}

#[test]
fn scripted_player_replays_and_wraps() {
    let mut player = ScriptedPlayer::new(vec!["f2f3".to_string(), "g2g4".to_string()]);
    let board = Board::default();

    assert_eq!(player.next_move(&board), "f2f3");
    assert_eq!(player.next_move(&board), "g2g4");
    // Wraps back to the start for a further game.
    assert_eq!(player.next_move(&board), "f2f3");
}

#[test]
fn scripted_players_do_not_share_state() {
    let board = Board::default();
    let mut first = ScriptedPlayer::new(vec!["e2e4".to_string(), "d2d4".to_string()]);
    let mut second = first.clone();

    assert_eq!(first.next_move(&board), "e2e4");
    // Advancing one instance must not advance the other.
    assert_eq!(second.next_move(&board), "e2e4");
    assert_eq!(first.next_move(&board), "d2d4");
}

#[test]
fn player_evaluate_uses_the_assigned_side() {
    let board: Board = "4k3/8/2n5/8/8/8/4P3/4K3 w - - 0 1".parse().unwrap();
    let mut player = RandomPlayer::new();

    player.set_side(Color::White);
    assert_eq!(player.evaluate(&board), -2);
    player.set_side(Color::Black);
    assert_eq!(player.evaluate(&board), 2);
}
