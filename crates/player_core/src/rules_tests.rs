use super::*;

#[test]
fn start_position_has_twenty_moves() {
    let board = Board::default();
    assert_eq!(legal_moves(&board).len(), 20);
    assert_eq!(outcome(&board), None);
}

#[test]
fn scholars_mate_is_checkmate_for_white() {
    let board: Board = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1"
        .parse()
        .unwrap();
    assert!(legal_moves(&board).is_empty());
    assert_eq!(
        outcome(&board),
        Some(Termination::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn cornered_king_is_stalemate() {
    let board: Board = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1".parse().unwrap();
    assert_eq!(outcome(&board), Some(Termination::Stalemate));
}

#[test]
fn fifty_move_rule_is_a_draw() {
    let board: Board = "4k3/8/8/8/8/8/8/4K2R w - - 100 1".parse().unwrap();
    assert_eq!(outcome(&board), Some(Termination::Draw));
}

#[test]
fn parse_move_round_trips_through_uci() {
    let board = Board::default();
    let mv = parse_move(&board, "e2e4").unwrap();
    assert_eq!(move_to_uci(mv), "e2e4");
}

#[test]
fn parse_move_rejects_malformed_notation() {
    let board = Board::default();
    assert_eq!(
        parse_move(&board, "knight to f3"),
        Err(MoveError::Malformed("knight to f3".to_string()))
    );
}

#[test]
fn parse_move_rejects_illegal_moves() {
    let board = Board::default();
    // Syntactically fine, but a pawn cannot jump three ranks.
    assert_eq!(
        parse_move(&board, "e2e5"),
        Err(MoveError::Illegal("e2e5".to_string()))
    );
}

#[test]
fn parse_move_accepts_king_two_square_castling() {
    let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
    let short = parse_move(&board, "e1g1").unwrap();
    assert_eq!(move_to_uci(short), "e1h1");
    let long = parse_move(&board, "e1c1").unwrap();
    assert_eq!(move_to_uci(long), "e1a1");
}

#[test]
fn piece_at_reports_occupancy() {
    let board = Board::default();
    assert_eq!(
        piece_at(&board, Square::E1),
        Some((Piece::King, Color::White))
    );
    assert_eq!(piece_at(&board, Square::E4), None);
}

#[test]
fn board_stack_push_pop_restores_the_position() {
    let board = Board::default();
    let initial = board.hash();
    let mut stack = BoardStack::new(board);

    let mv = parse_move(stack.board(), "e2e4").unwrap();
    stack.push(mv);
    assert_ne!(stack.board().hash(), initial);
    assert_eq!(stack.depth(), 1);

    stack.pop();
    assert_eq!(stack.board().hash(), initial);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn board_stack_nested_push_pop() {
    let mut stack = BoardStack::new(Board::default());
    let start = stack.board().hash();

    let first = parse_move(stack.board(), "g1f3").unwrap();
    stack.push(first);
    let after_first = stack.board().hash();

    let second = parse_move(stack.board(), "g8f6").unwrap();
    stack.push(second);

    stack.pop();
    assert_eq!(stack.board().hash(), after_first);
    stack.pop();
    assert_eq!(stack.board().hash(), start);
}
