//! Material-based position evaluation

use cozy_chess::{Board, Color, Piece};

/// Evaluates the position from `perspective`'s point of view.
///
/// Sums the material value of every piece on the board: own pieces added,
/// enemy pieces subtracted. Pure function, no positional terms.
pub fn material(board: &Board, perspective: Color) -> i32 {
    let mut score = 0i32;

    for square in board.occupied() {
        if let Some(piece) = board.piece_on(square) {
            let v = piece_value(piece);
            if board.color_on(square) == Some(perspective) {
                score += v;
            } else {
                score -= v;
            }
        }
    }

    score
}

/// Returns the material value of a piece in pawn units.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
