//! Facade over the `cozy-chess` rules engine.
//!
//! Players consume board state exclusively through this module: legal move
//! enumeration, terminal outcome detection, UCI notation conversion, and an
//! apply/undo stack for in-place search. Movement legality, check detection
//! and draw rules all live in `cozy-chess`; nothing here re-implements them.

use cozy_chess::{Board, Color, File, GameStatus, Move, Piece, Square};
use thiserror::Error;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Checkmate; `winner` delivered the mate.
    Checkmate { winner: Color },
    /// Side to move has no legal moves but is not in check.
    Stalemate,
    /// Any other draw the board itself detects (50-move rule).
    Draw,
}

/// Errors from converting player-supplied notation into a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed move notation '{0}', expected UCI such as e2e4")]
    Malformed(String),
    #[error("move '{0}' is not legal in this position")]
    Illegal(String),
}

/// Enumerates every legal move in the position.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|mvs| {
        moves.extend(mvs);
        false
    });
    moves
}

/// The side that must move next.
pub fn side_to_move(board: &Board) -> Color {
    board.side_to_move()
}

/// Terminal outcome of the position, or `None` while the game is ongoing.
pub fn outcome(board: &Board) -> Option<Termination> {
    match board.status() {
        GameStatus::Ongoing => None,
        // cozy-chess reports a win when the side to move is checkmated.
        GameStatus::Won => Some(Termination::Checkmate {
            winner: !board.side_to_move(),
        }),
        GameStatus::Drawn => {
            if legal_moves(board).is_empty() {
                Some(Termination::Stalemate)
            } else {
                Some(Termination::Draw)
            }
        }
    }
}

/// The piece standing on `square`, if any.
pub fn piece_at(board: &Board, square: Square) -> Option<(Piece, Color)> {
    let piece = board.piece_on(square)?;
    let color = board.color_on(square)?;
    Some((piece, color))
}

/// Canonical UCI text for a move.
pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses player-supplied UCI notation and validates it against the
/// position's legal moves.
///
/// cozy-chess encodes castling as king-takes-rook; the common
/// king-two-squares form (`e1g1`) is normalized before the legality check so
/// human input works either way.
pub fn parse_move(board: &Board, text: &str) -> Result<Move, MoveError> {
    let mv: Move = text
        .trim()
        .parse()
        .map_err(|_| MoveError::Malformed(text.trim().to_string()))?;
    let mv = normalize_castle(board, mv);
    if legal_moves(board).contains(&mv) {
        Ok(mv)
    } else {
        Err(MoveError::Illegal(text.trim().to_string()))
    }
}

/// Rewrites `e1g1`/`e1c1`-style castling onto the rook square when the moved
/// piece is the king of the side to move.
fn normalize_castle(board: &Board, mv: Move) -> Move {
    let is_own_king = piece_at(board, mv.from)
        .map(|(piece, color)| piece == Piece::King && color == board.side_to_move())
        .unwrap_or(false);
    if !is_own_king || mv.from.file() != File::E {
        return mv;
    }
    let rook_file = match mv.to.file() {
        File::G => File::H,
        File::C => File::A,
        _ => return mv,
    };
    // Only rewrite when the target really is a castling rook; a plain king
    // step to c/g must pass through unchanged.
    let rook_square = Square::new(rook_file, mv.from.rank());
    match piece_at(board, rook_square) {
        Some((Piece::Rook, color)) if color == board.side_to_move() => Move {
            from: mv.from,
            to: rook_square,
            promotion: mv.promotion,
        },
        _ => mv,
    }
}

/// A single board with in-place apply/undo semantics.
///
/// `push` saves the previous position and plays the move; `pop` restores it.
/// Search code must pair every push with exactly one pop before visiting a
/// sibling branch, including on pruning cutoffs.
#[derive(Debug, Clone)]
pub struct BoardStack {
    current: Board,
    history: Vec<Board>,
}

impl BoardStack {
    pub fn new(board: Board) -> Self {
        Self {
            current: board,
            history: Vec::new(),
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Applies a move in place. The move must come from this position's
    /// legal-move enumeration; anything else is a contract breach.
    pub fn push(&mut self, mv: Move) {
        self.history.push(self.current.clone());
        self.current.play_unchecked(mv);
    }

    /// Restores the position before the most recent `push`. A no-op at the
    /// bottom of the stack.
    pub fn pop(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    /// Number of moves currently pushed.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
