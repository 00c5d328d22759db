//! Minimax search with alpha-beta pruning

use player_core::{
    legal_moves, material, outcome, BoardStack, Color, Move, Termination, LOSS_SCORE, TIE_SCORE,
    WIN_SCORE,
};

/// Sentinels for the alpha-beta window. Halved so score arithmetic can never
/// overflow.
pub const MIN_VALUE: i32 = i32::MIN / 2;
pub const MAX_VALUE: i32 = i32::MAX / 2;

/// Fixed score of a terminal position from `side`'s perspective.
pub fn terminal_value(side: Color, termination: Termination) -> i32 {
    match termination {
        Termination::Checkmate { winner } if winner == side => WIN_SCORE,
        Termination::Checkmate { .. } => LOSS_SCORE,
        Termination::Stalemate | Termination::Draw => TIE_SCORE,
    }
}

/// Maximizing step of minimax.
///
/// Returns the best move found and its value. Terminal positions and the
/// depth cutoff return a value with no move. Every `push` is matched by a
/// `pop` before the next sibling or a pruning return.
pub fn max_value(
    side: Color,
    max_depth: u8,
    stack: &mut BoardStack,
    depth: u8,
    mut alpha: i32,
    beta: i32,
) -> (Option<Move>, i32) {
    if let Some(termination) = outcome(stack.board()) {
        return (None, terminal_value(side, termination));
    }
    if depth >= max_depth {
        return (None, material(stack.board(), side));
    }

    let mut best_move = None;
    let mut best = MIN_VALUE;

    for mv in legal_moves(stack.board()) {
        stack.push(mv);
        let (_, value) = min_value(side, max_depth, stack, depth + 1, alpha, beta);
        stack.pop();

        if value > best {
            best = value;
            best_move = Some(mv);
        }
        alpha = alpha.max(best);
        if alpha >= beta {
            return (best_move, best);
        }
    }

    (best_move, best)
}

/// Minimizing step of minimax, symmetric to [`max_value`].
pub fn min_value(
    side: Color,
    max_depth: u8,
    stack: &mut BoardStack,
    depth: u8,
    alpha: i32,
    mut beta: i32,
) -> (Option<Move>, i32) {
    if let Some(termination) = outcome(stack.board()) {
        return (None, terminal_value(side, termination));
    }
    if depth >= max_depth {
        return (None, material(stack.board(), side));
    }

    let mut best_move = None;
    let mut best = MAX_VALUE;

    for mv in legal_moves(stack.board()) {
        stack.push(mv);
        let (_, value) = max_value(side, max_depth, stack, depth + 1, alpha, beta);
        stack.pop();

        if value < best {
            best = value;
            best_move = Some(mv);
        }
        beta = beta.min(best);
        if alpha >= beta {
            return (best_move, best);
        }
    }

    (best_move, best)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
