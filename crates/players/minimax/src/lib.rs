//! Minimax player
//!
//! Depth-limited minimax with alpha-beta pruning over the material
//! evaluation. Terminal positions score a fixed win/loss/tie value that
//! dominates any heuristic sum. A fresh search runs on every call; nothing
//! persists between moves.

mod search;

use player_core::{move_to_uci, Board, BoardStack, Color, Player};

/// A player driven by depth-limited minimax search.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    side: Color,
    max_depth: u8,
}

impl MinimaxPlayer {
    pub const DEFAULT_DEPTH: u8 = 3;

    pub fn new(max_depth: u8) -> Self {
        Self {
            side: Color::White,
            max_depth,
        }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}

impl Player for MinimaxPlayer {
    fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    fn side(&self) -> Color {
        self.side
    }

    fn next_move(&mut self, board: &Board) -> String {
        let mut stack = BoardStack::new(board.clone());
        // It is this player's turn, so the root is a max node.
        let (best, _value) = search::max_value(
            self.side,
            self.max_depth,
            &mut stack,
            0,
            search::MIN_VALUE,
            search::MAX_VALUE,
        );
        best.map(move_to_uci).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
