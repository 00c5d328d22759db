pub mod eval;
pub mod rules;

pub use eval::{material, piece_value};
pub use rules::*;

// Re-export the rules engine types that every player crate needs.
pub use cozy_chess::{Board, Color, File, Move, Piece, Rank, Square};

// =============================================================================
// Player trait — implemented by all players (random, scripted, search, ...)
// =============================================================================

/// Score assigned to a terminal position won by the searching side.
///
/// The full starting army is worth 39 pawns, so terminal outcomes dominate
/// any heuristic value a search can actually reach.
pub const WIN_SCORE: i32 = 39;

/// Score assigned to a terminal position lost by the searching side.
pub const LOSS_SCORE: i32 = -39;

/// Score assigned to any drawn terminal position.
pub const TIE_SCORE: i32 = 0;

/// Trait that all players must implement.
///
/// This allows the game driver to swap between human input, scripted
/// sequences, and search-based strategies without caring which is which.
///
/// A player's internal state (e.g. a persistent search tree) is exclusively
/// owned by that player and mutated only from its own `next_move` calls;
/// the trait is deliberately single-threaded.
pub trait Player {
    /// Assign the side this player is responsible for.
    fn set_side(&mut self, side: Color);

    /// The side this player is playing.
    fn side(&self) -> Color;

    /// Produce the next move for the current position, as a UCI notation
    /// string.
    ///
    /// The returned string is *unvalidated*: the caller must parse it against
    /// the rules engine and reject (and re-prompt for) illegal input.
    fn next_move(&mut self, board: &Board) -> String;

    /// Static material evaluation of the position from this player's
    /// perspective. Exposed for display and diagnostics.
    fn evaluate(&self, board: &Board) -> i32 {
        material(board, self.side())
    }

    /// Display name for driver output.
    fn name(&self) -> &str;
}
