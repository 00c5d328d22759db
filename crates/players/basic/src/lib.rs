//! Simple player strategies
//!
//! Three players with no search:
//! - [`RandomPlayer`] picks uniformly among legal moves (baseline; any real
//!   strategy should beat this).
//! - [`ManualPlayer`] forwards one line of external input per turn.
//! - [`ScriptedPlayer`] replays a fixed move sequence.

use std::io::{self, BufRead};

use player_core::{legal_moves, move_to_uci, Board, Color, Player};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A player that picks a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    side: Color,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self { side: Color::White }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    fn side(&self) -> Color {
        self.side
    }

    fn next_move(&mut self, board: &Board) -> String {
        let moves = legal_moves(board);
        moves
            .choose(&mut thread_rng())
            .map(|&mv| move_to_uci(mv))
            .unwrap_or_default()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// A player controlled by a human (or any line-oriented source).
///
/// Returns whatever the line contains, untrimmed of meaning: the caller
/// validates it against the rules engine and re-prompts on bad input.
pub struct ManualPlayer {
    side: Color,
    input: Box<dyn BufRead>,
}

impl ManualPlayer {
    /// Reads moves from standard input.
    pub fn new() -> Self {
        Self::from_reader(Box::new(io::stdin().lock()))
    }

    /// Reads moves from an arbitrary line source.
    pub fn from_reader(input: Box<dyn BufRead>) -> Self {
        Self {
            side: Color::White,
            input,
        }
    }
}

impl Default for ManualPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ManualPlayer {
    fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    fn side(&self) -> Color {
        self.side
    }

    fn next_move(&mut self, _board: &Board) -> String {
        // Prompt on stderr so piped and quiet runs keep stdout clean.
        eprint!("Input a move: ");
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(_) => String::new(),
        }
    }

    fn name(&self) -> &str {
        "Manual"
    }
}

/// A player that replays a fixed sequence of moves, one per turn, wrapping
/// back to the start when the script runs out.
///
/// Each instance owns its own script and cursor; two scripted players never
/// share sequence state.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    side: Color,
    script: Vec<String>,
    next: usize,
}

impl ScriptedPlayer {
    pub fn new(script: Vec<String>) -> Self {
        Self {
            side: Color::White,
            script,
            next: 0,
        }
    }

    /// The fool's mate opening trap, split into the white and black seats.
    /// Useful for driving a game to a known checkmate in four plies.
    pub fn fools_mate() -> (ScriptedPlayer, ScriptedPlayer) {
        let white = ScriptedPlayer::new(vec!["f2f3".to_string(), "g2g4".to_string()]);
        let black = ScriptedPlayer::new(vec!["e7e6".to_string(), "d8h4".to_string()]);
        (white, black)
    }
}

impl Player for ScriptedPlayer {
    fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    fn side(&self) -> Color {
        self.side
    }

    fn next_move(&mut self, _board: &Board) -> String {
        if self.script.is_empty() {
            return String::new();
        }
        if self.next >= self.script.len() {
            // Reset so the same instance can play a further game.
            self.next = 0;
        }
        let mv = self.script[self.next].clone();
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
