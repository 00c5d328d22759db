//! Single-game loop between two players

use anyhow::{bail, Result};
use player_core::{
    outcome, parse_move, piece_at, Board, Color, File, Move, MoveError, Piece, Player, Rank,
    Square, Termination,
};
use tracing::info;

use crate::ArenaConfig;

/// Consecutive invalid inputs tolerated from one player before the game is
/// abandoned. Humans get re-prompted; an automated strategy that keeps
/// producing illegal notation has broken its contract.
const MAX_INVALID_INPUTS: u32 = 10;

/// A single game between two players.
pub struct Game {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    max_moves: u32,
    verbose: bool,
}

impl Game {
    /// Starts a game from the standard initial position.
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, config: &ArenaConfig) -> Self {
        Self::from_board(Board::default(), white, black, config)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(
        board: Board,
        mut white: Box<dyn Player>,
        mut black: Box<dyn Player>,
        config: &ArenaConfig,
    ) -> Self {
        white.set_side(Color::White);
        black.set_side(Color::Black);
        Self {
            board,
            white,
            black,
            max_moves: config.max_moves,
            verbose: config.verbose,
        }
    }

    /// Runs the game to completion and returns how it ended. Hitting the
    /// move cap scores a draw.
    pub fn run(&mut self) -> Result<Termination> {
        for ply in 0..self.max_moves {
            if let Some(termination) = outcome(&self.board) {
                self.report(termination);
                return Ok(termination);
            }
            let mv = self.prompt_move()?;
            self.board.play(mv);
            info!(ply, mv = %mv, "played");
        }

        if let Some(termination) = outcome(&self.board) {
            self.report(termination);
            return Ok(termination);
        }
        if self.verbose {
            println!("Move cap reached, game drawn");
        }
        Ok(Termination::Draw)
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Asks the side to move for a move until it produces a legal one.
    fn prompt_move(&mut self) -> Result<Move> {
        let player = match self.board.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        if self.verbose {
            println!("\n{}", render(&self.board));
            println!("{} to move, eval {}", player.name(), player.evaluate(&self.board));
        }

        for _ in 0..MAX_INVALID_INPUTS {
            let text = player.next_move(&self.board);
            match parse_move(&self.board, &text) {
                Ok(mv) => return Ok(mv),
                Err(MoveError::Malformed(_)) => {
                    println!("Incorrect format, input moves in UCI format such as a2a4")
                }
                Err(MoveError::Illegal(_)) => println!("Illegal move"),
            }
        }
        bail!(
            "{} produced {} invalid moves in a row",
            player.name(),
            MAX_INVALID_INPUTS
        );
    }

    fn report(&self, termination: Termination) {
        if !self.verbose {
            return;
        }
        println!("\n{}\n", render(&self.board));
        match termination {
            Termination::Checkmate {
                winner: Color::White,
            } => println!("White wins by checkmate"),
            Termination::Checkmate {
                winner: Color::Black,
            } => println!("Black wins by checkmate"),
            Termination::Stalemate => println!("Stalemate"),
            Termination::Draw => println!("Draw"),
        }
    }
}

/// Plain-text board grid, white's point of view.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(9 * 18);
    for rank in (0..8).rev() {
        out.push((b'1' + rank as u8) as char);
        for file in 0..8 {
            let square = Square::new(File::index(file), Rank::index(rank));
            let ch = match piece_at(board, square) {
                Some((piece, color)) => piece_char(piece, color),
                None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

fn piece_char(piece: Piece, color: Color) -> char {
    let ch = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
