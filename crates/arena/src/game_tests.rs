use super::*;

use basic_players::{RandomPlayer, ScriptedPlayer};
use minimax_player::MinimaxPlayer;

fn quiet_config() -> ArenaConfig {
    ArenaConfig {
        max_moves: 150,
        verbose: false,
        ..Default::default()
    }
}

#[test]
fn random_versus_random_always_finishes() {
    let config = quiet_config();
    let mut game = Game::new(
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        &config,
    );
    // The move cap bounds the game, so run() must report some outcome.
    let termination = game.run().unwrap();
    match termination {
        Termination::Checkmate { .. } | Termination::Stalemate | Termination::Draw => {}
    }
}

#[test]
fn scripted_fools_mate_ends_in_black_checkmate() {
    let config = quiet_config();
    let (white, black) = ScriptedPlayer::fools_mate();
    let mut game = Game::new(Box::new(white), Box::new(black), &config);
    assert_eq!(
        game.run().unwrap(),
        Termination::Checkmate {
            winner: Color::Black
        }
    );
    // The final position itself is terminal too.
    assert_eq!(
        outcome(game.board()),
        Some(Termination::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn depth_one_minimax_delivers_the_forced_mate() {
    let config = quiet_config();
    let board: Board = "6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1".parse().unwrap();
    let mut game = Game::from_board(
        board,
        Box::new(MinimaxPlayer::new(1)),
        Box::new(RandomPlayer::new()),
        &config,
    );
    assert_eq!(
        game.run().unwrap(),
        Termination::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn players_producing_garbage_abort_the_game() {
    let config = quiet_config();
    let white = ScriptedPlayer::new(vec!["not a move".to_string()]);
    let mut game = Game::new(Box::new(white), Box::new(RandomPlayer::new()), &config);
    assert!(game.run().is_err());
}

#[test]
fn render_shows_the_start_position() {
    let grid = render(&Board::default());
    assert!(grid.starts_with("8 r n b q k b n r"));
    assert!(grid.ends_with("  a b c d e f g h"));
}

#[test]
fn create_player_accepts_known_specs() {
    let config = ArenaConfig::default();
    for spec in ["random", "scripted", "minimax:2", "mcts:5"] {
        assert!(crate::create_player(spec, &config).is_ok(), "spec {spec}");
    }
    assert!(crate::create_player("wizard", &config).is_err());
}
