//! Arena — game driver for the player strategies
//!
//! Alternates `next_move` calls between two players against the rules
//! engine, validating each returned notation string and re-prompting on bad
//! input, until the game reaches a terminal outcome or the move cap.

mod config;
mod game;

pub use config::ArenaConfig;
pub use game::{render, Game};

use anyhow::bail;
use basic_players::{ManualPlayer, RandomPlayer, ScriptedPlayer};
use mcts_player::{MctsConfig, MctsPlayer};
use minimax_player::MinimaxPlayer;
use player_core::Player;

/// Builds a player from a spec string such as `random`, `manual`,
/// `scripted:f2f3,g2g4`, `minimax:4` or `mcts:50`.
pub fn create_player(spec: &str, config: &ArenaConfig) -> anyhow::Result<Box<dyn Player>> {
    let (base, arg) = match spec.split_once(':') {
        Some((base, arg)) => (base, Some(arg)),
        None => (spec, None),
    };

    match base.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomPlayer::new())),
        "manual" | "human" => Ok(Box::new(ManualPlayer::new())),
        "scripted" => match arg {
            Some(list) => Ok(Box::new(ScriptedPlayer::new(
                list.split(',').map(|s| s.trim().to_string()).collect(),
            ))),
            // White half of the fool's mate trap by default.
            None => Ok(Box::new(ScriptedPlayer::fools_mate().0)),
        },
        "minimax" => {
            let depth = match arg {
                Some(text) => text.parse()?,
                None => config.minimax_depth,
            };
            Ok(Box::new(MinimaxPlayer::new(depth)))
        }
        "mcts" => {
            let iterations = match arg {
                Some(text) => text.parse()?,
                None => config.mcts_iterations,
            };
            Ok(Box::new(MctsPlayer::new(MctsConfig {
                iterations,
                rollouts_per_leaf: config.mcts_rollouts,
                ..Default::default()
            })))
        }
        _ => bail!("unknown player spec '{spec}'"),
    }
}
