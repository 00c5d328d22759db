//! Arena configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings for a single game, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Player spec for the white seat (see `create_player`).
    pub white: String,
    /// Player spec for the black seat.
    pub black: String,
    /// Search depth for minimax players without an explicit `:depth`.
    pub minimax_depth: u8,
    /// Iteration budget for MCTS players without an explicit `:iterations`.
    pub mcts_iterations: u32,
    /// Simulations per expanded leaf for MCTS players.
    pub mcts_rollouts: u32,
    /// Maximum plies before the game is scored a draw.
    pub max_moves: u32,
    /// Print the board and evaluation before every move.
    pub verbose: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            white: "manual".to_string(),
            black: "mcts".to_string(),
            minimax_depth: 3,
            mcts_iterations: 10,
            mcts_rollouts: 3,
            max_moves: 200,
            verbose: true,
        }
    }
}

impl ArenaConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: ArenaConfig = toml::from_str("white = \"random\"").unwrap();
        assert_eq!(config.white, "random");
        assert_eq!(config.black, "mcts");
        assert_eq!(config.max_moves, 200);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = ArenaConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: ArenaConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.minimax_depth, config.minimax_depth);
        assert_eq!(back.mcts_iterations, config.mcts_iterations);
    }
}
