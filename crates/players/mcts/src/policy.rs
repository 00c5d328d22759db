//! Child-selection policies
//!
//! The scoring rule is isolated behind a trait so alternatives (a proper
//! lower-confidence bound for the minimizing side, mean-reward UCT, ...) can
//! be swapped in without touching the search itself.

/// Scores a child node given its accumulated statistics and its parent's
/// visit count. Higher is better for the maximizing side; the search picks
/// the lowest score when selecting for the minimizing side.
pub trait SelectionPolicy {
    fn score(&self, total_reward: f64, visits: u64, parent_visits: u64) -> f64;
}

/// Visit count substituted for an unvisited node: small enough that the
/// exploration term dwarfs every visited sibling, so fresh children are tried
/// first.
const UNVISITED_VISITS: f64 = 1e-20;

/// UCB1: `Qt + c * sqrt(ln(N) / n)`.
///
/// `Qt` is the child's total accumulated reward (not the mean) and the
/// exploration bonus keeps its sign for both selection directions. Both are
/// observed behavior of the search this implements, kept behind this trait
/// rather than corrected.
#[derive(Debug, Clone)]
pub struct Ucb1 {
    pub exploration: f64,
}

impl Ucb1 {
    pub const DEFAULT_EXPLORATION: f64 = 1.5;

    pub fn new(exploration: f64) -> Self {
        Self { exploration }
    }
}

impl Default for Ucb1 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPLORATION)
    }
}

impl SelectionPolicy for Ucb1 {
    fn score(&self, total_reward: f64, visits: u64, parent_visits: u64) -> f64 {
        let n = if visits == 0 {
            UNVISITED_VISITS
        } else {
            visits as f64
        };
        let parent = parent_visits.max(1) as f64;
        total_reward + self.exploration * (parent.ln() / n).sqrt()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
