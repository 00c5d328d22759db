//! Monte Carlo Tree Search player
//!
//! Persistent-tree MCTS: each `next_move` call runs a fixed iteration budget
//! of select / expand / simulate / backpropagate, then advances the root to
//! the chosen child so the statistics survive into the next call. When the
//! opponent's reply matches an existing child of that root, its subtree is
//! reused; otherwise the tree is rebuilt from a fresh snapshot.

mod node;
mod policy;

use std::rc::Rc;

use rand::seq::IteratorRandom;
use rand::thread_rng;
use tracing::debug;

use player_core::{legal_moves, move_to_uci, outcome, Board, Color, Player, Termination};

pub use node::{NodeRef, TreeNode};
pub use policy::{SelectionPolicy, Ucb1};


/// Reward for a simulated checkmate won by the searching side.
pub const WIN_REWARD: f64 = 1.0;
/// Reward for a simulated checkmate lost by the searching side.
pub const LOSS_REWARD: f64 = -1.0;
/// Reward for any other terminal, and for rollouts cut off at the ply cap.
pub const DRAW_REWARD: f64 = 0.5;

/// Tuning knobs for the search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Select/expand iterations per `next_move` call.
    pub iterations: u32,
    /// Simulations run from each freshly expanded leaf.
    pub rollouts_per_leaf: u32,
    /// Expansion steps a single rollout may take before it is scored as a
    /// draw. Caps the otherwise unbounded descent on long drawish lines.
    pub max_rollout_plies: u32,
    /// Exploration constant for the default UCB1 policy.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            rollouts_per_leaf: 3,
            max_rollout_plies: 256,
            exploration: Ucb1::DEFAULT_EXPLORATION,
        }
    }
}

/// A player driven by Monte Carlo Tree Search.
///
/// The tree is exclusively owned by this instance and must not be shared;
/// the whole search is single-threaded and runs to completion within one
/// `next_move` call.
pub struct MctsPlayer {
    side: Color,
    config: MctsConfig,
    policy: Box<dyn SelectionPolicy>,
    root: Option<NodeRef>,
}

impl MctsPlayer {
    pub fn new(config: MctsConfig) -> Self {
        let policy = Box::new(Ucb1::new(config.exploration));
        Self::with_policy(config, policy)
    }

    /// Builds a player with a custom child-selection policy.
    pub fn with_policy(config: MctsConfig, policy: Box<dyn SelectionPolicy>) -> Self {
        Self {
            side: Color::White,
            config,
            policy,
            root: None,
        }
    }

    /// Re-anchors the persistent tree on the current position.
    ///
    /// If a child of the previous root matches the position (the opponent's
    /// actual reply), it becomes the root with its statistics intact;
    /// otherwise the old tree is discarded. An unexpanded root is then fully
    /// expanded so the main loop always has children to select among.
    fn rebase_root(&mut self, board: &Board) -> NodeRef {
        let hash = board.hash();
        let reused = self.root.take().and_then(|old| {
            old.borrow()
                .children
                .values()
                .find(|child| child.borrow().board.hash() == hash)
                .map(Rc::clone)
        });

        let root = match reused {
            Some(node) => {
                debug!(visits = node.borrow().visits, "reusing search subtree");
                node.borrow_mut().detach();
                node
            }
            None => {
                debug!("rebuilding search tree");
                TreeNode::new_root(board.clone())
            }
        };

        if !root.borrow().is_expanded() {
            materialize_children(&root);
        }
        self.root = Some(Rc::clone(&root));
        root
    }

    /// Picks the favoured child of `node` by the selection policy: highest
    /// score when the side to move at `node` is this player's side, lowest
    /// otherwise. Returns `None` only for childless nodes.
    fn select_child(&self, node: &NodeRef) -> Option<NodeRef> {
        let n = node.borrow();
        let maximizing = n.board.side_to_move() == self.side;
        let parent_visits = n.visits;

        let mut best: Option<(f64, NodeRef)> = None;
        for child in n.children.values() {
            let (reward, visits) = {
                let c = child.borrow();
                (c.reward, c.visits)
            };
            let score = self.policy.score(reward, visits, parent_visits);
            let better = match &best {
                None => true,
                Some((best_score, _)) => {
                    if maximizing {
                        score > *best_score
                    } else {
                        score < *best_score
                    }
                }
            };
            if better {
                best = Some((score, Rc::clone(child)));
            }
        }
        best.map(|(_, node)| node)
    }

    /// Descends from `node` via the selection policy to an unexpanded leaf,
    /// materializes all of its children, and returns one uniformly at
    /// random. A childless terminal node is returned as-is.
    fn expand(&self, node: &NodeRef) -> NodeRef {
        let mut cur = Rc::clone(node);
        loop {
            if !cur.borrow().is_expanded() {
                if legal_moves(&cur.borrow().board).is_empty() {
                    return cur;
                }
                materialize_children(&cur);
                let picked = {
                    let n = cur.borrow();
                    n.children.values().choose(&mut thread_rng()).map(Rc::clone)
                };
                return picked.unwrap_or(cur);
            }
            match self.select_child(&cur) {
                Some(next) => cur = next,
                None => return cur,
            }
        }
    }

    /// Expands from `node` until a terminal position is reached or the
    /// rollout ply cap runs out, and returns the reward together with the
    /// node it was computed at.
    fn simulate(&self, node: &NodeRef) -> (f64, NodeRef) {
        let mut cur = Rc::clone(node);
        let mut plies = 0u32;
        loop {
            let terminal = outcome(&cur.borrow().board);
            if let Some(termination) = terminal {
                return (self.reward(termination), cur);
            }
            if plies >= self.config.max_rollout_plies {
                return (DRAW_REWARD, cur);
            }
            cur = self.expand(&cur);
            plies += 1;
        }
    }

    /// Scalar reward of a terminal position from this player's perspective.
    fn reward(&self, termination: Termination) -> f64 {
        match termination {
            Termination::Checkmate { winner } if winner == self.side => WIN_REWARD,
            Termination::Checkmate { .. } => LOSS_REWARD,
            Termination::Stalemate | Termination::Draw => DRAW_REWARD,
        }
    }
}

impl Player for MctsPlayer {
    fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    fn side(&self) -> Color {
        self.side
    }

    fn next_move(&mut self, board: &Board) -> String {
        let root = self.rebase_root(board);

        for _ in 0..self.config.iterations {
            // A terminal root has no children to search; not a supported
            // input, so just stop.
            let Some(best) = self.select_child(&root) else {
                break;
            };
            let leaf = self.expand(&best);
            for _ in 0..self.config.rollouts_per_leaf {
                let (reward, terminal) = self.simulate(&leaf);
                backpropagate(&terminal, reward);
            }
        }

        match self.select_child(&root) {
            Some(chosen) => {
                let text = chosen
                    .borrow()
                    .incoming
                    .map(move_to_uci)
                    .unwrap_or_default();
                // Advance the persistent root; the discarded siblings are
                // freed with the old root's child map.
                self.root = Some(chosen);
                text
            }
            None => String::new(),
        }
    }

    fn name(&self) -> &str {
        "MCTS"
    }
}

/// Creates one child per legal move of `node`, each with an independent
/// board snapshot. The caller guarantees `node` is currently childless.
fn materialize_children(node: &NodeRef) {
    let moves = legal_moves(&node.borrow().board);
    for mv in moves {
        let mut board = node.borrow().board.clone();
        board.play_unchecked(mv);
        let child = TreeNode::new_child(node, mv, board);
        node.borrow_mut().children.insert(move_to_uci(mv), child);
    }
}

/// Walks the parent chain from `leaf` to the root inclusive, counting the
/// visit and adding the unmodified reward at every node on the path.
fn backpropagate(leaf: &NodeRef, reward: f64) {
    let mut cur = Some(Rc::clone(leaf));
    while let Some(node) = cur {
        let mut n = node.borrow_mut();
        n.visits += 1;
        n.reward += reward;
        cur = n.parent.upgrade();
    }
}
