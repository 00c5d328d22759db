//! Search tree nodes
//!
//! Nodes are shared through `Rc<RefCell<...>>` with `Weak` back-references,
//! giving a single-threaded tree whose pruned branches are freed as soon as
//! the search moves past them: replacing the root drops the old root's
//! child map, which owns every sibling subtree.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use player_core::{Board, Move};

/// Shared handle to a tree node.
pub type NodeRef = Rc<RefCell<TreeNode>>;

/// A node in the Monte Carlo search tree.
///
/// `board` is an independent snapshot: sibling branches must never alias
/// mutable board state. `children` is either empty (unexpanded) or holds one
/// entry per legal move of `board`, keyed by UCI notation — expansion is
/// all-or-nothing.
pub struct TreeNode {
    /// Non-owning back-reference; dangling for the root.
    pub(crate) parent: Weak<RefCell<TreeNode>>,
    /// The move that produced this node from its parent (`None` for roots).
    pub(crate) incoming: Option<Move>,
    /// Owned snapshot of the position at this node.
    pub(crate) board: Board,
    /// One child per distinct legal move, keyed by UCI notation.
    pub(crate) children: HashMap<String, NodeRef>,
    /// Total simulations passed through this node.
    pub(crate) visits: u64,
    /// Accumulated reward backpropagated through this node.
    pub(crate) reward: f64,
}

impl TreeNode {
    /// Creates a fresh root with no parent and no statistics.
    pub fn new_root(board: Board) -> NodeRef {
        Rc::new(RefCell::new(Self {
            parent: Weak::new(),
            incoming: None,
            board,
            children: HashMap::new(),
            visits: 0,
            reward: 0.0,
        }))
    }

    /// Creates a child of `parent` reached by `incoming`, holding its own
    /// board snapshot.
    pub fn new_child(parent: &NodeRef, incoming: Move, board: Board) -> NodeRef {
        Rc::new(RefCell::new(Self {
            parent: Rc::downgrade(parent),
            incoming: Some(incoming),
            board,
            children: HashMap::new(),
            visits: 0,
            reward: 0.0,
        }))
    }

    /// Severs the parent link, turning this node into a root. Backpropagation
    /// stops here afterwards.
    pub fn detach(&mut self) {
        self.parent = Weak::new();
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn visits(&self) -> u64 {
        self.visits
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }
}
