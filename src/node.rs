//! Search bookkeeping: nodes and the arena that owns them.
//!
//! Predecessor links are arena indices, so the whole search tree stays alive until the
//! arena is dropped and path reconstruction is a simple walk back to the root.

use crate::board::Board;

/// Index of a [`SearchNode`] inside its [`NodeArena`].
pub type NodeId = usize;

/// A board together with the cost of reaching it and where it came from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    moves: usize,
    priority: usize,
    previous: Option<NodeId>,
}

impl SearchNode {
    /// Creates a root node with `moves == 0`.
    pub fn root(board: Board) -> Self {
        Self::with_moves(board, 0, None)
    }

    /// Creates a node one move past `previous`.
    pub fn child(board: Board, previous: NodeId, previous_moves: usize) -> Self {
        Self::with_moves(board, previous_moves + 1, Some(previous))
    }

    fn with_moves(board: Board, moves: usize, previous: Option<NodeId>) -> Self {
        let priority = moves + board.manhattan();
        Self {
            board,
            moves,
            priority,
            previous,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves made from the start board, g(n).
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// g(n) + h(n), with the manhattan distance as h.
    #[inline]
    pub fn priority(&self) -> usize {
        self.priority
    }

    #[inline]
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }
}

/// Append-only storage for every node created during one search.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// # Panics
    ///
    /// Panics if `id` was not returned by [`NodeArena::insert`] on this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Boards from the root to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.get(id).moves() + 1);
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board.clone());
            current = node.previous;
        }
        path.reverse();
        path
    }
}
