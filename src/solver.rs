//! A* search over sliding-tile boards.
//!
//! Each [`Frontier`] owns the nodes it creates and a min-f priority queue of node ids.
//! The solver either checks inversion parity and runs one frontier, or runs the board
//! and its twin in lock-step and lets whichever reaches the goal first decide.

use std::cmp::Reverse;

use log::{debug, trace};

use crate::board::{Board, Move};
use crate::error::Result;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::queue::PriorityQueue;

/// How the solver decides that a board cannot reach the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Solvability {
    /// Inversion-count parity, checked before any search.
    #[default]
    Parity,
    /// Search the board and its twin alternately; only one can reach the goal.
    Twin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub solvability: Solvability,
    /// Skip the neighbour that would undo the move just made.
    pub prune_predecessor: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solvability: Solvability::Parity,
            prune_predecessor: true,
        }
    }
}

/// Counters collected over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pops excluded).
    pub expanded: usize,
    /// Nodes pushed onto a frontier, the start nodes included.
    pub generated: usize,
    /// Largest frontier observed; both peaks added together in twin mode.
    pub max_frontier: usize,
}

impl SearchStats {
    fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            expanded: self.expanded + other.expanded,
            generated: self.generated + other.generated,
            max_frontier: self.max_frontier + other.max_frontier,
        }
    }
}

/// The outcome of a solve: the board sequence from start to goal, empty if unsolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Board>,
    stats: SearchStats,
}

impl Solution {
    pub fn path(&self) -> &[Board] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Board> {
        self.path
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn is_solvable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves in the solution; zero for solved or unsolvable boards.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The blank moves that take the start board to the goal.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }
}

enum Step {
    Goal(NodeId),
    Expanded,
}

struct Frontier {
    arena: NodeArena,
    queue: PriorityQueue<NodeId, Reverse<usize>>,
    prune_predecessor: bool,
    stats: SearchStats,
}

impl Frontier {
    fn new(start: Board, prune_predecessor: bool) -> Self {
        let mut frontier = Self {
            arena: NodeArena::new(),
            queue: PriorityQueue::new(),
            prune_predecessor,
            stats: SearchStats::default(),
        };
        frontier.push(SearchNode::root(start));
        frontier
    }

    fn push(&mut self, node: SearchNode) {
        let priority = node.priority();
        let id = self.arena.insert(node);
        self.queue.push(id, Reverse(priority));
        self.stats.generated += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.queue.len());
    }

    /// Pops the lowest-f node and either reports it as the goal or expands it.
    fn step(&mut self) -> Result<Step> {
        let id = self.queue.pop()?;
        let node = self.arena.get(id);
        if node.board().is_goal() {
            return Ok(Step::Goal(id));
        }

        trace!(
            "expanding node {} (g = {}, f = {})",
            id,
            node.moves(),
            node.priority()
        );

        let previous = node
            .previous()
            .filter(|_| self.prune_predecessor)
            .map(|p| self.arena.get(p).board());
        let children: Vec<SearchNode> = node
            .board()
            .neighbours()
            .into_iter()
            .filter(|board| previous != Some(board))
            .map(|board| SearchNode::child(board, id, node.moves()))
            .collect();

        self.stats.expanded += 1;
        for child in children {
            self.push(child);
        }
        Ok(Step::Expanded)
    }

    fn run(&mut self) -> Result<NodeId> {
        loop {
            if let Step::Goal(id) = self.step()? {
                return Ok(id);
            }
        }
    }
}

/// A* solver for the N²-1 puzzle.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Boards from `board` to the goal, inclusive; empty if `board` is unsolvable.
    pub fn solve(&self, board: &Board) -> Result<Vec<Board>> {
        Ok(self.solve_with_stats(board)?.into_path())
    }

    /// Like [`Solver::solve`], also reporting search counters.
    pub fn solve_with_stats(&self, board: &Board) -> Result<Solution> {
        let solution = match self.config.solvability {
            Solvability::Parity => self.solve_parity(board)?,
            Solvability::Twin => self.solve_twin(board)?,
        };

        debug!(
            "solved {}x{} board: {} moves, {} expanded, {} generated, frontier peak {}",
            board.side(),
            board.side(),
            solution.len(),
            solution.stats.expanded,
            solution.stats.generated,
            solution.stats.max_frontier
        );
        Ok(solution)
    }

    fn solve_parity(&self, board: &Board) -> Result<Solution> {
        if !board.is_solvable() {
            debug!("board has odd parity, skipping search");
            return Ok(Solution {
                path: Vec::new(),
                stats: SearchStats::default(),
            });
        }

        let mut frontier = Frontier::new(board.clone(), self.config.prune_predecessor);
        let goal = frontier.run()?;
        Ok(Solution {
            path: frontier.arena.path_to(goal),
            stats: frontier.stats,
        })
    }

    fn solve_twin(&self, board: &Board) -> Result<Solution> {
        let prune = self.config.prune_predecessor;
        let mut original = Frontier::new(board.clone(), prune);
        let mut twin = Frontier::new(board.twin(), prune);

        loop {
            if let Step::Goal(goal) = original.step()? {
                return Ok(Solution {
                    path: original.arena.path_to(goal),
                    stats: original.stats.merge(twin.stats),
                });
            }
            if let Step::Goal(_) = twin.step()? {
                debug!("twin reached the goal first, board is unsolvable");
                return Ok(Solution {
                    path: Vec::new(),
                    stats: original.stats.merge(twin.stats),
                });
            }
        }
    }
}
