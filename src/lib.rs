//! A* solver for the generalized sliding-tile puzzle (the N²-1 puzzle).
//!
//! ```
//! use slider_astar::{Board, Solver};
//!
//! let board: Board = "0 1 3 2".parse().unwrap();
//! let path = Solver::new().solve(&board).unwrap();
//! assert_eq!(path.first(), Some(&board));
//! assert!(path.last().unwrap().is_goal());
//! ```

pub mod board;
pub mod error;
pub mod logging;
pub mod node;
pub mod puzzle;
pub mod queue;
pub mod solver;

pub use board::{Board, Move};
pub use error::{Error, Result};
pub use node::{NodeArena, NodeId, SearchNode};
pub use puzzle::Puzzle;
pub use queue::PriorityQueue;
pub use solver::{SearchStats, Solution, Solvability, Solver, SolverConfig};
