//! Mutable grid for interactive play.
//!
//! The solver works only with [`Board`] values. A `Puzzle` is what a front end holds
//! while a player slides tiles around; [`Puzzle::board`] snapshots it for solving.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::board::{Board, Move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    board: Board,
}

impl Puzzle {
    /// A solved puzzle of the given side.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::goal(size),
        }
    }

    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn side(&self) -> usize {
        self.board.side()
    }

    /// Snapshot of the current layout.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }

    /// Slides the blank one cell; returns `false` and leaves the grid alone if that
    /// would leave the board.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        match self.board.step(movement) {
            Some(target) => {
                self.board = self.board.exchange(self.board.blank(), target);
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self) -> bool {
        self.apply_move(Move::Up)
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_move(Move::Left)
    }

    pub fn move_down(&mut self) -> bool {
        self.apply_move(Move::Down)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_move(Move::Right)
    }

    /// Replaces the layout with a uniformly random solvable permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut flattened = self.board.tiles().to_vec();

        loop {
            flattened.shuffle(rng);
            // always a permutation of the previous tiles
            let Ok(board) = Board::new(flattened.clone()) else {
                continue;
            };
            if board.is_solvable() {
                self.board = board;
                break;
            }
        }
    }

    /// Makes `steps` random legal moves, never undoing the previous one.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, steps: usize) {
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let choices: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|m| last.map_or(true, |l| *m != l.opposite()))
                .filter(|&m| self.board.step(m).is_some())
                .collect();
            if let Some(&movement) = choices.choose(rng) {
                self.apply_move(movement);
                last = Some(movement);
            }
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
