use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Direction the blank travels when a move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Every move in the order neighbours are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Row and column delta applied to the blank.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One configuration of a square sliding-tile grid.
///
/// Tiles are stored in row-major order, `0` being the blank. A `Board` is a value:
/// every operation that changes the layout returns a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Board {
    side: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from row-major tiles.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than four tiles, the count is not a perfect square,
    /// or the tiles are not a permutation of `0..len`.
    pub fn new(tiles: Vec<u32>) -> Result<Self> {
        let len = tiles.len();
        if len < 4 {
            return Err(Error::TooSmall { len });
        }

        let side = (len as f64).sqrt().round() as usize;
        if side * side != len {
            return Err(Error::NotSquare { len });
        }

        let mut seen = vec![false; len];
        let mut blank = 0;
        for (i, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(Error::NotPermutation { tile })?;
            if *slot {
                return Err(Error::NotPermutation { tile });
            }
            *slot = true;
            if tile == 0 {
                blank = i;
            }
        }

        Ok(Self { side, tiles, blank })
    }

    /// The solved board of the given side: `1, 2, ..., side²-1, 0`.
    ///
    /// # Panics
    ///
    /// Panics if `side < 2`.
    pub fn goal(side: usize) -> Self {
        assert!(side >= 2, "a board needs a side of at least 2, got {side}");
        let len = side * side;
        let mut tiles: Vec<u32> = (1..len as u32).collect();
        tiles.push(0);
        Self {
            side,
            tiles,
            blank: len - 1,
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Raster index of the blank.
    #[inline]
    pub fn blank(&self) -> usize {
        self.blank
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != i + 1)
            .count()
    }

    /// Sum of taxicab distances of every non-blank tile to its goal cell.
    pub fn manhattan(&self) -> usize {
        let side = self.side;
        let mut distance = 0;
        for (i, &value) in self.tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let target = value as usize - 1;
            distance += (i / side).abs_diff(target / side);
            distance += (i % side).abs_diff(target % side);
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.blank == last
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// The board reached by moving the blank once, or `None` if that leaves the grid.
    pub fn neighbour(&self, movement: Move) -> Option<Board> {
        let target = self.step(movement)?;
        Some(self.exchange(self.blank, target))
    }

    /// Every board one blank move away, in [`Move::ALL`] order.
    pub fn neighbours(&self) -> Vec<Board> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.neighbour(movement))
            .collect()
    }

    /// A copy with two non-blank tiles of the same row exchanged.
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Board {
        if self.tiles[0] != 0 && self.tiles[1] != 0 {
            self.exchange(0, 1)
        } else {
            self.exchange(self.side, self.side + 1)
        }
    }

    /// Closed-form solvability test based on inversion parity.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.side) % 2 == 1
        }
    }

    /// The move that turns `self` into `next`, if they are one blank move apart.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&movement| self.neighbour(movement).as_ref() == Some(next))
    }

    /// Raster index the blank lands on after `movement`, if still on the grid.
    pub(crate) fn step(&self, movement: Move) -> Option<usize> {
        let (dr, dc) = movement.offset();
        let row = (self.blank / self.side).checked_add_signed(dr)?;
        let col = (self.blank % self.side).checked_add_signed(dc)?;
        if row < self.side && col < self.side {
            Some(row * self.side + col)
        } else {
            None
        }
    }

    pub(crate) fn exchange(&self, i: usize, j: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(i, j);
        let blank = if i == self.blank {
            j
        } else if j == self.blank {
            i
        } else {
            self.blank
        };
        Board {
            side: self.side,
            tiles,
            blank,
        }
    }
}

fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl TryFrom<Vec<u32>> for Board {
    type Error = Error;

    fn try_from(tiles: Vec<u32>) -> Result<Self> {
        Board::new(tiles)
    }
}

impl From<Board> for Vec<u32> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses tiles separated by whitespace and/or commas, e.g. `"1 2, 3 0"`.
    fn from_str(s: &str) -> Result<Self> {
        let tiles = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|e| Error::Parse(format!("{token:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.side) {
            for &val in row {
                write!(f, "{:>width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u32]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    #[test]
    fn test_fixture_distances() {
        let b = board(&[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(b.side(), 3);
        assert_eq!(b.blank(), 4);
        assert!(!b.is_goal());
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
    }

    #[test]
    fn test_goal() {
        let goal = Board::goal(3);
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(goal.is_goal());
        assert_eq!(goal.manhattan(), 0);
        assert_eq!(goal.hamming(), 0);
        assert!(board(&[1, 2, 3, 0]).is_goal());
        assert!(!board(&[1, 2, 0, 3]).is_goal());
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(Board::new(vec![0]), Err(Error::TooSmall { len: 1 }));
        assert_eq!(
            Board::new(vec![0, 1, 2, 3, 4]),
            Err(Error::NotSquare { len: 5 })
        );
        assert_eq!(
            Board::new(vec![0, 1, 1, 3]),
            Err(Error::NotPermutation { tile: 1 })
        );
        assert_eq!(
            Board::new(vec![0, 1, 2, 4]),
            Err(Error::NotPermutation { tile: 4 })
        );
    }

    #[test]
    fn test_neighbours_corner_edge_interior() {
        // blank top-left corner: down, right
        let corner = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let n = corner.neighbours();
        assert_eq!(n.len(), 2);
        assert_eq!(n[0].tiles(), &[3, 1, 2, 0, 4, 5, 6, 7, 8]);
        assert_eq!(n[1].tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);

        // blank on top edge: left, down, right
        let edge = board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(edge.neighbours().len(), 3);

        // blank in the middle: up, left, down, right
        let interior = board(&[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        let n = interior.neighbours();
        assert_eq!(n.len(), 4);
        assert_eq!(n[0].tiles(), &[8, 0, 3, 4, 1, 2, 7, 6, 5]);
        assert_eq!(n[1].tiles(), &[8, 1, 3, 0, 4, 2, 7, 6, 5]);
        assert_eq!(n[2].tiles(), &[8, 1, 3, 4, 6, 2, 7, 0, 5]);
        assert_eq!(n[3].tiles(), &[8, 1, 3, 4, 2, 0, 7, 6, 5]);
        for neighbour in &n {
            assert_eq!(neighbour.manhattan().abs_diff(interior.manhattan()), 1);
        }
    }

    #[test]
    fn test_neighbours_do_not_mutate() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let before = b.clone();
        let _ = b.neighbours();
        let _ = b.twin();
        assert_eq!(b, before);
    }

    #[test]
    fn test_twin() {
        let b = board(&[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(b.twin().tiles(), &[1, 8, 3, 4, 0, 2, 7, 6, 5]);

        let blank_first = board(&[0, 1, 3, 2]);
        assert_eq!(blank_first.twin().tiles(), &[0, 1, 2, 3]);
        assert_eq!(blank_first.twin().blank(), 0);

        let blank_second = board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(blank_second.twin().tiles(), &[1, 0, 2, 4, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(Board::goal(3).is_solvable());
        assert!(Board::goal(4).is_solvable());
        assert!(board(&[8, 1, 3, 4, 0, 2, 7, 6, 5]).is_solvable());
        assert!(!board(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).is_solvable());
        assert!(board(&[0, 1, 3, 2]).is_solvable());
        assert!(!board(&[2, 1, 3, 0]).is_solvable());

        for side in 2..=4 {
            let goal = Board::goal(side);
            assert!(!goal.twin().is_solvable());
            for n in goal.neighbours() {
                assert!(n.is_solvable());
                assert!(!n.twin().is_solvable());
            }
        }
    }

    #[test]
    fn test_move_to() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let next = b.neighbour(Move::Right).unwrap();
        assert!(next.is_goal());
        assert_eq!(b.move_to(&next), Some(Move::Right));
        assert_eq!(next.move_to(&b), Some(Move::Left));
        assert_eq!(b.move_to(&b), None);
        assert_eq!(b.neighbour(Move::Down), None);
    }

    #[test]
    fn test_parse_and_display() {
        let b: Board = "8 1 3\n4 0 2\n7,6,5".parse().unwrap();
        assert_eq!(b.tiles(), &[8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(b.to_string(), "8 1 3 \n4 0 2 \n7 6 5 \n");

        let wide = Board::goal(4);
        assert!(wide.to_string().starts_with(" 1  2  3  4 \n"));

        assert!(matches!("1 2 x 0".parse::<Board>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let b = board(&[0, 1, 3, 2]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[0,1,3,2]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<Board>("[0,1,1,2]").is_err());
    }
}
