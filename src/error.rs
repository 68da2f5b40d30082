use thiserror::Error;

/// Errors produced while building boards or driving the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `pop` was called on an empty priority queue.
    #[error("priority queue underflow")]
    Underflow,

    #[error("a board needs at least 4 tiles, got {len}")]
    TooSmall { len: usize },

    #[error("tile count {len} is not a perfect square")]
    NotSquare { len: usize },

    /// A tile is out of range or appears more than once.
    #[error("tile {tile} is out of range or duplicated")]
    NotPermutation { tile: u32 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
