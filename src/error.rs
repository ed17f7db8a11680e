use crate::game::Side;
use crate::MIN_BOARD_SIZE;
use crate::MIN_MATCH_LENGTH;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("board size {0} is below the minimum of {MIN_BOARD_SIZE}")]
    BoardTooSmall(usize),

    #[error("match length {0} is below the minimum of {MIN_MATCH_LENGTH}")]
    MatchTooShort(usize),

    #[error("match length {match_length} exceeds board size {board_size}")]
    MatchExceedsBoard {
        board_size: usize,
        match_length: usize,
    },
}

/// Errors that can occur when applying a real move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },

    #[error("the game is already won by {0}")]
    GameOver(Side),
}
