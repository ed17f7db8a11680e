//! # mnk
//!
//! A generalized N-in-a-row game engine: an M×M board where a player wins
//! by placing `match_length` consecutive marks in a row, column, or
//! diagonal. Move generation and terminal detection are validated through
//! exhaustive game-tree enumeration (`perft`) built on strict in-place
//! make/undo mutation.
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, the game aggregate, perft
//! - [`config`] — Game configuration with TOML loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use mnk::{Game, GameConfig, Position, Side};
//!
//! let mut game = Game::new(GameConfig { board_size: 3, match_length: 3 })?;
//! game.play(Position::new(0, 0))?;
//! assert_eq!(game.turn(), Side::Second);
//! assert_eq!(game.perft(2), 56);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{InvalidConfiguration, InvalidMove};
pub use game::{Board, Cell, Game, Position, Side};

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 3;
/// Smallest supported match length.
pub const MIN_MATCH_LENGTH: usize = 3;
