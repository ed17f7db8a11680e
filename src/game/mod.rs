//! Core N-in-a-row game logic: board representation, sides, and the
//! mutable game aggregate with make/undo move handling and perft.

mod board;
mod perft;
mod side;
mod state;

pub use board::{Board, Cell, Position};
pub use side::Side;
pub use state::Game;
