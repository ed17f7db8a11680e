use tracing::debug;

use super::{Board, Cell, Position, Side};
use crate::config::GameConfig;
use crate::error::{InvalidConfiguration, InvalidMove};

/// A generalized N-in-a-row game: one mutable board, the match length,
/// and the side to move.
///
/// All speculative work (legality filtering, [`perft`](Game::perft))
/// mutates the board in place and undoes the mutation afterwards; the
/// board is never copied during search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    match_length: usize,
    turn: Side,
}

impl Game {
    /// Create a game from a validated configuration.
    ///
    /// Fails with [`InvalidConfiguration`] unless
    /// `board_size >= match_length >= 3`. On success the board is empty
    /// and `First` is to move.
    pub fn new(config: GameConfig) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        debug!(
            board_size = config.board_size,
            match_length = config.match_length,
            "creating game"
        );
        Ok(Game {
            board: Board::new(config.board_size),
            match_length: config.match_length,
            turn: Side::First,
        })
    }

    /// Side currently to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks in a row required to win.
    pub fn match_length(&self) -> usize {
        self.match_length
    }

    /// Write the mover's mark at `pos` and flip the side to move.
    ///
    /// Low-level primitive shared by real moves and speculative trial
    /// moves. Performs no bounds or occupancy checking; every call must
    /// eventually be paired with an [`undo_move`](Game::undo_move) at the
    /// same position, in LIFO order.
    pub(crate) fn make_move(&mut self, pos: Position) {
        self.board.set(pos, self.turn.to_cell());
        self.turn = self.turn.other();
    }

    /// Clear the cell at `pos` and flip the side to move back.
    pub(crate) fn undo_move(&mut self, pos: Position) {
        self.board.set(pos, Cell::Empty);
        self.turn = self.turn.other();
    }

    /// Whether `side` has completed a match on the current board.
    pub fn check_match(&self, side: Side) -> bool {
        self.board.check_match(side, self.match_length)
    }

    /// Whether the game has ended with a full board and no winner.
    ///
    /// The no-winner conjunct matters when filling the last cell also
    /// completes the mover's line: that position is a win, not a draw.
    pub fn check_draw(&self) -> bool {
        self.board.is_full() && self.winner().is_none()
    }

    /// Every empty cell as a candidate move, unfiltered.
    pub fn pseudo_moves(&self) -> Vec<Position> {
        self.board.empty_positions().collect()
    }

    /// Pseudo-moves minus those rejected by the legality predicate.
    ///
    /// Each candidate costs one make/undo cycle: the move is applied, the
    /// position is tested with [`rejects`](Game::rejects), and the move is
    /// undone again.
    pub fn legal_moves(&mut self) -> Vec<Position> {
        let candidates = self.pseudo_moves();
        let mut legal = Vec::with_capacity(candidates.len());
        for pos in candidates {
            self.make_move(pos);
            if !self.rejects() {
                legal.push(pos);
            }
            self.undo_move(pos);
        }
        legal
    }

    /// Rejection predicate evaluated immediately after a candidate move:
    /// the side now to move already holds a completed match, meaning the
    /// game was over before the candidate was played.
    pub(crate) fn rejects(&self) -> bool {
        self.check_match(self.turn)
    }

    /// Apply a real move for the side to move.
    ///
    /// Rejects positions off the board, occupied cells, and moves made
    /// after the opponent has already won. The unchecked-misuse surface of
    /// the low-level primitives stops here: this is the entry point
    /// callers outside the crate get.
    pub fn play(&mut self, pos: Position) -> Result<(), InvalidMove> {
        if !self.board.contains(pos) {
            return Err(InvalidMove::OutOfBounds {
                x: pos.x,
                y: pos.y,
                size: self.board.size(),
            });
        }
        if self.board.get(pos) != Cell::Empty {
            return Err(InvalidMove::Occupied { x: pos.x, y: pos.y });
        }
        let opponent = self.turn.other();
        if self.check_match(opponent) {
            return Err(InvalidMove::GameOver(opponent));
        }
        self.make_move(pos);
        Ok(())
    }

    /// Whether the game has ended, by win or by draw.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// The winning side, if any. `First` is checked before `Second`.
    pub fn winner(&self) -> Option<Side> {
        if self.check_match(Side::First) {
            Some(Side::First)
        } else if self.check_match(Side::Second) {
            Some(Side::Second)
        } else {
            None
        }
    }
}

impl Default for Game {
    /// Standard 3x3 tic-tac-toe.
    fn default() -> Self {
        Game::new(GameConfig::default()).expect("default configuration is valid")
    }
}
