//! Exhaustive game-tree enumeration.
//!
//! `perft` exists to validate move generation and win detection against
//! known node counts, not for gameplay. It walks every pseudo-move to a
//! bounded depth with the same make/undo discipline the legality filter
//! uses, pruning branches where the game was already over.

use super::state::Game;

impl Game {
    /// Count the leaves of the game tree at the given depth.
    ///
    /// The depth is clamped to `board_size²` since no game can run longer
    /// than there are cells. Each empty cell is tried in place: apply,
    /// recurse unless the position was already won, undo. A position whose
    /// every candidate is rejected contributes nothing, so branches ending
    /// in a win before the horizon drop out of deeper counts.
    ///
    /// For 3x3 tic-tac-toe the depth-9 count is 127872: the games that
    /// survive to the ninth ply (draws plus wins on the final move). The
    /// often-quoted 255168 counts games ending at *any* ply, which is a
    /// different quantity than a fixed-depth leaf count.
    pub fn perft(&mut self, depth: usize) -> u64 {
        let max_plies = self.board().size() * self.board().size();
        self.perft_inner(depth.min(max_plies))
    }

    fn perft_inner(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for pos in self.pseudo_moves() {
            self.make_move(pos);
            if !self.rejects() {
                nodes += self.perft_inner(depth - 1);
            }
            self.undo_move(pos);
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Position;

    fn game(board_size: usize, match_length: usize) -> Game {
        Game::new(GameConfig {
            board_size,
            match_length,
        })
        .unwrap()
    }

    #[test]
    fn test_perft_zero_is_one() {
        assert_eq!(Game::default().perft(0), 1);
        assert_eq!(game(5, 4).perft(0), 1);
    }

    #[test]
    fn test_perft_shallow_tictactoe() {
        let mut g = Game::default();
        assert_eq!(g.perft(1), 9);
        assert_eq!(g.perft(2), 72);
        assert_eq!(g.perft(3), 504);
        assert_eq!(g.perft(4), 3024);
    }

    #[test]
    fn test_perft_full_tictactoe() {
        // 15120 games reach ply 5; from ply 5 on wins start pruning
        // subtrees, so the counts diverge from bare factorials.
        let mut g = Game::default();
        assert_eq!(g.perft(5), 15120);
        assert_eq!(g.perft(6), 54720);
        assert_eq!(g.perft(7), 148176);
        assert_eq!(g.perft(8), 200448);
        assert_eq!(g.perft(9), 127872);
    }

    #[test]
    fn test_perft_depth_clamped_to_cell_count() {
        let mut g = Game::default();
        let full = g.perft(9);
        assert_eq!(g.perft(10), full);
        assert_eq!(g.perft(usize::MAX), full);
    }

    #[test]
    fn test_perft_monotone_before_terminals() {
        // Node counts can only shrink once won positions appear in the
        // tree (3x3 drops from depth 8 to 9); below that horizon deeper
        // searches see at least as many leaves.
        let mut g = Game::default();
        let mut prev = g.perft(0);
        for depth in 1..=6 {
            let nodes = g.perft(depth);
            assert!(nodes >= prev, "perft({depth}) = {nodes} < {prev}");
            prev = nodes;
        }
    }

    #[test]
    fn test_perft_larger_boards() {
        let mut g = game(4, 3);
        assert_eq!(g.perft(1), 16);
        assert_eq!(g.perft(2), 240);
        assert_eq!(g.perft(3), 3360);
        assert_eq!(g.perft(4), 43680);

        let mut g = game(5, 4);
        assert_eq!(g.perft(1), 25);
        assert_eq!(g.perft(2), 600);
        assert_eq!(g.perft(3), 13800);
    }

    #[test]
    fn test_perft_restores_game_state() {
        let mut g = game(4, 3);
        g.play(Position::new(1, 1)).unwrap();
        let before = g.clone();
        let _ = g.perft(4);
        assert_eq!(g, before);
    }

    #[test]
    fn test_perft_from_won_position_counts_nothing() {
        let mut g = Game::default();
        g.play(Position::new(0, 0)).unwrap();
        g.play(Position::new(0, 1)).unwrap();
        g.play(Position::new(1, 0)).unwrap();
        g.play(Position::new(1, 1)).unwrap();
        g.play(Position::new(2, 0)).unwrap();

        // Every candidate from a won position is rejected.
        assert_eq!(g.perft(1), 0);
        assert_eq!(g.perft(3), 0);
        // Depth 0 still counts the position itself.
        assert_eq!(g.perft(0), 1);
    }
}
