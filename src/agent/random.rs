//! Uniform random agent

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::Pos;
use crate::engine::MoveResult;
use crate::error::{GameError, Result};
use crate::game::GameState;

/// Picks uniformly among the legal moves of the side to move
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Agent seeded from the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible agent
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose(&mut self, state: &GameState) -> Result<Pos> {
        let moves = state.legal_moves();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves {
                side: state.to_move,
            })
    }

    pub fn get_move_with_stats(&mut self, state: &GameState) -> Result<MoveResult> {
        let start = Instant::now();
        let pos = self.choose(state)?;
        Ok(MoveResult::random(pos, start.elapsed().as_millis() as u64))
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Side};

    #[test]
    fn test_random_move_is_legal() {
        let mut agent = RandomAgent::seeded(7);
        let mut state = GameState::new();
        for _ in 0..20 {
            if !state.has_any_move() {
                break;
            }
            let pos = agent.choose(&state).unwrap();
            assert!(state.legal_moves().contains(&pos));
            state.play_in_place(pos).unwrap();
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let state = GameState::new();
        let mut a = RandomAgent::seeded(42);
        let mut b = RandomAgent::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.choose(&state).unwrap(), b.choose(&state).unwrap());
        }
    }

    #[test]
    fn test_single_move_always_chosen() {
        let mut board = Board::empty();
        board.set(Pos::new(3, 0), Cell::Black);
        board.set(Pos::new(3, 1), Cell::White);
        let state = GameState::from_parts(board, Side::Black);

        let mut agent = RandomAgent::seeded(1);
        for _ in 0..5 {
            assert_eq!(agent.choose(&state).unwrap(), Pos::new(3, 2));
        }
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        let state = GameState::from_parts(board, Side::White);

        let err = RandomAgent::seeded(0).choose(&state).unwrap_err();
        assert_eq!(err, GameError::NoLegalMoves { side: Side::White });
    }
}
