//! Evaluation functions for Reversi positions
//!
//! Scores are always from the perspective of the given side:
//! - Positive values indicate advantage for `side`
//! - `Score::WIN` / `Score::LOSS` are reserved for terminal boards; static
//!   scores are clamped strictly inside them

use crate::board::{Board, Side};
use crate::rules::disc_difference;

use super::weights::{Score, WeightMatrix};

/// Static evaluator applied at the search cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluator {
    /// Disc count differential
    #[default]
    Material,
    /// Weighted sum of owned cells
    Positional(WeightMatrix),
}

impl Evaluator {
    /// Positional evaluator over the classic weight table
    pub fn positional() -> Self {
        Evaluator::Positional(WeightMatrix::classic())
    }

    /// Score a non-terminal board for `side`, never reaching a sentinel
    #[must_use]
    pub fn score(&self, board: &Board, side: Side) -> i32 {
        match self {
            Evaluator::Material => material(board, side),
            Evaluator::Positional(weights) => positional(board, side, weights),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Evaluator::Material => "material",
            Evaluator::Positional(_) => "positional",
        }
    }
}

/// `count(side) - count(opponent)`
#[must_use]
#[inline]
pub fn material(board: &Board, side: Side) -> i32 {
    disc_difference(board, side)
}

/// Sum of weights of `side`'s cells minus the opponent's; empty cells add 0
#[must_use]
pub fn positional(board: &Board, side: Side, weights: &WeightMatrix) -> i32 {
    let sum = |side: Side| -> i64 {
        board
            .discs(side)
            .iter_ones()
            .map(|p| weights.weight(p) as i64)
            .sum()
    };
    Score::clamp_heuristic(sum(side) - sum(side.opponent()))
}

/// Win/lose sentinel for a terminal board, decided by disc count
#[must_use]
pub fn terminal_score(board: &Board, side: Side) -> i32 {
    match disc_difference(board, side) {
        d if d > 0 => Score::WIN,
        d if d < 0 => Score::LOSS,
        _ => Score::DRAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_material_initial() {
        let board = Board::new();
        assert_eq!(material(&board, Side::Black), 0);
        assert_eq!(material(&board, Side::White), 0);
    }

    #[test]
    fn test_material_is_antisymmetric() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(0, 1), Cell::Black);
        assert_eq!(material(&board, Side::Black), 2);
        assert_eq!(material(&board, Side::White), -2);
    }

    #[test]
    fn test_positional_counts_signed_weights() {
        let weights = WeightMatrix::classic();
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black); // 100
        board.set(Pos::new(1, 1), Cell::White); // -50
        board.set(Pos::new(3, 3), Cell::White); // -1
        assert_eq!(positional(&board, Side::Black, &weights), 100 - (-50 - 1));
        assert_eq!(positional(&board, Side::White, &weights), -151);
    }

    #[test]
    fn test_positional_reference_kernel() {
        let weights = WeightMatrix::from_kernel(WeightMatrix::reference_kernel());
        let board = Board::new();
        // Four interior discs, two each
        assert_eq!(positional(&board, Side::Black, &weights), 0);

        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(4, 4), Cell::Black);
        board.set(Pos::new(0, 4), Cell::White);
        assert_eq!(positional(&board, Side::Black, &weights), 1 + 2);
    }

    #[test]
    fn test_evaluator_dispatch() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        assert_eq!(Evaluator::Material.score(&board, Side::Black), 1);
        assert_eq!(Evaluator::positional().score(&board, Side::Black), 100);
        assert_eq!(Evaluator::default(), Evaluator::Material);
    }

    #[test]
    fn test_terminal_score() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::White);
        assert_eq!(terminal_score(&board, Side::White), Score::WIN);
        assert_eq!(terminal_score(&board, Side::Black), Score::LOSS);

        board.set(Pos::new(7, 7), Cell::Black);
        assert_eq!(terminal_score(&board, Side::Black), Score::DRAW);
    }

    #[test]
    fn test_positional_stays_below_sentinels() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            board.set(pos, Cell::Black);
        }
        let huge = Evaluator::Positional(WeightMatrix::new([[i32::MAX; 8]; 8]));
        assert_eq!(huge.score(&board, Side::Black), Score::WIN - 1);
        assert_eq!(huge.score(&board, Side::White), Score::LOSS + 1);

        let mut board = Board::empty();
        board.set(Pos::new(2, 0), Cell::Black);
        let mut w = [[0; 8]; 8];
        w[2][0] = 2_000_000;
        let tall = Evaluator::Positional(WeightMatrix::new(w));
        assert!(tall.score(&board, Side::Black) < Score::WIN);
    }
}
