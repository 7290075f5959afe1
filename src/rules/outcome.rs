//! Terminal detection and winner rule
//!
//! The game ends when neither side has a legal move. The side owning more
//! cells on the terminal board wins, equal counts are a tie.

use crate::board::{Board, Side};

use super::moves::has_any_move;

/// Neither side can move
pub fn is_terminal(board: &Board) -> bool {
    !has_any_move(board, Side::Black) && !has_any_move(board, Side::White)
}

/// `side` has to pass: no legal move, but the opponent still has one
pub fn must_pass(board: &Board, side: Side) -> bool {
    !has_any_move(board, side) && has_any_move(board, side.opponent())
}

/// Disc differential from `side`'s point of view
#[inline]
pub fn disc_difference(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opponent()) as i32
}

/// Side with more discs, `None` on equal counts.
/// Only meaningful on a terminal board.
pub fn winner(board: &Board) -> Option<Side> {
    match disc_difference(board, Side::Black) {
        d if d > 0 => Some(Side::Black),
        d if d < 0 => Some(Side::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_initial_board_not_terminal() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert!(!must_pass(&board, Side::Black));
        assert!(!must_pass(&board, Side::White));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let cell = if pos.row < 5 { Cell::Black } else { Cell::White };
            board.set(pos, cell);
        }
        assert!(board.is_full());
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Some(Side::Black));
        assert_eq!(disc_difference(&board, Side::White), 24 - 40);
    }

    #[test]
    fn test_single_colour_board_is_terminal() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::White);
        board.set(Pos::new(7, 7), Cell::White);
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Some(Side::White));
    }

    #[test]
    fn test_blocked_board_with_empty_cells_is_terminal() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(7, 7), Cell::White);
        assert!(!board.is_full());
        assert!(is_terminal(&board));
        assert!(!must_pass(&board, Side::Black));
        assert!(!must_pass(&board, Side::White));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_pass_detection() {
        // White has a disc it cannot use, Black can flip it
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(0, 1), Cell::White);
        assert!(has_any_move(&board, Side::Black));
        assert!(!has_any_move(&board, Side::White));
        assert!(must_pass(&board, Side::White));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_tie() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(disc_difference(&board, Side::Black), 0);
    }
}
