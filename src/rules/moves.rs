//! Move generation and move application
//!
//! A cell is a legal move for a side when it is empty and, along at least one
//! of the eight compass directions, the scan from it crosses one or more
//! contiguous opponent discs and then lands on a disc of the mover. Every
//! such run is flipped when the move is played.

use crate::board::{Bitboard, Board, Pos, Side};
use crate::error::{GameError, Result};

/// The eight unit directions (row delta, col delta)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Result of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    pub pos: Pos,
    pub side: Side,
    /// Opponent discs recoloured by the move
    pub flipped: Bitboard,
}

impl MoveInfo {
    #[inline]
    pub fn flipped_count(&self) -> u32 {
        self.flipped.count()
    }
}

/// Opponent run bracketed by `side` when scanning from `pos` along `(dr, dc)`.
/// Empty when the run is absent, hits an empty cell or leaves the board.
fn flip_run(board: &Board, pos: Pos, side: Side, (dr, dc): (i32, i32)) -> Bitboard {
    let own = board.discs(side);
    let opp = board.discs(side.opponent());

    let mut run = Bitboard::new();
    let mut cur = pos.step(dr, dc);
    while let Some(p) = cur {
        if opp.get(p) {
            run.set(p);
            cur = p.step(dr, dc);
        } else if own.get(p) {
            return run;
        } else {
            break;
        }
    }
    Bitboard::new()
}

/// All discs that placing `side` at `pos` would flip.
/// Empty if `pos` is occupied or brackets nothing.
pub fn flips(board: &Board, pos: Pos, side: Side) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &dir| acc.union(flip_run(board, pos, side, dir)))
}

/// Check if `side` may play at `pos`
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, side: Side) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| !flip_run(board, pos, side, dir).is_empty())
}

/// Legal moves for `side` in row-major scan order.
/// Empty when the side has to pass.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, side))
        .collect()
}

/// Legal moves as a set
pub fn legal_move_set(board: &Board, side: Side) -> Bitboard {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, side))
        .collect()
}

/// Whether `side` has at least one legal move
pub fn has_any_move(board: &Board, side: Side) -> bool {
    Pos::all().any(|pos| is_legal_move(board, pos, side))
}

/// Play `side` at `pos` in place.
///
/// All flip runs are computed before the board is written, so an illegal
/// move leaves the board untouched.
pub fn apply_move(board: &mut Board, pos: Pos, side: Side) -> Result<MoveInfo> {
    let flipped = flips(board, pos, side);
    if flipped.is_empty() {
        return Err(GameError::InvalidMove { pos, side });
    }

    let mut own = board.discs(side).union(flipped);
    own.set(pos);
    *board.discs_mut(side) = own;
    let opp = board.discs(side.opponent()).difference(flipped);
    *board.discs_mut(side.opponent()) = opp;

    Ok(MoveInfo { pos, side, flipped })
}

/// Value-semantics variant of [`apply_move`]: returns the successor board
pub fn apply(board: &Board, pos: Pos, side: Side) -> Result<Board> {
    let mut next = *board;
    apply_move(&mut next, pos, side)?;
    Ok(next)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use proptest::prelude::*;

    /// Positions reached by legal play from the opening, with the side to move
    fn reachable_position() -> impl Strategy<Value = (Board, Side)> {
        prop::collection::vec(any::<u8>(), 0..60).prop_map(|choices| {
            let mut board = Board::new();
            let mut side = Side::Black;
            for choice in choices {
                let moves = legal_moves(&board, side);
                if moves.is_empty() {
                    if !has_any_move(&board, side.opponent()) {
                        break;
                    }
                    side = side.opponent();
                    continue;
                }
                let pos = moves[choice as usize % moves.len()];
                apply_move(&mut board, pos, side).unwrap();
                side = side.opponent();
            }
            (board, side)
        })
    }

    proptest! {
        #[test]
        fn prop_legal_moves_match_flips((board, side) in reachable_position()) {
            for pos in Pos::all() {
                let legal = is_legal_move(&board, pos, side);
                prop_assert_eq!(legal, !flips(&board, pos, side).is_empty());
                prop_assert_eq!(legal, apply(&board, pos, side).is_ok());
            }
            prop_assert_eq!(
                has_any_move(&board, side),
                !legal_moves(&board, side).is_empty()
            );
        }

        #[test]
        fn prop_apply_accounts_for_every_disc((board, side) in reachable_position()) {
            let opp = side.opponent();
            for pos in legal_moves(&board, side) {
                let mut next = board;
                let info = apply_move(&mut next, pos, side).unwrap();
                let flipped = info.flipped_count();

                prop_assert!(flipped >= 1);
                prop_assert_eq!(next.count(side), board.count(side) + flipped + 1);
                prop_assert_eq!(next.count(opp), board.count(opp) - flipped);
                prop_assert_eq!(next.empty_count(), board.empty_count() - 1);
                prop_assert_eq!(
                    (next.count(side) + next.count(opp) + next.empty_count()) as usize,
                    TOTAL_CELLS
                );
                for p in info.flipped.iter_ones() {
                    prop_assert_eq!(board.get(p), opp.cell());
                }
            }
        }

        #[test]
        fn prop_illegal_apply_leaves_board_unchanged((board, side) in reachable_position()) {
            let legal = legal_move_set(&board, side);
            for pos in Pos::all().filter(|&p| !legal.get(p)) {
                let mut next = board;
                prop_assert!(apply_move(&mut next, pos, side).is_err());
                prop_assert_eq!(next, board);
            }
        }
    }
}
