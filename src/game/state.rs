//! Game state: board plus side to move

use crate::board::{Board, Cell, Pos, Side, BOARD_SIZE};
use crate::error::Result;
use crate::rules::{self, MoveInfo};

/// Unit passed through search. `Copy`, so every explored branch owns an
/// independent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub to_move: Side,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub to_move: Side,
    pub black_count: u32,
    pub white_count: u32,
}

impl BoardSnapshot {
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }
}

impl GameState {
    /// Opening position, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Black,
        }
    }

    pub fn from_parts(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    /// Legal moves of the side to move, row-major
    #[inline]
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.to_move)
    }

    #[inline]
    pub fn has_any_move(&self) -> bool {
        rules::has_any_move(&self.board, self.to_move)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    #[inline]
    pub fn must_pass(&self) -> bool {
        rules::must_pass(&self.board, self.to_move)
    }

    /// Successor after the side to move plays `pos`; the opponent moves next
    pub fn play(&self, pos: Pos) -> Result<GameState> {
        let board = rules::apply(&self.board, pos, self.to_move)?;
        Ok(Self {
            board,
            to_move: self.to_move.opponent(),
        })
    }

    /// In-place variant of [`GameState::play`] for the authoritative game
    pub fn play_in_place(&mut self, pos: Pos) -> Result<MoveInfo> {
        let info = rules::apply_move(&mut self.board, pos, self.to_move)?;
        self.to_move = self.to_move.opponent();
        Ok(info)
    }

    /// Hand the turn to the opponent, board unchanged
    pub fn passed(&self) -> GameState {
        debug_assert!(!self.has_any_move(), "pass with legal moves available");
        Self {
            board: self.board,
            to_move: self.to_move.opponent(),
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.board.cells(),
            to_move: self.to_move,
            black_count: self.board.count(Side::Black),
            white_count: self.board.count(Side::White),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
