//! Board structure

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, BOARD_SIZE, TOTAL_CELLS};

/// Game board. Plain value: copying it yields an independent grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3)
    pub fn new() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        let mut board = Self::empty();
        board.set(Pos::new(mid - 1, mid - 1), Cell::White);
        board.set(Pos::new(mid, mid), Cell::White);
        board.set(Pos::new(mid - 1, mid), Cell::Black);
        board.set(Pos::new(mid, mid - 1), Cell::Black);
        board
    }

    /// Board with no discs at all
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from a row-major grid
    pub fn from_cells(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, line) in cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                board.set(Pos::new(row as u8, col as u8), cell);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell, bypassing the rules.
    /// Game moves go through `rules::apply_move`.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
    }

    /// Get bitboard for a side
    #[inline]
    pub fn discs(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Get mutable bitboard for a side
    #[inline]
    pub(crate) fn discs_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    /// Number of discs owned by `side`
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.discs(side).count()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.disc_count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Row-major grid copy for renderers
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            grid[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
