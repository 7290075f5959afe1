//! Score constants and positional weight tables

use crate::board::{Pos, BOARD_SIZE};

/// Score constants shared by the evaluator and the search
pub struct Score;

impl Score {
    /// Terminal win for the evaluated side.
    /// Must dominate every material or positional value.
    pub const WIN: i32 = 1_000_000;
    /// Terminal loss
    pub const LOSS: i32 = -Self::WIN;
    /// Terminal tie
    pub const DRAW: i32 = 0;
    /// Search bound, strictly outside every reachable score
    pub const INF: i32 = Self::WIN + 1;
    /// Largest magnitude a static evaluation may take
    pub const HEURISTIC_MAX: i32 = Self::WIN - 1;

    /// Keep a static score strictly between the loss and win sentinels
    #[inline]
    pub fn clamp_heuristic(score: i64) -> i32 {
        score.clamp(-(Self::HEURISTIC_MAX as i64), Self::HEURISTIC_MAX as i64) as i32
    }
}

/// Weight per cell, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightMatrix {
    weights: [[i32; BOARD_SIZE]; BOARD_SIZE],
}

impl WeightMatrix {
    pub const fn new(weights: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { weights }
    }

    /// Common corner-heavy Othello table.
    /// Corners are stable, X-squares and C-squares give corners away.
    pub const fn classic() -> Self {
        Self::new([
            [100, -20, 10, 5, 5, 10, -20, 100],
            [-20, -50, -2, -2, -2, -2, -50, -20],
            [10, -2, -1, -1, -1, -1, -2, 10],
            [5, -2, -1, -1, -1, -1, -2, 5],
            [5, -2, -1, -1, -1, -1, -2, 5],
            [10, -2, -1, -1, -1, -1, -2, 10],
            [-20, -50, -2, -2, -2, -2, -50, -20],
            [100, -20, 10, 5, 5, 10, -20, 100],
        ])
    }

    /// Spread a 3x3 kernel over the board by region: the kernel's outer
    /// row/column apply to the board edges, its middle to the interior.
    pub fn from_kernel(kernel: [[i32; 3]; 3]) -> Self {
        let region = |i: usize| match i {
            0 => 0,
            i if i == BOARD_SIZE - 1 => 2,
            _ => 1,
        };
        let mut weights = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, line) in weights.iter_mut().enumerate() {
            for (c, w) in line.iter_mut().enumerate() {
                *w = kernel[region(r)][region(c)];
            }
        }
        Self::new(weights)
    }

    /// Corners 1, edges 0, interior 2
    pub const fn reference_kernel() -> [[i32; 3]; 3] {
        [[1, 0, 1], [0, 2, 0], [1, 0, 1]]
    }

    #[inline]
    pub fn weight(&self, pos: Pos) -> i32 {
        self.weights[pos.row as usize][pos.col as usize]
    }

    /// Largest score the table can produce, all cells in one colour
    pub fn max_magnitude(&self) -> i64 {
        self.weights.iter().flatten().map(|&w| (w as i64).abs()).sum()
    }
}

impl Default for WeightMatrix {
    fn default() -> Self {
        Self::classic()
    }
}
