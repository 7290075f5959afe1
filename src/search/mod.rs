//! Search module for Reversi AI
//!
//! Contains:
//! - Plain depth-limited minimax (reference search)
//! - Alpha-Beta search over the same tree, same answer with less work

use crate::board::{Pos, Side};
use crate::eval::{terminal_score, Evaluator};
use crate::game::GameState;
use crate::rules::has_any_move;

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{SearchResult, SearchStats, Searcher};

/// Search algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// Exhaustive minimax to the depth limit
    Minimax,
    /// Minimax with alpha-beta cutoffs
    #[default]
    AlphaBeta,
}

impl SearchMode {
    pub fn name(self) -> &'static str {
        match self {
            SearchMode::Minimax => "Minimax",
            SearchMode::AlphaBeta => "Alpha-Beta",
        }
    }
}

/// How a search node is resolved
pub(crate) enum Node {
    /// Neither side can move: win/lose sentinel
    Terminal(i32),
    /// Depth limit reached, or the side to move is stalled: static score
    Cutoff(i32),
    /// Children to explore, in scan order
    Expand(Vec<Pos>),
}

/// Classify `state` at `depth` for the maximizing `side`.
///
/// A node where only the side to move is stalled is scored statically
/// instead of recursing through a pass.
pub(crate) fn classify(
    state: &GameState,
    side: Side,
    depth: u8,
    depth_limit: u8,
    evaluator: &Evaluator,
) -> Node {
    let board = &state.board;
    let opponent_can_move = || has_any_move(board, state.to_move.opponent());

    if depth >= depth_limit {
        return if has_any_move(board, state.to_move) || opponent_can_move() {
            Node::Cutoff(evaluator.score(board, side))
        } else {
            Node::Terminal(terminal_score(board, side))
        };
    }

    let moves = state.legal_moves();
    if !moves.is_empty() {
        Node::Expand(moves)
    } else if opponent_can_move() {
        Node::Cutoff(evaluator.score(board, side))
    } else {
        Node::Terminal(terminal_score(board, side))
    }
}
