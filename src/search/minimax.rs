//! Plain depth-limited minimax
//!
//! Visits every node down to the depth limit. Kept as the reference the
//! pruned search must agree with, and selectable as an agent mode.

use log::trace;

use crate::board::Side;
use crate::config::SearchConfig;
use crate::error::{GameError, Result};
use crate::eval::{Evaluator, Score};
use crate::game::GameState;

use super::alphabeta::{SearchResult, SearchStats};
use super::{classify, Node};

/// Search `state` for `state.to_move` without pruning
pub fn search(state: &GameState, config: &SearchConfig) -> Result<SearchResult> {
    let mut mm = Minimax {
        side: state.to_move,
        depth_limit: config.effective_depth(),
        evaluator: &config.evaluator,
        stats: SearchStats::default(),
    };

    let moves = state.legal_moves();
    let first = *moves.first().ok_or(GameError::NoLegalMoves { side: mm.side })?;

    let mut best_move = first;
    let mut best_score = -Score::INF;
    for pos in moves {
        let child = state.play(pos)?;
        let score = mm.value(&child, 1)?;
        trace!("root {pos}: {score}");
        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        depth: mm.depth_limit,
        stats: mm.stats,
    })
}

struct Minimax<'a> {
    side: Side,
    depth_limit: u8,
    evaluator: &'a Evaluator,
    stats: SearchStats,
}

impl Minimax<'_> {
    /// Max when `side` is to move, min otherwise
    fn value(&mut self, state: &GameState, depth: u8) -> Result<i32> {
        let node = classify(state, self.side, depth, self.depth_limit, self.evaluator);
        self.stats.record(&node);
        let moves = match node {
            Node::Terminal(score) | Node::Cutoff(score) => return Ok(score),
            Node::Expand(moves) => moves,
        };

        let maximizing = state.to_move == self.side;
        let mut best = if maximizing { -Score::INF } else { Score::INF };
        for pos in moves {
            let score = self.value(&state.play(pos)?, depth + 1)?;
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        Ok(best)
    }
}
