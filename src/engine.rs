//! Search agent
//!
//! This module wraps the configured [`Searcher`] into the move-choosing agent
//! used by the game loop and the GUI. It adds timing, a uniform
//! [`MoveResult`] shared with the random agent, and the per-move search log.
//!
//! # Example
//!
//! ```
//! use reversi::{GameState, SearchAgent};
//!
//! let mut agent = SearchAgent::with_depth(3);
//! let state = GameState::new();
//!
//! let result = agent.get_move_with_stats(&state).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Agent: {:?}", result.kind);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Side};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::game::GameState;
use crate::search::{SearchMode, SearchResult, Searcher};

/// Kind of agent that produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Uniform pick among the legal moves
    Random,
    /// Unpruned minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl From<SearchMode> for AgentKind {
    fn from(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Minimax => AgentKind::Minimax,
            SearchMode::AlphaBeta => AgentKind::AlphaBeta,
        }
    }
}

/// Result of a move choice with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Search score of the move; `None` for the random agent
    pub score: Option<i32>,
    pub kind: AgentKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs during the search
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, kind: AgentKind, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: Some(result.score),
            kind,
            time_ms,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }

    #[inline]
    pub(crate) fn random(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: None,
            kind: AgentKind::Random,
            time_ms,
            nodes: 0,
            cutoffs: 0,
        }
    }
}

/// Depth-limited search agent.
///
/// Deterministic: the same position and configuration always give the same
/// move.
///
/// # Example
///
/// ```
/// use reversi::{Board, SearchAgent, Side};
///
/// let mut agent = SearchAgent::with_depth(2);
/// if let Some(pos) = agent.get_move(&Board::new(), Side::Black) {
///     println!("Play at ({}, {})", pos.row, pos.col);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchAgent {
    searcher: Searcher,
}

impl SearchAgent {
    /// Alpha-beta agent with the default depth and evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    #[must_use]
    pub fn with_depth(depth_limit: u8) -> Self {
        Self::with_config(SearchConfig::with_depth(depth_limit))
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    pub fn depth_limit(&self) -> u8 {
        self.config().depth_limit
    }

    pub fn set_depth_limit(&mut self, depth_limit: u8) {
        let config = SearchConfig {
            depth_limit,
            ..*self.config()
        };
        self.searcher.set_config(config);
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.searcher.set_config(config);
    }

    pub fn kind(&self) -> AgentKind {
        self.config().mode.into()
    }

    /// Best move for `state.to_move`
    pub fn choose(&mut self, state: &GameState) -> Result<Pos> {
        Ok(self.get_move_with_stats(state)?.best_move)
    }

    /// Convenience over a bare board. `None` when `side` has to pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Pos> {
        self.choose(&GameState::from_parts(*board, side)).ok()
    }

    /// Search `state` and report the move with timing and node counts.
    ///
    /// Fails with `NoLegalMoves` when the side to move has to pass.
    pub fn get_move_with_stats(&mut self, state: &GameState) -> Result<MoveResult> {
        let start = Instant::now();
        let result = self.searcher.search(state)?;
        let time_ms = start.elapsed().as_millis() as u64;

        let config = self.config();
        debug!(
            "{} {} d{} ({}): {} score {} nodes {} cutoffs {} in {}ms",
            state.to_move,
            config.mode.name(),
            result.depth,
            config.evaluator.name(),
            result.best_move,
            result.score,
            result.stats.nodes,
            result.stats.cutoffs,
            time_ms
        );

        Ok(MoveResult::from_search(result, self.kind(), time_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::eval::Evaluator;

    #[test]
    fn test_agent_default() {
        let agent = SearchAgent::default();
        assert_eq!(agent.depth_limit(), 3);
        assert_eq!(agent.kind(), AgentKind::AlphaBeta);
    }

    #[test]
    fn test_agent_set_depth() {
        let mut agent = SearchAgent::new();
        agent.set_depth_limit(5);
        assert_eq!(agent.depth_limit(), 5);
        assert_eq!(agent.config().evaluator, Evaluator::Material);
    }

    #[test]
    fn test_agent_opening_move_is_legal() {
        let mut agent = SearchAgent::with_depth(3);
        let state = GameState::new();
        let result = agent.get_move_with_stats(&state).unwrap();
        assert!(state.legal_moves().contains(&result.best_move));
        assert_eq!(result.kind, AgentKind::AlphaBeta);
        assert!(result.score.is_some());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_agent_minimax_kind() {
        let mut agent = SearchAgent::with_config(SearchConfig::with_depth(2).mode(SearchMode::Minimax));
        let result = agent.get_move_with_stats(&GameState::new()).unwrap();
        assert_eq!(result.kind, AgentKind::Minimax);
        assert_eq!(result.cutoffs, 0);
    }

    #[test]
    fn test_agent_multiple_searches() {
        let mut agent = SearchAgent::with_depth(4);
        let board = Board::new();
        let first = agent.get_move(&board, Side::Black);
        let second = agent.get_move(&board, Side::Black);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_agent_alternating_sides() {
        let mut agent = SearchAgent::with_depth(2);
        let mut state = GameState::new();
        for _ in 0..6 {
            let pos = agent.choose(&state).unwrap();
            assert!(state.legal_moves().contains(&pos));
            state.play_in_place(pos).unwrap();
        }
    }

    #[test]
    fn test_agent_without_moves() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), crate::board::Cell::Black);
        board.set(Pos::new(0, 1), crate::board::Cell::White);

        let mut agent = SearchAgent::new();
        assert_eq!(agent.get_move(&board, Side::White), None);
        let err = agent
            .choose(&GameState::from_parts(board, Side::White))
            .unwrap_err();
        assert_eq!(err, GameError::NoLegalMoves { side: Side::White });
    }

    #[test]
    fn test_move_result_random() {
        let result = MoveResult::random(Pos::new(2, 3), 0);
        assert_eq!(result.kind, AgentKind::Random);
        assert_eq!(result.score, None);
        assert_eq!(result.nodes, 0);
    }
}
