//! Alpha-Beta search
//!
//! This module implements the core search algorithm for the Reversi AI:
//! depth-limited minimax with alpha-beta pruning, rooted at the side to move
//! and scored from that side's point of view.
//!
//! # Features
//!
//! - Max/min node alternation with fail-soft alpha-beta bounds
//! - Moves explored in board scan order, first-found move wins ties
//! - Terminal positions scored with a sentinel that outranks any heuristic
//! - Every node owns its own copy of the state
//!
//! # Example
//!
//! ```
//! use reversi::config::SearchConfig;
//! use reversi::game::GameState;
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new(SearchConfig::with_depth(3));
//! let result = searcher.search(&GameState::new()).unwrap();
//! println!("Best move: {}", result.best_move);
//! ```

use log::trace;

use crate::board::{Pos, Side};
use crate::config::SearchConfig;
use crate::error::{GameError, Result};
use crate::eval::{Evaluator, Score};
use crate::game::GameState;

use super::{classify, minimax, Node, SearchMode};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Static evaluations at the cutoff or at a stalled node
    pub leaf_evals: u64,
    /// Terminal positions reached
    pub terminal_hits: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

impl SearchStats {
    /// Cutoffs per hundred visited nodes
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64 * 100.0
        }
    }

    pub(crate) fn record(&mut self, node: &Node) {
        self.nodes += 1;
        match node {
            Node::Terminal(_) => self.terminal_hits += 1,
            Node::Cutoff(_) => self.leaf_evals += 1,
            Node::Expand(_) => {}
        }
    }
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Pos,
    /// Minimax value of `best_move` for the side to move
    pub score: i32,
    /// Depth limit searched
    pub depth: u8,
    pub stats: SearchStats,
}

/// Configured searcher. Dispatches to minimax or alpha-beta.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    last_stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Statistics of the most recent search
    #[inline]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Choose a move for `state.to_move`.
    ///
    /// Fails with `NoLegalMoves` when the side to move has to pass; callers
    /// handle passes before asking for a move.
    pub fn search(&mut self, state: &GameState) -> Result<SearchResult> {
        let result = match self.config.mode {
            SearchMode::Minimax => minimax::search(state, &self.config)?,
            SearchMode::AlphaBeta => {
                let mut ab = AlphaBeta {
                    side: state.to_move,
                    depth_limit: self.config.effective_depth(),
                    evaluator: &self.config.evaluator,
                    stats: SearchStats::default(),
                };
                ab.root(state)?
            }
        };
        self.last_stats = result.stats;
        Ok(result)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Per-search state
struct AlphaBeta<'a> {
    /// Maximizing side
    side: Side,
    depth_limit: u8,
    evaluator: &'a Evaluator,
    stats: SearchStats,
}

impl AlphaBeta<'_> {
    fn root(&mut self, state: &GameState) -> Result<SearchResult> {
        let moves = state.legal_moves();
        let first = *moves.first().ok_or(GameError::NoLegalMoves { side: self.side })?;

        let mut best_move = first;
        let mut best_score = -Score::INF;

        for pos in moves {
            let child = state.play(pos)?;
            // Root alpha is the best score so far: later moves only need to
            // prove they are strictly better.
            let score = self.min_player(&child, best_score, Score::INF, 1)?;
            trace!("root {pos}: {score}");

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth: self.depth_limit,
            stats: self.stats,
        })
    }

    /// Maximizing side to move: raise alpha, stop once alpha >= beta
    fn max_player(&mut self, state: &GameState, mut alpha: i32, beta: i32, depth: u8) -> Result<i32> {
        let node = classify(state, self.side, depth, self.depth_limit, self.evaluator);
        self.stats.record(&node);
        let moves = match node {
            Node::Terminal(score) | Node::Cutoff(score) => return Ok(score),
            Node::Expand(moves) => moves,
        };

        let mut best = -Score::INF;
        for pos in moves {
            let child = state.play(pos)?;
            best = best.max(self.min_player(&child, alpha, beta, depth + 1)?);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }

    /// Opponent to move: lower beta, stop once beta <= alpha
    fn min_player(&mut self, state: &GameState, alpha: i32, mut beta: i32, depth: u8) -> Result<i32> {
        let node = classify(state, self.side, depth, self.depth_limit, self.evaluator);
        self.stats.record(&node);
        let moves = match node {
            Node::Terminal(score) | Node::Cutoff(score) => return Ok(score),
            Node::Expand(moves) => moves,
        };

        let mut best = Score::INF;
        for pos in moves {
            let child = state.play(pos)?;
            best = best.min(self.max_player(&child, alpha, beta, depth + 1)?);
            beta = beta.min(best);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell};
    use crate::eval::{material, terminal_score, WeightMatrix};

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(r, c) in black {
            board.set(Pos::new(r, c), Cell::Black);
        }
        for &(r, c) in white {
            board.set(Pos::new(r, c), Cell::White);
        }
        board
    }

    /// Deterministic mid-game positions: play `plies` moves picking by index
    fn scripted_position(plies: usize, salt: usize) -> GameState {
        let mut state = GameState::new();
        for i in 0..plies {
            let moves = state.legal_moves();
            if moves.is_empty() {
                if state.is_terminal() {
                    break;
                }
                state = state.passed();
                continue;
            }
            let pos = moves[(i * 7 + salt) % moves.len()];
            state.play_in_place(pos).unwrap();
        }
        state
    }

    fn search(state: &GameState, config: SearchConfig) -> SearchResult {
        Searcher::new(config).search(state).unwrap()
    }

    #[test]
    fn test_search_opening_returns_legal_move() {
        let state = GameState::new();
        let result = search(&state, SearchConfig::default());
        assert!(state.legal_moves().contains(&result.best_move));
        assert_eq!(result.depth, 3);
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        // At depth 1 a root move scores the material right after it
        let state = scripted_position(10, 3);
        let result = search(&state, SearchConfig::with_depth(1));

        let side = state.to_move;
        let mut best: Option<(Pos, i32)> = None;
        for pos in state.legal_moves() {
            let child = state.play(pos).unwrap();
            let score = if child.is_terminal() {
                terminal_score(&child.board, side)
            } else {
                material(&child.board, side)
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        let (pos, score) = best.unwrap();
        assert_eq!(result.best_move, pos);
        assert_eq!(result.score, score);
    }

    #[test]
    fn test_opening_ties_keep_first_move() {
        // The four opening moves are symmetric, so every depth ties
        for depth in 1..=4 {
            let result = search(&GameState::new(), SearchConfig::with_depth(depth));
            assert_eq!(result.best_move, Pos::new(2, 3), "depth {depth}");
        }
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        let board = board_with(&[(0, 0)], &[(0, 1)]);
        let state = GameState::from_parts(board, Side::White);

        let err = Searcher::default().search(&state).unwrap_err();
        assert_eq!(err, GameError::NoLegalMoves { side: Side::White });
    }

    #[test]
    fn test_prefers_win_over_material() {
        // Black moves: (2,0) and (2,2) take one disc each, (3,3) takes both
        // and leaves White with nothing.
        let board = board_with(&[(3, 0), (4, 2)], &[(3, 1), (3, 2)]);
        let state = GameState::from_parts(board, Side::Black);
        assert_eq!(
            state.legal_moves(),
            vec![Pos::new(2, 0), Pos::new(2, 2), Pos::new(3, 3)]
        );

        for mode in [SearchMode::Minimax, SearchMode::AlphaBeta] {
            for depth in 1..=2 {
                let result = search(&state, SearchConfig::with_depth(depth).mode(mode));
                assert_eq!(result.best_move, Pos::new(3, 3), "{mode:?} depth {depth}");
                assert_eq!(result.score, Score::WIN);
            }
        }
    }

    #[test]
    fn test_win_outranks_oversized_weights() {
        let board = board_with(&[(3, 0), (4, 2)], &[(3, 1), (3, 2)]);
        let state = GameState::from_parts(board, Side::Black);
        let mut w = [[0; 8]; 8];
        w[2][0] = 2_000_000;
        let evaluator = Evaluator::Positional(WeightMatrix::new(w));

        for mode in [SearchMode::Minimax, SearchMode::AlphaBeta] {
            for depth in 1..=2 {
                let config = SearchConfig::with_depth(depth).mode(mode).evaluator(evaluator);
                let result = search(&state, config);
                assert_eq!(result.best_move, Pos::new(3, 3), "{mode:?} depth {depth}");
                assert_eq!(result.score, Score::WIN);
            }
        }
    }

    #[test]
    fn test_terminal_root_child_scores_sentinel() {
        // Black's only move fills the board and wins
        let mut board = Board::empty();
        for pos in Pos::all() {
            board.set(pos, Cell::Black);
        }
        board.set(Pos::new(7, 7), Cell::Empty);
        board.set(Pos::new(7, 6), Cell::White);

        let state = GameState::from_parts(board, Side::Black);
        let result = search(&state, SearchConfig::with_depth(3));
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(result.score, Score::WIN);
    }

    #[test]
    fn test_stalled_opponent_scored_statically() {
        // Either Black move leaves White without a reply while Black can
        // still move. The stalled node is scored as it stands (4 vs 1)
        // rather than searched through a pass.
        let board = board_with(&[(0, 0), (3, 0)], &[(0, 1), (3, 1)]);
        let state = GameState::from_parts(board, Side::Black);
        assert_eq!(state.legal_moves(), vec![Pos::new(0, 2), Pos::new(3, 2)]);

        let after = state.play(Pos::new(0, 2)).unwrap();
        assert!(after.must_pass());
        assert!(!after.is_terminal());

        for mode in [SearchMode::Minimax, SearchMode::AlphaBeta] {
            let result = search(&state, SearchConfig::with_depth(3).mode(mode));
            assert_eq!(result.best_move, Pos::new(0, 2));
            assert_eq!(result.score, 3);
        }
    }

    #[test]
    fn test_alphabeta_matches_minimax() {
        let evaluators = [
            Evaluator::Material,
            Evaluator::positional(),
            Evaluator::Positional(WeightMatrix::from_kernel(WeightMatrix::reference_kernel())),
        ];
        for plies in [0, 4, 9, 16, 25, 40, 52] {
            for salt in 0..3 {
                let state = scripted_position(plies, salt);
                if !state.has_any_move() {
                    continue;
                }
                for depth in 1..=4 {
                    for evaluator in evaluators {
                        let base = SearchConfig::with_depth(depth).evaluator(evaluator);
                        let mm = search(&state, base.mode(SearchMode::Minimax));
                        let ab = search(&state, base.mode(SearchMode::AlphaBeta));
                        assert_eq!(
                            (ab.best_move, ab.score),
                            (mm.best_move, mm.score),
                            "plies {plies} salt {salt} depth {depth} {}",
                            evaluator.name()
                        );
                        assert!(ab.stats.nodes <= mm.stats.nodes);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pruning_saves_work() {
        let state = scripted_position(12, 1);
        let base = SearchConfig::with_depth(4);
        let mm = search(&state, base.mode(SearchMode::Minimax));
        let ab = search(&state, base.mode(SearchMode::AlphaBeta));
        assert!(ab.stats.cutoffs > 0);
        assert!(ab.stats.nodes < mm.stats.nodes);
        assert_eq!(mm.stats.cutoffs, 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let state = scripted_position(14, 2);
        let config = SearchConfig::with_depth(4).evaluator(Evaluator::positional());
        assert_eq!(search(&state, config), search(&state, config));
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let state = scripted_position(8, 0);
        let copy = state;
        let _ = search(&state, SearchConfig::with_depth(4));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_last_stats_recorded() {
        let mut searcher = Searcher::new(SearchConfig::with_depth(2).mode(SearchMode::Minimax));
        assert_eq!(searcher.last_stats().nodes, 0);
        let result = searcher.search(&GameState::new()).unwrap();
        assert_eq!(searcher.last_stats().nodes, result.stats.nodes);
        // 4 root children, 3 replies each
        assert_eq!(result.stats.nodes, 16);
        assert_eq!(result.stats.leaf_evals, 12);
    }
}
