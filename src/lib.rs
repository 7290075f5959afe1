//! Reversi engine with adversarial search agents
//!
//! An 8x8 Reversi (Othello) implementation:
//! - Standard opening: four center discs, Black moves first
//! - A move must bracket at least one run of opponent discs, every
//!   bracketed run flips
//! - A side without a legal move passes, the game ends when neither side
//!   can move
//! - The side with more discs wins, equal counts are a tie
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, move application, terminal detection
//! - [`eval`]: Static evaluation (material and positional)
//! - [`search`]: Minimax and alpha-beta search
//! - [`engine`]: Search agent with timing and statistics
//! - [`agent`]: Closed set of automated players
//! - [`game`]: Game state and the turn loop
//! - [`config`]: Per-side agent configuration and menu presets
//!
//! # Quick Start
//!
//! ```
//! use reversi::{GameState, SearchAgent, Side};
//!
//! let mut state = GameState::new();
//! let mut engine = SearchAgent::with_depth(3);
//!
//! // AI plays the opening move for Black
//! let pos = engine.choose(&state).unwrap();
//! state.play_in_place(pos).unwrap();
//! assert_eq!(state.to_move, Side::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! A whole game between automated players:
//!
//! ```
//! use reversi::{play_one_game, MatchConfig, MenuChoice};
//!
//! let outcome = play_one_game(&MatchConfig::preset(MenuChoice::RandomVsRandom)).unwrap();
//! assert!(outcome.black_count + outcome.white_count <= 64);
//! println!("{outcome}");
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{Agent, RandomAgent};
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use config::{AgentConfig, MatchConfig, MenuChoice, SearchConfig};
pub use engine::{AgentKind, MoveResult, SearchAgent};
pub use error::{GameError, Result};
pub use eval::Evaluator;
pub use game::{play_one_game, GameLoop, GameState, Outcome};
pub use search::SearchMode;
