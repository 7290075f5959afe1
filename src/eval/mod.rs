//! Evaluation module for Reversi positions
//!
//! Two static evaluators are available for the search cutoff:
//! - Material: disc count differential
//! - Positional: weight matrix overlaid on the board
//!
//! Terminal boards score as a win/loss sentinel that dominates both.

pub mod heuristic;
pub mod weights;

pub use heuristic::{material, positional, terminal_score, Evaluator};
pub use weights::{Score, WeightMatrix};
