//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Legal move generation by direction scanning
//! - Atomic move application with flip propagation
//! - Pass, terminal and winner detection

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{
    apply, apply_move, flips, has_any_move, is_legal_move, legal_move_set, legal_moves, MoveInfo,
    DIRECTIONS,
};
pub use outcome::{disc_difference, is_terminal, must_pass, winner};
