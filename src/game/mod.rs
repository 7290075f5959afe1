//! Game state and the turn loop

pub mod play;
pub mod state;

pub use play::{play_one_game, Controller, GameLoop, GameObserver, HumanInput, Outcome, Step};
pub use state::{BoardSnapshot, GameState};
