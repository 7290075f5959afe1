//! Game loop
//!
//! Turn order, pass rule and end-of-game detection. Moves come from the
//! configured agent of the side to move, or from a [`HumanInput`] for human
//! sides; everything worth showing goes to a [`GameObserver`].

use std::fmt;

use log::{info, warn};

use crate::agent::Agent;
use crate::board::{Board, Pos, Side};
use crate::config::{AgentConfig, MatchConfig};
use crate::error::{GameError, Result};
use crate::rules::{self, MoveInfo};

use super::state::{BoardSnapshot, GameState};

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub black_count: u32,
    pub white_count: u32,
    /// `None` on a tie
    pub winner: Option<Side>,
    /// Discs placed
    pub moves: u32,
    pub passes: u32,
}

impl Outcome {
    pub fn from_board(board: &Board, moves: u32, passes: u32) -> Self {
        Self {
            black_count: board.count(Side::Black),
            white_count: board.count(Side::White),
            winner: rules::winner(board),
            moves,
            passes,
        }
    }

    #[inline]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(side) => write!(f, "{side} wins")?,
            None => f.write_str("Tie")?,
        }
        write!(f, " {}-{}", self.black_count, self.white_count)
    }
}

/// Source of human moves.
///
/// Returns one of `legal` (anything else is rejected and asked again), or
/// `None` to abandon the game. Implemented for closures.
pub trait HumanInput {
    fn request_move(&mut self, snapshot: &BoardSnapshot, legal: &[Pos]) -> Option<Pos>;
}

impl<F> HumanInput for F
where
    F: FnMut(&BoardSnapshot, &[Pos]) -> Option<Pos>,
{
    fn request_move(&mut self, snapshot: &BoardSnapshot, legal: &[Pos]) -> Option<Pos> {
        self(snapshot, legal)
    }
}

/// Renderer seam. Every method defaults to doing nothing.
pub trait GameObserver {
    /// Position before a move is requested
    fn on_position(&mut self, _snapshot: &BoardSnapshot) {}
    fn on_move(&mut self, _info: &MoveInfo, _snapshot: &BoardSnapshot) {}
    fn on_pass(&mut self, _side: Side) {}
    /// A human move was rejected
    fn on_invalid_move(&mut self, _error: &GameError) {}
    fn on_game_over(&mut self, _outcome: &Outcome) {}
}

impl GameObserver for () {}

/// Who picks the moves for one side
#[derive(Debug, Clone)]
pub enum Controller {
    Human,
    Agent(Agent),
}

impl Controller {
    pub fn from_config(config: &AgentConfig) -> Self {
        match Agent::from_config(config) {
            Some(agent) => Controller::Agent(agent),
            None => Controller::Human,
        }
    }
}

impl From<Agent> for Controller {
    fn from(agent: Agent) -> Self {
        Controller::Agent(agent)
    }
}

/// What a single [`GameLoop::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(MoveInfo),
    Passed(Side),
    Finished(Outcome),
}

/// Drives one game from the opening to the end
pub struct GameLoop {
    state: GameState,
    controllers: [Controller; 2],
    human: Option<Box<dyn HumanInput>>,
    observer: Box<dyn GameObserver>,
    moves: u32,
    passes: u32,
    started: bool,
    finished: bool,
}

impl GameLoop {
    pub fn new(config: &MatchConfig) -> Self {
        Self::with_controllers(
            Controller::from_config(&config.black),
            Controller::from_config(&config.white),
        )
    }

    pub fn with_controllers(black: Controller, white: Controller) -> Self {
        Self {
            state: GameState::new(),
            controllers: [black, white],
            human: None,
            observer: Box::new(()),
            moves: 0,
            passes: 0,
            started: false,
            finished: false,
        }
    }

    pub fn with_human_input(mut self, input: impl HumanInput + 'static) -> Self {
        self.human = Some(Box::new(input));
        self
    }

    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Start from `state` instead of the opening
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one move or pass.
    ///
    /// Returns `Finished` once, when the position is terminal; stepping
    /// again fails with `GameOver`.
    pub fn step(&mut self) -> Result<Step> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if !self.started {
            self.started = true;
            info!(
                "game start: {} to move, {} discs on the board",
                self.state.to_move,
                self.state.board.disc_count()
            );
            self.observer.on_position(&self.state.snapshot());
        }

        if self.state.is_terminal() {
            self.finished = true;
            let outcome = Outcome::from_board(&self.state.board, self.moves, self.passes);
            info!(
                "game over: {outcome} after {} moves, {} passes",
                outcome.moves, outcome.passes
            );
            self.observer.on_game_over(&outcome);
            return Ok(Step::Finished(outcome));
        }

        let side = self.state.to_move;
        if self.state.must_pass() {
            info!("{side} has no legal move and passes");
            self.state = self.state.passed();
            self.passes += 1;
            self.observer.on_pass(side);
            self.observer.on_position(&self.state.snapshot());
            return Ok(Step::Passed(side));
        }

        let info = self.next_move(side)?;
        self.moves += 1;
        info!(
            "{side} plays {}, flips {} ({}-{})",
            info.pos,
            info.flipped_count(),
            self.state.board.count(Side::Black),
            self.state.board.count(Side::White)
        );
        let snapshot = self.state.snapshot();
        self.observer.on_move(&info, &snapshot);
        self.observer.on_position(&snapshot);
        Ok(Step::Moved(info))
    }

    /// Play until the end and report the outcome
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Step::Finished(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Ask the controller of `side` for a move and apply it
    fn next_move(&mut self, side: Side) -> Result<MoveInfo> {
        match &mut self.controllers[side.index()] {
            Controller::Agent(agent) => {
                let pos = agent.choose(&self.state)?;
                self.state.play_in_place(pos)
            }
            Controller::Human => {
                let input = self
                    .human
                    .as_mut()
                    .ok_or(GameError::MissingHumanInput { side })?;
                let legal = self.state.legal_moves();
                loop {
                    let snapshot = self.state.snapshot();
                    let pos = input
                        .request_move(&snapshot, &legal)
                        .ok_or(GameError::Abandoned { side })?;
                    match self.state.play_in_place(pos) {
                        Ok(info) => return Ok(info),
                        Err(err) => {
                            warn!("rejected move: {err}");
                            self.observer.on_invalid_move(&err);
                        }
                    }
                }
            }
        }
    }
}

/// Play a full game between the configured agents.
///
/// Human sides need an input source, so use [`GameLoop`] directly for those;
/// here they fail with `MissingHumanInput` on their first turn.
pub fn play_one_game(config: &MatchConfig) -> Result<Outcome> {
    info!(
        "match: Black {} vs White {}",
        config.black.label(),
        config.white.label()
    );
    GameLoop::new(config).run()
}
