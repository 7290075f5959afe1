//! Game session management for the Reversi GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::agent::Agent;
use crate::board::{Pos, Side};
use crate::config::{AgentConfig, MatchConfig, MenuChoice, SearchConfig};
use crate::engine::{MoveResult, SearchAgent};
use crate::error::Result;
use crate::game::{GameState, Outcome};
use crate::rules::MoveInfo;

/// Agent handed back by the worker together with its answer
type AiReply = (Agent, Result<MoveResult>);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game as seen by the GUI
pub struct GameSession {
    pub state: GameState,
    pub config: MatchConfig,
    /// Menu entry the match came from, if any
    pub preset: Option<MenuChoice>,
    pub outcome: Option<Outcome>,
    pub last_move: Option<MoveInfo>,
    pub move_history: Vec<(Pos, Side)>,
    pub passes: u32,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    /// Agents per side; taken out while a worker thread uses them
    agents: [Option<Agent>; 2],
}

impl GameSession {
    pub fn new(config: MatchConfig) -> Self {
        info!(
            "new game: Black {} vs White {}",
            config.black.label(),
            config.white.label()
        );
        Self {
            state: GameState::new(),
            config,
            preset: None,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            passes: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            agents: [
                Agent::from_config(&config.black),
                Agent::from_config(&config.white),
            ],
        }
    }

    pub fn from_preset(choice: MenuChoice) -> Self {
        let mut session = Self::new(MatchConfig::preset(choice));
        session.preset = Some(choice);
        session
    }

    /// Restart with the same configuration
    pub fn reset(&mut self) {
        let preset = self.preset;
        *self = Self::new(self.config);
        self.preset = preset;
    }

    /// Replace the search settings of every search-controlled side.
    ///
    /// An agent busy on a worker picks the change up when it returns.
    pub fn set_search_config(&mut self, search: SearchConfig) {
        for side in [Side::Black, Side::White] {
            let slot = self.config.for_side_mut(side);
            if let AgentConfig::Search(_) = slot {
                *slot = AgentConfig::Search(search);
                if let Some(Agent::Search(agent)) = &mut self.agents[side.index()] {
                    agent.set_config(search);
                }
            }
        }
        info!("search settings: {}", AgentConfig::Search(search).label());
    }

    /// Search settings shared by the AI sides, if any
    pub fn search_config(&self) -> Option<SearchConfig> {
        [self.config.black, self.config.white]
            .into_iter()
            .find_map(|cfg| match cfg {
                AgentConfig::Search(search) => Some(search),
                _ => None,
            })
    }

    pub fn is_human_turn(&self) -> bool {
        self.outcome.is_none() && self.config.for_side(self.state.to_move).is_human()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.outcome.is_none() && !self.config.for_side(self.state.to_move).is_human()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.outcome.is_some() {
            Vec::new()
        } else {
            self.state.legal_moves()
        }
    }

    /// Attempt a human move at `pos`
    pub fn try_play(&mut self, pos: Pos) -> std::result::Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| {
            warn!("rejected move: {err}");
            err.to_string()
        })
    }

    /// Apply a move, then resolve passes and the end of the game
    fn execute_move(&mut self, pos: Pos) -> Result<()> {
        let side = self.state.to_move;
        let info = self.state.play_in_place(pos)?;
        info!("{side} plays {pos}, flips {}", info.flipped_count());

        self.move_history.push((pos, side));
        self.last_move = Some(info);
        self.suggested_move = None;
        self.message = None;
        self.settle();
        self.move_timer.start();
        Ok(())
    }

    /// Skip the turn of a side without moves, detect terminal positions
    fn settle(&mut self) {
        if self.state.is_terminal() {
            let outcome = Outcome::from_board(
                &self.state.board,
                self.move_history.len() as u32,
                self.passes,
            );
            info!("game over: {outcome}");
            self.outcome = Some(outcome);
        } else if self.state.must_pass() {
            let side = self.state.to_move;
            info!("{side} has no legal move and passes");
            self.message = Some(format!("{side} has no legal move and passes"));
            self.passes += 1;
            self.state = self.state.passed();
        }
    }

    /// Hand the position to a worker thread if an agent is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(mut agent) = self.agents[self.state.to_move.index()].take() else {
            return;
        };

        let state = self.state;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = agent.choose_with_stats(&state);
            let _ = tx.send((agent, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the worker has finished
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(reply) => Some((reply, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker disconnected");
                    let side = self.state.to_move;
                    self.agents[side.index()] = Agent::from_config(self.config.for_side(side));
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((agent, result), elapsed)) = reply else {
            return;
        };
        self.ai_state = AiState::Idle;
        let side = self.state.to_move;
        self.agents[side.index()] = match (agent, self.config.for_side(side)) {
            (Agent::Search(mut agent), AgentConfig::Search(search)) => {
                agent.set_config(*search);
                Some(Agent::Search(agent))
            }
            (agent, _) => Some(agent),
        };
        self.move_timer.set_ai_time(elapsed);

        match result.and_then(|mv| {
            let pos = mv.best_move;
            self.last_ai_result = Some(mv);
            self.execute_move(pos)
        }) {
            Ok(()) => {}
            Err(err) => {
                warn!("AI move failed: {err}");
                self.message = Some(format!("AI could not move: {err}"));
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the human to move
    pub fn request_suggestion(&mut self) {
        if !self.is_human_turn() || self.is_ai_thinking() {
            return;
        }
        let search = self.search_config().unwrap_or_default();
        let mut agent = SearchAgent::with_config(search);
        match agent.get_move_with_stats(&self.state) {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Take back moves until a human is to move again
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() || !self.config.has_human() {
            return;
        }

        let mut moves = std::mem::take(&mut self.move_history);
        loop {
            moves.pop();
            self.replay(&moves);
            if moves.is_empty() || self.is_human_turn() {
                break;
            }
        }
        self.move_history = moves;
        self.move_timer.start();
    }

    /// Rebuild the position from the opening
    fn replay(&mut self, moves: &[(Pos, Side)]) {
        self.state = GameState::new();
        self.outcome = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;
        self.passes = 0;

        for &(pos, side) in moves {
            debug_assert_eq!(side, self.state.to_move);
            match self.state.play_in_place(pos) {
                Ok(info) => self.last_move = Some(info),
                Err(err) => {
                    warn!("history replay stopped: {err}");
                    return;
                }
            }
            self.settle();
        }
    }
}
