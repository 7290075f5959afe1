//! Automated players
//!
//! A closed set of agents behind one entry point, `choose(state)`. Humans
//! are not agents: the game loop asks its [`HumanInput`](crate::game::HumanInput)
//! for their moves.

pub mod random;

pub use random::RandomAgent;
pub use crate::config::AgentConfig;

use crate::board::Pos;
use crate::engine::{AgentKind, MoveResult, SearchAgent};
use crate::error::Result;
use crate::game::GameState;

#[derive(Debug, Clone)]
pub enum Agent {
    Random(RandomAgent),
    Search(SearchAgent),
}

impl Agent {
    /// Agent for `config`; `None` for a human side
    pub fn from_config(config: &AgentConfig) -> Option<Agent> {
        match config {
            AgentConfig::Human => None,
            AgentConfig::Random => Some(Agent::Random(RandomAgent::new())),
            AgentConfig::Search(cfg) => Some(Agent::Search(SearchAgent::with_config(*cfg))),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Random(_) => AgentKind::Random,
            Agent::Search(agent) => agent.kind(),
        }
    }

    /// Move for `state.to_move`. Only called when that side has a move.
    pub fn choose(&mut self, state: &GameState) -> Result<Pos> {
        match self {
            Agent::Random(agent) => agent.choose(state),
            Agent::Search(agent) => agent.choose(state),
        }
    }

    pub fn choose_with_stats(&mut self, state: &GameState) -> Result<MoveResult> {
        match self {
            Agent::Random(agent) => agent.get_move_with_stats(state),
            Agent::Search(agent) => agent.get_move_with_stats(state),
        }
    }
}

impl From<RandomAgent> for Agent {
    fn from(agent: RandomAgent) -> Self {
        Agent::Random(agent)
    }
}

impl From<SearchAgent> for Agent {
    fn from(agent: SearchAgent) -> Self {
        Agent::Search(agent)
    }
}
