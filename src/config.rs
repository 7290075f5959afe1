//! Match and agent configuration
//!
//! Everything is plain typed values with sensible defaults; the GUI and the
//! tests build them directly.

use crate::board::Side;
use crate::eval::Evaluator;
use crate::search::SearchMode;

/// Search agent settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the current position, root move included
    pub depth_limit: u8,
    pub mode: SearchMode,
    /// Static evaluator used at the cutoff
    pub evaluator: Evaluator,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u8 = 3;
    pub const MAX_DEPTH: u8 = 8;

    pub fn with_depth(depth_limit: u8) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Depth actually searched. The root move is always one ply.
    #[inline]
    pub fn effective_depth(&self) -> u8 {
        self.depth_limit.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: Self::DEFAULT_DEPTH,
            mode: SearchMode::AlphaBeta,
            evaluator: Evaluator::Material,
        }
    }
}

/// Who controls one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentConfig {
    /// Moves come from a human input source
    #[default]
    Human,
    /// Uniformly random legal moves
    Random,
    Search(SearchConfig),
}

impl AgentConfig {
    /// Alpha-beta search agent at `depth`
    pub fn search(depth: u8) -> Self {
        AgentConfig::Search(SearchConfig::with_depth(depth))
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self, AgentConfig::Human)
    }

    pub fn label(&self) -> String {
        match self {
            AgentConfig::Human => "Human".to_string(),
            AgentConfig::Random => "Random".to_string(),
            AgentConfig::Search(cfg) => format!(
                "{} d{} ({})",
                cfg.mode.name(),
                cfg.effective_depth(),
                cfg.evaluator.name()
            ),
        }
    }
}

/// The six entries of the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    HumanVsHuman,
    /// AI plays White
    HumanVsAi,
    /// AI plays Black
    AiVsHuman,
    AiVsAi,
    AiVsRandom,
    RandomVsRandom,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::HumanVsHuman,
        MenuChoice::HumanVsAi,
        MenuChoice::AiVsHuman,
        MenuChoice::AiVsAi,
        MenuChoice::AiVsRandom,
        MenuChoice::RandomVsRandom,
    ];

    /// 1-based menu number
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::HumanVsHuman => 1,
            MenuChoice::HumanVsAi => 2,
            MenuChoice::AiVsHuman => 3,
            MenuChoice::AiVsAi => 4,
            MenuChoice::AiVsRandom => 5,
            MenuChoice::RandomVsRandom => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::HumanVsHuman => "Human vs Human",
            MenuChoice::HumanVsAi => "Human vs AI (AI as White)",
            MenuChoice::AiVsHuman => "AI vs Human (AI as Black)",
            MenuChoice::AiVsAi => "AI vs AI",
            MenuChoice::AiVsRandom => "AI vs Random AI",
            MenuChoice::RandomVsRandom => "Random AI vs Random AI",
        }
    }
}

/// Per-side agent configuration for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub black: AgentConfig,
    pub white: AgentConfig,
}

impl MatchConfig {
    pub fn new(black: AgentConfig, white: AgentConfig) -> Self {
        Self { black, white }
    }

    pub fn preset(choice: MenuChoice) -> Self {
        let ai = AgentConfig::search(SearchConfig::DEFAULT_DEPTH);
        let (black, white) = match choice {
            MenuChoice::HumanVsHuman => (AgentConfig::Human, AgentConfig::Human),
            MenuChoice::HumanVsAi => (AgentConfig::Human, ai),
            MenuChoice::AiVsHuman => (ai, AgentConfig::Human),
            MenuChoice::AiVsAi => (ai, ai),
            MenuChoice::AiVsRandom => (ai, AgentConfig::Random),
            MenuChoice::RandomVsRandom => (AgentConfig::Random, AgentConfig::Random),
        };
        Self { black, white }
    }

    #[inline]
    pub fn for_side(&self, side: Side) -> &AgentConfig {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    #[inline]
    pub fn for_side_mut(&mut self, side: Side) -> &mut AgentConfig {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    pub fn has_human(&self) -> bool {
        self.black.is_human() || self.white.is_human()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::preset(MenuChoice::HumanVsAi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.depth_limit, 3);
        assert_eq!(cfg.mode, SearchMode::AlphaBeta);
        assert_eq!(cfg.evaluator, Evaluator::Material);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        assert_eq!(SearchConfig::with_depth(0).effective_depth(), 1);
        assert_eq!(SearchConfig::with_depth(5).effective_depth(), 5);
    }

    #[test]
    fn test_builder() {
        let cfg = SearchConfig::with_depth(2)
            .mode(SearchMode::Minimax)
            .evaluator(Evaluator::positional());
        assert_eq!(cfg.depth_limit, 2);
        assert_eq!(cfg.mode, SearchMode::Minimax);
        assert_eq!(cfg.evaluator, Evaluator::positional());
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_number(choice.number()), Some(choice));
        }
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
    }

    #[test]
    fn test_presets() {
        let cfg = MatchConfig::preset(MenuChoice::HumanVsAi);
        assert!(cfg.black.is_human());
        assert_eq!(cfg.white, AgentConfig::search(3));

        let cfg = MatchConfig::preset(MenuChoice::AiVsRandom);
        assert_eq!(*cfg.for_side(Side::Black), AgentConfig::search(3));
        assert_eq!(*cfg.for_side(Side::White), AgentConfig::Random);
        assert!(!cfg.has_human());

        let cfg = MatchConfig::preset(MenuChoice::HumanVsHuman);
        assert!(cfg.black.is_human() && cfg.white.is_human());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AgentConfig::Human.label(), "Human");
        assert_eq!(AgentConfig::search(3).label(), "Alpha-Beta d3 (material)");
    }
}
