use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;

/// Computer opponent strength.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal column
    Easy,
    /// Minimax, 4 plies
    #[default]
    Medium,
    /// Minimax, 6 plies
    Hard,
}

impl Difficulty {
    /// Search depth, `None` for random play
    pub fn depth(self) -> Option<usize> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(4),
            Difficulty::Hard => Some(6),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Build the agent playing at this difficulty
    pub fn agent(self) -> Box<dyn Agent> {
        match self.depth() {
            None => Box::new(RandomAgent::new()),
            Some(depth) => Box::new(MinimaxAgent::new(depth)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths() {
        assert_eq!(Difficulty::Easy.depth(), None);
        assert_eq!(Difficulty::Medium.depth(), Some(4));
        assert_eq!(Difficulty::Hard.depth(), Some(6));
    }

    #[test]
    fn test_agent_kind() {
        assert_eq!(Difficulty::Easy.agent().name(), "Random");
        assert_eq!(Difficulty::Hard.agent().name(), "Minimax");
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
