//! Agent pairings offered by the menu and the simulator.

use crate::agents::AgentKind;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Which agents play X and O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Matchup {
    /// Random X against random O.
    RandomVsRandom,
    /// Negamax X against negamax O.
    NegamaxVsNegamax,
    /// Negamax X against random O.
    NegamaxVsRandom,
}

impl Matchup {
    /// Parses a menu choice (1-3).
    #[instrument]
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::RandomVsRandom),
            2 => Some(Self::NegamaxVsNegamax),
            3 => Some(Self::NegamaxVsRandom),
            _ => None,
        }
    }

    /// Menu number for this matchup.
    pub fn choice(self) -> u32 {
        match self {
            Self::RandomVsRandom => 1,
            Self::NegamaxVsNegamax => 2,
            Self::NegamaxVsRandom => 3,
        }
    }

    /// Returns the display label for this matchup.
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomVsRandom => "Random vs Random",
            Self::NegamaxVsNegamax => "Negamax AI vs Negamax AI",
            Self::NegamaxVsRandom => "Negamax AI vs Random",
        }
    }

    /// Agent kinds seated as X and O.
    pub fn agents(self) -> (AgentKind, AgentKind) {
        match self {
            Self::RandomVsRandom => (AgentKind::Random, AgentKind::Random),
            Self::NegamaxVsNegamax => (AgentKind::Negamax, AgentKind::Negamax),
            Self::NegamaxVsRandom => (AgentKind::Negamax, AgentKind::Random),
        }
    }

    /// The numbered menu prompt.
    pub fn menu() -> String {
        let mut text = String::from("Choose a combination to play:\n");
        for matchup in Self::iter() {
            text.push_str(&format!("{}. {}\n", matchup.choice(), matchup.label()));
        }
        text
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_round_trip() {
        for matchup in Matchup::iter() {
            assert_eq!(Matchup::from_choice(matchup.choice()), Some(matchup));
        }
        assert_eq!(Matchup::from_choice(0), None);
        assert_eq!(Matchup::from_choice(4), None);
    }

    #[test]
    fn test_menu_lists_all_choices() {
        let menu = Matchup::menu();
        assert!(menu.contains("1. Random vs Random"));
        assert!(menu.contains("2. Negamax AI vs Negamax AI"));
        assert!(menu.contains("3. Negamax AI vs Random"));
    }

    #[test]
    fn test_agents() {
        assert_eq!(
            Matchup::NegamaxVsRandom.agents(),
            (AgentKind::Negamax, AgentKind::Random)
        );
    }
}
