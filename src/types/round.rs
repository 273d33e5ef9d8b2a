//! Playoff rounds (one scoring period each).

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playoff week for which stats, scores, and rankings are computed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Round {
    #[default]
    WildCard,
    Divisional,
    Conference,
    SuperBowl,
}

impl Round {
    /// 1-based week number within the playoffs.
    pub fn week(&self) -> u16 {
        match self {
            Round::WildCard => 1,
            Round::Divisional => 2,
            Round::Conference => 3,
            Round::SuperBowl => 4,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Round::WildCard => "WILD_CARD",
            Round::Divisional => "DIVISIONAL",
            Round::Conference => "CONFERENCE",
            Round::SuperBowl => "SUPER_BOWL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Round {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', ' '], "_").as_str() {
            "WILD_CARD" | "WILDCARD" | "1" => Ok(Round::WildCard),
            "DIVISIONAL" | "2" => Ok(Round::Divisional),
            "CONFERENCE" | "CHAMPIONSHIP" | "3" => Ok(Round::Conference),
            "SUPER_BOWL" | "SUPERBOWL" | "4" => Ok(Round::SuperBowl),
            _ => Err(ScoringError::InvalidRound {
                round: s.to_string(),
            }),
        }
    }
}
