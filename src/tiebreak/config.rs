//! Tiebreak methods and the ordered cascade a league applies them in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScoringError};

/// Which side of a comparison wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherWins,
    LowerWins,
}

/// A single comparison criterion.
///
/// The first five are derivable from the roster scores themselves (plus the
/// bracket seed); the rest need values supplied by the caller through
/// [`TiebreakContext`](super::TiebreakContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TiebreakMethod {
    HighestSinglePositionScore,
    SecondHighestPositionScore,
    MostTouchdowns,
    FewerTurnovers,
    /// Better bracket seed; seed 1 is the highest
    HigherSeed,
    HeadToHead,
    BestSingleWeekScore,
    TotalPlayoffTouchdowns,
    /// Earlier original draft pick
    OriginalDraftPosition,
    PointsAgainst,
}

impl TiebreakMethod {
    pub fn direction(&self) -> Direction {
        match self {
            TiebreakMethod::FewerTurnovers
            | TiebreakMethod::HigherSeed
            | TiebreakMethod::OriginalDraftPosition => Direction::LowerWins,
            _ => Direction::HigherWins,
        }
    }

    /// Whether the comparison value comes from the caller rather than the
    /// roster score.
    pub fn needs_context(&self) -> bool {
        !matches!(
            self,
            TiebreakMethod::HighestSinglePositionScore
                | TiebreakMethod::SecondHighestPositionScore
                | TiebreakMethod::MostTouchdowns
                | TiebreakMethod::FewerTurnovers
        )
    }
}

impl fmt::Display for TiebreakMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TiebreakMethod::HighestSinglePositionScore => "HIGHEST_SINGLE_POSITION_SCORE",
            TiebreakMethod::SecondHighestPositionScore => "SECOND_HIGHEST_POSITION_SCORE",
            TiebreakMethod::MostTouchdowns => "MOST_TOUCHDOWNS",
            TiebreakMethod::FewerTurnovers => "FEWER_TURNOVERS",
            TiebreakMethod::HigherSeed => "HIGHER_SEED",
            TiebreakMethod::HeadToHead => "HEAD_TO_HEAD",
            TiebreakMethod::BestSingleWeekScore => "BEST_SINGLE_WEEK_SCORE",
            TiebreakMethod::TotalPlayoffTouchdowns => "TOTAL_PLAYOFF_TOUCHDOWNS",
            TiebreakMethod::OriginalDraftPosition => "ORIGINAL_DRAFT_POSITION",
            TiebreakMethod::PointsAgainst => "POINTS_AGAINST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TiebreakMethod {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_uppercase().replace('-', "_")))
            .map_err(|_| ScoringError::invalid_input(format!("unknown tiebreak method '{}'", s)))
    }
}

/// Ordered, duplicate-free cascade of tiebreak methods.
///
/// Co-winners is the implicit terminal step after the last method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CascadeData")]
pub struct TiebreakConfiguration {
    cascade: Vec<TiebreakMethod>,
}

#[derive(Deserialize)]
struct CascadeData {
    cascade: Vec<TiebreakMethod>,
}

impl TryFrom<CascadeData> for TiebreakConfiguration {
    type Error = ScoringError;

    fn try_from(data: CascadeData) -> Result<Self> {
        Self::new(data.cascade)
    }
}

impl Default for TiebreakConfiguration {
    fn default() -> Self {
        Self {
            cascade: vec![
                TiebreakMethod::HighestSinglePositionScore,
                TiebreakMethod::SecondHighestPositionScore,
                TiebreakMethod::MostTouchdowns,
                TiebreakMethod::FewerTurnovers,
                TiebreakMethod::HigherSeed,
            ],
        }
    }
}

impl TiebreakConfiguration {
    /// An empty cascade is allowed and goes straight to co-winners.
    pub fn new(cascade: Vec<TiebreakMethod>) -> Result<Self> {
        for (i, method) in cascade.iter().enumerate() {
            if cascade[..i].contains(method) {
                return Err(ScoringError::configuration(format!(
                    "tiebreak cascade lists {} more than once",
                    method
                )));
            }
        }
        Ok(Self { cascade })
    }

    pub fn cascade(&self) -> &[TiebreakMethod] {
        &self.cascade
    }

    pub fn first_method(&self) -> Option<TiebreakMethod> {
        self.cascade.first().copied()
    }

    /// The method after `current`, or `None` when the cascade is exhausted.
    pub fn next_method(&self, current: TiebreakMethod) -> Option<TiebreakMethod> {
        let index = self.cascade.iter().position(|m| *m == current)?;
        self.cascade.get(index + 1).copied()
    }
}
