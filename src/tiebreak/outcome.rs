//! Results of tiebreak comparisons.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::config::TiebreakMethod;
use crate::types::ParticipantId;

/// The value a participant brought to a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TiebreakValue {
    Points(Decimal),
    Count(u32),
    Seed(u32),
    DraftPick(u32),
}

impl TiebreakValue {
    pub(crate) fn magnitude(&self) -> Decimal {
        match *self {
            TiebreakValue::Points(points) => points,
            TiebreakValue::Count(n) | TiebreakValue::Seed(n) | TiebreakValue::DraftPick(n) => {
                Decimal::from(n)
            }
        }
    }
}

impl fmt::Display for TiebreakValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiebreakValue::Points(points) => write!(f, "{:.2}", points),
            TiebreakValue::Count(n) => write!(f, "{}", n),
            TiebreakValue::Seed(n) => write!(f, "seed {}", n),
            TiebreakValue::DraftPick(n) => write!(f, "pick {}", n),
        }
    }
}

/// Result of applying one method, or of the whole cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TiebreakOutcome {
    Resolved {
        winner: ParticipantId,
        loser: ParticipantId,
        method: TiebreakMethod,
        winner_value: TiebreakValue,
        loser_value: TiebreakValue,
    },
    StillTied {
        method: TiebreakMethod,
        shared_value: TiebreakValue,
    },
    /// Every configured method left the pair tied.
    CoWinners {
        first: ParticipantId,
        second: ParticipantId,
    },
}

impl TiebreakOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, TiebreakOutcome::Resolved { .. })
    }

    pub fn is_co_winners(&self) -> bool {
        matches!(self, TiebreakOutcome::CoWinners { .. })
    }

    pub fn winner(&self) -> Option<ParticipantId> {
        match self {
            TiebreakOutcome::Resolved { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn method(&self) -> Option<TiebreakMethod> {
        match self {
            TiebreakOutcome::Resolved { method, .. }
            | TiebreakOutcome::StillTied { method, .. } => Some(*method),
            TiebreakOutcome::CoWinners { .. } => None,
        }
    }
}

impl fmt::Display for TiebreakOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiebreakOutcome::Resolved {
                winner,
                loser,
                method,
                winner_value,
                loser_value,
            } => write!(
                f,
                "{} beats {} on {} ({} vs {})",
                winner, loser, method, winner_value, loser_value
            ),
            TiebreakOutcome::StillTied {
                method,
                shared_value,
            } => write!(f, "still tied on {} ({})", method, shared_value),
            TiebreakOutcome::CoWinners { first, second } => {
                write!(f, "{} and {} are co-winners", first, second)
            }
        }
    }
}

/// The terminal outcome plus every step taken to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TiebreakResolution {
    pub outcome: TiebreakOutcome,
    pub steps: Vec<TiebreakOutcome>,
}
