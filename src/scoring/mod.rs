//! Fantasy scoring: configuration, evaluation and roster aggregation.

pub mod batch;
pub mod config;
pub mod evaluator;
pub mod rate;
pub mod roster;
pub mod stats;
pub mod tiers;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, ScoringError};

pub use batch::{score_round, RosterEntry, RosterSubmission};
pub use config::{
    DefenseRules, KickingRules, MilestoneBonus, MilestoneStat, PassingRules, PrecisionWarning,
    ReceivingRules, ReceptionScoring, RushingRules, ScoringConfiguration,
};
pub use evaluator::{evaluate, evaluate_breakdown, ScoreBreakdown};
pub use rate::Rate;
pub use roster::{aggregate, PositionScore, PositionStatus, RosterScore, StatLine};
pub use stats::{FieldGoalAttempt, KickResult, StatRecord};
pub use tiers::{Tier, TieredTable};

/// Round to 2 decimal places, halves away from zero.
pub fn round_points(points: Decimal) -> Decimal {
    points.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum without panicking; `what` names the quantity in the overflow error.
pub(crate) fn checked_sum(
    parts: impl IntoIterator<Item = Decimal>,
    what: &str,
) -> Result<Decimal> {
    parts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, part| acc.checked_add(part))
        .ok_or_else(|| ScoringError::invalid_input(format!("{} overflows", what)))
}
