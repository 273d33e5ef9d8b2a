//! Walks the configured cascade until one participant wins or it runs out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

use super::config::{Direction, TiebreakConfiguration, TiebreakMethod};
use super::outcome::{TiebreakOutcome, TiebreakResolution, TiebreakValue};
use crate::error::{Result, ScoringError};
use crate::scoring::RosterScore;


/// Values the roster score cannot supply. The bracket owner fills these in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiebreakContext {
    pub seed: Option<u32>,
    pub head_to_head_wins: Option<u32>,
    pub best_single_week: Option<Decimal>,
    pub playoff_touchdowns: Option<u32>,
    pub draft_position: Option<u32>,
    pub points_against: Option<Decimal>,
}

impl TiebreakContext {
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// One side of a tie: the round score plus any external context.
#[derive(Debug, Clone, Copy)]
pub struct Contestant<'a> {
    pub score: &'a RosterScore,
    pub context: TiebreakContext,
}

impl<'a> Contestant<'a> {
    pub fn new(score: &'a RosterScore) -> Self {
        Self {
            score,
            context: TiebreakContext::default(),
        }
    }

    pub fn with_context(score: &'a RosterScore, context: TiebreakContext) -> Self {
        Self { score, context }
    }

    pub fn seeded(score: &'a RosterScore, seed: u32) -> Self {
        Self::with_context(score, TiebreakContext::seeded(seed))
    }

    fn value(&self, method: TiebreakMethod) -> Result<TiebreakValue> {
        let score = self.score;
        let ctx = &self.context;
        let value = match method {
            TiebreakMethod::HighestSinglePositionScore => {
                Some(TiebreakValue::Points(score.highest_position_score()))
            }
            TiebreakMethod::SecondHighestPositionScore => {
                Some(TiebreakValue::Points(score.second_highest_position_score()))
            }
            TiebreakMethod::MostTouchdowns => Some(TiebreakValue::Count(score.total_touchdowns())),
            TiebreakMethod::FewerTurnovers => Some(TiebreakValue::Count(score.total_turnovers())),
            TiebreakMethod::HigherSeed => ctx.seed.map(TiebreakValue::Seed),
            TiebreakMethod::HeadToHead => ctx.head_to_head_wins.map(TiebreakValue::Count),
            TiebreakMethod::BestSingleWeekScore => ctx.best_single_week.map(TiebreakValue::Points),
            TiebreakMethod::TotalPlayoffTouchdowns => {
                ctx.playoff_touchdowns.map(TiebreakValue::Count)
            }
            TiebreakMethod::OriginalDraftPosition => {
                ctx.draft_position.map(TiebreakValue::DraftPick)
            }
            TiebreakMethod::PointsAgainst => ctx.points_against.map(TiebreakValue::Points),
        };

        value.ok_or_else(|| ScoringError::MissingTiebreakValue {
            method: method.to_string(),
            participant: score.participant_id().to_string(),
        })
    }
}

/// Stateless resolver over a fixed cascade.
#[derive(Debug, Clone, Default)]
pub struct TiebreakResolver {
    configuration: TiebreakConfiguration,
}

impl TiebreakResolver {
    pub fn new(configuration: TiebreakConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &TiebreakConfiguration {
        &self.configuration
    }

    /// Compare the pair on a single method.
    pub fn apply(
        &self,
        method: TiebreakMethod,
        a: &Contestant<'_>,
        b: &Contestant<'_>,
    ) -> Result<TiebreakOutcome> {
        validate_pair(a, b)?;
        compare(method, a, b)
    }

    /// Run the cascade to a terminal outcome.
    pub fn resolve(&self, a: &Contestant<'_>, b: &Contestant<'_>) -> Result<TiebreakOutcome> {
        Ok(self.resolve_traced(a, b)?.outcome)
    }

    /// Run the cascade and keep every intermediate step.
    ///
    /// Context values are only required once the cascade reaches the method
    /// that needs them.
    pub fn resolve_traced(
        &self,
        a: &Contestant<'_>,
        b: &Contestant<'_>,
    ) -> Result<TiebreakResolution> {
        validate_pair(a, b)?;

        let mut steps = Vec::new();
        let mut current = self.configuration.first_method();

        while let Some(method) = current {
            let outcome = compare(method, a, b)?;
            trace!(%method, %outcome, "Tiebreak step");
            steps.push(outcome.clone());

            if outcome.is_resolved() {
                debug!(%outcome, steps = steps.len(), "Tie resolved");
                return Ok(TiebreakResolution { outcome, steps });
            }
            current = self.configuration.next_method(method);
        }

        let outcome = TiebreakOutcome::CoWinners {
            first: a.score.participant_id(),
            second: b.score.participant_id(),
        };
        debug!(%outcome, "Tiebreak cascade exhausted");
        steps.push(outcome.clone());
        Ok(TiebreakResolution { outcome, steps })
    }
}

fn validate_pair(a: &Contestant<'_>, b: &Contestant<'_>) -> Result<()> {
    let (sa, sb) = (a.score, b.score);

    if sa.participant_id() == sb.participant_id() {
        return Err(ScoringError::invalid_input(format!(
            "cannot break a tie between participant {} and itself",
            sa.participant_id()
        )));
    }
    if sa.round() != sb.round() {
        return Err(ScoringError::invalid_input(format!(
            "participants scored different rounds ({} vs {})",
            sa.round(),
            sb.round()
        )));
    }
    if sa.total() != sb.total() {
        warn!(
            a = %sa.participant_id(),
            b = %sb.participant_id(),
            a_total = %sa.total(),
            b_total = %sb.total(),
            "Resolving a tie between unequal totals"
        );
    }
    Ok(())
}

fn compare(
    method: TiebreakMethod,
    a: &Contestant<'_>,
    b: &Contestant<'_>,
) -> Result<TiebreakOutcome> {
    let a_value = a.value(method)?;
    let b_value = b.value(method)?;

    let ordering = match method.direction() {
        Direction::HigherWins => a_value.magnitude().cmp(&b_value.magnitude()),
        Direction::LowerWins => b_value.magnitude().cmp(&a_value.magnitude()),
    };

    let outcome = match ordering {
        Ordering::Equal => TiebreakOutcome::StillTied {
            method,
            shared_value: a_value,
        },
        Ordering::Greater => TiebreakOutcome::Resolved {
            winner: a.score.participant_id(),
            loser: b.score.participant_id(),
            method,
            winner_value: a_value,
            loser_value: b_value,
        },
        Ordering::Less => TiebreakOutcome::Resolved {
            winner: b.score.participant_id(),
            loser: a.score.participant_id(),
            method,
            winner_value: b_value,
            loser_value: a_value,
        },
    };
    Ok(outcome)
}
