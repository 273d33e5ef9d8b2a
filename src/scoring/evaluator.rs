//! Turns one StatRecord into fantasy points under a ScoringConfiguration.
//!
//! Categories are accumulated in a fixed order: passing, rushing, receiving,
//! misc (fumbles, long touchdowns), kicking, defense, bonuses. All arithmetic
//! is fixed-point `Decimal`, so results are identical on every platform.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::config::{MilestoneStat, ScoringConfiguration};
use super::rate::Rate;
use super::stats::{count, StatRecord};
use super::tiers::TieredTable;
use super::checked_sum;
use crate::error::{Result, ScoringError};

#[cfg(test)]
mod tests;

/// Per-category subtotals for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub passing: Decimal,
    pub rushing: Decimal,
    pub receiving: Decimal,
    pub misc: Decimal,
    pub kicking: Decimal,
    pub defense: Decimal,
    pub bonuses: Decimal,
}

impl ScoreBreakdown {
    /// Sum of every category, in accumulation order. Never clamped.
    pub fn total(&self) -> Result<Decimal> {
        checked_sum(
            [
                self.passing,
                self.rushing,
                self.receiving,
                self.misc,
                self.kicking,
                self.defense,
                self.bonuses,
            ],
            "total points",
        )
    }
}

fn times(events: u64, points: Decimal) -> Result<Decimal> {
    Decimal::from(events).checked_mul(points).ok_or_else(|| {
        ScoringError::invalid_input(format!("{} events at {} points overflow", events, points))
    })
}

fn per_event(value: Option<u32>, points: Decimal) -> Result<Decimal> {
    times(u64::from(count(value)), points)
}

fn yards(rate: &Rate, value: Option<i32>) -> Result<Decimal> {
    match value {
        Some(y) => rate.apply(i64::from(y)),
        None => Ok(Decimal::ZERO),
    }
}

fn required_table<'a>(table: Option<&'a TieredTable>, name: &str) -> Result<&'a TieredTable> {
    table.ok_or_else(|| {
        ScoringError::configuration(format!("{}: table missing but record needs it", name))
    })
}

/// Reject records whose fields do not belong to their position.
fn check_position_fields(record: &StatRecord) -> Result<()> {
    let Some(position) = record.position else {
        return Ok(());
    };
    if record.has_kicking_stats() && !position.accepts_kicking_stats() {
        return Err(ScoringError::invalid_input(format!(
            "{} record carries kicking stats",
            position
        )));
    }
    if record.has_team_defense_stats() && !position.accepts_team_defense_stats() {
        return Err(ScoringError::invalid_input(format!(
            "{} record carries team defense stats",
            position
        )));
    }
    Ok(())
}

/// Compute fantasy points for one record, split by category.
pub fn evaluate_breakdown(
    record: &StatRecord,
    config: &ScoringConfiguration,
) -> Result<ScoreBreakdown> {
    check_position_fields(record)?;

    let passing = checked_sum(
        [
            yards(&config.passing.yards, record.passing_yards)?,
            per_event(record.passing_touchdowns, config.passing.touchdown)?,
            per_event(record.interceptions_thrown, config.passing.interception)?,
            per_event(
                record.passing_two_point_conversions,
                config.passing.two_point_conversion,
            )?,
        ],
        "passing points",
    )?;

    let rushing = checked_sum(
        [
            yards(&config.rushing.yards, record.rushing_yards)?,
            per_event(record.rushing_touchdowns, config.rushing.touchdown)?,
            per_event(
                record.rushing_two_point_conversions,
                config.rushing.two_point_conversion,
            )?,
        ],
        "rushing points",
    )?;

    let receiving = checked_sum(
        [
            yards(&config.receiving.yards, record.receiving_yards)?,
            per_event(record.receiving_touchdowns, config.receiving.touchdown)?,
            per_event(record.receptions, config.receiving.reception)?,
            per_event(
                record.receiving_two_point_conversions,
                config.receiving.two_point_conversion,
            )?,
        ],
        "receiving points",
    )?;

    let misc = checked_sum(
        [
            per_event(record.fumbles_lost, config.fumble_lost)?,
            per_event(record.long_touchdowns, config.long_touchdown)?,
        ],
        "misc points",
    )?;

    let breakdown = ScoreBreakdown {
        passing,
        rushing,
        receiving,
        misc,
        kicking: kicking_points(record, config)?,
        defense: defense_points(record, config)?,
        bonuses: milestone_points(record, config)?,
    };
    let total = breakdown.total()?;

    trace!(
        player = ?record.player_id,
        position = ?record.position,
        %total,
        "evaluated stat record"
    );

    Ok(breakdown)
}

/// Compute fantasy points for one record.
pub fn evaluate(record: &StatRecord, config: &ScoringConfiguration) -> Result<Decimal> {
    evaluate_breakdown(record, config)?.total()
}

fn kicking_points(record: &StatRecord, config: &ScoringConfiguration) -> Result<Decimal> {
    let rules = &config.kicking;
    let mut parts = Vec::new();

    let mut made = record.made_field_goals().peekable();
    if made.peek().is_some() {
        let table = required_table(
            rules.field_goal_distance.as_ref(),
            "kicking.field_goal_distance",
        )?;
        parts.extend(made.map(|distance| table.lookup(distance)));
    }

    parts.push(times(record.failed_field_goals() as u64, rules.missed_field_goal)?);
    parts.push(per_event(record.extra_points_made, rules.extra_point)?);
    parts.push(per_event(record.extra_points_missed, rules.missed_extra_point)?);

    checked_sum(parts, "kicking points")
}

fn defense_points(record: &StatRecord, config: &ScoringConfiguration) -> Result<Decimal> {
    let rules = &config.defense;
    let mut parts = vec![
        per_event(record.sacks, rules.sack)?,
        per_event(record.defensive_interceptions, rules.interception)?,
        per_event(record.fumble_recoveries, rules.fumble_recovery)?,
        per_event(record.safeties, rules.safety)?,
        per_event(record.blocked_kicks, rules.blocked_kick)?,
        per_event(record.defensive_touchdowns, rules.touchdown)?,
        per_event(record.return_touchdowns, rules.return_touchdown)?,
    ];

    // Points and yards allowed are scored independently and both added
    if let Some(allowed) = record.points_allowed {
        let table = required_table(rules.points_allowed.as_ref(), "defense.points_allowed")?;
        parts.push(table.lookup(allowed));
    }
    if let Some(allowed) = record.yards_allowed {
        let table = required_table(rules.yards_allowed.as_ref(), "defense.yards_allowed")?;
        parts.push(table.lookup(allowed));
    }

    checked_sum(parts, "defense points")
}

fn milestone_points(record: &StatRecord, config: &ScoringConfiguration) -> Result<Decimal> {
    let reached = config.bonuses.iter().filter(|bonus| {
        let value = match bonus.stat {
            MilestoneStat::PassingYards => record.passing_yards,
            MilestoneStat::RushingYards => record.rushing_yards,
            MilestoneStat::ReceivingYards => record.receiving_yards,
        };
        value.is_some_and(|y| y >= bonus.threshold)
    });
    checked_sum(reached.map(|bonus| bonus.points), "milestone bonuses")
}
