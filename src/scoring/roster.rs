//! Position scores and their aggregation into a per-round roster total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::ScoringConfiguration;
use super::evaluator::evaluate;
use super::{checked_sum, round_points};
use super::stats::StatRecord;
use crate::error::Result;
use crate::types::{ParticipantId, PlayerId, Position, Round};


/// Resolution state of one roster slot for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    Active,
    Bye,
    DidNotPlay,
    /// Game not final yet; the roster score is incomplete
    Pending,
}

impl PositionStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, PositionStatus::Pending)
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionStatus::Active => "ACTIVE",
            PositionStatus::Bye => "BYE",
            PositionStatus::DidNotPlay => "DID_NOT_PLAY",
            PositionStatus::Pending => "PENDING",
        };
        write!(f, "{}", s)
    }
}

/// Detailed counts kept for tiebreak purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub touchdowns: u32,
    pub turnovers: u32,
}

impl From<&StatRecord> for StatLine {
    fn from(record: &StatRecord) -> Self {
        Self {
            touchdowns: record.total_touchdowns(),
            turnovers: record.total_turnovers(),
        }
    }
}

/// Score for a single roster slot. Points are rounded half-up to 2 places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PositionScoreData")]
pub struct PositionScore {
    position: Position,
    player_id: Option<PlayerId>,
    points: Decimal,
    status: PositionStatus,
    detail: Option<StatLine>,
}

#[derive(Deserialize)]
struct PositionScoreData {
    position: Position,
    #[serde(default)]
    player_id: Option<PlayerId>,
    points: Decimal,
    status: PositionStatus,
    #[serde(default)]
    detail: Option<StatLine>,
}

impl From<PositionScoreData> for PositionScore {
    fn from(data: PositionScoreData) -> Self {
        PositionScore::new(
            data.position,
            data.player_id,
            data.points,
            data.status,
            data.detail,
        )
    }
}

impl PositionScore {
    pub fn new(
        position: Position,
        player_id: Option<PlayerId>,
        points: Decimal,
        status: PositionStatus,
        detail: Option<StatLine>,
    ) -> Self {
        Self {
            position,
            player_id,
            points: round_points(points),
            status,
            detail,
        }
    }

    /// Evaluate `record` and keep its touchdown/turnover counts.
    pub fn from_record(
        position: Position,
        record: &StatRecord,
        config: &ScoringConfiguration,
        status: PositionStatus,
    ) -> Result<Self> {
        let points = evaluate(record, config)?;
        Ok(Self::new(
            position,
            record.player_id,
            points,
            status,
            Some(StatLine::from(record)),
        ))
    }

    pub fn evaluated(
        position: Position,
        record: &StatRecord,
        config: &ScoringConfiguration,
    ) -> Result<Self> {
        Self::from_record(position, record, config, PositionStatus::Active)
    }

    pub fn bye(position: Position, player_id: Option<PlayerId>) -> Self {
        Self::new(position, player_id, Decimal::ZERO, PositionStatus::Bye, None)
    }

    pub fn did_not_play(position: Position, player_id: Option<PlayerId>) -> Self {
        Self::new(
            position,
            player_id,
            Decimal::ZERO,
            PositionStatus::DidNotPlay,
            None,
        )
    }

    pub fn pending(position: Position, player_id: Option<PlayerId>) -> Self {
        Self::new(position, player_id, Decimal::ZERO, PositionStatus::Pending, None)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.player_id
    }

    pub fn points(&self) -> Decimal {
        self.points
    }

    pub fn status(&self) -> PositionStatus {
        self.status
    }

    pub fn detail(&self) -> Option<StatLine> {
        self.detail
    }

    pub fn touchdowns(&self) -> u32 {
        self.detail.map(|d| d.touchdowns).unwrap_or(0)
    }

    pub fn turnovers(&self) -> u32 {
        self.detail.map(|d| d.turnovers).unwrap_or(0)
    }
}

/// One participant's aggregated score for one round.
///
/// Built only through [`aggregate`]; a stat correction produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterScore {
    participant_id: ParticipantId,
    round: Round,
    position_scores: Vec<PositionScore>,
    total: Decimal,
    total_touchdowns: u32,
    total_turnovers: u32,
    highest_position_score: Decimal,
    second_highest_position_score: Decimal,
    complete: bool,
}

impl RosterScore {
    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn position_scores(&self) -> &[PositionScore] {
        &self.position_scores
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn total_touchdowns(&self) -> u32 {
        self.total_touchdowns
    }

    pub fn total_turnovers(&self) -> u32 {
        self.total_turnovers
    }

    pub fn highest_position_score(&self) -> Decimal {
        self.highest_position_score
    }

    pub fn second_highest_position_score(&self) -> Decimal {
        self.second_highest_position_score
    }

    /// True when no slot is still pending.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Combine position scores into a round total with derived metrics.
///
/// The total is rounded once, after summing. Highest and second-highest
/// look at points only (a BYE slot's 0 can rank); with fewer than two
/// slots the missing ranks are 0. Touchdown and turnover counts saturate;
/// a points total outside `Decimal` range is an `InvalidInput` error.
pub fn aggregate(
    participant_id: ParticipantId,
    round: Round,
    position_scores: &[PositionScore],
) -> Result<RosterScore> {
    let total = round_points(checked_sum(
        position_scores.iter().map(PositionScore::points),
        "roster total",
    )?);

    let mut ranked: Vec<Decimal> = position_scores.iter().map(PositionScore::points).collect();
    ranked.sort_unstable_by(|a, b| b.cmp(a));

    Ok(RosterScore {
        participant_id,
        round,
        position_scores: position_scores.to_vec(),
        total,
        total_touchdowns: position_scores
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.touchdowns())),
        total_turnovers: position_scores
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.turnovers())),
        highest_position_score: ranked.first().copied().unwrap_or(Decimal::ZERO),
        second_highest_position_score: ranked.get(1).copied().unwrap_or(Decimal::ZERO),
        complete: position_scores.iter().all(|s| s.status().is_resolved()),
    })
}
