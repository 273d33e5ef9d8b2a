//! Scoring every participant in a round.
//!
//! Participants are independent, so evaluation fans out across the rayon
//! pool. Results come back in submission order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::ScoringConfiguration;
use super::roster::{aggregate, PositionScore, PositionStatus, RosterScore};
use super::stats::StatRecord;
use crate::error::{Result, ScoringError};
use crate::types::{ParticipantId, PlayerId, Position, Round};

/// One filled roster slot as delivered by the orchestrating layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub position: Position,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    pub status: PositionStatus,
    #[serde(default)]
    pub stats: Option<StatRecord>,
}

impl RosterEntry {
    /// Score this slot. ACTIVE needs stats; PENDING uses partial stats if any.
    ///
    /// A record without a position takes the slot's; a record listed at a
    /// position the slot cannot hold is rejected.
    pub fn score(&self, config: &ScoringConfiguration) -> Result<PositionScore> {
        match (self.status, &self.stats) {
            (PositionStatus::Active, Some(stats)) | (PositionStatus::Pending, Some(stats)) => {
                let mut record = stats.clone();
                record.player_id = record.player_id.or(self.player_id);
                match record.position {
                    None => record.position = Some(self.position),
                    Some(listed) if !self.position.can_be_filled_by(listed) => {
                        return Err(ScoringError::invalid_input(format!(
                            "{} record cannot fill a {} slot",
                            listed, self.position
                        )));
                    }
                    Some(_) => {}
                }
                PositionScore::from_record(self.position, &record, config, self.status)
            }
            (PositionStatus::Active, None) => Err(ScoringError::invalid_input(format!(
                "{} slot is ACTIVE but has no stat record",
                self.position
            ))),
            (PositionStatus::Pending, None) => {
                Ok(PositionScore::pending(self.position, self.player_id))
            }
            (PositionStatus::Bye, _) => Ok(PositionScore::bye(self.position, self.player_id)),
            (PositionStatus::DidNotPlay, _) => {
                Ok(PositionScore::did_not_play(self.position, self.player_id))
            }
        }
    }
}

/// A participant's lineup for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSubmission {
    pub participant_id: ParticipantId,
    pub entries: Vec<RosterEntry>,
}

impl RosterSubmission {
    pub fn score(&self, round: Round, config: &ScoringConfiguration) -> Result<RosterScore> {
        let position_scores = self
            .entries
            .iter()
            .map(|entry| entry.score(config))
            .collect::<Result<Vec<_>>>()?;
        aggregate(self.participant_id, round, &position_scores)
    }
}

/// Score all submissions for `round` in parallel.
///
/// Returns the first error in submission order if any participant fails.
pub fn score_round(
    round: Round,
    submissions: &[RosterSubmission],
    config: &ScoringConfiguration,
) -> Result<Vec<RosterScore>> {
    debug!(%round, participants = submissions.len(), "scoring round");

    let results: Vec<Result<RosterScore>> = submissions
        .par_iter()
        .map(|submission| submission.score(round, config))
        .collect();

    results.into_iter().collect()
}
