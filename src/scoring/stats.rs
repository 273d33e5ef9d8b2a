//! Raw per-period stat records supplied by the stats provider.

use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, Position};

/// Outcome of a single field goal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KickResult {
    Made,
    Missed,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGoalAttempt {
    /// Kick distance in yards
    pub distance: i32,
    pub result: KickResult,
}

impl FieldGoalAttempt {
    pub fn made(distance: i32) -> Self {
        Self {
            distance,
            result: KickResult::Made,
        }
    }

    pub fn missed(distance: i32) -> Self {
        Self {
            distance,
            result: KickResult::Missed,
        }
    }

    pub fn is_made(&self) -> bool {
        self.result == KickResult::Made
    }
}

/// One player's (or team defense's) raw counting stats for one round.
///
/// Every stat is optional: `None` means "not tracked for this position",
/// `Some(0)` means "tracked, no occurrences". Scoring treats both as zero,
/// but position validation only looks at fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRecord {
    pub player_id: Option<PlayerId>,
    pub position: Option<Position>,

    // Passing
    pub passing_yards: Option<i32>,
    pub passing_touchdowns: Option<u32>,
    pub interceptions_thrown: Option<u32>,
    pub passing_two_point_conversions: Option<u32>,

    // Rushing
    pub rushing_yards: Option<i32>,
    pub rushing_touchdowns: Option<u32>,
    pub rushing_two_point_conversions: Option<u32>,

    // Receiving
    pub receiving_yards: Option<i32>,
    pub receiving_touchdowns: Option<u32>,
    pub receptions: Option<u32>,
    pub receiving_two_point_conversions: Option<u32>,

    // Ball security and big plays
    pub fumbles_lost: Option<u32>,
    /// Offensive touchdowns of 40+ yards
    pub long_touchdowns: Option<u32>,

    // Kicking
    pub field_goal_attempts: Option<Vec<FieldGoalAttempt>>,
    pub extra_points_made: Option<u32>,
    pub extra_points_missed: Option<u32>,

    // Team defense / special teams
    pub sacks: Option<u32>,
    pub defensive_interceptions: Option<u32>,
    pub fumble_recoveries: Option<u32>,
    pub safeties: Option<u32>,
    pub blocked_kicks: Option<u32>,
    pub defensive_touchdowns: Option<u32>,
    pub return_touchdowns: Option<u32>,
    pub points_allowed: Option<i32>,
    pub yards_allowed: Option<i32>,
}

/// Absent counts contribute zero.
pub(crate) fn count(value: Option<u32>) -> u32 {
    value.unwrap_or(0)
}

impl StatRecord {
    pub fn for_position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Offensive, defensive and return touchdowns combined. Saturates.
    pub fn total_touchdowns(&self) -> u32 {
        [
            self.passing_touchdowns,
            self.rushing_touchdowns,
            self.receiving_touchdowns,
            self.defensive_touchdowns,
            self.return_touchdowns,
        ]
        .into_iter()
        .fold(0u32, |acc, n| acc.saturating_add(count(n)))
    }

    /// Interceptions thrown plus fumbles lost. Saturates.
    pub fn total_turnovers(&self) -> u32 {
        count(self.interceptions_thrown).saturating_add(count(self.fumbles_lost))
    }

    pub fn has_kicking_stats(&self) -> bool {
        self.field_goal_attempts
            .as_ref()
            .is_some_and(|attempts| !attempts.is_empty())
            || self.extra_points_made.is_some()
            || self.extra_points_missed.is_some()
    }

    pub fn has_team_defense_stats(&self) -> bool {
        self.sacks.is_some()
            || self.defensive_interceptions.is_some()
            || self.fumble_recoveries.is_some()
            || self.safeties.is_some()
            || self.blocked_kicks.is_some()
            || self.points_allowed.is_some()
            || self.yards_allowed.is_some()
    }

    /// Made field goal distances, in attempt order.
    pub fn made_field_goals(&self) -> impl Iterator<Item = i32> + '_ {
        self.field_goal_attempts
            .iter()
            .flatten()
            .filter(|attempt| attempt.is_made())
            .map(|attempt| attempt.distance)
    }

    pub fn failed_field_goals(&self) -> usize {
        self.field_goal_attempts
            .iter()
            .flatten()
            .filter(|attempt| !attempt.is_made())
            .count()
    }
}
