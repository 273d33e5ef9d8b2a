//! Fantasy roster positions.

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football roster positions.
///
/// # Position Types
///
/// - **Individual positions**: QB, RB, WR, TE, K, D/ST
/// - **Flexible positions**: FLEX (RB/WR/TE), SUPERFLEX (QB/RB/WR/TE)
///
/// # Examples
///
/// ```rust
/// use ffl_scoring::Position;
///
/// let def: Position = "D/ST".parse().unwrap();
/// assert_eq!(def, Position::DEF);
/// assert_eq!(def.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FLEX,
    SUPERFLEX,
}

impl Position {
    pub const ALL: [Position; 8] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
        Position::FLEX,
        Position::SUPERFLEX,
    ];

    /// Kickers score made field goals through the distance table.
    pub fn needs_kicking_table(&self) -> bool {
        matches!(self, Position::K)
    }

    /// Team defenses score points/yards allowed through tiered tables.
    pub fn needs_defense_tables(&self) -> bool {
        matches!(self, Position::DEF)
    }

    /// Whether a record for this slot may carry kicking stats.
    pub fn accepts_kicking_stats(&self) -> bool {
        matches!(self, Position::K)
    }

    /// Whether a record for this slot may carry team-defense stats.
    pub fn accepts_team_defense_stats(&self) -> bool {
        matches!(self, Position::DEF)
    }

    /// Whether a player listed at `player` may occupy this roster slot.
    pub fn can_be_filled_by(&self, player: Position) -> bool {
        use Position::*;

        match self {
            FLEX => matches!(player, RB | WR | TE | FLEX),
            SUPERFLEX => matches!(player, QB | RB | WR | TE | FLEX | SUPERFLEX),
            slot => *slot == player,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "D/ST",
            Position::FLEX => "FLEX",
            Position::SUPERFLEX => "SUPERFLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "FLEX" => Ok(Position::FLEX),
            "SUPERFLEX" | "SFLEX" | "OP" => Ok(Position::SUPERFLEX),
            _ => Err(ScoringError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
