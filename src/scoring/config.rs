//! League scoring configuration: rates, flat values, bonuses and tier tables.
//!
//! A configuration is built once (preset, struct literal, or loaded from
//! JSON), validated against the positions a league uses, and then shared
//! read-only by every evaluation. Reconfiguration publishes a new value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::rate::Rate;
use super::tiers::{Tier, TieredTable};
use crate::error::{Result, ScoringError};
use crate::types::Position;


/// Environment variable naming a configuration file to load.
pub const CONFIG_ENV_VAR: &str = "FFL_SCORING_CONFIG";

fn pts(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Points-per-reception variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceptionScoring {
    Standard,
    HalfPpr,
    FullPpr,
    Custom(Decimal),
}

impl ReceptionScoring {
    pub fn points(&self) -> Decimal {
        match self {
            ReceptionScoring::Standard => Decimal::ZERO,
            ReceptionScoring::HalfPpr => Decimal::new(5, 1),
            ReceptionScoring::FullPpr => Decimal::ONE,
            ReceptionScoring::Custom(value) => *value,
        }
    }

    /// Classify a raw per-reception value.
    pub fn from_points(points: Decimal) -> Self {
        if points.is_zero() {
            ReceptionScoring::Standard
        } else if points == Decimal::new(5, 1) {
            ReceptionScoring::HalfPpr
        } else if points == Decimal::ONE {
            ReceptionScoring::FullPpr
        } else {
            ReceptionScoring::Custom(points)
        }
    }
}

impl fmt::Display for ReceptionScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceptionScoring::Standard => write!(f, "Standard"),
            ReceptionScoring::HalfPpr => write!(f, "Half PPR"),
            ReceptionScoring::FullPpr => write!(f, "Full PPR"),
            ReceptionScoring::Custom(value) => write!(f, "Custom ({} per reception)", value),
        }
    }
}

/// Yardage stat a milestone bonus is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStat {
    PassingYards,
    RushingYards,
    ReceivingYards,
}

/// Flat bonus awarded once when a yardage total reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneBonus {
    pub stat: MilestoneStat,
    pub threshold: i32,
    pub points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassingRules {
    pub yards: Rate,
    pub touchdown: Decimal,
    /// Pre-negated: a thrown interception costs points
    pub interception: Decimal,
    pub two_point_conversion: Decimal,
}

impl Default for PassingRules {
    fn default() -> Self {
        Self {
            yards: Rate::units_per_point(pts(25)),
            touchdown: pts(4),
            interception: pts(-2),
            two_point_conversion: pts(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RushingRules {
    pub yards: Rate,
    pub touchdown: Decimal,
    pub two_point_conversion: Decimal,
}

impl Default for RushingRules {
    fn default() -> Self {
        Self {
            yards: Rate::units_per_point(pts(10)),
            touchdown: pts(6),
            two_point_conversion: pts(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivingRules {
    pub yards: Rate,
    pub touchdown: Decimal,
    pub reception: Decimal,
    pub two_point_conversion: Decimal,
}

impl Default for ReceivingRules {
    fn default() -> Self {
        Self {
            yards: Rate::units_per_point(pts(10)),
            touchdown: pts(6),
            reception: Decimal::ONE,
            two_point_conversion: pts(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickingRules {
    /// Made field goal distance -> points
    pub field_goal_distance: Option<TieredTable>,
    pub extra_point: Decimal,
    /// Applied per missed or blocked field goal
    pub missed_field_goal: Decimal,
    pub missed_extra_point: Decimal,
}

impl KickingRules {
    pub fn default_distance_table() -> TieredTable {
        TieredTable::new(vec![
            Tier::up_to(19, pts(3)),
            Tier::up_to(29, pts(3)),
            Tier::up_to(39, pts(3)),
            Tier::up_to(49, pts(4)),
            Tier::open_ended(pts(5)),
        ])
    }
}

impl Default for KickingRules {
    fn default() -> Self {
        Self {
            field_goal_distance: Some(Self::default_distance_table()),
            extra_point: Decimal::ONE,
            missed_field_goal: Decimal::ZERO,
            missed_extra_point: pts(-1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseRules {
    pub sack: Decimal,
    pub interception: Decimal,
    pub fumble_recovery: Decimal,
    pub safety: Decimal,
    pub touchdown: Decimal,
    pub blocked_kick: Decimal,
    pub return_touchdown: Decimal,
    pub points_allowed: Option<TieredTable>,
    pub yards_allowed: Option<TieredTable>,
}

impl DefenseRules {
    pub fn default_points_allowed_table() -> TieredTable {
        TieredTable::new(vec![
            Tier::up_to(0, pts(10)),
            Tier::up_to(6, pts(7)),
            Tier::up_to(13, pts(4)),
            Tier::up_to(20, pts(1)),
            Tier::up_to(27, pts(0)),
            Tier::up_to(34, pts(-1)),
            Tier::open_ended(pts(-4)),
        ])
    }

    pub fn default_yards_allowed_table() -> TieredTable {
        TieredTable::new(vec![
            Tier::up_to(99, pts(5)),
            Tier::up_to(199, pts(3)),
            Tier::up_to(299, pts(2)),
            Tier::up_to(399, pts(0)),
            Tier::up_to(449, pts(-1)),
            Tier::up_to(499, pts(-3)),
            Tier::open_ended(pts(-5)),
        ])
    }
}

impl Default for DefenseRules {
    fn default() -> Self {
        Self {
            sack: Decimal::ONE,
            interception: pts(2),
            fumble_recovery: pts(2),
            safety: pts(2),
            touchdown: pts(6),
            blocked_kick: pts(2),
            return_touchdown: pts(6),
            points_allowed: Some(Self::default_points_allowed_table()),
            yards_allowed: Some(Self::default_yards_allowed_table()),
        }
    }
}

/// Complete rule set for one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfiguration {
    pub passing: PassingRules,
    pub rushing: RushingRules,
    pub receiving: ReceivingRules,
    pub fumble_lost: Decimal,
    /// Per offensive touchdown of 40+ yards
    pub long_touchdown: Decimal,
    pub bonuses: Vec<MilestoneBonus>,
    pub kicking: KickingRules,
    pub defense: DefenseRules,
}

impl Default for ScoringConfiguration {
    fn default() -> Self {
        Self::full_ppr()
    }
}

impl ScoringConfiguration {
    pub fn full_ppr() -> Self {
        Self {
            passing: PassingRules::default(),
            rushing: RushingRules::default(),
            receiving: ReceivingRules::default(),
            fumble_lost: pts(-2),
            long_touchdown: pts(2),
            bonuses: vec![
                MilestoneBonus {
                    stat: MilestoneStat::PassingYards,
                    threshold: 300,
                    points: pts(3),
                },
                MilestoneBonus {
                    stat: MilestoneStat::RushingYards,
                    threshold: 100,
                    points: pts(3),
                },
                MilestoneBonus {
                    stat: MilestoneStat::ReceivingYards,
                    threshold: 100,
                    points: pts(3),
                },
            ],
            kicking: KickingRules::default(),
            defense: DefenseRules::default(),
        }
    }

    pub fn half_ppr() -> Self {
        Self::full_ppr().with_reception_scoring(ReceptionScoring::HalfPpr)
    }

    pub fn standard() -> Self {
        Self::full_ppr().with_reception_scoring(ReceptionScoring::Standard)
    }

    pub fn with_reception_scoring(mut self, scoring: ReceptionScoring) -> Self {
        self.receiving.reception = scoring.points();
        self
    }

    pub fn reception_scoring(&self) -> ReceptionScoring {
        ReceptionScoring::from_points(self.receiving.reception)
    }

    /// Check this configuration against the positions a league fills.
    ///
    /// Returns advisory precision warnings on success; every hard problem is
    /// collected into a single [`ScoringError::Configuration`].
    pub fn validate(&self, positions_in_use: &[Position]) -> Result<Vec<PrecisionWarning>> {
        let mut problems = Vec::new();
        let mut warnings = Vec::new();

        for (field, rate) in [
            ("passing.yards", self.passing.yards),
            ("rushing.yards", self.rushing.yards),
            ("receiving.yards", self.receiving.yards),
        ] {
            if rate.per <= Decimal::ZERO {
                problems.push(format!(
                    "{}: rate denominator must be positive, got {}",
                    field, rate.per
                ));
            } else if !rate.is_exact() {
                warnings.push(PrecisionWarning {
                    field: field.to_string(),
                    rate,
                });
            }
        }

        let needs_kicking = positions_in_use.iter().any(Position::needs_kicking_table);
        let needs_defense = positions_in_use.iter().any(Position::needs_defense_tables);

        check_table(
            &mut problems,
            "kicking.field_goal_distance",
            self.kicking.field_goal_distance.as_ref(),
            needs_kicking,
        );
        check_table(
            &mut problems,
            "defense.points_allowed",
            self.defense.points_allowed.as_ref(),
            needs_defense,
        );
        check_table(
            &mut problems,
            "defense.yards_allowed",
            self.defense.yards_allowed.as_ref(),
            needs_defense,
        );

        if problems.is_empty() {
            debug!(
                warnings = warnings.len(),
                reception = %self.reception_scoring(),
                "scoring configuration validated"
            );
            Ok(warnings)
        } else {
            Err(ScoringError::Configuration { problems })
        }
    }
}

fn check_table(
    problems: &mut Vec<String>,
    name: &str,
    table: Option<&TieredTable>,
    required: bool,
) {
    match table {
        None if required => problems.push(format!("{}: required by a position in use", name)),
        None => {}
        Some(table) if table.is_empty() && !required => {}
        Some(table) => problems.extend(table.problems(name)),
    }
}

/// A rate whose per-unit value cannot be written as a finite decimal.
///
/// Scoring still multiplies before dividing, so whole "per" blocks are
/// exact; partial blocks are rounded at the 28th significant digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionWarning {
    pub field: String,
    pub rate: Rate,
}

impl fmt::Display for PrecisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} has no exact decimal per-unit value; partial units are rounded",
            self.field, self.rate
        )
    }
}

/// Path: <config_dir>/ffl-scoring/scoring.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("ffl-scoring").join("scoring.json")
}

/// Read a configuration from a JSON file. Omitted fields take defaults.
pub fn load_from_path(path: &Path) -> Result<ScoringConfiguration> {
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "loaded scoring configuration");
    Ok(config)
}

/// Resolve the active configuration.
///
/// Order: explicit path, then `FFL_SCORING_CONFIG`, then the default path if
/// that file exists, otherwise the built-in full PPR rules.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ScoringConfiguration> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_from_path(Path::new(&env_path));
    }
    let path = default_config_path();
    if path.exists() {
        return load_from_path(&path);
    }
    debug!("no scoring configuration file found, using built-in rules");
    Ok(ScoringConfiguration::default())
}

/// Write a configuration as pretty JSON, creating parent directories.
pub fn write_to_path(config: &ScoringConfiguration, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
