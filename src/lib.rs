//! Fantasy Football Playoff Scoring Library
//!
//! Turns per-game NFL statistics into fantasy points under a configurable
//! rule set, aggregates them into per-round roster totals, and breaks ties
//! between equal totals through an ordered cascade of comparisons.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Points are `rust_decimal::Decimal`, rounded half-up to 2 places
//! - **Scoring Variants**: Standard, half PPR, full PPR or a custom per-reception value
//! - **Tiered Tables**: Kick distance, points allowed and yards allowed buckets
//! - **Milestone Bonuses**: Threshold bonuses for passing, rushing and receiving yards
//! - **Parallel Round Scoring**: Every participant in a round scored across the rayon pool
//! - **Tiebreak Cascade**: Configurable ordered methods ending in co-winners
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_scoring::scoring::{evaluate, ScoringConfiguration, StatRecord};
//! use ffl_scoring::Position;
//! use rust_decimal::Decimal;
//!
//! # fn example() -> ffl_scoring::Result<()> {
//! let record = StatRecord {
//!     receiving_yards: Some(80),
//!     receiving_touchdowns: Some(1),
//!     receptions: Some(6),
//!     ..StatRecord::for_position(Position::WR)
//! };
//!
//! let points = evaluate(&record, &ScoringConfiguration::full_ppr())?;
//! assert_eq!(points, Decimal::new(20, 0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a scoring configuration without passing `--config`:
//! ```bash
//! export FFL_SCORING_CONFIG=~/leagues/playoffs.json
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod scoring;
pub mod tiebreak;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ScoringError};
pub use scoring::{aggregate, evaluate, RosterScore, ScoringConfiguration, StatRecord};
pub use scoring::config::CONFIG_ENV_VAR;
pub use tiebreak::{TiebreakConfiguration, TiebreakOutcome, TiebreakResolver};
pub use types::{ParticipantId, PlayerId, Position, Round};
