//! Tiebreak resolution between two participants with equal round totals.

pub mod config;
pub mod outcome;
pub mod resolver;

pub use config::{Direction, TiebreakConfiguration, TiebreakMethod};
pub use outcome::{TiebreakOutcome, TiebreakResolution, TiebreakValue};
pub use resolver::{Contestant, TiebreakContext, TiebreakResolver};
