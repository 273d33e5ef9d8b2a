//! Exact per-yard scoring rates.
//!
//! Leagues express yardage scoring either as "0.04 points per yard" or as
//! "1 point per 25 yards". Both are stored as the rational `points / per`
//! so that neither form is pre-divided into a lossy float.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ScoringError};

/// Rational scoring rate: `points` awarded for every `per` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub points: Decimal,
    pub per: Decimal,
}

impl Rate {
    /// `points` for every single unit (e.g. 0.1 per rushing yard).
    pub fn per_unit(points: Decimal) -> Self {
        Self {
            points,
            per: Decimal::ONE,
        }
    }

    /// One point for every `units` units (e.g. 1 point per 25 passing yards).
    pub fn units_per_point(units: Decimal) -> Self {
        Self {
            points: Decimal::ONE,
            per: units,
        }
    }

    /// Rate that never awards anything.
    pub fn zero() -> Self {
        Self::per_unit(Decimal::ZERO)
    }

    /// Points earned for `units`. Multiplies before the single division so a
    /// whole number of "per" blocks always comes out exact.
    pub fn apply(&self, units: i64) -> Result<Decimal> {
        if self.per <= Decimal::ZERO {
            return Err(ScoringError::configuration(format!(
                "rate denominator must be positive, got {}",
                self.per
            )));
        }
        Decimal::from(units)
            .checked_mul(self.points)
            .and_then(|scaled| scaled.checked_div(self.per))
            .ok_or_else(|| {
                ScoringError::invalid_input(format!("{} units overflow rate {}", units, self))
            })
    }

    /// Points per single unit, if the denominator is usable.
    pub fn quotient(&self) -> Option<Decimal> {
        if self.per <= Decimal::ZERO {
            return None;
        }
        self.points.checked_div(self.per)
    }

    /// Whether `points / per` has a terminating decimal expansion that fits
    /// the 28-digit mantissa.
    pub fn is_exact(&self) -> bool {
        match self.quotient() {
            Some(q) => q.checked_mul(self.per) == Some(self.points),
            None => false,
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.per == Decimal::ONE {
            write!(f, "{} per unit", self.points)
        } else {
            write!(f, "{} per {} units", self.points, self.per)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_per_point_is_exact() {
        let passing = Rate::units_per_point(Decimal::from(25));
        assert_eq!(passing.apply(250).unwrap(), Decimal::from(10));
        assert_eq!(passing.apply(260).unwrap(), Decimal::new(104, 1));
        assert_eq!(passing.quotient(), Some(Decimal::new(4, 2)));
        assert!(passing.is_exact());
    }

    #[test]
    fn test_per_unit_matches_units_per_point() {
        let a = Rate::per_unit(Decimal::new(1, 1));
        let b = Rate::units_per_point(Decimal::from(10));
        for yards in [-7, 0, 1, 9, 10, 80, 137] {
            assert_eq!(a.apply(yards).unwrap(), b.apply(yards).unwrap());
        }
    }

    #[test]
    fn test_non_terminating_rate_is_flagged() {
        let thirds = Rate::units_per_point(Decimal::from(3));
        assert!(!thirds.is_exact());
        // Whole multiples still come out exact because we multiply first
        assert_eq!(thirds.apply(9).unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_zero_denominator_is_configuration_error() {
        let broken = Rate::units_per_point(Decimal::ZERO);
        assert!(broken.quotient().is_none());
        assert!(!broken.is_exact());
        assert!(broken.apply(10).unwrap_err().is_configuration());
    }

    #[test]
    fn test_negative_yards_are_not_clamped() {
        let rushing = Rate::units_per_point(Decimal::from(10));
        assert_eq!(rushing.apply(-5).unwrap(), Decimal::new(-5, 1));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::units_per_point(Decimal::from(25)).to_string(), "1 per 25 units");
        assert_eq!(Rate::per_unit(Decimal::new(5, 1)).to_string(), "0.5 per unit");
    }
}
