//! Tiered threshold tables for kick distance and defensive allowed-stats.
//!
//! A table is an ordered sequence of inclusive upper bounds. Lookup scans
//! in ascending order and the first tier whose bound is `>= value` wins.
//! If no bound qualifies, the highest tier's points are used as a ceiling.
//! An open-ended tier (`up_to: None`) sorts last and matches everything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[cfg(test)]
mod tests;

/// One row of a tiered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Inclusive upper bound; `None` for an open-ended top tier ("50+").
    pub up_to: Option<i32>,
    pub points: Decimal,
}

impl Tier {
    pub fn up_to(bound: i32, points: Decimal) -> Self {
        Self {
            up_to: Some(bound),
            points,
        }
    }

    pub fn open_ended(points: Decimal) -> Self {
        Self { up_to: None, points }
    }

    fn matches(&self, value: i32) -> bool {
        match self.up_to {
            Some(bound) => value <= bound,
            None => true,
        }
    }
}

fn tier_order(a: &Tier, b: &Tier) -> Ordering {
    match (a.up_to, b.up_to) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending threshold -> points table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TieredTable {
    tiers: Vec<Tier>,
}

impl TieredTable {
    /// Build a table; tiers are sorted ascending regardless of input order.
    pub fn new(mut tiers: Vec<Tier>) -> Self {
        tiers.sort_by(tier_order);
        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Points for `value`: first ascending match, else the ceiling tier.
    pub fn lookup(&self, value: i32) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.matches(value))
            .or_else(|| self.tiers.last())
            .map(|tier| tier.points)
            .unwrap_or(Decimal::ZERO)
    }

    /// Structural problems, each prefixed with `name`.
    pub fn problems(&self, name: &str) -> Vec<String> {
        let mut problems = Vec::new();

        if self.tiers.is_empty() {
            problems.push(format!("{}: table has no tiers", name));
            return problems;
        }

        let open_ended = self.tiers.iter().filter(|t| t.up_to.is_none()).count();
        if open_ended > 1 {
            problems.push(format!(
                "{}: {} open-ended tiers, at most one allowed",
                name, open_ended
            ));
        }

        for pair in self.tiers.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].up_to, pair[1].up_to) {
                if a == b {
                    problems.push(format!("{}: duplicate tier bound {}", name, a));
                }
            }
        }

        problems
    }
}

impl From<Vec<Tier>> for TieredTable {
    fn from(tiers: Vec<Tier>) -> Self {
        Self::new(tiers)
    }
}

impl From<TieredTable> for Vec<Tier> {
    fn from(table: TieredTable) -> Self {
        table.tiers
    }
}
