//! Unit tests for tiered table lookup

use super::*;

fn pts(v: i64) -> Decimal {
    Decimal::from(v)
}

fn kicker_table() -> TieredTable {
    TieredTable::new(vec![
        Tier::up_to(19, pts(3)),
        Tier::up_to(29, pts(3)),
        Tier::up_to(39, pts(3)),
        Tier::up_to(49, pts(4)),
        Tier::open_ended(pts(5)),
    ])
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_bound_is_inclusive() {
        let table = kicker_table();
        assert_eq!(table.lookup(39), pts(3));
        assert_eq!(table.lookup(40), pts(4));
        assert_eq!(table.lookup(49), pts(4));
        assert_eq!(table.lookup(50), pts(5));
    }

    #[test]
    fn test_open_ended_tier_catches_everything_above() {
        let table = kicker_table();
        assert_eq!(table.lookup(66), pts(5));
        assert_eq!(table.lookup(i32::MAX), pts(5));
    }

    #[test]
    fn test_ceiling_fallback_without_open_tier() {
        // Legacy sentinel-style table: nothing matches above 999
        let table = TieredTable::new(vec![
            Tier::up_to(0, pts(10)),
            Tier::up_to(6, pts(7)),
            Tier::up_to(999, pts(-4)),
        ]);
        assert_eq!(table.lookup(35), pts(-4));
        assert_eq!(table.lookup(1000), pts(-4));
    }

    #[test]
    fn test_unsorted_input_is_scanned_ascending() {
        let table = TieredTable::new(vec![
            Tier::open_ended(pts(-5)),
            Tier::up_to(299, pts(2)),
            Tier::up_to(99, pts(5)),
            Tier::up_to(199, pts(3)),
        ]);
        let bounds: Vec<Option<i32>> = table.tiers().iter().map(|t| t.up_to).collect();
        assert_eq!(bounds, vec![Some(99), Some(199), Some(299), None]);
        assert_eq!(table.lookup(250), pts(2));
        assert_eq!(table.lookup(100), pts(3));
    }

    #[test]
    fn test_values_below_first_bound_use_first_tier() {
        let table = kicker_table();
        assert_eq!(table.lookup(0), pts(3));
        assert_eq!(table.lookup(-3), pts(3));
    }

    #[test]
    fn test_empty_table_yields_zero() {
        let table = TieredTable::new(vec![]);
        assert_eq!(table.lookup(10), Decimal::ZERO);
        assert!(table.is_empty());
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_well_formed_table_has_no_problems() {
        assert!(kicker_table().problems("kicking").is_empty());
    }

    #[test]
    fn test_empty_table_problem() {
        let problems = TieredTable::new(vec![]).problems("defense.points_allowed");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("defense.points_allowed"));
    }

    #[test]
    fn test_duplicate_and_multiple_open_tiers() {
        let table = TieredTable::new(vec![
            Tier::up_to(10, pts(1)),
            Tier::up_to(10, pts(2)),
            Tier::open_ended(pts(3)),
            Tier::open_ended(pts(4)),
        ]);
        let problems = table.problems("t");
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("duplicate tier bound 10")));
        assert!(problems.iter().any(|p| p.contains("open-ended")));
    }

    #[test]
    fn test_serde_sorts_on_load() {
        let json = r#"[{"up_to": null, "points": "5"}, {"up_to": 49, "points": "4"}]"#;
        let table: TieredTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.tiers()[0].up_to, Some(49));
        assert_eq!(table.lookup(52), pts(5));
    }
}
