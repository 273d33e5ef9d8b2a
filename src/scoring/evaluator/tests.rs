//! Unit tests for scoring evaluation

use super::*;
use crate::scoring::config::{MilestoneBonus, ReceptionScoring};
use crate::scoring::stats::{FieldGoalAttempt, KickResult};
use crate::types::Position;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_standard_kicker_make_and_miss() {
        let record = StatRecord {
            field_goal_attempts: Some(vec![
                FieldGoalAttempt::made(45),
                FieldGoalAttempt::missed(30),
            ]),
            ..StatRecord::for_position(Position::K)
        };
        let points = evaluate(&record, &ScoringConfiguration::standard()).unwrap();
        assert_eq!(points, dec("4.0"));
    }

    #[test]
    fn test_full_ppr_receiver() {
        let record = StatRecord {
            receiving_yards: Some(80),
            receiving_touchdowns: Some(1),
            receptions: Some(6),
            fumbles_lost: Some(0),
            ..StatRecord::for_position(Position::WR)
        };
        let points = evaluate(&record, &ScoringConfiguration::full_ppr()).unwrap();
        assert_eq!(points, dec("20.0"));
    }

    #[test]
    fn test_defense_shutout_with_yards_allowed() {
        let record = StatRecord {
            points_allowed: Some(0),
            yards_allowed: Some(250),
            ..StatRecord::for_position(Position::DEF)
        };
        let breakdown = evaluate_breakdown(&record, &ScoringConfiguration::default()).unwrap();
        assert_eq!(breakdown.defense, dec("12.0"));
        assert_eq!(breakdown.total().unwrap(), dec("12.0"));
    }

    #[test]
    fn test_quarterback_with_milestone() {
        let record = StatRecord {
            passing_yards: Some(300),
            passing_touchdowns: Some(2),
            interceptions_thrown: Some(1),
            rushing_yards: Some(20),
            ..StatRecord::for_position(Position::QB)
        };
        let breakdown = evaluate_breakdown(&record, &ScoringConfiguration::default()).unwrap();
        // 300/25 + 2*4 - 2 = 18
        assert_eq!(breakdown.passing, dec("18"));
        assert_eq!(breakdown.rushing, dec("2"));
        assert_eq!(breakdown.bonuses, dec("3"));
        assert_eq!(breakdown.total().unwrap(), dec("23"));
    }

    #[test]
    fn test_half_ppr_running_back() {
        let record = StatRecord {
            rushing_yards: Some(100),
            rushing_touchdowns: Some(1),
            receptions: Some(4),
            receiving_yards: Some(30),
            fumbles_lost: Some(1),
            ..StatRecord::for_position(Position::RB)
        };
        let points = evaluate(&record, &ScoringConfiguration::half_ppr()).unwrap();
        // 10 + 6 + 2 + 3 - 2 + 3 (100-yard bonus)
        assert_eq!(points, dec("22"));
    }

    #[test]
    fn test_negative_totals_are_not_clamped() {
        let record = StatRecord {
            passing_yards: Some(-4),
            interceptions_thrown: Some(3),
            fumbles_lost: Some(1),
            ..StatRecord::for_position(Position::QB)
        };
        let points = evaluate(&record, &ScoringConfiguration::default()).unwrap();
        assert_eq!(points, dec("-8.16"));
    }

    #[test]
    fn test_extra_points_and_missed_penalty() {
        let record = StatRecord {
            extra_points_made: Some(2),
            extra_points_missed: Some(1),
            ..StatRecord::for_position(Position::K)
        };
        let breakdown = evaluate_breakdown(&record, &ScoringConfiguration::default()).unwrap();
        assert_eq!(breakdown.kicking, dec("1"));
    }

    #[test]
    fn test_blocked_kick_scores_like_a_miss() {
        let mut config = ScoringConfiguration::default();
        config.kicking.missed_field_goal = dec("-1");
        let record = StatRecord {
            field_goal_attempts: Some(vec![
                FieldGoalAttempt {
                    distance: 41,
                    result: KickResult::Blocked,
                },
                FieldGoalAttempt::made(51),
            ]),
            ..StatRecord::for_position(Position::K)
        };
        assert_eq!(evaluate(&record, &config).unwrap(), dec("4"));
    }

    #[test]
    fn test_long_touchdown_bonus_in_misc() {
        let record = StatRecord {
            receiving_touchdowns: Some(1),
            long_touchdowns: Some(1),
            ..StatRecord::for_position(Position::TE)
        };
        let breakdown = evaluate_breakdown(&record, &ScoringConfiguration::default()).unwrap();
        assert_eq!(breakdown.misc, dec("2"));
        assert_eq!(breakdown.total().unwrap(), dec("8"));
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;

    #[test]
    fn test_empty_record_scores_zero() {
        for position in Position::ALL {
            let record = StatRecord::for_position(position);
            let points = evaluate(&record, &ScoringConfiguration::default()).unwrap();
            assert_eq!(points, Decimal::ZERO, "position {}", position);
        }
    }

    #[test]
    fn test_milestones_are_separate_pairs() {
        let mut config = ScoringConfiguration::default();
        config.bonuses.push(MilestoneBonus {
            stat: MilestoneStat::PassingYards,
            threshold: 400,
            points: dec("2"),
        });

        let at = |yards| StatRecord {
            passing_yards: Some(yards),
            ..StatRecord::for_position(Position::QB)
        };
        let bonuses = |yards| evaluate_breakdown(&at(yards), &config).unwrap().bonuses;

        assert_eq!(bonuses(299), Decimal::ZERO);
        assert_eq!(bonuses(300), dec("3"));
        assert_eq!(bonuses(399), dec("3"));
        assert_eq!(bonuses(410), dec("5"));
    }

    #[test]
    fn test_custom_reception_points() {
        let config = ScoringConfiguration::standard()
            .with_reception_scoring(ReceptionScoring::Custom(dec("0.25")));
        let record = StatRecord {
            receptions: Some(10),
            ..StatRecord::for_position(Position::WR)
        };
        assert_eq!(evaluate(&record, &config).unwrap(), dec("2.5"));
    }

    #[test]
    fn test_two_point_conversions_per_category() {
        let record = StatRecord {
            passing_two_point_conversions: Some(1),
            rushing_two_point_conversions: Some(1),
            ..StatRecord::for_position(Position::QB)
        };
        let breakdown = evaluate_breakdown(&record, &ScoringConfiguration::default()).unwrap();
        assert_eq!(breakdown.passing, dec("2"));
        assert_eq!(breakdown.rushing, dec("2"));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let record = StatRecord {
            passing_yards: Some(287),
            passing_touchdowns: Some(3),
            rushing_yards: Some(-3),
            ..StatRecord::for_position(Position::QB)
        };
        let config = ScoringConfiguration::default();
        let first = evaluate(&record, &config).unwrap();
        let second = evaluate(&record, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_record_without_position_is_scored() {
        let record = StatRecord {
            sacks: Some(2),
            receptions: Some(1),
            ..StatRecord::default()
        };
        assert_eq!(
            evaluate(&record, &ScoringConfiguration::default()).unwrap(),
            dec("3")
        );
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_kicking_stats_on_receiver_are_rejected() {
        let record = StatRecord {
            receptions: Some(3),
            field_goal_attempts: Some(vec![FieldGoalAttempt::made(30)]),
            ..StatRecord::for_position(Position::WR)
        };
        match evaluate(&record, &ScoringConfiguration::default()) {
            Err(ScoringError::InvalidInput { message }) => assert!(message.contains("kicking")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_defense_stats_on_kicker_are_rejected() {
        let record = StatRecord {
            points_allowed: Some(14),
            ..StatRecord::for_position(Position::K)
        };
        assert!(matches!(
            evaluate(&record, &ScoringConfiguration::default()),
            Err(ScoringError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_missing_distance_table_is_configuration_error() {
        let mut config = ScoringConfiguration::default();
        config.kicking.field_goal_distance = None;

        let makes = StatRecord {
            field_goal_attempts: Some(vec![FieldGoalAttempt::made(33)]),
            ..StatRecord::for_position(Position::K)
        };
        assert!(evaluate(&makes, &config).unwrap_err().is_configuration());

        // A kicker with only misses never consults the table
        let misses = StatRecord {
            field_goal_attempts: Some(vec![FieldGoalAttempt::missed(33)]),
            ..StatRecord::for_position(Position::K)
        };
        assert_eq!(evaluate(&misses, &config).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_yards_allowed_table_is_configuration_error() {
        let mut config = ScoringConfiguration::default();
        config.defense.yards_allowed = None;
        let record = StatRecord {
            yards_allowed: Some(310),
            ..StatRecord::for_position(Position::DEF)
        };
        assert!(evaluate(&record, &config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_oversized_per_event_points_are_an_error() {
        let mut config = ScoringConfiguration::full_ppr();
        config.receiving.touchdown = Decimal::MAX;
        let record = StatRecord {
            receiving_touchdowns: Some(2),
            ..StatRecord::for_position(Position::WR)
        };
        match evaluate(&record, &config) {
            Err(ScoringError::InvalidInput { message }) => assert!(message.contains("overflow")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_category_total_overflow_is_an_error() {
        let mut config = ScoringConfiguration::full_ppr();
        config.receiving.touchdown = Decimal::MAX;
        config.rushing.touchdown = Decimal::MAX;
        let record = StatRecord {
            rushing_touchdowns: Some(1),
            receiving_touchdowns: Some(1),
            ..StatRecord::for_position(Position::RB)
        };

        // Each category fits on its own; only the total overflows
        let breakdown = ScoreBreakdown {
            rushing: Decimal::MAX,
            receiving: Decimal::MAX,
            ..ScoreBreakdown::default()
        };
        assert!(breakdown.total().is_err());
        assert!(matches!(
            evaluate(&record, &config),
            Err(ScoringError::InvalidInput { .. })
        ));
    }
}
