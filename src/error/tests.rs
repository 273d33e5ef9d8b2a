//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod scoring_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ScoringError::from(json_error);

        match err {
            ScoringError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = ScoringError::from(io_error);

        match err {
            ScoringError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "abc".parse::<u64>().unwrap_err();
        let err = ScoringError::from(parse_error);

        match err {
            ScoringError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_configuration_error_lists_every_problem() {
        let err = ScoringError::Configuration {
            problems: vec![
                "kicking.field_goal_distance: required for K".to_string(),
                "passing.yards: rate denominator must be positive".to_string(),
            ],
        };

        let message = err.to_string();
        assert!(message.starts_with("Invalid scoring configuration"));
        assert!(message.contains("field_goal_distance"));
        assert!(message.contains("passing.yards"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_input_display() {
        let err = ScoringError::invalid_input("rounds differ");
        assert_eq!(err.to_string(), "Invalid input: rounds differ");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_missing_tiebreak_value_display() {
        let err = ScoringError::MissingTiebreakValue {
            method: "HEAD_TO_HEAD".to_string(),
            participant: "7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Tiebreak method 'HEAD_TO_HEAD' requires a value for participant 7"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let err = ScoringError::InvalidPosition {
            position: "XX".to_string(),
        };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidPosition"));
        assert!(debug_str.contains("XX"));
    }
}
