//! Score command implementation

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;

use super::common::{
    check_config, load_validated_config, positions_in_use, print_json, read_json, OneOrMany,
};
use crate::cli::Preset;
use crate::scoring::{
    evaluate_breakdown, round_points, ScoreBreakdown, ScoringConfiguration, StatRecord,
};
use crate::types::{PlayerId, Position};

/// One evaluated stat record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub player_id: Option<PlayerId>,
    pub position: Option<Position>,
    pub breakdown: ScoreBreakdown,
    pub total: Decimal,
}

/// Evaluate every record, stopping at the first failure.
pub fn score_records(
    records: &[StatRecord],
    config: &ScoringConfiguration,
) -> crate::Result<Vec<ScoredRecord>> {
    records
        .iter()
        .map(|record| -> crate::Result<ScoredRecord> {
            let breakdown = evaluate_breakdown(record, config)?;
            Ok(ScoredRecord {
                player_id: record.player_id,
                position: record.position,
                total: round_points(breakdown.total()?),
                breakdown,
            })
        })
        .collect()
}

/// Handle the score command
pub fn handle_score(
    config_path: Option<&Path>,
    stats_path: &Path,
    preset: Option<Preset>,
    json: bool,
) -> Result<()> {
    let records: Vec<StatRecord> = read_json::<OneOrMany<StatRecord>>(stats_path)?.into_vec();
    let positions = positions_in_use(records.iter().filter_map(|r| r.position));

    let config = match preset {
        Some(preset) => {
            let config = preset.configuration();
            check_config(&config, &positions)?;
            config
        }
        None => load_validated_config(config_path, &positions)?,
    };

    let scored = score_records(&records, &config)
        .with_context(|| format!("failed to score {}", stats_path.display()))?;

    if json {
        return print_json(&scored);
    }

    for (index, record) in scored.iter().enumerate() {
        let who = match (record.player_id, record.position) {
            (Some(id), Some(pos)) => format!("{} {}", pos, id),
            (None, Some(pos)) => pos.to_string(),
            (Some(id), None) => format!("player {}", id),
            (None, None) => format!("record {}", index + 1),
        };
        let b = &record.breakdown;
        println!("{}: {:.2}", who, record.total);
        println!(
            "  passing {:.2} | rushing {:.2} | receiving {:.2} | misc {:.2} | \
             kicking {:.2} | defense {:.2} | bonuses {:.2}",
            b.passing, b.rushing, b.receiving, b.misc, b.kicking, b.defense, b.bonuses
        );
    }

    Ok(())
}
