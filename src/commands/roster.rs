//! Roster command implementation

use anyhow::{Context, Result};
use std::path::Path;

use super::common::{load_validated_config, positions_in_use, print_json, read_json, OneOrMany};
use crate::scoring::{score_round, RosterScore, RosterSubmission};
use crate::types::Round;

/// Handle the roster command
pub fn handle_roster(
    config_path: Option<&Path>,
    roster_path: &Path,
    round: Round,
    json: bool,
) -> Result<()> {
    let submissions: Vec<RosterSubmission> =
        read_json::<OneOrMany<RosterSubmission>>(roster_path)?.into_vec();
    let positions = positions_in_use(
        submissions
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.position)),
    );
    let config = load_validated_config(config_path, &positions)?;

    let scores = score_round(round, &submissions, &config)
        .with_context(|| format!("failed to score {}", roster_path.display()))?;

    if json {
        return print_json(&scores);
    }

    for score in &scores {
        print_roster_score(score);
    }
    Ok(())
}

fn print_roster_score(score: &RosterScore) {
    let completeness = if score.is_complete() { "" } else { " (incomplete)" };
    println!(
        "Participant {} - {}: {:.2}{}",
        score.participant_id(),
        score.round(),
        score.total(),
        completeness
    );
    for slot in score.position_scores() {
        println!(
            "  {:<9} {:>7}  {}",
            slot.position().to_string(),
            format!("{:.2}", slot.points()),
            slot.status()
        );
    }
    println!(
        "  touchdowns {} | turnovers {} | best {:.2} | second {:.2}",
        score.total_touchdowns(),
        score.total_turnovers(),
        score.highest_position_score(),
        score.second_highest_position_score()
    );
}
