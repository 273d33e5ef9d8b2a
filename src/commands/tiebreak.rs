//! Tiebreak command implementation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::common::{load_validated_config, positions_in_use, print_json, read_json};
use crate::scoring::{RosterEntry, RosterScore, RosterSubmission, ScoringConfiguration};
use crate::tiebreak::{
    Contestant, TiebreakConfiguration, TiebreakContext, TiebreakResolution, TiebreakResolver,
};
use crate::types::{ParticipantId, Round};

/// One side of a matchup file.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchupSide {
    pub participant_id: ParticipantId,
    pub entries: Vec<RosterEntry>,
    #[serde(default)]
    pub context: TiebreakContext,
}

impl MatchupSide {
    fn submission(&self) -> RosterSubmission {
        RosterSubmission {
            participant_id: self.participant_id,
            entries: self.entries.clone(),
        }
    }
}

/// Input for the tiebreak command.
#[derive(Debug, Clone, Deserialize)]
pub struct Matchup {
    #[serde(default)]
    pub round: Round,
    /// Falls back to the default five-method cascade.
    #[serde(default)]
    pub tiebreak: TiebreakConfiguration,
    pub home: MatchupSide,
    pub away: MatchupSide,
}

#[derive(Debug, Serialize)]
pub struct MatchupReport {
    pub home: RosterScore,
    pub away: RosterScore,
    /// Set when the totals differ and no tiebreak was needed.
    pub decided_by_total: Option<ParticipantId>,
    pub resolution: Option<TiebreakResolution>,
}

/// Score both sides and run the cascade only if the totals are equal.
pub fn run_matchup(
    matchup: &Matchup,
    config: &ScoringConfiguration,
) -> crate::Result<MatchupReport> {
    let home = matchup.home.submission().score(matchup.round, config)?;
    let away = matchup.away.submission().score(matchup.round, config)?;

    if home.total() != away.total() {
        let leader = if home.total() > away.total() {
            home.participant_id()
        } else {
            away.participant_id()
        };
        return Ok(MatchupReport {
            home,
            away,
            decided_by_total: Some(leader),
            resolution: None,
        });
    }

    let resolver = TiebreakResolver::new(matchup.tiebreak.clone());
    let resolution = resolver.resolve_traced(
        &Contestant::with_context(&home, matchup.home.context),
        &Contestant::with_context(&away, matchup.away.context),
    )?;

    Ok(MatchupReport {
        home,
        away,
        decided_by_total: None,
        resolution: Some(resolution),
    })
}

/// Handle the tiebreak command
pub fn handle_tiebreak(config_path: Option<&Path>, matchup_path: &Path, json: bool) -> Result<()> {
    let matchup: Matchup = read_json(matchup_path)?;
    let positions = positions_in_use(
        matchup
            .home
            .entries
            .iter()
            .chain(&matchup.away.entries)
            .map(|e| e.position),
    );
    let config = load_validated_config(config_path, &positions)?;

    let report = run_matchup(&matchup, &config)
        .with_context(|| format!("failed to resolve {}", matchup_path.display()))?;

    if json {
        return print_json(&report);
    }

    println!(
        "{} {:.2} - {:.2} {} ({})",
        report.home.participant_id(),
        report.home.total(),
        report.away.total(),
        report.away.participant_id(),
        matchup.round
    );

    if let Some(leader) = report.decided_by_total {
        println!("No tie: {} wins on total points", leader);
        return Ok(());
    }

    if let Some(resolution) = &report.resolution {
        for (step, outcome) in resolution.steps.iter().enumerate() {
            println!("  {}. {}", step + 1, outcome);
        }
        println!("Result: {}", resolution.outcome);
    }
    Ok(())
}
