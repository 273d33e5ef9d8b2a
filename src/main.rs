//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use ffl_scoring::{
    cli::{Commands, FflScoring},
    commands::{
        common::init_tracing, init_config::handle_init_config, roster::handle_roster,
        score::handle_score, tiebreak::handle_tiebreak, validate::handle_validate,
    },
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FflScoring::parse();
    init_tracing(app.global.verbose);

    let config = app.global.config.as_deref();

    match app.command {
        Commands::Score {
            stats,
            preset,
            json,
        } => handle_score(config, &stats, preset, json)?,

        Commands::Roster {
            roster,
            round,
            json,
        } => handle_roster(config, &roster, round, json)?,

        Commands::Tiebreak { matchup, json } => handle_tiebreak(config, &matchup, json)?,

        Commands::Validate { positions } => handle_validate(config, positions)?,

        Commands::InitConfig {
            path,
            preset,
            force,
        } => {
            handle_init_config(path.as_deref(), preset, force)?;
        }
    }

    Ok(())
}
