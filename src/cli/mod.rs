//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scoring::ScoringConfiguration;
use crate::types::{Position, Round};

/// Arguments shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Scoring configuration JSON (or set `FFL_SCORING_CONFIG` env var).
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log evaluation and tiebreak steps (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

/// Built-in rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Standard,
    HalfPpr,
    FullPpr,
}

impl Preset {
    pub fn configuration(&self) -> ScoringConfiguration {
        match self {
            Preset::Standard => ScoringConfiguration::standard(),
            Preset::HalfPpr => ScoringConfiguration::half_ppr(),
            Preset::FullPpr => ScoringConfiguration::full_ppr(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate stat records and print per-category points.
    ///
    /// The file holds one StatRecord object or an array of them.
    Score {
        /// Stat record JSON file.
        #[clap(long, short)]
        stats: PathBuf,

        /// Use a built-in rule set instead of the configuration file.
        #[clap(long, value_enum)]
        preset: Option<Preset>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Aggregate roster submissions into round totals.
    ///
    /// The file holds one RosterSubmission or an array of them; arrays are
    /// scored in parallel.
    Roster {
        /// Roster submission JSON file.
        #[clap(long, short)]
        roster: PathBuf,

        /// Playoff round being scored.
        #[clap(long, default_value_t = Round::default())]
        round: Round,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Break a tie between two roster submissions and print each step.
    Tiebreak {
        /// Matchup JSON file with both sides and an optional cascade.
        #[clap(long, short)]
        matchup: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Validate a scoring configuration for the positions a league uses.
    Validate {
        /// Positions in use (repeatable): `-p QB -p K`. Defaults to all.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,
    },

    /// Write a built-in rule set to a configuration file for editing.
    InitConfig {
        /// Destination (defaults to the platform config directory).
        #[clap(long)]
        path: Option<PathBuf>,

        #[clap(long, value_enum, default_value_t = Preset::FullPpr)]
        preset: Preset,

        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-scoring",
    about = "Fantasy football playoff scoring and tiebreaks"
)]
pub struct FflScoring {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
