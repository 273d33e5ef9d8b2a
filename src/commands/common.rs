//! Common utilities shared across commands.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::scoring::config::load_or_default;
use crate::scoring::ScoringConfiguration;
use crate::types::Position;

/// A JSON input that may be a single object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Install the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug for this crate.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "ffl_scoring=debug,warn"
    } else {
        "warn"
    };

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load the active configuration and validate it for `positions`.
///
/// Precision warnings are logged, not returned.
pub fn load_validated_config(
    explicit: Option<&Path>,
    positions: &[Position],
) -> Result<ScoringConfiguration> {
    let config = load_or_default(explicit).context("failed to load scoring configuration")?;
    check_config(&config, positions)?;
    Ok(config)
}

pub fn check_config(config: &ScoringConfiguration, positions: &[Position]) -> Result<()> {
    let warnings = config.validate(positions)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(())
}

/// Distinct positions in first-seen order.
pub fn positions_in_use(positions: impl IntoIterator<Item = Position>) -> Vec<Position> {
    let mut seen = Vec::new();
    for position in positions {
        if !seen.contains(&position) {
            seen.push(position);
        }
    }
    seen
}
