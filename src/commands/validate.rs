//! Validate command implementation

use anyhow::{Context, Result};
use std::path::Path;

use crate::scoring::config::load_or_default;
use crate::types::Position;

/// Handle the validate command
pub fn handle_validate(config_path: Option<&Path>, positions: Option<Vec<Position>>) -> Result<()> {
    let positions = positions.unwrap_or_else(|| Position::ALL.to_vec());
    let config = load_or_default(config_path).context("failed to load scoring configuration")?;

    let warnings = config.validate(&positions)?;

    let names: Vec<String> = positions.iter().map(Position::to_string).collect();
    println!(
        "✓ Configuration valid for {} ({} reception scoring)",
        names.join(", "),
        config.reception_scoring()
    );
    for warning in &warnings {
        println!("⚠ {}", warning);
    }
    Ok(())
}
