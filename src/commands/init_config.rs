//! Init-config command implementation

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Preset;
use crate::scoring::config::{default_config_path, write_to_path};

/// Handle the init-config command
pub fn handle_init_config(path: Option<&Path>, preset: Preset, force: bool) -> Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if path.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        );
    }

    write_to_path(&preset.configuration(), &path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("✓ Wrote {:?} scoring rules to {}", preset, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::load_from_path;
    use crate::scoring::ScoringConfiguration;
    use tempfile::TempDir;

    #[test]
    fn test_writes_preset_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scoring.json");

        let written = handle_init_config(Some(path.as_path()), Preset::HalfPpr, false).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_from_path(&path).unwrap(), ScoringConfiguration::half_ppr());

        assert!(handle_init_config(Some(path.as_path()), Preset::Standard, false).is_err());

        handle_init_config(Some(path.as_path()), Preset::Standard, true).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), ScoringConfiguration::standard());
    }
}
