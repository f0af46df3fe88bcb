//! Pricing config files.
//!
//! A config file is a JSON `PricingOverride`: any subset of the
//! `PricingConfig` fields, merged over the defaults. Unknown keys are rejected
//! so a typo does not silently fall back to a default.
//!
//! The file is taken from `--config` if given, otherwise from `BV_CONFIG`
//! (a `.env` file in the working directory is honoured).

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{PricingConfig, PricingOverride};
use crate::error::AppError;

pub const CONFIG_ENV_VAR: &str = "BV_CONFIG";

/// Pick the config file path: CLI flag first, then the environment.
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    dotenvy::dotenv().ok();
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Read a JSON pricing override.
pub fn load_override(path: &Path) -> Result<PricingOverride, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open config '{}': {e}", path.display())))?;
    let over: PricingOverride = serde_json::from_reader(file).map_err(|e| {
        AppError::new(2, format!("Invalid pricing config '{}': {e}", path.display()))
    })?;
    debug!(path = %path.display(), ?over, "loaded pricing override");
    Ok(over)
}

/// Build the effective config: defaults, then the config file, then an
/// explicit evaluation year.
pub fn effective_config(
    cli_path: Option<&Path>,
    current_year: Option<i32>,
) -> Result<PricingConfig, AppError> {
    let mut config = PricingConfig::default();
    if let Some(path) = resolve_config_path(cli_path) {
        config = config.with_override(&load_override(&path)?);
    }
    if current_year.is_some() {
        config.current_year = current_year;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::Condition;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bv_{}_{name}", std::process::id()))
    }

    #[test]
    fn loads_partial_override() {
        let path = temp_path("override.json");
        fs::write(
            &path,
            r#"{ "range_pct": 0.1, "condition_multipliers": { "good": 0.85 } }"#,
        )
        .unwrap();

        let config = effective_config(Some(&path), Some(2030)).unwrap();
        assert_eq!(config.range_pct, 0.1);
        assert_eq!(config.current_year, Some(2030));
        assert_eq!(config.condition_multipliers.len(), 1);
        assert_eq!(config.condition_multipliers[&Condition::Good], 0.85);

        fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_unknown_keys_and_missing_files() {
        let path = temp_path("typo.json");
        fs::write(&path, r#"{ "rangePct": 0.1 }"#).unwrap();
        let err = load_override(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        fs::remove_file(path).ok();

        let missing = temp_path("missing.json");
        assert_eq!(load_override(&missing).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn cli_path_wins() {
        let path = PathBuf::from("/tmp/explicit.json");
        assert_eq!(resolve_config_path(Some(&path)), Some(path));
    }
}
