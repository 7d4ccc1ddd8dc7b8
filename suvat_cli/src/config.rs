//! Solver settings for the CLI: optional JSON file, then flag overrides.

use std::fs;
use std::path::Path;

use suvat_core::SolverSettings;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Load settings from `path` (if any) and apply command-line overrides.
pub fn load_settings(path: Option<&Path>, zero_tolerance: Option<f64>) -> CliResult<SolverSettings> {
    let mut settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| CliError::config(path, e.to_string()))?;
            SolverSettings::from_json(&text).map_err(|e| CliError::config(path, e.to_string()))?
        }
        None => SolverSettings::default(),
    };

    if let Some(zero_tolerance) = zero_tolerance {
        settings.zero_tolerance = zero_tolerance;
    }
    settings.validate()?;

    debug!(?settings, "solver settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = load_settings(None, None).unwrap();
        assert_eq!(settings, SolverSettings::default());
    }

    #[test]
    fn test_flag_overrides_default() {
        let settings = load_settings(None, Some(1e-6)).unwrap();
        assert_eq!(settings.zero_tolerance, 1e-6);
    }

    #[test]
    fn test_negative_override_rejected() {
        assert!(load_settings(None, Some(-1.0)).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_settings(Some(Path::new("/nonexistent/suvat.json")), None).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_file_then_override() {
        let path = std::env::temp_dir().join(format!("suvat-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{"zero_tolerance": 1e-9, "post_check": false}"#).unwrap();

        let settings = load_settings(Some(&path), Some(1e-10)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.zero_tolerance, 1e-10);
        assert!(!settings.post_check);
    }
}
