//! CLI error types

use std::path::Path;

use suvat_core::SuvatError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Solve(#[from] SuvatError),

    #[error("Config error in '{path}': {reason}")]
    Config { path: String, reason: String },

    #[error("Could not read '{input}' as a number")]
    Parse { input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn config(path: &Path, reason: impl Into<String>) -> Self {
        CliError::Config {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code: 2 for contradictory input, 3 for unsolvable input
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Solve(e) if e.is_contradiction() => 2,
            CliError::Solve(e) if e.is_degenerate() => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(SuvatError::invalid_input("zero-time", "x")).exit_code(), 2);
        assert_eq!(CliError::from(SuvatError::non_finite("s", f64::NAN)).exit_code(), 2);
        assert_eq!(CliError::from(SuvatError::unsolvable("s,u,t -> v,a", "x")).exit_code(), 3);
        assert_eq!(CliError::from(SuvatError::WrongKnownCount { known: 2 }).exit_code(), 1);
        assert_eq!(CliError::Parse { input: "abc".into() }.exit_code(), 1);
    }
}
