//! Error types for loading, validating and simulating workloads.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced before or around a simulation.
///
/// Scheduling itself never fails on validated input; every variant here is
/// a precondition violation or an I/O problem at the boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimError {
    /// Workload source could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line in a text workload (1-based line number).
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Quantum or context-switch value unusable by the simulator.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// JSON workload or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report sink could not be written.
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl SimError {
    /// Creates a parse error for the given 1-based line.
    #[inline]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[inline]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_display() {
        let err = SimError::parse(3, "burst time 'x' is not a number");
        assert_eq!(err.to_string(), "line 3: burst time 'x' is not a number");
    }

    #[test]
    fn test_validation_display_joins() {
        let err = SimError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
            ValidationError::new(ValidationErrorKind::ZeroBurst, "Process 'P2' has zero burst"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: Duplicate process ID: P1; Process 'P2' has zero burst"
        );
    }

    #[test]
    fn test_io_display_names_path() {
        let err = SimError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("failed to read missing.txt"));
    }
}
