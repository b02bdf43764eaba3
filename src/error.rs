//! Error types for the scheduling engine.
//!
//! Core algorithms fail fast with a [`ScheduleError`] on the first violated
//! precondition. Boundary validation (see [`crate::validation`]) collects
//! every issue and surfaces them through [`ScheduleError::Validation`].

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// No processes were supplied.
    #[error("workload is empty: at least one process is required")]
    EmptyWorkload,

    /// A process has a zero or negative burst time.
    #[error("process {id} has non-positive burst time {burst_time}")]
    NonPositiveBurst {
        /// Offending process ID.
        id: i64,
        /// The rejected burst time.
        burst_time: i64,
    },

    /// Round Robin was given a zero or negative quantum.
    #[error("quantum must be positive, got {0}")]
    NonPositiveQuantum(i64),

    /// A timing computation exceeded the `i64` range.
    #[error("timing arithmetic overflowed: {0}")]
    TimeOverflow(&'static str),

    /// Round Robin was selected but no quantum was supplied.
    #[error("round robin requires a quantum")]
    MissingQuantum,

    /// An algorithm name could not be parsed.
    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Boundary validation rejected the input.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
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
    fn test_display_messages() {
        assert_eq!(
            ScheduleError::NonPositiveBurst { id: 3, burst_time: 0 }.to_string(),
            "process 3 has non-positive burst time 0"
        );
        assert_eq!(
            ScheduleError::NonPositiveQuantum(-1).to_string(),
            "quantum must be positive, got -1"
        );
    }

    #[test]
    fn test_validation_summary_joins_messages() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NegativeArrival, "Process 2 arrives at -4"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate process ID: 1; Process 2 arrives at -4"
        );
    }
}
