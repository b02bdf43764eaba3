//! Input validation for scheduling workloads.
//!
//! Checks a workload at the boundary, before any algorithm runs.
//! Detects:
//! - Empty workloads
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive Round Robin quanta
//!
//! Every issue is reported, not just the first. The algorithms themselves
//! only perform the fail-fast subset in [`ensure_schedulable`].

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a zero or negative burst time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// The Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time is positive
/// 4. No arrival time is negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no processes",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        errors.extend(check_process(p));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single process record in isolation.
pub fn validate_process(process: &Process) -> ValidationResult {
    let errors = check_process(process);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}

fn check_process(p: &Process) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if p.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
        ));
    }
    if p.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!("Process {} arrives at {}", p.id, p.arrival_time),
        ));
    }
    errors
}

/// Fail-fast precondition check used by every algorithm and the advisor.
///
/// Rejects an empty workload and the first non-positive burst time.
pub(crate) fn ensure_schedulable(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyWorkload);
    }
    if let Some(p) = processes.iter().find(|p| p.burst_time <= 0) {
        return Err(ScheduleError::NonPositiveBurst {
            id: p.id,
            burst_time: p.burst_time,
        });
    }
    Ok(())
}
