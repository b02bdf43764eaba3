//! Headless scheduling session.
//!
//! Holds the process list a user builds up, validates input at the
//! boundary, and runs algorithms on snapshots so the list itself is never
//! reordered.
//!
//! # Example
//! ```
//! use cpu_sched::models::{Algorithm, Process};
//! use cpu_sched::session::Session;
//!
//! let mut session = Session::new();
//! session.add_process(Process::new(1, 5)).unwrap();
//! session.add_process(Process::new(2, 3)).unwrap();
//!
//! let report = session.calculate(Algorithm::RoundRobin, Some(2)).unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "Average Waiting Time: 3.50, Average Turnaround Time: 7.50"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::advisor::{AdvisorConfig, MethodAdvisor};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduleOutcome};
use crate::scheduler::TimingSummary;
use crate::validation::{
    validate_process, validate_quantum, validate_workload, ValidationError, ValidationErrorKind,
};

/// Outcome of one calculation plus its averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-process timings.
    pub outcome: ScheduleOutcome,
    /// Averages over the outcome.
    pub summary: TimingSummary,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary, f)
    }
}

/// Accumulated workload and advisor settings.
#[derive(Debug, Clone, Default)]
pub struct Session {
    processes: Vec<Process>,
    advisor: MethodAdvisor,
}

impl Session {
    /// Creates an empty session with default advisor thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the advisor thresholds.
    pub fn with_advisor_config(mut self, config: AdvisorConfig) -> Self {
        self.advisor = MethodAdvisor::new(config);
        self
    }

    /// Validates and appends a process.
    ///
    /// # Errors
    /// [`ScheduleError::Validation`] if the burst time is not positive, the
    /// arrival time is negative or the ID is already present.
    pub fn add_process(&mut self, process: Process) -> Result<(), ScheduleError> {
        let mut errors = validate_process(&process).err().unwrap_or_default();
        if self.processes.iter().any(|p| p.id == process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
        if !errors.is_empty() {
            return Err(ScheduleError::Validation(errors));
        }

        self.processes.push(process);
        debug!(id = process.id, count = self.processes.len(), "process added");
        Ok(())
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the session has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Removes every process.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// One line per process: `Process {n}: {process}` (1-based).
    pub fn listing(&self) -> Vec<String> {
        self.processes
            .iter()
            .enumerate()
            .map(|(i, p)| format!("Process {}: {}", i + 1, p))
            .collect()
    }

    /// Runs an algorithm on a snapshot of the current workload.
    ///
    /// # Errors
    /// [`ScheduleError::Validation`] for an invalid workload or quantum,
    /// [`ScheduleError::MissingQuantum`] for Round Robin without a quantum.
    pub fn calculate(
        &self,
        algorithm: Algorithm,
        quantum: Option<i64>,
    ) -> Result<SimulationReport, ScheduleError> {
        let mut errors = validate_workload(&self.processes).err().unwrap_or_default();
        if algorithm.requires_quantum() {
            let quantum = quantum.ok_or(ScheduleError::MissingQuantum)?;
            errors.extend(validate_quantum(quantum).err().unwrap_or_default());
        }
        if !errors.is_empty() {
            return Err(ScheduleError::Validation(errors));
        }

        let outcome = algorithm.run(&self.processes, quantum)?;
        let summary = outcome.averages()?;
        info!(
            algorithm = algorithm.name(),
            processes = summary.process_count,
            avg_waiting_time = summary.avg_waiting_time,
            avg_turnaround_time = summary.avg_turnaround_time,
            "calculation complete"
        );
        Ok(SimulationReport { outcome, summary })
    }

    /// Recommends an algorithm for the current workload.
    pub fn suggest_method(&self) -> Result<Algorithm, ScheduleError> {
        self.advisor.suggest(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(processes: &[Process]) -> Session {
        let mut session = Session::new();
        for &p in processes {
            session.add_process(p).unwrap();
        }
        session
    }

    #[test]
    fn test_add_and_list() {
        let session = session_with(&[Process::new(1, 5), Process::new(2, 3).with_priority(1)]);

        assert_eq!(session.len(), 2);
        assert_eq!(
            session.listing(),
            vec![
                "Process 1: id=1, arrival=0, burst=5, priority=0".to_string(),
                "Process 2: id=2, arrival=0, burst=3, priority=1".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut session = session_with(&[Process::new(1, 5)]);

        let err = session.add_process(Process::new(1, 2)).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(ref e) if e[0].kind == ValidationErrorKind::DuplicateId));

        let err = session.add_process(Process::new(2, 0)).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(ref e) if e[0].kind == ValidationErrorKind::NonPositiveBurst));

        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_calculate_round_robin() {
        let session = session_with(&[Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)]);

        let report = session.calculate(Algorithm::RoundRobin, Some(2)).unwrap();
        assert_eq!(report.outcome.waiting_times, vec![7, 6, 8]);
        assert_eq!(
            report.to_string(),
            "Average Waiting Time: 7.00, Average Turnaround Time: 12.33"
        );
    }

    #[test]
    fn test_calculate_keeps_session_order() {
        let session = session_with(&[Process::new(1, 9), Process::new(2, 1)]);

        let report = session.calculate(Algorithm::ShortestJobFirst, None).unwrap();
        assert_eq!(report.outcome.order[0].id, 2);
        assert_eq!(session.processes()[0].id, 1);
    }

    #[test]
    fn test_calculate_empty_session() {
        let err = Session::new()
            .calculate(Algorithm::PriorityScheduling, None)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(ref e) if e[0].kind == ValidationErrorKind::EmptyWorkload));
    }

    #[test]
    fn test_calculate_quantum_checks() {
        let session = session_with(&[Process::new(1, 4)]);

        assert_eq!(
            session.calculate(Algorithm::RoundRobin, None),
            Err(ScheduleError::MissingQuantum)
        );
        let err = session.calculate(Algorithm::RoundRobin, Some(0)).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(ref e) if e[0].kind == ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_suggest_method() {
        let session = session_with(&[Process::new(1, 2), Process::new(2, 4)]);
        assert_eq!(session.suggest_method().unwrap(), Algorithm::RoundRobin);

        let strict = session_with(&[Process::new(1, 2), Process::new(2, 4)])
            .with_advisor_config(AdvisorConfig::default().with_burst_spread_threshold(1));
        assert_eq!(strict.suggest_method().unwrap(), Algorithm::ShortestJobFirst);
    }

    #[test]
    fn test_clear() {
        let mut session = session_with(&[Process::new(1, 2)]);
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.suggest_method(), Err(ScheduleError::EmptyWorkload));
    }
}
