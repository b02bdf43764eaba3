//! Scheduling method advisor.
//!
//! Recommends one algorithm for a workload from two observations,
//! evaluated in this order:
//!
//! 1. Priorities differ across processes → Priority Scheduling.
//! 2. Burst-time spread (`max - min`) exceeds the threshold → Shortest Job First.
//! 3. Otherwise → Round Robin.
//!
//! This is a heuristic, not an optimization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process};
use crate::validation::ensure_schedulable;

/// Burst-time spread above which SJF is recommended.
pub const DEFAULT_BURST_SPREAD_THRESHOLD: i64 = 5;

/// Advisor thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Strict lower bound on `max(burst) - min(burst)` for recommending SJF.
    pub burst_spread_threshold: i64,
}

impl AdvisorConfig {
    /// Sets the burst spread threshold.
    pub fn with_burst_spread_threshold(mut self, threshold: i64) -> Self {
        self.burst_spread_threshold = threshold;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            burst_spread_threshold: DEFAULT_BURST_SPREAD_THRESHOLD,
        }
    }
}

/// Workload-driven algorithm recommender.
#[derive(Debug, Clone, Default)]
pub struct MethodAdvisor {
    config: AdvisorConfig,
}

impl MethodAdvisor {
    /// Creates an advisor with the given thresholds.
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Current thresholds.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommends an algorithm for the workload.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyWorkload`] or [`ScheduleError::NonPositiveBurst`].
    pub fn suggest(&self, processes: &[Process]) -> Result<Algorithm, ScheduleError> {
        ensure_schedulable(processes)?;

        let first_priority = processes[0].priority;
        let mixed_priorities = processes.iter().any(|p| p.priority != first_priority);

        let (min_burst, max_burst) = processes.iter().fold((i64::MAX, i64::MIN), |(lo, hi), p| {
            (lo.min(p.burst_time), hi.max(p.burst_time))
        });
        let spread = max_burst - min_burst;

        let suggestion = if mixed_priorities {
            Algorithm::PriorityScheduling
        } else if spread > self.config.burst_spread_threshold {
            Algorithm::ShortestJobFirst
        } else {
            Algorithm::RoundRobin
        };

        debug!(
            processes = processes.len(),
            mixed_priorities,
            spread,
            suggestion = suggestion.name(),
            "method suggested"
        );
        Ok(suggestion)
    }
}

/// Recommends an algorithm using the default thresholds.
///
/// # Example
/// ```
/// use cpu_sched::advisor::suggest_best_method;
/// use cpu_sched::models::Process;
///
/// let processes = vec![Process::new(1, 2), Process::new(2, 9)];
/// let suggestion = suggest_best_method(&processes).unwrap();
/// assert_eq!(suggestion.name(), "Shortest Job First");
/// ```
pub fn suggest_best_method(processes: &[Process]) -> Result<Algorithm, ScheduleError> {
    MethodAdvisor::default().suggest(processes)
}
