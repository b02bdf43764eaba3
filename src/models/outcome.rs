//! Result of one scheduling run.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process};
use crate::error::ScheduleError;
use crate::scheduler::{average_times, TimingSummary};

/// Per-process timings produced by a scheduling algorithm.
///
/// `waiting_times[i]` and `turnaround_times[i]` belong to `order[i]`.
/// For Round Robin `order` is the input order; for the sort-based
/// algorithms it is the algorithm's private sorted copy, so index `i` does
/// not necessarily match the caller's `i`-th process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Processes in the order the timings are aligned to.
    pub order: Vec<Process>,
    /// Waiting time per process.
    pub waiting_times: Vec<i64>,
    /// Turnaround time per process.
    pub turnaround_times: Vec<i64>,
    /// Simulation clock when the last process completed.
    pub total_time: i64,
}

impl ScheduleOutcome {
    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Splits into `(waiting_times, turnaround_times)`.
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.waiting_times, self.turnaround_times)
    }

    /// Average waiting and turnaround times.
    pub fn averages(&self) -> Result<TimingSummary, ScheduleError> {
        let (avg_waiting_time, avg_turnaround_time) =
            average_times(&self.waiting_times, &self.turnaround_times, self.len())?;
        Ok(TimingSummary {
            avg_waiting_time,
            avg_turnaround_time,
            process_count: self.len(),
        })
    }

    /// Timings of the process with the given ID, as `(waiting, turnaround)`.
    pub fn timings_for(&self, id: i64) -> Option<(i64, i64)> {
        self.order
            .iter()
            .position(|p| p.id == id)
            .map(|i| (self.waiting_times[i], self.turnaround_times[i]))
    }
}
