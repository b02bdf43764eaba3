//! CPU scheduling algorithms and timing evaluation.
//!
//! Three stateless algorithms, each consuming a process slice and producing
//! a [`ScheduleOutcome`]:
//!
//! - [`round_robin`]: fixed quantum, single ready queue.
//! - [`shortest_job_first`]: non-preemptive, ascending burst time.
//! - [`priority_scheduling`]: non-preemptive, ascending priority value.
//!
//! None of them mutate the caller's slice. [`average_times`] turns the
//! per-process timings into the two averages reported to users.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod kpi;
mod non_preemptive;
mod round_robin;

pub use kpi::{average_times, TimingSummary};
pub use non_preemptive::{priority_scheduling, shortest_job_first};
pub use round_robin::round_robin;

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduleOutcome};

impl Algorithm {
    /// Runs this algorithm on the workload.
    ///
    /// `quantum` is required for Round Robin and ignored otherwise.
    ///
    /// # Example
    /// ```
    /// use cpu_sched::models::{Algorithm, Process};
    ///
    /// let processes = vec![Process::new(1, 4), Process::new(2, 2)];
    /// let outcome = Algorithm::ShortestJobFirst.run(&processes, None).unwrap();
    /// assert_eq!(outcome.order[0].id, 2);
    /// ```
    pub fn run(
        &self,
        processes: &[Process],
        quantum: Option<i64>,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        match self {
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or(ScheduleError::MissingQuantum)?;
                round_robin(processes, quantum)
            }
            Algorithm::ShortestJobFirst => shortest_job_first(processes),
            Algorithm::PriorityScheduling => priority_scheduling(processes),
        }
    }
}
