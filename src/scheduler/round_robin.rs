//! Fixed-quantum round robin.
//!
//! # Algorithm
//!
//! 1. Every process starts in a single ready queue, in input order, with
//!    `remaining = burst_time`.
//! 2. The head of the queue runs for `min(quantum, remaining)` ticks.
//! 3. A process with work left goes back to the tail; a finished process
//!    records `waiting = clock - burst_time` and leaves the queue.
//! 4. Stop when every process has finished.
//!
//! Arrival times are not consulted: every process is treated as ready at
//! t=0. Consequently the final clock equals the sum of burst times, and
//! with `quantum >= max(burst_time)` the schedule is plain FCFS.
//!
//! # Complexity
//! O(sum(burst_time) / quantum + n).

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduleOutcome};
use crate::validation::ensure_schedulable;

/// Runs round robin with the given quantum.
///
/// Timings in the outcome are aligned to the input order.
///
/// # Errors
/// [`ScheduleError::EmptyWorkload`], [`ScheduleError::NonPositiveBurst`] or
/// [`ScheduleError::NonPositiveQuantum`] when preconditions are violated,
/// [`ScheduleError::TimeOverflow`] when the clock leaves the `i64` range.
///
/// # Example
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::round_robin;
///
/// let processes = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
/// let outcome = round_robin(&processes, 2).unwrap();
/// assert_eq!(outcome.waiting_times, vec![7, 6, 8]);
/// assert_eq!(outcome.turnaround_times, vec![12, 9, 16]);
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(processes)?;
    if quantum <= 0 {
        return Err(ScheduleError::NonPositiveQuantum(quantum));
    }

    let n = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut waiting_times = vec![0_i64; n];
    let mut turnaround_times = vec![0_i64; n];
    let mut queue: VecDeque<usize> = (0..n).collect();
    let mut clock: i64 = 0;
    let mut completed = 0;

    while completed < n {
        let Some(i) = queue.pop_front() else {
            break;
        };
        let burst = processes[i].burst_time;

        let slice = remaining[i].min(quantum);
        clock = clock
            .checked_add(slice)
            .ok_or(ScheduleError::TimeOverflow("round robin clock"))?;
        if remaining[i] > quantum {
            remaining[i] -= quantum;
            queue.push_back(i);
        } else {
            remaining[i] = 0;
            waiting_times[i] = clock - burst;
            completed += 1;
        }
        turnaround_times[i] = waiting_times[i] + burst;

        trace!(
            process = processes[i].id,
            clock,
            remaining = remaining[i],
            "round robin slice"
        );
    }

    debug!(
        processes = n,
        quantum,
        total_time = clock,
        "round robin complete"
    );

    Ok(ScheduleOutcome {
        algorithm: Algorithm::RoundRobin,
        order: processes.to_vec(),
        waiting_times,
        turnaround_times,
        total_time: clock,
    })
}
