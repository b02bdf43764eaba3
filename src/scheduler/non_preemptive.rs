//! Sort-based non-preemptive schedulers (SJF and Priority).
//!
//! # Algorithm
//!
//! 1. Order a private copy of the workload with a dispatching rule
//!    (stable: ties keep their original relative order).
//! 2. Walk the ordered copy with a running clock starting at 0:
//!    `waiting = clock - arrival`, `clock += burst`,
//!    `turnaround = clock - arrival`.
//!
//! The clock never idles waiting for a late arrival, so with staggered
//! arrivals a waiting time can come out negative. That value is returned
//! as computed.
//!
//! # Complexity
//! O(n log n).

use tracing::{debug, warn};

use crate::dispatching::{rules, DispatchingRule, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduleOutcome};
use crate::validation::ensure_schedulable;

/// Runs non-preemptive shortest job first (ascending burst time).
///
/// Timings in the outcome are aligned to `outcome.order`, the sorted copy.
///
/// # Example
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::shortest_job_first;
///
/// let processes = vec![Process::new(1, 6), Process::new(2, 2), Process::new(3, 4)];
/// let outcome = shortest_job_first(&processes).unwrap();
/// assert_eq!(outcome.order[0].id, 2);
/// assert_eq!(outcome.waiting_times, vec![0, 2, 6]);
/// ```
pub fn shortest_job_first(processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
    run_in_rule_order(processes, rules::ShortestBurst, Algorithm::ShortestJobFirst)
}

/// Runs non-preemptive priority scheduling (ascending priority value).
///
/// Timings in the outcome are aligned to `outcome.order`, the sorted copy.
pub fn priority_scheduling(processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
    run_in_rule_order(processes, rules::HighestPriority, Algorithm::PriorityScheduling)
}

fn run_in_rule_order<R: DispatchingRule + 'static>(
    processes: &[Process],
    rule: R,
    algorithm: Algorithm,
) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(processes)?;

    let order = RuleEngine::new().with_rule(rule).sorted(processes);
    let mut waiting_times = Vec::with_capacity(order.len());
    let mut turnaround_times = Vec::with_capacity(order.len());
    let mut clock: i64 = 0;

    for p in &order {
        let waiting = clock
            .checked_sub(p.arrival_time)
            .ok_or(ScheduleError::TimeOverflow("waiting time"))?;
        if waiting < 0 {
            warn!(
                process = p.id,
                arrival_time = p.arrival_time,
                clock,
                waiting,
                "process dispatched before its arrival"
            );
        }
        waiting_times.push(waiting);
        clock = clock
            .checked_add(p.burst_time)
            .ok_or(ScheduleError::TimeOverflow("dispatch clock"))?;
        let turnaround = clock
            .checked_sub(p.arrival_time)
            .ok_or(ScheduleError::TimeOverflow("turnaround time"))?;
        turnaround_times.push(turnaround);
    }

    debug!(
        algorithm = algorithm.name(),
        processes = order.len(),
        total_time = clock,
        "non-preemptive schedule complete"
    );

    Ok(ScheduleOutcome {
        algorithm,
        order,
        waiting_times,
        turnaround_times,
        total_time: clock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(outcome: &ScheduleOutcome) -> Vec<i64> {
        outcome.order.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_sjf_basic() {
        let processes = vec![
            Process::new(1, 6),
            Process::new(2, 8),
            Process::new(3, 7),
            Process::new(4, 3),
        ];
        let outcome = shortest_job_first(&processes).unwrap();

        assert_eq!(ids(&outcome), vec![4, 1, 3, 2]);
        assert_eq!(outcome.waiting_times, vec![0, 3, 9, 16]);
        assert_eq!(outcome.turnaround_times, vec![3, 9, 16, 24]);
        assert_eq!(outcome.total_time, 24);
    }

    #[test]
    fn test_sjf_stable_on_ties() {
        let processes = vec![
            Process::new(1, 5),
            Process::new(2, 2),
            Process::new(3, 5),
            Process::new(4, 2),
        ];
        let outcome = shortest_job_first(&processes).unwrap();
        assert_eq!(ids(&outcome), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sjf_does_not_reorder_input() {
        let processes = vec![Process::new(1, 9), Process::new(2, 1)];
        let snapshot = processes.clone();
        let _ = shortest_job_first(&processes).unwrap();
        assert_eq!(processes, snapshot);
    }

    #[test]
    fn test_sjf_negative_waiting_with_late_arrival() {
        // The short job arrives at 10 but is dispatched at clock 0.
        let processes = vec![
            Process::new(1, 4),
            Process::new(2, 2).with_arrival_time(10),
        ];
        let outcome = shortest_job_first(&processes).unwrap();

        assert_eq!(ids(&outcome), vec![2, 1]);
        assert_eq!(outcome.waiting_times, vec![-10, 2]);
        assert_eq!(outcome.turnaround_times, vec![-8, 6]);
    }

    #[test]
    fn test_sjf_arrival_subtracted() {
        let processes = vec![
            Process::new(1, 3),
            Process::new(2, 5).with_arrival_time(1),
        ];
        let outcome = shortest_job_first(&processes).unwrap();
        assert_eq!(outcome.waiting_times, vec![0, 2]);
        assert_eq!(outcome.turnaround_times, vec![3, 7]);
    }

    #[test]
    fn test_priority_basic() {
        let processes = vec![
            Process::new(1, 10).with_priority(3),
            Process::new(2, 1).with_priority(1),
            Process::new(3, 2).with_priority(4),
            Process::new(4, 1).with_priority(5),
            Process::new(5, 5).with_priority(2),
        ];
        let outcome = priority_scheduling(&processes).unwrap();

        assert_eq!(ids(&outcome), vec![2, 5, 1, 3, 4]);
        assert_eq!(outcome.waiting_times, vec![0, 1, 6, 16, 18]);
        assert_eq!(outcome.turnaround_times, vec![1, 6, 16, 18, 19]);
        assert_eq!(outcome.algorithm, Algorithm::PriorityScheduling);
    }

    #[test]
    fn test_priority_stable_on_ties() {
        let processes = vec![
            Process::new(1, 4).with_priority(2),
            Process::new(2, 1).with_priority(2),
            Process::new(3, 9).with_priority(1),
        ];
        let outcome = priority_scheduling(&processes).unwrap();
        assert_eq!(ids(&outcome), vec![3, 1, 2]);
    }

    #[test]
    fn test_priority_negative_waiting_with_late_arrival() {
        let processes = vec![
            Process::new(1, 3).with_priority(2),
            Process::new(2, 3).with_priority(1).with_arrival_time(5),
        ];
        let outcome = priority_scheduling(&processes).unwrap();
        assert_eq!(outcome.waiting_times, vec![-5, 3]);
    }

    #[test]
    fn test_clock_overflow_is_an_error() {
        let processes = vec![Process::new(1, i64::MAX), Process::new(2, 1)];

        assert_eq!(
            shortest_job_first(&processes),
            Err(ScheduleError::TimeOverflow("dispatch clock"))
        );
        assert_eq!(
            priority_scheduling(&processes),
            Err(ScheduleError::TimeOverflow("dispatch clock"))
        );
    }

    #[test]
    fn test_arrival_subtraction_overflow_is_an_error() {
        // Core accepts negative arrivals; clock - i64::MIN overflows.
        let processes = vec![Process::new(1, 1).with_arrival_time(i64::MIN)];
        assert_eq!(
            shortest_job_first(&processes),
            Err(ScheduleError::TimeOverflow("waiting time"))
        );
    }

    #[test]
    fn test_rejects_bad_workload() {
        assert_eq!(shortest_job_first(&[]), Err(ScheduleError::EmptyWorkload));
        assert_eq!(
            priority_scheduling(&[Process::new(8, -1)]),
            Err(ScheduleError::NonPositiveBurst { id: 8, burst_time: -1 })
        );
    }
}
