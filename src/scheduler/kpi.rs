//! Schedule timing metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | sum(waiting) / n |
//! | Avg Turnaround Time | sum(turnaround) / n |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScheduleError;

/// Average waiting and turnaround times of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Number of processes averaged over.
    pub process_count: usize,
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Waiting Time: {:.2}, Average Turnaround Time: {:.2}",
            self.avg_waiting_time, self.avg_turnaround_time
        )
    }
}

/// Computes `(average_waiting_time, average_turnaround_time)`.
///
/// Both sums are divided by `n`, the number of processes.
///
/// # Errors
/// [`ScheduleError::EmptyWorkload`] when `n == 0`,
/// [`ScheduleError::TimeOverflow`] when a sum leaves the `i64` range.
///
/// # Example
/// ```
/// use cpu_sched::scheduler::average_times;
///
/// let (w, t) = average_times(&[0, 2, 4], &[3, 5, 8], 3).unwrap();
/// assert_eq!(w, 2.0);
/// assert!((t - 16.0 / 3.0).abs() < 1e-12);
/// ```
pub fn average_times(
    waiting_times: &[i64],
    turnaround_times: &[i64],
    n: usize,
) -> Result<(f64, f64), ScheduleError> {
    if n == 0 {
        return Err(ScheduleError::EmptyWorkload);
    }
    let total_waiting = checked_total(waiting_times, "total waiting time")?;
    let total_turnaround = checked_total(turnaround_times, "total turnaround time")?;
    Ok((
        total_waiting as f64 / n as f64,
        total_turnaround as f64 / n as f64,
    ))
}

fn checked_total(values: &[i64], what: &'static str) -> Result<i64, ScheduleError> {
    values
        .iter()
        .try_fold(0_i64, |acc, &v| acc.checked_add(v))
        .ok_or(ScheduleError::TimeOverflow(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_times() {
        let (w, t) = average_times(&[0, 2, 4], &[3, 5, 8], 3).unwrap();
        assert!((w - 2.0).abs() < 1e-10);
        assert!((t - 16.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_times_zero_n() {
        assert_eq!(average_times(&[], &[], 0), Err(ScheduleError::EmptyWorkload));
    }

    #[test]
    fn test_average_times_overflow() {
        assert_eq!(
            average_times(&[i64::MAX, 1], &[0, 0], 2),
            Err(ScheduleError::TimeOverflow("total waiting time"))
        );
        assert_eq!(
            average_times(&[0, 0], &[i64::MAX, 1], 2),
            Err(ScheduleError::TimeOverflow("total turnaround time"))
        );
    }

    #[test]
    fn test_average_times_negative_waiting() {
        let (w, _) = average_times(&[-10, 2], &[-8, 6], 2).unwrap();
        assert!((w + 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_display_two_decimals() {
        let summary = TimingSummary {
            avg_waiting_time: 2.0,
            avg_turnaround_time: 16.0 / 3.0,
            process_count: 3,
        };
        assert_eq!(
            summary.to_string(),
            "Average Waiting Time: 2.00, Average Turnaround Time: 5.33"
        );
    }
}
