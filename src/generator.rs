//! Random workload generation.
//!
//! Produces valid workloads (unique IDs, positive bursts, non-negative
//! arrivals) for experiments and property tests. Output is deterministic
//! for a seeded RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for random workloads.
///
/// Bounds are inclusive. Inverted or non-positive burst bounds are clamped
/// so that every generated burst time is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time.
    pub max_arrival_time: i64,
    /// Shortest burst time.
    pub min_burst_time: i64,
    /// Longest burst time.
    pub max_burst_time: i64,
    /// Lowest priority value.
    pub min_priority: i32,
    /// Highest priority value.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default bounds.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time (0 = everything ready at t=0).
    pub fn with_max_arrival_time(mut self, max_arrival_time: i64) -> Self {
        self.max_arrival_time = max_arrival_time;
        self
    }

    /// Sets the burst time bounds.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst_time = min;
        self.max_burst_time = max;
        self
    }

    /// Sets the priority bounds.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Generates a workload with IDs `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let min_burst = self.min_burst_time.max(1);
        let max_burst = self.max_burst_time.max(min_burst);
        let max_arrival = self.max_arrival_time.max(0);
        let max_priority = self.max_priority.max(self.min_priority);

        (1..=self.count as i64)
            .map(|id| {
                Process::new(id, rng.random_range(min_burst..=max_burst))
                    .with_arrival_time(rng.random_range(0..=max_arrival))
                    .with_priority(rng.random_range(self.min_priority..=max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival_time: 0,
            min_burst_time: 1,
            max_burst_time: 10,
            min_priority: 0,
            max_priority: 5,
        }
    }
}
