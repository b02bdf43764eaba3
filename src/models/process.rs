//! Process record.
//!
//! A process is the sole schedulable unit: an ID for reference, the time it
//! becomes ready, the CPU time it needs and a priority.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::fmt;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are abstract integer ticks relative to the simulation
/// start (t=0).
///
/// # Priority
/// Lower value = higher priority. Only Priority Scheduling consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (display/reference only).
    pub id: i64,
    /// Time the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required. Must be positive.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={}, arrival={}, burst={}, priority={}",
            self.id, self.arrival_time, self.burst_time, self.priority
        )
    }
}
