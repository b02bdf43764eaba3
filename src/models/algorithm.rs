//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The scheduling disciplines supported by the engine.
///
/// The display name is also the recommendation string produced by the
/// method advisor and the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Fixed-quantum, single-queue round robin.
    #[serde(rename = "Round Robin")]
    RoundRobin,
    /// Non-preemptive shortest job first.
    #[serde(rename = "Shortest Job First")]
    ShortestJobFirst,
    /// Non-preemptive priority scheduling (lower value first).
    #[serde(rename = "Priority Scheduling")]
    PriorityScheduling,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::RoundRobin,
        Algorithm::ShortestJobFirst,
        Algorithm::PriorityScheduling,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::ShortestJobFirst => "Shortest Job First",
            Algorithm::PriorityScheduling => "Priority Scheduling",
        }
    }

    /// Whether the algorithm needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "round robin" | "rr" => Ok(Algorithm::RoundRobin),
            "shortest job first" | "sjf" => Ok(Algorithm::ShortestJobFirst),
            "priority scheduling" | "priority" => Ok(Algorithm::PriorityScheduling),
            _ => Err(ScheduleError::UnknownAlgorithm(s.to_string())),
        }
    }
}
