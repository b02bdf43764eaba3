//! Dispatching rules and rule engine for the non-preemptive schedulers.
//!
//! A dispatching rule maps a process to a score; the rule engine turns a
//! chain of rules into a stable ordering of process indices.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine};
//! use cpu_sched::models::Process;
//!
//! let processes = vec![Process::new(1, 8), Process::new(2, 3)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process precedence.
///
/// # Score Convention
/// **Lower score = dispatched earlier.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Evaluates the precedence of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
