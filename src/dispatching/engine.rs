//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules sequentially: the next rule is consulted only
//! when the previous ones tie.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process ordering.
///
/// Sorting is always stable: processes that tie on every rule keep their
/// original relative order.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::ShortestBurst);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts processes by precedence (first to run first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        // `sort_by` is stable, which is what preserves tie order.
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns a sorted copy of the processes; the input is left untouched.
    pub fn sorted(&self, processes: &[Process]) -> Vec<Process> {
        self.sort_indices(processes)
            .into_iter()
            .map(|i| processes[i])
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
