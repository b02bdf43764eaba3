//! CPU scheduling simulation engine.
//!
//! Computes per-process waiting and turnaround times for classic
//! single-CPU disciplines and recommends a discipline for a workload.
//! Everything here is a pure, synchronous computation over an in-memory
//! process list.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Algorithm`, `ScheduleOutcome`
//! - **`scheduler`**: Round Robin, Shortest Job First, Priority Scheduling,
//!   and the timing calculator (`average_times`)
//! - **`advisor`**: Heuristic method recommendation
//! - **`dispatching`**: Ordering rules behind the sort-based schedulers
//! - **`validation`**: Boundary input checks
//! - **`session`**: Headless workload accumulation and reporting
//! - **`generator`**: Seeded random workloads
//!
//! # Simplifying Assumptions
//!
//! - Round Robin treats every process as ready at t=0 (arrival times are
//!   not consulted).
//! - SJF and Priority Scheduling never idle the clock for a late arrival;
//!   with staggered arrivals a waiting time can be negative and is
//!   reported as such.
//!
//! # Example
//!
//! ```
//! use cpu_sched::advisor::suggest_best_method;
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{average_times, round_robin};
//!
//! let processes = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
//! let (waiting, turnaround) = round_robin(&processes, 2).unwrap().into_parts();
//! let (avg_waiting, _) = average_times(&waiting, &turnaround, processes.len()).unwrap();
//! assert_eq!(avg_waiting, 7.0);
//!
//! assert_eq!(suggest_best_method(&processes).unwrap().name(), "Round Robin");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod advisor;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use error::ScheduleError;
