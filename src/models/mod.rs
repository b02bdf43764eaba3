//! Scheduling domain models.
//!
//! Provides the data types shared by every algorithm: the process record,
//! the algorithm selector and the per-run outcome.
//!
//! # Domain Mappings
//!
//! | cpu-sched | Textbook | Batch system |
//! |-----------|----------|--------------|
//! | Process | Process / PCB | Job |
//! | Burst time | CPU burst | Run time |
//! | ScheduleOutcome | Gantt summary | Job accounting |

mod algorithm;
mod outcome;
mod process;

pub use algorithm::Algorithm;
pub use outcome::ScheduleOutcome;
pub use process::Process;
