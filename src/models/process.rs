//! Process descriptor model.
//!
//! A process record is one row of the simulated workload: the static
//! attributes a scheduler is allowed to look at before running the process.
//! Records are immutable inputs: timeline results live in
//! [`super::Timeline`], produced fresh by each run, so no reset step is
//! needed between policy invocations.

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// Simulated time unit. All arrivals, bursts, and timestamps share it.
pub type Ticks = i64;

/// A process awaiting CPU time.
///
/// `priority` is carried for policies that consume it; FCFS and SJF
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub pid: Pid,
    /// Time the process becomes ready to run.
    pub arrival: Ticks,
    /// CPU time the process needs to complete. Must be positive.
    pub burst: Ticks,
    /// Scheduling priority (higher = more important).
    pub priority: i32,
}

impl ProcessRecord {
    /// Creates a record with the given pid, arrival, and burst.
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
