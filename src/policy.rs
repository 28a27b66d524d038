//! Scheduling policies.
//!
//! One named variant per algorithm, consumed by the single engine entry
//! point ([`crate::engine::run`]). Each policy is defined by the selection
//! key it assigns to a ready process.
//!
//! # Key Convention
//! **Lower key = scheduled first.** Keys are lexicographic integer tuples,
//! so tie-breaking is exact: FCFS breaks arrival ties by pid, SJF breaks
//! burst ties by arrival, then pid. This keeps every run deterministic for
//! a given input, duplicate pids included.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Pid, ProcessRecord, Ticks};

/// A non-preemptive scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served: run in arrival order.
    Fcfs,
    /// Shortest-Job-First: among arrived processes, run the shortest
    /// burst next.
    Sjf,
}

impl Policy {
    /// Short policy name (e.g. "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come, First-Served",
            Policy::Sjf => "Shortest Job First",
        }
    }

    /// Selection key for a ready process. Lower key = scheduled first.
    pub(crate) fn selection_key(&self, r: &ProcessRecord) -> (Ticks, Ticks, Pid) {
        match self {
            Policy::Fcfs => (r.arrival, 0, r.pid),
            Policy::Sjf => (r.burst, r.arrival, r.pid),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(Policy::Sjf.to_string(), "SJF");
        assert_eq!(Policy::Sjf.description(), "Shortest Job First");
    }

    #[test]
    fn test_fcfs_key_orders_by_arrival_then_pid() {
        let early = ProcessRecord::new(5, 1, 10);
        let late = ProcessRecord::new(1, 2, 1);
        assert!(Policy::Fcfs.selection_key(&early) < Policy::Fcfs.selection_key(&late));

        let tie_low = ProcessRecord::new(1, 2, 10);
        let tie_high = ProcessRecord::new(4, 2, 1);
        assert!(Policy::Fcfs.selection_key(&tie_low) < Policy::Fcfs.selection_key(&tie_high));
    }

    #[test]
    fn test_sjf_key_orders_by_burst_then_arrival_then_pid() {
        let short = ProcessRecord::new(3, 9, 2);
        let long = ProcessRecord::new(1, 0, 8);
        assert!(Policy::Sjf.selection_key(&short) < Policy::Sjf.selection_key(&long));

        let tie_early = ProcessRecord::new(6, 1, 4);
        let tie_late = ProcessRecord::new(2, 3, 4);
        assert!(Policy::Sjf.selection_key(&tie_early) < Policy::Sjf.selection_key(&tie_late));

        let tie_pid_low = ProcessRecord::new(2, 1, 4);
        let tie_pid_high = ProcessRecord::new(6, 1, 4);
        assert!(Policy::Sjf.selection_key(&tie_pid_low) < Policy::Sjf.selection_key(&tie_pid_high));
    }
}
