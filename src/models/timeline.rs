//! Timeline (solution) model.
//!
//! A timeline is the complete result of one scheduling run: the ordered
//! CPU allocations plus the derived per-process timing figures. It is
//! produced by the engine and only ever read afterwards; reporters and
//! metrics never mutate it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1-5.3

use serde::{Deserialize, Serialize};

use super::{Pid, ProcessRecord, Ticks};

/// One contiguous CPU allocation.
///
/// Under non-preemptive single-core scheduling every process occupies
/// exactly one segment. Segments never overlap; a gap between consecutive
/// segments means the CPU idled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process occupying the CPU.
    pub pid: Pid,
    /// Segment start time.
    pub start: Ticks,
    /// Segment end time (exclusive).
    pub end: Ticks,
}

impl ExecutionSegment {
    /// Time spent on the CPU in this segment.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Computed timing results for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTiming {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time, copied from the input record.
    pub arrival: Ticks,
    /// Burst time, copied from the input record.
    pub burst: Ticks,
    /// Time the process first (and only) got the CPU.
    pub start: Ticks,
    /// Time the process finished.
    pub completion: Ticks,
}

impl ProcessTiming {
    /// Turnaround time: completion minus arrival.
    #[inline]
    pub fn turnaround(&self) -> Ticks {
        self.completion - self.arrival
    }

    /// Waiting time: turnaround minus burst.
    #[inline]
    pub fn waiting(&self) -> Ticks {
        self.turnaround() - self.burst
    }
}

/// The full outcome of one scheduling run.
///
/// Segments and timings are appended in execution order, so iterating
/// either yields the order in which processes ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// CPU allocations, ordered by start time.
    pub segments: Vec<ExecutionSegment>,
    /// Per-process timing results, in execution order.
    pub timings: Vec<ProcessTiming>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty timeline with room for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            segments: Vec::with_capacity(n),
            timings: Vec::with_capacity(n),
        }
    }

    /// Appends the run of `record` starting at `start`.
    ///
    /// Callers must append in execution order; a start before the previous
    /// segment's end is an engine bug.
    pub(crate) fn record_run(&mut self, record: &ProcessRecord, start: Ticks) {
        debug_assert!(
            self.segments.last().map_or(true, |s| start >= s.end),
            "segment for pid {} overlaps its predecessor",
            record.pid
        );
        let completion = start + record.burst;
        self.segments.push(ExecutionSegment {
            pid: record.pid,
            start,
            end: completion,
        });
        self.timings.push(ProcessTiming {
            pid: record.pid,
            arrival: record.arrival,
            burst: record.burst,
            start,
            completion,
        });
    }

    /// Latest completion time, or 0 for an empty timeline.
    pub fn makespan(&self) -> Ticks {
        self.segments.last().map_or(0, |s| s.end)
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Ticks {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> Ticks {
        self.makespan() - self.total_burst()
    }

    /// Timing results for a process, if it was scheduled.
    pub fn timing_for(&self, pid: Pid) -> Option<&ProcessTiming> {
        self.timings.iter().find(|t| t.pid == pid)
    }

    /// Pids in the order they ran.
    pub fn execution_order(&self) -> impl Iterator<Item = Pid> + '_ {
        self.segments.iter().map(|s| s.pid)
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        // P1 [0,4], idle [4,6], P2 [6,8]
        let mut t = Timeline::new();
        t.record_run(&ProcessRecord::new(1, 0, 4), 0);
        t.record_run(&ProcessRecord::new(2, 6, 2), 6);
        t
    }

    #[test]
    fn test_segment_duration() {
        let s = ExecutionSegment {
            pid: 1,
            start: 3,
            end: 9,
        };
        assert_eq!(s.duration(), 6);
    }

    #[test]
    fn test_timing_formulas() {
        let t = ProcessTiming {
            pid: 2,
            arrival: 1,
            burst: 4,
            start: 8,
            completion: 12,
        };
        assert_eq!(t.turnaround(), 11);
        assert_eq!(t.waiting(), 7);
    }

    #[test]
    fn test_record_run_appends_both_views() {
        let t = sample_timeline();
        assert_eq!(t.len(), 2);
        assert_eq!(t.segments[1], ExecutionSegment { pid: 2, start: 6, end: 8 });
        assert_eq!(t.timings[1].completion, 8);
    }

    #[test]
    fn test_makespan_and_idle() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 8);
        assert_eq!(t.total_burst(), 6);
        assert_eq!(t.idle_time(), 2);
    }

    #[test]
    fn test_timing_lookup() {
        let t = sample_timeline();
        assert_eq!(t.timing_for(2).unwrap().start, 6);
        assert!(t.timing_for(99).is_none());
    }

    #[test]
    fn test_execution_order() {
        let t = sample_timeline();
        assert_eq!(t.execution_order().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
        assert!(t.is_empty());
    }
}
