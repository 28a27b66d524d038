//! Run quality metrics.
//!
//! Computes the standard figures for a completed run from its
//! [`Timeline`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | CPU Utilization | total burst / makespan × 100 |
//! | Makespan | latest completion time |
//! | Idle Time | makespan - total burst |

use serde::{Deserialize, Serialize};

use crate::models::{Ticks, Timeline};

/// Aggregate figures for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Fraction of elapsed time the CPU was busy, as a percentage.
    /// 0.0 for the degenerate zero-makespan case.
    pub cpu_utilization: f64,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Time the CPU sat idle.
    pub idle_time: Ticks,
}

impl RunMetrics {
    /// Computes metrics from a completed timeline. Reads only.
    pub fn calculate(timeline: &Timeline) -> Self {
        let n = timeline.timings.len();
        let makespan = timeline.makespan();

        let (avg_waiting, avg_turnaround) = if n == 0 {
            (0.0, 0.0)
        } else {
            let total_waiting: Ticks = timeline.timings.iter().map(|t| t.waiting()).sum();
            let total_turnaround: Ticks = timeline.timings.iter().map(|t| t.turnaround()).sum();
            (
                total_waiting as f64 / n as f64,
                total_turnaround as f64 / n as f64,
            )
        };

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            timeline.total_burst() as f64 / makespan as f64 * 100.0
        };

        Self {
            avg_waiting,
            avg_turnaround,
            cpu_utilization,
            makespan,
            idle_time: timeline.idle_time(),
        }
    }
}
