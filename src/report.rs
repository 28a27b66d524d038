//! Run report formatting.
//!
//! Renders one run as text: the execution order, a two-row Gantt chart,
//! a per-process metrics table, and the summary figures. Borrows the
//! timeline and metrics immutably; nothing here mutates run state.
//!
//! # Gantt Layout
//!
//! Segment labels sit between `|` separators; each separator's column
//! carries the boundary timestamp in the row beneath, so a label is
//! bracketed by its start and end times. CPU gaps render as explicit
//! `idle` cells, including a leading one when the first arrival is after
//! t=0:
//!
//! ```text
//! | P1 | idle | P2 |
//! 0    4      6    8
//! ```

use std::io::{self, Write};

use crate::engine::RunMetrics;
use crate::models::{Ticks, Timeline};

/// Formatter for one completed run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    timeline: &'a Timeline,
    metrics: &'a RunMetrics,
}

impl<'a> Report<'a> {
    /// Creates a report over a timeline and its metrics.
    pub fn new(timeline: &'a Timeline, metrics: &'a RunMetrics) -> Self {
        Self { timeline, metrics }
    }

    /// Execution order as `"P1 P2 P4 P3"`.
    pub fn execution_order(&self) -> String {
        let pids: Vec<String> = self
            .timeline
            .execution_order()
            .map(|pid| format!("P{pid}"))
            .collect();
        pids.join(" ")
    }

    /// The two Gantt chart rows: labels above boundary timestamps.
    pub fn gantt_rows(&self) -> (String, String) {
        let mut cells: Vec<(String, Ticks)> = Vec::new();
        let mut prev_end = 0;
        for s in &self.timeline.segments {
            if s.start > prev_end {
                cells.push(("idle".into(), prev_end));
            }
            cells.push((format!("P{}", s.pid), s.start));
            prev_end = s.end;
        }

        let mut labels = String::new();
        let mut times = String::new();
        for (label, start) in &cells {
            let start = start.to_string();
            let width = label.len().max(start.len()) + 2;
            labels.push('|');
            labels.push_str(&format!("{label:^width$}"));
            times.push_str(&format!("{start:<w$}", w = width + 1));
        }
        labels.push('|');
        times.push_str(&prev_end.to_string());
        (labels, times)
    }

    /// Metrics table header.
    pub fn table_header(&self) -> String {
        format!(
            "{:<6}{:<9}{:<7}{:<9}{:<12}{:<12}",
            "PID", "Arrival", "Burst", "Waiting", "Turnaround", "Completion"
        )
    }

    /// Per-process table rows, one formatted line per process.
    ///
    /// Lazy and restartable: each call yields a fresh pass over the run.
    pub fn rows(&self) -> impl Iterator<Item = String> + 'a {
        self.timeline.timings.iter().map(|t| {
            format!(
                "{:<6}{:<9}{:<7}{:<9}{:<12}{:<12}",
                t.pid,
                t.arrival,
                t.burst,
                t.waiting(),
                t.turnaround(),
                t.completion
            )
        })
    }

    /// Summary lines, each figure to two decimal places.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Average Waiting Time: {:.2}", self.metrics.avg_waiting),
            format!("Average Turnaround Time: {:.2}", self.metrics.avg_turnaround),
            format!("CPU Utilization: {:.2}%", self.metrics.cpu_utilization),
        ]
    }

    /// Writes the complete report.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Execution Order: {}", self.execution_order())?;
        writeln!(out)?;

        writeln!(out, "Gantt Chart:")?;
        let (labels, times) = self.gantt_rows();
        writeln!(out, "{labels}")?;
        writeln!(out, "{times}")?;
        writeln!(out)?;

        writeln!(out, "Process Metrics:")?;
        writeln!(out, "{}", self.table_header())?;
        for row in self.rows() {
            writeln!(out, "{row}")?;
        }
        writeln!(out)?;

        for line in self.summary_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
