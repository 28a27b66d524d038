//! Non-preemptive scheduling engine.
//!
//! # Algorithm
//!
//! Both policies walk simulated time forward, never backward, and place
//! each process into exactly one execution segment:
//!
//! 1. FCFS fixes the whole order up front with a stable sort by
//!    `(arrival, pid)`, then starts each process at
//!    `max(current_time, arrival)`.
//! 2. SJF re-decides at every completion: among unscheduled processes with
//!    `arrival <= current_time`, the minimum `(burst, arrival, pid)` key
//!    wins. When nothing has arrived, the clock jumps straight to the next
//!    arrival instead of ticking forward one unit at a time.
//!
//! The input slice is never reordered or mutated; each run builds a fresh
//! [`Timeline`], so consecutive runs over the same records are independent
//! and bit-identical.

use log::debug;

use crate::error::Error;
use crate::models::{ProcessRecord, Timeline};
use crate::policy::Policy;
use crate::validation::validate_workload;

/// Runs `policy` over `records` and returns the resulting timeline.
///
/// Fails with [`Error::EmptyWorkload`] or [`Error::NonPositiveBurst`]
/// before any scheduling happens. Never loses or duplicates a process.
pub fn run(policy: Policy, records: &[ProcessRecord]) -> Result<Timeline, Error> {
    validate_workload(records)?;
    debug!("running {policy} over {} processes", records.len());

    let timeline = match policy {
        Policy::Fcfs => run_fcfs(records),
        Policy::Sjf => run_sjf(records),
    };

    debug_assert_eq!(timeline.len(), records.len());
    Ok(timeline)
}

fn run_fcfs(records: &[ProcessRecord]) -> Timeline {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| Policy::Fcfs.selection_key(&records[i]));

    let mut timeline = Timeline::with_capacity(records.len());
    let mut current_time = 0;
    for &i in &order {
        let r = &records[i];
        let start = current_time.max(r.arrival);
        timeline.record_run(r, start);
        current_time = start + r.burst;
    }
    timeline
}

fn run_sjf(records: &[ProcessRecord]) -> Timeline {
    let mut pending: Vec<usize> = (0..records.len()).collect();
    let mut timeline = Timeline::with_capacity(records.len());
    let mut current_time = 0;

    while !pending.is_empty() {
        // Among arrived, unscheduled processes: minimum (burst, arrival, pid).
        let next = pending
            .iter()
            .enumerate()
            .filter(|(_, &i)| records[i].arrival <= current_time)
            .min_by_key(|(_, &i)| Policy::Sjf.selection_key(&records[i]))
            .map(|(slot, _)| slot);

        let Some(slot) = next else {
            // CPU idles: jump to the earliest outstanding arrival.
            let next_arrival = pending
                .iter()
                .map(|&i| records[i].arrival)
                .min()
                .expect("pending is non-empty");
            debug!("cpu idle [{current_time}, {next_arrival})");
            current_time = next_arrival;
            continue;
        };

        let i = pending.remove(slot);
        let r = &records[i];
        timeline.record_run(r, current_time);
        current_time += r.burst;
    }

    timeline
}
