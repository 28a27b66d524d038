//! Non-preemptive CPU scheduling simulator.
//!
//! Computes complete execution timelines for a fixed workload under
//! First-Come-First-Served and Shortest-Job-First, plus the usual
//! per-process and aggregate scheduling metrics. Educational: nothing
//! really executes. A run is a pure, deterministic computation over an
//! in-memory record set.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `ExecutionSegment`,
//!   `ProcessTiming`, `Timeline`
//! - **`policy`**: The `Policy` variants and their selection keys
//! - **`engine`**: The scheduling engine and `RunMetrics`
//! - **`validation`**: Workload integrity checks
//! - **`workload`**: Line-oriented workload file loading
//! - **`report`**: Text rendering (execution order, Gantt chart, tables)
//!
//! # Example
//!
//! ```
//! use procsim::{run, Policy, ProcessRecord, RunMetrics};
//!
//! let workload = vec![
//!     ProcessRecord::new(1, 0, 8),
//!     ProcessRecord::new(2, 1, 4),
//! ];
//! let timeline = run(Policy::Sjf, &workload)?;
//! let metrics = RunMetrics::calculate(&timeline);
//! assert_eq!(timeline.makespan(), 12);
//! assert_eq!(metrics.cpu_utilization, 100.0);
//! # Ok::<(), procsim::Error>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod engine;
pub mod error;
pub mod models;
pub mod policy;
pub mod report;
pub mod validation;
pub mod workload;

pub use engine::{run, RunMetrics};
pub use error::Error;
pub use models::{ExecutionSegment, Pid, ProcessRecord, ProcessTiming, Ticks, Timeline};
pub use policy::Policy;
pub use report::Report;
pub use workload::{load_workload, parse_workload};
