//! Simulation domain models.
//!
//! Core data types for describing a scheduling workload and the outcome
//! of a run. Inputs ([`ProcessRecord`]) are immutable; outputs
//! ([`Timeline`]) are built once per run and read-only afterwards.
//!
//! # Domain Mapping
//!
//! | procsim | OS textbook term |
//! |---------|------------------|
//! | ProcessRecord | PCB entry (static fields) |
//! | ExecutionSegment | Gantt chart bar |
//! | ProcessTiming | per-process schedule statistics |
//! | Timeline | single-run schedule |

mod process;
mod timeline;

pub use process::{Pid, ProcessRecord, Ticks};
pub use timeline::{ExecutionSegment, ProcessTiming, Timeline};
