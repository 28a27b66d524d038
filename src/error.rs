//! Error taxonomy.
//!
//! Two failure classes exist: the workload resource cannot be read, or the
//! parsed workload is unusable for scheduling. Malformed workload lines are
//! not errors; the loader skips them (see [`crate::workload`]). Engine
//! invariant violations are programming errors and stay as debug
//! assertions, never as variants here.

use std::io;

use thiserror::Error;

use crate::models::{Pid, Ticks};

/// Errors surfaced to callers of the simulator.
#[derive(Error, Debug)]
pub enum Error {
    /// The workload file could not be opened or read.
    #[error("could not read workload '{path}': {source}")]
    Workload {
        /// Path of the workload resource.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// The workload parsed to zero records.
    #[error("no processes to schedule")]
    EmptyWorkload,

    /// A record carries a burst that makes turnaround and utilization
    /// undefined.
    #[error("process {pid} has non-positive burst {burst}")]
    NonPositiveBurst {
        /// Offending process.
        pid: Pid,
        /// Its burst value.
        burst: Ticks,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::EmptyWorkload.to_string(), "no processes to schedule");
        assert_eq!(
            Error::NonPositiveBurst { pid: 3, burst: 0 }.to_string(),
            "process 3 has non-positive burst 0"
        );
    }

    #[test]
    fn test_workload_error_carries_source() {
        let err = Error::Workload {
            path: "missing.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
