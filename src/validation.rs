//! Workload validation.
//!
//! Checks a parsed workload before it reaches the engine. Two conditions
//! are fatal for a run: an empty record set (every aggregate metric would
//! divide by zero) and a non-positive burst (turnaround and utilization
//! become undefined). Duplicate pids are tolerated, since selection
//! tie-breaks keep runs deterministic, but worth flagging in the log.

use std::collections::HashSet;

use log::warn;

use crate::error::Error;
use crate::models::ProcessRecord;

/// Validates a workload for scheduling.
///
/// Returns the first fatal problem found; runs before every engine
/// invocation.
pub fn validate_workload(records: &[ProcessRecord]) -> Result<(), Error> {
    if records.is_empty() {
        return Err(Error::EmptyWorkload);
    }

    for r in records {
        if r.burst <= 0 {
            return Err(Error::NonPositiveBurst {
                pid: r.pid,
                burst: r.burst,
            });
        }
    }

    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.pid) {
            warn!("duplicate pid {} in workload; ties resolve by input order", r.pid);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_workload() {
        let records = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 3, 1)];
        assert!(validate_workload(&records).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        assert!(matches!(
            validate_workload(&[]),
            Err(Error::EmptyWorkload)
        ));
    }

    #[test]
    fn test_zero_burst() {
        let records = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 1, 0)];
        assert!(matches!(
            validate_workload(&records),
            Err(Error::NonPositiveBurst { pid: 2, burst: 0 })
        ));
    }

    #[test]
    fn test_negative_burst() {
        let records = vec![ProcessRecord::new(9, 0, -4)];
        assert!(matches!(
            validate_workload(&records),
            Err(Error::NonPositiveBurst { pid: 9, burst: -4 })
        ));
    }

    #[test]
    fn test_duplicate_pids_tolerated() {
        let records = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(1, 2, 3)];
        assert!(validate_workload(&records).is_ok());
    }
}
