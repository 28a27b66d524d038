//! Workload file loading.
//!
//! The workload is a line-oriented text file: a header line (always
//! skipped), then one process per line as four whitespace-separated
//! integers `pid arrival burst priority`. Blank lines and `#` comments are
//! ignored; any other line that does not match the four-integer shape is
//! skipped with a warning rather than failing the load. IO failures are
//! the only hard errors here; semantic checks (zero records, bad bursts)
//! belong to [`crate::validation`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::error::Error;
use crate::models::ProcessRecord;

/// Loads a workload file.
///
/// Maps open/read failures to [`Error::Workload`] with the offending path.
pub fn load_workload<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessRecord>, Error> {
    let path = path.as_ref();
    let workload_err = |source: io::Error| Error::Workload {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(workload_err)?;
    let records = parse_workload(BufReader::new(file)).map_err(workload_err)?;
    info!("loaded {} processes from '{}'", records.len(), path.display());
    Ok(records)
}

/// Parses workload lines from any buffered reader.
///
/// Returns every well-formed record in file order; only IO failures are
/// errors.
pub fn parse_workload<R: BufRead>(reader: R) -> io::Result<Vec<ProcessRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue; // header
        }
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        match parse_record(text) {
            Some(record) => records.push(record),
            None => warn!("skipping malformed workload line {}: {text:?}", index + 1),
        }
    }

    Ok(records)
}

/// Parses a single `pid arrival burst priority` line; `None` when the line
/// is not exactly four integers.
fn parse_record(line: &str) -> Option<ProcessRecord> {
    let mut fields = line.split_whitespace();
    let pid = fields.next()?.parse().ok()?;
    let arrival = fields.next()?.parse().ok()?;
    let burst = fields.next()?.parse().ok()?;
    let priority = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(ProcessRecord {
        pid,
        arrival,
        burst,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Vec<ProcessRecord> {
        parse_workload(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_header_is_skipped() {
        let records = parse("PID Arrival Burst Priority\n1 0 5 1\n");
        assert_eq!(records, vec![ProcessRecord::new(1, 0, 5).with_priority(1)]);
    }

    #[test]
    fn test_header_is_skipped_even_when_numeric() {
        // The first line is a header by position, not by content.
        let records = parse("9 9 9 9\n1 0 5 1\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 1);
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let records = parse("PID Arrival Burst Priority\n\n# staging rows\n1 0 5 1\n   \n2 1 2 0\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_malformed_lines_skipped_without_shifting() {
        let text = "PID Arrival Burst Priority\n\
                    1 0 5 1\n\
                    not a process\n\
                    2 three 4 0\n\
                    3 2 1 0\n";
        let records = parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pid, 1);
        assert_eq!(records[1].pid, 3);
    }

    #[test]
    fn test_too_many_fields_is_malformed() {
        let records = parse("header\n1 0 5 1 99\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_negative_burst_still_parses() {
        // Validation, not parsing, rejects bad bursts.
        let records = parse("header\n1 0 -5 0\n");
        assert_eq!(records[0].burst, -5);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse("").is_empty());
        assert!(parse("just a header\n").is_empty());
    }

    #[test]
    fn test_missing_file_is_workload_error() {
        let err = load_workload("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Workload { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
