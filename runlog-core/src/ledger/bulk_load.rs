//! Loading runs from `distance,time[,date]` text records.

use super::ledger::Ledger;
use crate::error::{Result, RunLogError};
use crate::run::RunEntry;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One record of a run file, split but not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub distance: f64,
    pub time: String,
    pub date: Option<String>,
}

impl RunRecord {
    /// Splits a `distance,time[,date]` line.
    ///
    /// Fields are trimmed and an empty date field counts as no date. A blank
    /// line, a missing time, extra fields or a non-numeric distance are
    /// reported as [`RunLogError::Format`] for `line`.
    pub fn parse(input: &str, line: usize) -> Result<Self> {
        let format_error = |reason: String| RunLogError::Format { line, reason };

        if input.trim().is_empty() {
            return Err(format_error("empty record".to_string()));
        }
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        let (distance, time, date) = match fields.as_slice() {
            [_] => return Err(format_error("missing time, expected distance,time[,date]".to_string())),
            [distance, time] => (*distance, *time, None),
            [distance, time, date] => (*distance, *time, Some(*date).filter(|d| !d.is_empty())),
            _ => {
                return Err(format_error(format!(
                    "expected at most 3 fields (distance,time,date), found {}",
                    fields.len()
                )));
            }
        };

        let distance = distance
            .parse::<f64>()
            .map_err(|_| format_error(format!("distance '{distance}' is not a number")))?;

        Ok(Self {
            distance,
            time: time.to_string(),
            date: date.map(str::to_string),
        })
    }

    /// Validates the record into a run.
    pub fn into_run(self) -> Result<RunEntry> {
        RunEntry::new(self.distance, &self.time, self.date.as_deref())
    }
}

impl Ledger {
    /// Adds one run per line, in order.
    ///
    /// The first bad line stops the load. Runs from earlier lines stay in the
    /// ledger; nothing is rolled back. The error carries the 1-based line number.
    /// Returns the number of runs added.
    pub fn bulk_load<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (index, text) in lines.into_iter().enumerate() {
            let line = index + 1;
            let run = RunRecord::parse(text.as_ref(), line).and_then(|record| {
                record.into_run().map_err(|source| RunLogError::Record {
                    line,
                    source: Box::new(source),
                })
            });
            match run {
                Ok(run) => {
                    self.add(run);
                    added += 1;
                }
                Err(error) => {
                    warn!(line, added, %error, "bulk load stopped");
                    return Err(error);
                }
            }
        }
        info!(added, total = self.len(), "bulk load finished");
        Ok(added)
    }

    /// Reads a run file and bulk-loads its lines.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RunLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.bulk_load(content.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::tests::day;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_two_and_three_field_records() {
        let r = RunRecord::parse("4.13,00:42:14", 1).unwrap();
        assert_eq!(r.distance, 4.13);
        assert_eq!(r.time, "00:42:14");
        assert_eq!(r.date, None);

        let r = RunRecord::parse(" 6.0 , 30:00 , 2024-11-26 ", 1).unwrap();
        assert_eq!(r.distance, 6.0);
        assert_eq!(r.time, "30:00");
        assert_eq!(r.date.as_deref(), Some("2024-11-26"));
    }

    #[test]
    fn empty_date_field_means_no_date() {
        let r = RunRecord::parse("6.0,30:00,", 1).unwrap();
        assert_eq!(r.date, None);
    }

    #[test]
    fn parse_rejects_structural_problems() {
        for (input, reason) in [
            ("", "empty record"),
            ("6.0", "missing time"),
            ("6.0,30:00,2024-01-01,extra", "at most 3 fields"),
            ("six,30:00", "not a number"),
        ] {
            match RunRecord::parse(input, 7) {
                Err(RunLogError::Format { line, reason: got }) => {
                    assert_eq!(line, 7);
                    assert!(got.contains(reason), "{input:?}: {got}");
                }
                other => panic!("{input:?} should be a format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn bulk_load_adds_every_line_in_order() {
        let mut ledger = Ledger::new();
        let added = ledger
            .bulk_load(["5.0,25:00,2024-03-02", "3.0,18:00,2024-03-01"])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.runs()[0].date(), day("2024-03-01"));
        assert_eq!(ledger.longest().unwrap().distance(), 5.0);
    }

    #[test]
    fn bulk_load_stops_at_malformed_line_and_keeps_earlier_runs() {
        let source = "\
6.0,30:00,2024-03-01
5.0,25:00,2024-03-02
5.0,25:00,2024-03-03,oops
4.0,20:00,2024-03-04
3.0,15:00,2024-03-05";
        let mut ledger = Ledger::new();
        let err = ledger.bulk_load(source.lines()).unwrap_err();
        assert!(matches!(err, RunLogError::Format { line: 3, .. }));
        assert_eq!(ledger.len(), 2);
        assert!(ledger.find(day("2024-03-04")).is_err());
    }

    #[test]
    fn bulk_load_wraps_validation_errors_with_line() {
        let mut ledger = Ledger::new();
        let err = ledger
            .bulk_load(["6.0,30:00,2024-03-01", "5.0,00:00,2024-03-02"])
            .unwrap_err();
        match err {
            RunLogError::Record { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(
                    *source,
                    RunLogError::Validation(ValidationError::ZeroDuration)
                ));
            }
            other => panic!("expected a record error, got {other:?}"),
        }
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn bulk_load_reports_bad_dates_per_line() {
        let mut ledger = Ledger::new();
        let err = ledger.bulk_load(["6.0,30:00,01/03/2024"]).unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(ledger.is_empty());
    }

    #[test]
    fn load_file_reads_lines() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("runs.csv");
        fs::write(&path, "6.0,30:00,2024-03-01\r\n4.13,42:14,2024-03-02\r\n").unwrap();

        let mut ledger = Ledger::new();
        assert_eq!(ledger.load_file(&path).unwrap(), 2);
        assert_eq!(ledger.fastest().unwrap().pace().to_string(), "5:00");
        assert_eq!(
            ledger.find(day("2024-03-02")).unwrap().pace().to_string(),
            "10:14"
        );
    }

    #[test]
    fn load_file_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let mut ledger = Ledger::new();
        let err = ledger.load_file(tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RunLogError::Io { .. }));
        assert!(ledger.is_empty());
    }
}
