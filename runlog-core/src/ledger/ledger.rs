//! The `Ledger` struct: runs kept sorted by date, plus the fastest and longest run.
use super::search::{insertion_point_by, search_first_by};
use crate::error::{Result, RunLogError};
use crate::run::RunEntry;
use crate::utils::date_utils::parse_iso_date;
use chrono::NaiveDate;
use tracing::debug;

/// An in-memory log of runs.
///
/// Runs are sorted ascending by date. Runs sharing a date keep the order they
/// were added in, and date lookups resolve to the first of them.
///
/// The fastest and longest runs are tracked as indices into the sorted list.
/// Adding a run updates them in constant time; removing a run only rescans the
/// list when the removed run was one of them.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    runs: Vec<RunEntry>,
    fastest: Option<usize>,
    longest: Option<usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// All runs, oldest first.
    pub fn runs(&self) -> &[RunEntry] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RunEntry> {
        self.runs.iter()
    }

    /// The run with the lowest pace. `None` when the ledger is empty.
    pub fn fastest(&self) -> Option<&RunEntry> {
        self.fastest.map(|index| &self.runs[index])
    }

    /// The run with the greatest distance. `None` when the ledger is empty.
    pub fn longest(&self) -> Option<&RunEntry> {
        self.longest.map(|index| &self.runs[index])
    }

    /// Inserts a run after any runs on the same date.
    ///
    /// The new run takes over as fastest only if its pace is strictly faster,
    /// and as longest only if its distance is strictly greater.
    pub fn add(&mut self, run: RunEntry) {
        let index = insertion_point_by(&self.runs, |r| r.compare_by_date(&run));
        self.runs.insert(index, run);
        shift_after_insert(&mut self.fastest, index);
        shift_after_insert(&mut self.longest, index);

        let added = &self.runs[index];
        self.fastest = match self.fastest {
            Some(current) if !added.pace().is_faster_than(&self.runs[current].pace()) => {
                Some(current)
            }
            _ => Some(index),
        };
        self.longest = match self.longest {
            Some(current) if added.distance() <= self.runs[current].distance() => Some(current),
            _ => Some(index),
        };

        debug!(date = %added.date(), index, len = self.runs.len(), "added run");
    }

    /// Removes the run matching `probe`'s date.
    ///
    /// When several runs share that date, the one equal to `probe` is removed if
    /// there is one, otherwise the first run added on that date.
    /// Returns `None` and leaves the ledger untouched when no run has that date.
    pub fn remove(&mut self, probe: &RunEntry) -> Option<RunEntry> {
        let first = search_first_by(&self.runs, |r| r.compare_by_date(probe)).ok()?;
        let offset = self.runs[first..]
            .iter()
            .take_while(|r| r.date() == probe.date())
            .position(|r| r == probe)
            .unwrap_or(0);
        Some(self.remove_at(first + offset))
    }

    /// Removes the first run added on `date`.
    pub fn remove_by_date(&mut self, date: NaiveDate) -> Option<RunEntry> {
        let index = self.position_of(date).ok()?;
        Some(self.remove_at(index))
    }

    /// Looks up a run by a `YYYY-MM-DD` date.
    ///
    /// Fails with [`RunLogError::DateParse`] for a malformed date and
    /// [`RunLogError::NotFound`] when no run is logged that day.
    pub fn find_by_date(&self, date: &str) -> Result<&RunEntry> {
        let date = parse_iso_date(date)?;
        self.find(date)
    }

    /// Looks up the first run added on `date`.
    pub fn find(&self, date: NaiveDate) -> Result<&RunEntry> {
        let index = self.position_of(date)?;
        Ok(&self.runs[index])
    }

    /// Applies `edit` to the run found by [`find_by_date`](Self::find_by_date).
    ///
    /// The edit works on a copy, so a failing edit leaves the run unchanged.
    /// The fastest run is recomputed afterwards since the pace may have changed.
    pub fn edit<T, F>(&mut self, date: &str, edit: F) -> Result<T>
    where
        F: FnOnce(&mut RunEntry) -> Result<T>,
    {
        let date = parse_iso_date(date)?;
        let index = self.position_of(date)?;

        let mut draft = self.runs[index].clone();
        let output = edit(&mut draft)?;
        self.runs[index] = draft;

        self.fastest = self.scan_fastest();
        debug!(%date, index, "edited run");
        Ok(output)
    }

    /// The `n` most recent runs, oldest first. Returns every run when there are fewer than `n`.
    pub fn latest(&self, n: usize) -> &[RunEntry] {
        let start = self.runs.len().saturating_sub(n);
        &self.runs[start..]
    }

    fn position_of(&self, date: NaiveDate) -> Result<usize> {
        search_first_by(&self.runs, |r| r.date().cmp(&date))
            .map_err(|_| RunLogError::NotFound { date })
    }

    fn remove_at(&mut self, index: usize) -> RunEntry {
        let removed = self.runs.remove(index);

        self.fastest = match self.fastest {
            Some(current) if current == index => {
                debug!(date = %removed.date(), "removed fastest run, rescanning");
                self.scan_fastest()
            }
            other => shift_after_remove(other, index),
        };
        self.longest = match self.longest {
            Some(current) if current == index => {
                debug!(date = %removed.date(), "removed longest run, rescanning");
                self.scan_longest()
            }
            other => shift_after_remove(other, index),
        };

        debug!(date = %removed.date(), index, len = self.runs.len(), "removed run");
        removed
    }

    /// Earliest run in date order wins ties.
    fn scan_fastest(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, run) in self.runs.iter().enumerate() {
            match best {
                Some(b) if !run.pace().is_faster_than(&self.runs[b].pace()) => {}
                _ => best = Some(index),
            }
        }
        best
    }

    /// Earliest run in date order wins ties.
    fn scan_longest(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, run) in self.runs.iter().enumerate() {
            match best {
                Some(b) if run.distance() <= self.runs[b].distance() => {}
                _ => best = Some(index),
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a RunEntry;
    type IntoIter = std::slice::Iter<'a, RunEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

fn shift_after_insert(slot: &mut Option<usize>, inserted: usize) {
    if let Some(index) = slot {
        if *index >= inserted {
            *index += 1;
        }
    }
}

fn shift_after_remove(slot: Option<usize>, removed: usize) -> Option<usize> {
    slot.map(|index| if index > removed { index - 1 } else { index })
}
