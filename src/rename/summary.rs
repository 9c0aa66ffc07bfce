//! Counters for a batch run.

use super::renamer::FileOutcome;

/// Totals over all processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files processed.
    pub total: usize,
    /// Files renamed in place.
    pub renamed: usize,
    /// Renamed files moved into the destination directory.
    pub filed: usize,
    /// Files without usable title or author.
    pub missing: usize,
    /// Files that could not be read, renamed or filed.
    pub errors: usize,
}

impl RunSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file's outcome.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;

        match outcome {
            FileOutcome::Missing => self.missing += 1,
            FileOutcome::Planned { .. } => {}
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::Filed { .. } => {
                self.renamed += 1;
                self.filed += 1;
            }
            FileOutcome::FilingFailed { .. } => {
                self.renamed += 1;
                self.errors += 1;
            }
            FileOutcome::RenameFailed { .. } | FileOutcome::ReadFailed { .. } => self.errors += 1,
        }
    }
}
