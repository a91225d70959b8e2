//! Shared data models for extraction results and the run report.

pub mod record;

pub use record::{Record, SeverityMap};

use serde::Serialize;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
/// Counters printed alongside the report in JSON mode.
pub struct Summary {
    /// Eligible documents read.
    pub scanned: usize,
    /// Documents that produced a record (before de-duplication).
    pub extracted: usize,
    pub skipped: usize,
    pub unmatched: usize,
    /// Distinct IDs in the generated table.
    pub entries: usize,
}

#[derive(Debug, Default, Serialize)]
/// Outcome of one scrape over a documentation tree.
pub struct ScrapeReport {
    pub entries: SeverityMap,
    /// Documents excluded by the filename filter.
    pub skipped: Vec<String>,
    /// Eligible documents missing an ID or a severity row.
    pub unmatched: Vec<String>,
    /// Directories not re-entered because they close a symlink cycle.
    pub cycles: Vec<String>,
    pub summary: Summary,
}
