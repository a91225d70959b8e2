//! Scrape runner: walk, extract, fold into the severity table.
//!
//! Documents are processed strictly in traversal order, so a Checkov ID that
//! appears in several pages ends up with the severity of the last one.

use crate::extract::Extractor;
use crate::models::{ScrapeReport, Summary};
use crate::scan::{scan, Entry, ScanOptions};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Notifications emitted while the walk is in progress.
pub enum Event<'a> {
    Skipped(&'a Path),
    Cycle(&'a Path),
}

/// Scrape every eligible document under `root`.
///
/// `on_event` fires as entries are met so callers can print skips before a
/// later I/O failure aborts the run. Any read error is fatal.
pub fn run_scrape(
    root: &Path,
    opts: &ScanOptions,
    mut on_event: impl FnMut(Event<'_>),
) -> Result<ScrapeReport> {
    let extractor = Extractor::new().context("failed to compile extraction patterns")?;
    let mut report = ScrapeReport::default();
    let mut scanned = 0usize;
    let mut extracted = 0usize;

    for entry in scan(root, opts)? {
        match entry? {
            Entry::Excluded(path) => {
                on_event(Event::Skipped(&path));
                report.skipped.push(path.to_string_lossy().to_string());
            }
            Entry::Cycle(path) => {
                on_event(Event::Cycle(&path));
                report.cycles.push(path.to_string_lossy().to_string());
            }
            Entry::Eligible(path) => {
                let bytes = fs::read(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let content = String::from_utf8_lossy(&bytes);
                scanned += 1;
                match extractor.extract(&content) {
                    Some(rec) => {
                        extracted += 1;
                        report.entries.insert(rec);
                    }
                    None => report.unmatched.push(path.to_string_lossy().to_string()),
                }
            }
        }
    }

    report.summary = Summary {
        scanned,
        extracted,
        skipped: report.skipped.len(),
        unmatched: report.unmatched.len(),
        entries: report.entries.len(),
    };
    Ok(report)
}
