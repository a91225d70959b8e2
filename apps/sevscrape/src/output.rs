//! Output rendering for a scrape run.
//!
//! `human` mode prints only the per-file skip lines while scanning. `json`
//! mode stays quiet during the walk and prints the whole report at the end.

use crate::models::ScrapeReport;
use crate::scrape::Event;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Print a progress event for the given output mode.
pub fn print_event(ev: &Event<'_>, output: &str) {
    if output == "json" {
        return;
    }
    match ev {
        Event::Skipped(path) => println!("Skipping file: {}", path.display()),
        Event::Cycle(path) => eprintln!(
            "{} symlink cycle at {}; not descending",
            utils::warn_prefix(),
            path.display()
        ),
    }
}

/// Print the final report. Human mode has nothing left to say.
pub fn print_report(report: &ScrapeReport, out: &Path, output: &str) {
    if output == "json" {
        match serde_json::to_string_pretty(&compose_report_json(report, out)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
        }
    }
}

/// Print where configuration came from (stderr, human mode only).
pub fn print_config_note(config_path: &Path, output: &str) {
    if output == "json" {
        return;
    }
    let shown = config_path.display().to_string();
    if utils::use_colors(output) {
        eprintln!("{} using config {}", utils::note_prefix(), shown.bold());
    } else {
        eprintln!("{} using config {}", utils::note_prefix(), shown);
    }
}

/// Compose the JSON report object (pure) for testing purposes.
pub fn compose_report_json(report: &ScrapeReport, out: &Path) -> JsonVal {
    json!({
        "out": out.to_string_lossy(),
        "entries": report.entries,
        "skipped": report.skipped,
        "unmatched": report.unmatched,
        "cycles": report.cycles,
        "summary": report.summary,
    })
}
