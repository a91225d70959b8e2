//! sevscrape core library.
//!
//! Scans an AsciiDoc policy-reference tree, extracts each page's Checkov ID
//! and severity, and renders the resulting table as a TypeScript module.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `scan`: Directory walk and filename eligibility.
//! - `extract`: Regex extraction of the ID and severity rows.
//! - `scrape`: Runner folding records into the severity table.
//! - `render`: Generated module text and file write.
//! - `models`: Records, the severity table, and the run report.
//! - `output`: Human/JSON printers.
//! - `utils`: Console prefixes and error formatting.
pub mod cli;
pub mod config;
pub mod extract;
pub mod models;
pub mod output;
pub mod render;
pub mod scan;
pub mod scrape;
pub mod utils;
