//! Record extraction from AsciiDoc policy pages.
//!
//! Policy pages carry a metadata table with rows such as:
//!
//! ```text
//! | Checkov ID | https://github.com/bridgecrewio/checkov/...[CKV_AWS_1]
//! |Severity| HIGH
//! ```
//!
//! Each field is pulled with one search over the whole document; the first
//! match wins.

use crate::models::Record;
use regex::Regex;

const CHECKOV_ID_PATTERN: &str = r"\|\s*Checkov ID\s*\|\s*(?:https://[^\[]+\[([^\]]+)\]|([^\n\r]+))";
const SEVERITY_PATTERN: &str = r"\|Severity\s*\|\s*([A-Za-z0-9_]+)";

/// Compiled matchers for the two metadata rows.
pub struct Extractor {
    checkov_id: Regex,
    severity: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            checkov_id: Regex::new(CHECKOV_ID_PATTERN)?,
            severity: Regex::new(SEVERITY_PATTERN)?,
        })
    }

    /// Checkov ID: the link label for hyperlinked values, otherwise the rest
    /// of the line.
    pub fn checkov_id<'a>(&self, content: &'a str) -> Option<&'a str> {
        let caps = self.checkov_id.captures(content)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn severity<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.severity
            .captures(content)?
            .get(1)
            .map(|m| m.as_str())
    }

    /// Extract a record; `None` unless both rows are present.
    pub fn extract(&self, content: &str) -> Option<Record> {
        let checkov_id = self.checkov_id(content)?;
        let severity = self.severity(content)?;
        Some(Record {
            checkov_id: checkov_id.to_string(),
            severity: severity.to_string(),
        })
    }
}
