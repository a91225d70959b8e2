//! Extracted records and the identifier → severity table they fold into.

use serde::Serialize;
use serde_json::{Map, Value as Json};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One (identifier, severity) pair pulled from a single document.
pub struct Record {
    pub checkov_id: String,
    pub severity: String,
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
/// Lookup table keyed by Checkov ID.
///
/// Keys keep their first-insertion position; re-inserting an existing ID
/// replaces its severity in place (last write wins).
pub struct SeverityMap(Map<String, Json>);

impl SeverityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the severity it replaced, if any.
    pub fn insert(&mut self, rec: Record) -> Option<String> {
        self.0
            .insert(rec.checkov_id, Json::String(rec.severity))
            .and_then(|old| old.as_str().map(str::to_string))
    }

    pub fn get(&self, checkov_id: &str) -> Option<&str> {
        self.0.get(checkov_id).and_then(Json::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<Record> for SeverityMap {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut map = SeverityMap::new();
        for rec in iter {
            map.insert(rec);
        }
        map
    }
}
