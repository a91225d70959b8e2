//! Generated TypeScript module for the severity table.

use crate::models::SeverityMap;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONST_NAME: &str = "checkovPolicySeverity";
pub const DEFAULT_OUT: &str = "checkov_policy_severity.ts";

/// Render `export const <name> = {...};` with 2-space indented JSON.
///
/// No trailing newline; an empty table renders as `{}`.
pub fn render_module(const_name: &str, map: &SeverityMap) -> Result<String> {
    let body = serde_json::to_string_pretty(map).context("failed to serialize severity table")?;
    Ok(format!("export const {} = {};", const_name, body))
}

/// Render and write the module, replacing whatever is at `out`.
pub fn write_module(out: &Path, const_name: &str, map: &SeverityMap) -> Result<()> {
    let content = render_module(const_name, map)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(out, content).with_context(|| format!("failed to write {}", out.display()))
}
