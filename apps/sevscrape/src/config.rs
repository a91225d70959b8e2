//! Configuration discovery and effective settings resolution.
//!
//! A config file is only read when passed with `--config` (`.toml`, or
//! `.yaml|.yml`); nothing is picked up from the working directory. It is
//! merged with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `out`: `checkov_policy_severity.ts`
//! - `const_name`: `checkovPolicySeverity`
//! - `output`: `human`
//! - `scan.extension`: `.adoc`
//! - `scan.exclude`: `["policies", "index"]`
//!
//! Overrides precedence: CLI > config file > defaults. The scan root only
//! ever comes from the command line.

use crate::render::{DEFAULT_CONST_NAME, DEFAULT_OUT};
use crate::scan::ScanOptions;
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static JS_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Words that cannot name an exported `const`.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Scan section under `[scan]`.
pub struct ScanCfg {
    pub extension: Option<String>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `sevscrape.toml|yaml`.
pub struct ScrapeConfig {
    pub out: Option<String>,
    pub const_name: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub scan: Option<ScanCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub out: PathBuf,
    pub const_name: String,
    pub output: String,
    pub scan: ScanOptions,
    /// Config file that contributed, if any.
    pub config_path: Option<PathBuf>,
}

/// Parse a config file, picking the format from its extension.
pub fn load_config(path: &Path) -> Result<ScrapeConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let cfg = if is_yaml {
        serde_yaml::from_str(&s)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        toml::from_str(&s).with_context(|| format!("invalid TOML in {}", path.display()))?
    };
    Ok(cfg)
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
///
/// Without `cli_config` only flags and defaults apply; a given path must
/// exist and parse.
pub fn resolve_effective(
    cli_config: Option<&str>,
    cli_out: Option<&str>,
    cli_const_name: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective> {
    let config_path = cli_config.map(PathBuf::from);
    let cfg = match config_path.as_deref() {
        Some(p) => load_config(p)?,
        None => ScrapeConfig::default(),
    };

    let out = cli_out
        .map(|s| s.to_string())
        .or(cfg.out)
        .unwrap_or_else(|| DEFAULT_OUT.to_string());
    let const_name = cli_const_name
        .map(|s| s.to_string())
        .or(cfg.const_name)
        .unwrap_or_else(|| DEFAULT_CONST_NAME.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let defaults = ScanOptions::default();
    let scan_cfg = cfg.scan.unwrap_or_default();
    let scan = ScanOptions {
        extension: scan_cfg.extension.unwrap_or(defaults.extension),
        exclude: scan_cfg.exclude.unwrap_or(defaults.exclude),
    };

    if output != "human" && output != "json" {
        bail!("unknown output mode '{}' (expected human|json)", output);
    }
    if !is_js_identifier(&const_name) {
        bail!("const name '{}' is not a valid identifier", const_name);
    }
    if scan.extension.is_empty() {
        bail!("scan.extension must not be empty");
    }

    Ok(Effective {
        out: PathBuf::from(out),
        const_name,
        output,
        scan,
        config_path,
    })
}

fn is_js_identifier(s: &str) -> bool {
    JS_IDENT.is_match(s) && !RESERVED_WORDS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let eff = resolve_effective(None, None, None, None).unwrap();
        assert_eq!(eff.out, PathBuf::from("checkov_policy_severity.ts"));
        assert_eq!(eff.const_name, "checkovPolicySeverity");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.scan.extension, ".adoc");
        assert_eq!(eff.scan.exclude, vec!["policies", "index"]);
        assert!(eff.config_path.is_none());
    }

    #[test]
    fn test_load_explicit_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sevscrape.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "{}",
            r#"
out = "src/generated/severity.ts"
const_name = "policySeverity"
output = "json"
[scan]
exclude = ["policies", "index", "overview"]
    "#
        )
        .unwrap();

        let eff = resolve_effective(path.to_str(), None, None, None).unwrap();
        assert_eq!(eff.out, PathBuf::from("src/generated/severity.ts"));
        assert_eq!(eff.const_name, "policySeverity");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.scan.exclude.len(), 3);
        // extension falls back to default when the section omits it
        assert_eq!(eff.scan.extension, ".adoc");
        assert_eq!(eff.config_path, Some(path));
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scrape.yml");
        fs::write(
            &path,
            "out: from-config.ts\noutput: json\nscan:\n  extension: .asciidoc\n",
        )
        .unwrap();

        let eff =
            resolve_effective(path.to_str(), Some("from-cli.ts"), None, Some("human")).unwrap();
        assert_eq!(eff.out, PathBuf::from("from-cli.ts"));
        assert_eq!(eff.output, "human");
        assert_eq!(eff.scan.extension, ".asciidoc");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve_effective(missing.to_str(), None, None, None).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        assert!(resolve_effective(None, None, None, Some("xml")).is_err());
        assert!(resolve_effective(None, None, Some("9lives"), None).is_err());
        let path = dir.path().join("bad.toml");
        fs::write(&path, "outt = \"x.ts\"\n").unwrap();
        assert!(resolve_effective(path.to_str(), None, None, None).is_err());
    }

    #[test]
    fn test_reserved_words_cannot_name_the_const() {
        for word in ["class", "export", "default", "const"] {
            let err = resolve_effective(None, None, Some(word), None).unwrap_err();
            assert!(err.to_string().contains("not a valid identifier"));
        }
        assert!(resolve_effective(None, None, Some("classes"), None).is_ok());
        assert!(resolve_effective(None, None, Some("$sev_2"), None).is_ok());
    }
}
