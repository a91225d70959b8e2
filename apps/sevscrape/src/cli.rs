//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sevscrape",
    version,
    about = "Build a Checkov ID → severity table from AsciiDoc policy docs",
    long_about = "sevscrape walks a policy-reference documentation tree, reads the `Checkov ID` and `Severity` rows of every .adoc page, and writes a TypeScript module exporting the resulting lookup table.\n\nConfiguration precedence: CLI flags > --config file > defaults. No config file is read unless --config is given.",
    after_help = "Examples:\n  sevscrape docs/en/enterprise-edition/policy-reference\n  sevscrape policy-reference --out src/generated/severity.ts\n  sevscrape policy-reference --output json"
)]
/// Command-line options. The directory is optional at the parser level so a
/// missing value can be reported with exit code 1.
pub struct Cli {
    #[arg(help = "Root of the policy documentation tree to scan")]
    pub dir: Option<String>,
    #[arg(long, help = "Generated file path (default: checkov_policy_severity.ts)")]
    pub out: Option<String>,
    #[arg(long, help = "Exported constant name (default: checkovPolicySeverity)")]
    pub const_name: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Config file (.toml, .yaml or .yml); read only when given")]
    pub config: Option<String>,
    /// Positional arguments after the directory are accepted and ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_is_optional_for_parser() {
        let cli = Cli::try_parse_from(["sevscrape"]).unwrap();
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "sevscrape",
            "docs",
            "--out",
            "gen.ts",
            "--const-name",
            "sev",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.dir.as_deref(), Some("docs"));
        assert_eq!(cli.out.as_deref(), Some("gen.ts"));
        assert_eq!(cli.const_name.as_deref(), Some("sev"));
        assert_eq!(cli.output.as_deref(), Some("json"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["sevscrape", "docs", "extra", "more"]).unwrap();
        assert_eq!(cli.dir.as_deref(), Some("docs"));
        assert_eq!(cli.rest, ["extra", "more"]);
    }
}
