//! Console helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Whether ANSI colors should be emitted for the given output mode.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if use_colors("human") {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn warn_prefix() -> String {
    prefix("warn:", |s| s.yellow().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

/// Render an `anyhow` error with its context chain on one line.
pub fn describe_error(err: &anyhow::Error) -> String {
    err.chain()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_json_mode_never_colors() {
        assert!(!use_colors("json"));
    }

    #[test]
    fn test_describe_error_joins_context_chain() {
        let err = Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
            .context("failed to read docs/a.adoc")
            .unwrap_err();
        assert_eq!(describe_error(&err), "failed to read docs/a.adoc: gone");
    }
}
