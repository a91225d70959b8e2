//! sevscrape CLI binary entry point.
//! Resolves configuration, runs the scrape, writes the generated module.

use clap::Parser;
use sevscrape::cli::Cli;
use sevscrape::{config, output, render, scrape, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    // Checked before anything touches the filesystem so no output is written
    let Some(dir) = cli.dir else {
        eprintln!(
            "{} Please provide the directory path as an argument",
            utils::error_prefix()
        );
        std::process::exit(1);
    };

    let eff = match config::resolve_effective(
        cli.config.as_deref(),
        cli.out.as_deref(),
        cli.const_name.as_deref(),
        cli.output.as_deref(),
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), utils::describe_error(&e));
            std::process::exit(2);
        }
    };
    if let Some(p) = eff.config_path.as_deref() {
        output::print_config_note(p, &eff.output);
    }

    let result = scrape::run_scrape(Path::new(&dir), &eff.scan, |ev| {
        output::print_event(&ev, &eff.output)
    })
    .and_then(|report| {
        render::write_module(&eff.out, &eff.const_name, &report.entries)?;
        Ok(report)
    });
    match result {
        Ok(report) => output::print_report(&report, &eff.out, &eff.output),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), utils::describe_error(&e));
            std::process::exit(1);
        }
    }
}
