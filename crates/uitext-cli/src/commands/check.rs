//! Implementation of the `uitext check` command.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;
use uitext::Catalog;

use super::{language_of, load_into};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// String table files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    resources: usize,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();

    for path in &args.files {
        let language = language_of(path);
        let mut catalog = Catalog::new();
        debug!(file = %path.display(), %language, "checking");

        let result = match load_into(&mut catalog, &language, path) {
            Ok(resources) => {
                let warnings = catalog
                    .lint(&language)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                CheckResult {
                    file: path.display().to_string(),
                    ok: true,
                    error: None,
                    resources,
                    warnings,
                }
            }
            Err(report) => {
                let message = report.to_string();
                if !args.json {
                    eprintln!("{:?}", report);
                }
                CheckResult {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(message),
                    resources: 0,
                    warnings: Vec::new(),
                }
            }
        };
        results.push(result);
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    } else {
        for result in results.iter().filter(|r| r.ok) {
            for warning in &result.warnings {
                eprintln!(
                    "{} {}",
                    "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                    warning
                );
            }
            println!(
                "{} {} ({} resources)",
                "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                result.file,
                result.resources
            );
        }
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
