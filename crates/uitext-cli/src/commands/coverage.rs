//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use uitext::{Catalog, LoadWarning};

use super::{language_of, load_into};
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language table (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Translation tables to compare against the source.
    #[arg(required = true)]
    pub targets: Vec<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete or has
    /// mismatched arguments.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
    mismatched: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_language = language_of(&args.source);
    if let Some(target) = args
        .targets
        .iter()
        .find(|target| language_of(target) == source_language)
    {
        eprintln!(
            "Target {} has the same language '{}' as the source {}",
            target.display(),
            source_language,
            args.source.display()
        );
        return Ok(exitcode::USAGE);
    }

    let mut catalog = Catalog::new();
    let source_count = load_into(&mut catalog, &source_language, &args.source)?;

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for target in &args.targets {
        let language = language_of(target);
        load_into(&mut catalog, &language, target)?;

        let mut coverage = LanguageCoverage {
            language: language.clone(),
            translated: source_count,
            missing: Vec::new(),
            extra: Vec::new(),
            mismatched: Vec::new(),
        };
        for warning in catalog.validate_tables(&source_language, &language) {
            match warning {
                LoadWarning::MissingResource { resource, .. } => coverage.missing.push(resource),
                LoadWarning::UnknownResource { resource, .. } => coverage.extra.push(resource),
                LoadWarning::ArgumentCountMismatch { resource, .. } => {
                    coverage.mismatched.push(resource);
                }
                LoadWarning::ReservedMarker { .. } => {}
            }
        }
        coverage.translated -= coverage.missing.len();
        coverage_data.push(coverage);
    }

    let any_incomplete = coverage_data
        .iter()
        .any(|c| !c.missing.is_empty() || !c.mismatched.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                extra: c.extra.clone(),
                mismatched: c.mismatched.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            print_names("Missing in", &lang_coverage.language, &lang_coverage.missing);
            print_names("Not in source, found in", &lang_coverage.language, &lang_coverage.extra);
            print_names(
                "Argument count differs in",
                &lang_coverage.language,
                &lang_coverage.mismatched,
            );
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_names(heading: &str, language: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("\n{} {}:", heading, language);
    for name in names {
        println!("  - {}", name);
    }
}
