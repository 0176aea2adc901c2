//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single translation table.
pub struct LanguageCoverage {
    /// Language code (e.g., "ro", "ru").
    pub language: String,
    /// Number of source resources the translation defines.
    pub translated: usize,
    /// Names of source resources the translation lacks.
    pub missing: Vec<String>,
    /// Names of resources the source does not define.
    pub extra: Vec<String>,
    /// Names of resources whose argument counts differ from the source.
    pub mismatched: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Extra", "Mismatched"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
            lang.extra.len().to_string(),
            lang.mismatched.len().to_string(),
        ]);
    }

    table
}
