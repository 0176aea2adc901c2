//! CLI command implementations.

mod check;
mod coverage;
mod render;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use render::{run_render, RenderArgs};

use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use uitext::Catalog;

use crate::output::load_error_report;

/// Language code for a table file: its file stem (`ro.json` is `ro`).
fn language_of(path: &Path) -> String {
    path.file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("en")
        .to_string()
}

/// Load `path` into `catalog` as `language`, turning failures into a
/// diagnostic pointing into the file.
fn load_into(catalog: &mut Catalog, language: &str, path: &Path) -> miette::Result<usize> {
    catalog.load_table(language, path).map_err(|err| {
        let content = read_to_string(path).ok();
        load_error_report(path, content.as_deref(), err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_is_file_stem() {
        assert_eq!(language_of(Path::new("tables/ro.json")), "ro");
        assert_eq!(language_of(Path::new("pt-BR.json")), "pt-BR");
    }
}
