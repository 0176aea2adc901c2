//! The JSON string-table file format.
//!
//! ```json
//! {
//!   "strings": { "greeting": "Hello, %s!" },
//!   "plurals": { "products": { "one": "%s product", "other": "%s products" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::table::{Format, PluralForms, ResourceTable};
use crate::catalog::{LoadError, PluralCategory};
use crate::parser::ParseError;

/// A string table as stored on disk, before format strings are parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
    #[serde(default)]
    pub plurals: BTreeMap<String, BTreeMap<String, String>>,
}

impl TableFile {
    pub fn from_json(content: &str, path: &Path) -> Result<TableFile, LoadError> {
        serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse every format string into a [`ResourceTable`].
    ///
    /// Stops at the first invalid format string or plural category.
    pub fn compile(&self, path: &Path) -> Result<ResourceTable, LoadError> {
        let mut table = ResourceTable::new();

        for (name, source) in &self.strings {
            let format = parse(path, name, source)?;
            table.insert_string(name, format)?;
        }

        for (name, forms) in &self.plurals {
            let mut plural = PluralForms::new();
            for (category_name, source) in forms {
                let Some(category) = PluralCategory::from_name(category_name) else {
                    return Err(LoadError::UnknownPluralCategory {
                        path: path.to_path_buf(),
                        resource: name.clone(),
                        category: category_name.clone(),
                    });
                };
                let format = parse(path, &format!("{name}:{category}"), source)?;
                plural.insert(category, format);
            }
            table.insert_plural(name, plural)?;
        }

        Ok(table)
    }
}

fn parse(path: &Path, resource: &str, source: &str) -> Result<Format, LoadError> {
    Format::parse(source).map_err(|ParseError::Syntax { line, column, message }| {
        LoadError::Template {
            path: path.to_path_buf(),
            resource: resource.to_string(),
            format: source.to_string(),
            line,
            column,
            message,
        }
    })
}
