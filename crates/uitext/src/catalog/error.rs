//! Errors and warnings produced while loading string tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a string table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file is not valid JSON or does not match the table schema.
    #[error("{path}: invalid string table: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A format string could not be parsed.
    ///
    /// `line` and `column` point into `format`, not into the table file.
    #[error("{path}: resource '{resource}' {line}:{column}: {message}")]
    Template {
        path: PathBuf,
        resource: String,
        format: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// A plural resource uses a form name that is not a CLDR category.
    #[error(
        "{path}: plural resource '{resource}' has unknown category '{category}', \
         expected zero, one, two, few, many or other"
    )]
    UnknownPluralCategory {
        path: PathBuf,
        resource: String,
        category: String,
    },

    /// Two resource names hash to the same [`ResourceId`](crate::ResourceId).
    #[error("hash collision: '{existing}' and '{name}' produce the same resource id")]
    HashCollision { existing: String, name: String },

    /// Attempted to reload a table that was not loaded from a file.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

/// A non-fatal issue found in a loaded string table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A format string contains a literal `${N}` marker, which styled
    /// substitution would mistake for a placeholder.
    #[error("{language}: resource '{resource}' contains a reserved placeholder marker")]
    ReservedMarker { language: String, resource: String },

    /// A translation defines a resource the source language does not have.
    #[error("{language}: resource '{resource}' does not exist in the source language")]
    UnknownResource { language: String, resource: String },

    /// A translation is missing a resource the source language defines.
    #[error("{language}: resource '{resource}' is not translated")]
    MissingResource { language: String, resource: String },

    /// A translation consumes a different number of arguments than the source.
    #[error(
        "{language}: resource '{resource}' takes {translation_count} arguments, \
         source takes {source_count}"
    )]
    ArgumentCountMismatch {
        language: String,
        resource: String,
        source_count: usize,
        translation_count: usize,
    },
}

impl LoadWarning {
    pub fn resource(&self) -> &str {
        match self {
            LoadWarning::ReservedMarker { resource, .. }
            | LoadWarning::UnknownResource { resource, .. }
            | LoadWarning::MissingResource { resource, .. }
            | LoadWarning::ArgumentCountMismatch { resource, .. } => resource,
        }
    }
}
