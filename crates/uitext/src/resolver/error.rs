//! Error types for text resolution.

use strsim::levenshtein;
use thiserror::Error;

use crate::catalog::PluralCategory;

/// An error that occurred while resolving a [`UIText`](crate::UIText).
///
/// Any error aborts the whole resolution: no partially resolved text is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The string table has no resource with this id.
    #[error("resource not found: '{resource}' in language '{language}'{}", did_you_mean(suggestions))]
    ResourceNotFound {
        resource: String,
        language: String,
        suggestions: Vec<String>,
    },

    /// No string table is loaded for the requested language.
    #[error("no string table loaded for language '{language}'")]
    NoTable { language: String },

    /// A plural resource has neither the selected form nor an `other` form.
    #[error(
        "plural resource '{resource}' has no '{category}' or 'other' form in language '{language}'"
    )]
    MissingPluralForm {
        resource: String,
        language: String,
        category: PluralCategory,
    },

    /// A format string references more arguments than were supplied.
    #[error("resource '{resource}' references argument {} but only {provided} were supplied", index + 1)]
    MissingArgument {
        resource: String,
        index: usize,
        provided: usize,
    },

    /// An asynchronous string table could not serve the request.
    #[error("string table unavailable for '{resource}': {message}")]
    Unavailable { resource: String, message: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three typo suggestions for `name` among `available`.
///
/// Candidates within Levenshtein distance 1 (names of up to three characters)
/// or 2 (longer names) are returned, closest first. Exact matches are skipped.
///
/// ```
/// use uitext::compute_suggestions;
///
/// let available = ["greeting", "products", "cart_status"];
/// assert_eq!(compute_suggestions("greting", available), vec!["greeting"]);
/// assert!(compute_suggestions("xyz", available).is_empty());
/// ```
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
