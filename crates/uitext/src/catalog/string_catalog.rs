//! An in-memory, multi-language string table.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use bon::Builder;
use futures::future;
use tracing::debug;

use crate::catalog::file::TableFile;
use crate::catalog::language::{ActiveLanguage, LanguageManager};
use crate::catalog::table::{Format, PluralForms, ResourceTable};
use crate::catalog::{LoadError, LoadWarning, PluralCategory, plural_category};
use crate::parser::{ParseError, contains_marker};
use crate::resolver::{ResolveError, StringTable, compute_suggestions};
use crate::types::ResourceId;

/// Localized string and plural resources for any number of languages.
///
/// A `Catalog` owns one [`ResourceTable`] per language and serves lookups
/// for the current language. It implements [`StringTable`], so `UIText`
/// values resolve against it directly, and [`LanguageManager`], so the
/// language can be switched through a shared reference.
///
/// Missing resources are errors; there is no fallback to another language.
///
/// # Example
///
/// ```
/// use uitext::Catalog;
///
/// let mut catalog = Catalog::builder().language("ro").build();
/// catalog
///     .load_table_str("ro", r#"{ "strings": { "greeting": "Salut, %s!" } }"#)
///     .unwrap();
///
/// assert_eq!(catalog.language(), "ro");
/// assert_eq!(catalog.resource_names("ro"), vec!["greeting"]);
/// ```
#[derive(Debug, Builder)]
pub struct Catalog {
    /// Current language code.
    #[builder(default, into)]
    language: ActiveLanguage,

    #[builder(skip)]
    tables: HashMap<String, ResourceTable>,

    /// Table file per language, for [`Catalog::reload_table`].
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builder().build()
    }
}

impl Catalog {
    /// An empty catalog with English as the current language.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Catalog::builder()
            .language(ActiveLanguage::new(language))
            .build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// The current language code.
    pub fn language(&self) -> String {
        self.language.get()
    }

    /// Change the current language.
    ///
    /// The language does not need a loaded table; lookups fail with
    /// [`ResolveError::NoTable`] until one is loaded.
    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        debug!(%language, "language selected");
        self.language.set(language);
    }

    /// Languages with a loaded table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn table(&self, language: &str) -> Option<&ResourceTable> {
        self.tables.get(language)
    }

    /// All resource names of `language`, strings and plurals, sorted.
    pub fn resource_names(&self, language: &str) -> Vec<&str> {
        let Some(table) = self.tables.get(language) else {
            return Vec::new();
        };
        let mut names = table.string_names();
        names.extend(table.plural_names());
        names.sort_unstable();
        names.dedup();
        names
    }

    // =========================================================================
    // Table Loading
    // =========================================================================

    /// Load a JSON table file for `language`, replacing any previous table.
    ///
    /// The path is remembered for [`Catalog::reload_table`]. Returns the
    /// number of resources loaded. On error the previous table is kept.
    pub fn load_table(
        &mut self,
        language: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.load_internal(language, &content, path)?;
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load a JSON table from a string, replacing any previous table.
    ///
    /// Tables loaded this way cannot be reloaded.
    ///
    /// ```
    /// use uitext::Catalog;
    ///
    /// let mut catalog = Catalog::new();
    /// let count = catalog.load_table_str("en", r#"{
    ///     "strings": { "greeting": "Hello, %s!" },
    ///     "plurals": { "products": { "one": "%s product", "other": "%s products" } }
    /// }"#).unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn load_table_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        let count = self.load_internal(language, content, &inline_path(language))?;
        self.loaded_paths.remove(language);
        Ok(count)
    }

    /// Load the table for `language` again from the file it was loaded from.
    pub fn reload_table(&mut self, language: &str) -> Result<usize, LoadError> {
        let path = self
            .loaded_paths
            .get(language)
            .cloned()
            .ok_or_else(|| LoadError::NoPathForReload {
                language: language.to_string(),
            })?;

        self.load_table(language, path)
    }

    fn load_internal(
        &mut self,
        language: &str,
        content: &str,
        path: &Path,
    ) -> Result<usize, LoadError> {
        let table = TableFile::from_json(content, path)?.compile(path)?;
        let count = table.len();
        debug!(
            %language,
            path = %path.display(),
            resources = count,
            "string table loaded"
        );
        self.tables.insert(language.to_string(), table);
        Ok(count)
    }

    /// Add or replace a single string resource.
    pub fn insert_string(
        &mut self,
        language: &str,
        name: &str,
        format: &str,
    ) -> Result<(), LoadError> {
        let format = parse_inline(language, name, format)?;
        self.tables
            .entry(language.to_string())
            .or_default()
            .insert_string(name, format)
    }

    /// Add or replace a single plural resource.
    ///
    /// ```
    /// use uitext::{Catalog, PluralCategory};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog
    ///     .insert_plural("en", "products", [
    ///         (PluralCategory::One, "%s product"),
    ///         (PluralCategory::Other, "%s products"),
    ///     ])
    ///     .unwrap();
    /// ```
    pub fn insert_plural<'a>(
        &mut self,
        language: &str,
        name: &str,
        forms: impl IntoIterator<Item = (PluralCategory, &'a str)>,
    ) -> Result<(), LoadError> {
        let mut plural = PluralForms::new();
        for (category, format) in forms {
            plural.insert(category, parse_inline(language, &format!("{name}:{category}"), format)?);
        }
        self.tables
            .entry(language.to_string())
            .or_default()
            .insert_plural(name, plural)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Report format strings of `language` containing a literal `${N}`
    /// marker. Styled substitution would treat such text as a placeholder.
    pub fn lint(&self, language: &str) -> Vec<LoadWarning> {
        let Some(table) = self.tables.get(language) else {
            return Vec::new();
        };

        let mut flagged: Vec<&str> = table
            .strings()
            .filter(|(_, format)| contains_marker(format.source()))
            .map(|(name, _)| name)
            .chain(
                table
                    .plurals()
                    .filter(|(_, forms)| {
                        forms
                            .iter()
                            .any(|(_, format)| contains_marker(format.source()))
                    })
                    .map(|(name, _)| name),
            )
            .collect();
        flagged.sort_unstable();
        flagged.dedup();

        flagged
            .into_iter()
            .map(|resource| LoadWarning::ReservedMarker {
                language: language.to_string(),
                resource: resource.to_string(),
            })
            .collect()
    }

    /// Compare the table of `target` against the table of `source`.
    ///
    /// Reports resources missing from the target, resources unknown to the
    /// source, and resources whose argument counts differ. A string and a
    /// plural sharing a name are compared separately. Warnings are ordered by
    /// resource name. Returns nothing if either language is not loaded.
    pub fn validate_tables(&self, source: &str, target: &str) -> Vec<LoadWarning> {
        let (Some(source_table), Some(target_table)) =
            (self.tables.get(source), self.tables.get(target))
        else {
            return Vec::new();
        };

        let source_counts = argument_counts(source_table);
        let target_counts = argument_counts(target_table);
        let keys: BTreeSet<&(&str, Namespace)> =
            source_counts.keys().chain(target_counts.keys()).collect();

        keys.into_iter()
            .filter_map(|key| {
                let resource = key.0.to_string();
                let language = target.to_string();
                match (source_counts.get(key), target_counts.get(key)) {
                    (Some(&source_count), Some(&translation_count))
                        if source_count != translation_count =>
                    {
                        Some(LoadWarning::ArgumentCountMismatch {
                            language,
                            resource,
                            source_count,
                            translation_count,
                        })
                    }
                    (Some(_), None) => Some(LoadWarning::MissingResource { language, resource }),
                    (None, Some(_)) => Some(LoadWarning::UnknownResource { language, resource }),
                    (Some(_), Some(_)) | (None, None) => None,
                }
            })
            .collect()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Look up a string resource in the current language and substitute
    /// `args`.
    pub fn lookup(&self, id: &ResourceId, args: &[String]) -> Result<String, ResolveError> {
        let language = self.language();
        let table = self.current_table(&language)?;
        let Some(format) = table.string(id) else {
            return Err(not_found(id, language, table.string_names()));
        };
        format.apply(id.name(), args)
    }

    /// Look up a plural resource in the current language, select the form
    /// for `quantity`, and substitute `args`.
    pub fn lookup_plural(
        &self,
        id: &ResourceId,
        quantity: i64,
        args: &[String],
    ) -> Result<String, ResolveError> {
        let language = self.language();
        let table = self.current_table(&language)?;
        let Some(forms) = table.plural(id) else {
            return Err(not_found(id, language, table.plural_names()));
        };
        let category = plural_category(&language, quantity);
        let Some(format) = forms.select(category) else {
            return Err(ResolveError::MissingPluralForm {
                resource: id.name().to_string(),
                language,
                category,
            });
        };
        format.apply(id.name(), args)
    }

    fn current_table(&self, language: &str) -> Result<&ResourceTable, ResolveError> {
        self.tables.get(language).ok_or_else(|| ResolveError::NoTable {
            language: language.to_string(),
        })
    }
}

impl StringTable for Catalog {
    fn get(
        &self,
        id: &ResourceId,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        future::ready(self.lookup(id, args))
    }

    fn get_plural(
        &self,
        id: &ResourceId,
        quantity: i64,
        args: &[String],
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        future::ready(self.lookup_plural(id, quantity, args))
    }
}

impl LanguageManager for Catalog {
    fn current_language_code(&self) -> String {
        self.language()
    }

    fn on_language_selected(&self, code: &str) {
        self.set_language(code);
    }
}

fn inline_path(language: &str) -> PathBuf {
    PathBuf::from(format!("<{language}>"))
}

fn parse_inline(language: &str, resource: &str, source: &str) -> Result<Format, LoadError> {
    Format::parse(source).map_err(|ParseError::Syntax { line, column, message }| {
        LoadError::Template {
            path: inline_path(language),
            resource: resource.to_string(),
            format: source.to_string(),
            line,
            column,
            message,
        }
    })
}

/// Strings and plurals are separate namespaces; a name may exist in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Namespace {
    String,
    Plural,
}

fn argument_counts(table: &ResourceTable) -> BTreeMap<(&str, Namespace), usize> {
    table
        .strings()
        .map(|(name, format)| ((name, Namespace::String), format.argument_count()))
        .chain(
            table
                .plurals()
                .map(|(name, forms)| ((name, Namespace::Plural), forms.argument_count())),
        )
        .collect()
}

fn not_found(id: &ResourceId, language: String, available: Vec<&str>) -> ResolveError {
    ResolveError::ResourceNotFound {
        resource: id.name().to_string(),
        suggestions: compute_suggestions(id.name(), available),
        language,
    }
}
