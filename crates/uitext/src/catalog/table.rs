//! Per-language storage of parsed format strings.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::{LoadError, PluralCategory};
use crate::parser::{ArgumentRef, FormatSegment, FormatTemplate, ParseError, parse_format};
use crate::resolver::ResolveError;
use crate::types::ResourceId;

/// A format string together with its parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    source: String,
    template: FormatTemplate,
}

impl Format {
    /// Parse `source` as an Android-style format string.
    pub fn parse(source: impl Into<String>) -> Result<Format, ParseError> {
        let source = source.into();
        let template = parse_format(&source)?;
        Ok(Format { source, template })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    pub fn argument_count(&self) -> usize {
        self.template.argument_count()
    }

    /// Substitute `args` into this format. Surplus arguments are ignored.
    pub fn apply(&self, resource: &str, args: &[String]) -> Result<String, ResolveError> {
        let mut out = String::with_capacity(self.source.len());
        let mut next = 0;
        for segment in &self.template.segments {
            match segment {
                FormatSegment::Literal(text) => out.push_str(text),
                FormatSegment::Argument(argument) => {
                    let index = match argument {
                        ArgumentRef::Next => {
                            next += 1;
                            next - 1
                        }
                        ArgumentRef::Index(index) => *index,
                    };
                    let Some(arg) = args.get(index) else {
                        return Err(ResolveError::MissingArgument {
                            resource: resource.to_string(),
                            index,
                            provided: args.len(),
                        });
                    };
                    out.push_str(arg);
                }
            }
        }
        Ok(out)
    }
}

/// The forms of a plural resource, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    forms: BTreeMap<PluralCategory, Format>,
}

impl PluralForms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: PluralCategory, format: Format) {
        self.forms.insert(category, format);
    }

    /// The form for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> Option<&Format> {
        self.forms
            .get(&category)
            .or_else(|| self.forms.get(&PluralCategory::Other))
    }

    pub fn get(&self, category: PluralCategory) -> Option<&Format> {
        self.forms.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PluralCategory, &Format)> {
        self.forms.iter().map(|(category, format)| (*category, format))
    }

    /// The largest argument count over all forms.
    pub fn argument_count(&self) -> usize {
        self.forms
            .values()
            .map(Format::argument_count)
            .max()
            .unwrap_or(0)
    }
}

/// The string and plural resources of one language.
///
/// Resources are looked up by [`ResourceId`] hash; names are kept for
/// diagnostics and suggestions. Strings and plurals are separate namespaces.
#[derive(Debug, Default)]
pub struct ResourceTable {
    strings: HashMap<u64, (String, Format)>,
    plurals: HashMap<u64, (String, PluralForms)>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string resource, replacing one with the same name.
    pub fn insert_string(&mut self, name: &str, format: Format) -> Result<(), LoadError> {
        let hash = ResourceId::new(name).as_u64();
        check_collision(self.strings.get(&hash).map(|(n, _)| n.as_str()), name)?;
        self.strings.insert(hash, (name.to_string(), format));
        Ok(())
    }

    /// Insert a plural resource, replacing one with the same name.
    pub fn insert_plural(&mut self, name: &str, forms: PluralForms) -> Result<(), LoadError> {
        let hash = ResourceId::new(name).as_u64();
        check_collision(self.plurals.get(&hash).map(|(n, _)| n.as_str()), name)?;
        self.plurals.insert(hash, (name.to_string(), forms));
        Ok(())
    }

    pub fn string(&self, id: &ResourceId) -> Option<&Format> {
        self.strings.get(&id.as_u64()).map(|(_, format)| format)
    }

    pub fn plural(&self, id: &ResourceId) -> Option<&PluralForms> {
        self.plurals.get(&id.as_u64()).map(|(_, forms)| forms)
    }

    /// Names of the string resources, sorted.
    pub fn string_names(&self) -> Vec<&str> {
        sorted_names(self.strings.values().map(|(name, _)| name.as_str()))
    }

    /// Names of the plural resources, sorted.
    pub fn plural_names(&self) -> Vec<&str> {
        sorted_names(self.plurals.values().map(|(name, _)| name.as_str()))
    }

    pub fn strings(&self) -> impl Iterator<Item = (&str, &Format)> {
        self.strings.values().map(|(name, format)| (name.as_str(), format))
    }

    pub fn plurals(&self) -> impl Iterator<Item = (&str, &PluralForms)> {
        self.plurals.values().map(|(name, forms)| (name.as_str(), forms))
    }

    pub fn len(&self) -> usize {
        self.strings.len() + self.plurals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.plurals.is_empty()
    }
}

fn check_collision(existing: Option<&str>, name: &str) -> Result<(), LoadError> {
    match existing {
        Some(existing) if existing != name => Err(LoadError::HashCollision {
            existing: existing.to_string(),
            name: name.to_string(),
        }),
        _ => Ok(()),
    }
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.collect();
    names.sort_unstable();
    names
}
