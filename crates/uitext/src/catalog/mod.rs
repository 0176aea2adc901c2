//! An in-memory string catalog with CLDR plural selection.

mod error;
mod file;
mod language;
mod plural;
mod string_catalog;
pub mod table;

pub use error::{LoadError, LoadWarning};
pub use file::TableFile;
pub use language::{ActiveLanguage, LanguageManager};
pub use plural::{PluralCategory, plural_category};
pub use string_catalog::Catalog;
pub use table::{Format, PluralForms, ResourceTable};
