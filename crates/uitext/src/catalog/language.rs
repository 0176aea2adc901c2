//! Language selection.

use std::sync::{PoisonError, RwLock};

/// Query and change the active UI language.
///
/// Changing the language does not re-resolve anything by itself; callers
/// resolve their `UIText` values again afterwards.
pub trait LanguageManager: Send + Sync {
    /// The current language code, such as `"en"` or `"ro"`.
    fn current_language_code(&self) -> String;

    /// Make `code` the current language.
    fn on_language_selected(&self, code: &str);
}

/// A language code that can be changed through a shared reference.
#[derive(Debug)]
pub struct ActiveLanguage(RwLock<String>);

impl ActiveLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        ActiveLanguage(RwLock::new(code.into()))
    }

    pub fn get(&self) -> String {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, code: impl Into<String>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = code.into();
    }
}

impl Default for ActiveLanguage {
    fn default() -> Self {
        ActiveLanguage::new("en")
    }
}

impl From<&str> for ActiveLanguage {
    fn from(code: &str) -> Self {
        ActiveLanguage::new(code)
    }
}

impl From<String> for ActiveLanguage {
    fn from(code: String) -> Self {
        ActiveLanguage::new(code)
    }
}

impl LanguageManager for ActiveLanguage {
    fn current_language_code(&self) -> String {
        self.get()
    }

    fn on_language_selected(&self, code: &str) {
        self.set(code);
    }
}
