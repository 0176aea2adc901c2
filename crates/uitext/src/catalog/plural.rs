//! CLDR plural category resolution.
//!
//! English distinguishes "one" and "other", Russian uses "one", "few",
//! "many" and "other", and Arabic uses all six categories. Rules are cached
//! per thread per language and built lazily on first use.

use std::cell::RefCell;
use std::fmt;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};
use serde::{Deserialize, Serialize};

/// Language codes with dedicated plural rules. Anything else uses English.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a category name as used in table files.
    pub fn from_name(name: &str) -> Option<PluralCategory> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<IcuCategory> for PluralCategory {
    fn from(category: IcuCategory) -> Self {
        match category {
            IcuCategory::Zero => PluralCategory::Zero,
            IcuCategory::One => PluralCategory::One,
            IcuCategory::Two => PluralCategory::Two,
            IcuCategory::Few => PluralCategory::Few,
            IcuCategory::Many => PluralCategory::Many,
            IcuCategory::Other => PluralCategory::Other,
        }
    }
}

/// Normalize a language code to a supported static string reference.
///
/// Region and script subtags are ignored, so `"ro-RO"` and `"pt_BR"` use
/// the rules of `"ro"` and `"pt"`.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code.eq_ignore_ascii_case(primary))
        .copied()
        .unwrap_or("en")
}

fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "en" => locale!("en"),
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// CLDR cardinal plural category of `n` in `lang`.
///
/// # Examples
///
/// ```
/// use uitext::{PluralCategory, plural_category};
///
/// assert_eq!(plural_category("en", 1), PluralCategory::One);
/// assert_eq!(plural_category("en", 30), PluralCategory::Other);
///
/// assert_eq!(plural_category("ro", 1), PluralCategory::One);
/// assert_eq!(plural_category("ro", 5), PluralCategory::Few);
/// assert_eq!(plural_category("ro", 30), PluralCategory::Other);
///
/// assert_eq!(plural_category("ru", 2), PluralCategory::Few);
/// assert_eq!(plural_category("ru", 30), PluralCategory::Many);
/// ```
pub fn plural_category(lang: &str, n: i64) -> PluralCategory {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return entry.1.category_for(n).into();
        }
        let rules = build_rules(lang);
        let category = rules.category_for(n).into();
        cache.push((lang, rules));
        category
    })
}
