//! Per-conversion phrase dictionary

use crate::{builtin_phrases, Locale};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Phrase dictionary for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Locale the phrases belong to
    locale: Locale,
    /// Phrase key to localized phrase
    phrases: HashMap<String, String>,
}

impl Dictionary {
    /// Create a dictionary holding the built-in phrases of a locale
    pub fn builtin(locale: Locale) -> Self {
        let phrases = builtin_phrases(locale)
            .iter()
            .map(|(key, phrase)| (key.to_string(), phrase.to_string()))
            .collect();

        Self { locale, phrases }
    }

    /// Merge caller phrases over the current ones
    ///
    /// Numbers and booleans are taken in their string form; `null`, arrays and
    /// objects are skipped.
    pub fn with_overrides(mut self, overrides: &Map<String, Value>) -> Self {
        let mut applied = 0;
        for (key, value) in overrides {
            let phrase = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    debug!(key = key.as_str(), "skipping non-scalar phrase override");
                    continue;
                }
            };
            self.phrases.insert(key.clone(), phrase);
            applied += 1;
        }

        debug!(locale = %self.locale, applied, "applied phrase overrides");
        self
    }

    /// Look up a phrase
    pub fn get(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// Look up a phrase, falling back to the key itself
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Get the dictionary locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Get the number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}

/// Build the active dictionary for a conversion
///
/// Starts from the built-in table for `locale` and merges
/// `data.i18n.<locale>` over it when present.
pub fn build_dictionary(locale: Locale, data: &Value) -> Dictionary {
    let dict = Dictionary::builtin(locale);

    match data
        .get("i18n")
        .and_then(|i18n| i18n.get(locale.as_str()))
        .and_then(Value::as_object)
    {
        Some(overrides) => dict.with_overrides(overrides),
        None => dict,
    }
}
