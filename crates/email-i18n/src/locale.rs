//! Locale detection from a template data context

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Flat top-level keys checked first, in priority order
const FLAT_CANDIDATES: [&str; 4] = ["language", "locale", "event.language", "event.locale"];

/// Nested `object.field` lookups checked after the flat keys
const NESTED_CANDIDATES: [(&str, &str); 4] = [
    ("event", "language"),
    ("event", "locale"),
    ("customer", "language"),
    ("customer", "locale"),
];

/// Supported email locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
    Sv,
    Da,
    No,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::De,
        Locale::Fr,
        Locale::Sv,
        Locale::Da,
        Locale::No,
    ];

    /// Get the two-letter language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Sv => "sv",
            Locale::Da => "da",
            Locale::No => "no",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Parse an exact two-letter code (no normalization)
    fn from_str(s: &str) -> Result<Self> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

/// Normalize a language tag to a supported locale
///
/// Lower-cases, keeps the primary subtag (`en-US` → `en`, `de_DE` → `de`) and
/// maps Norwegian Bokmål/Nynorsk to `no`. Anything unsupported becomes `en`.
///
/// # Examples
/// ```
/// use email_i18n::{normalize_locale, Locale};
///
/// assert_eq!(normalize_locale("en-US"), Locale::En);
/// assert_eq!(normalize_locale("nb"), Locale::No);
/// assert_eq!(normalize_locale("xx"), Locale::En);
/// ```
pub fn normalize_locale(tag: &str) -> Locale {
    let lower = tag.trim().to_lowercase();
    let primary = lower.split(['-', '_']).next().unwrap_or_default();
    let primary = match primary {
        "nb" | "nn" => "no",
        other => other,
    };

    primary.parse().unwrap_or_else(|err| {
        debug!(%err, tag, "falling back to default locale");
        Locale::default()
    })
}

/// Detect the locale of a data context
///
/// The first truthy value among `language`, `locale`, `event.language`,
/// `event.locale` (flat keys), then nested `event.language`, `event.locale`,
/// `customer.language` and `customer.locale` wins, even when it does not name
/// a supported locale. Without a candidate the locale is `en`.
pub fn resolve_locale(data: &Value) -> Locale {
    let flat = FLAT_CANDIDATES.iter().filter_map(|key| data.get(*key));
    let nested = NESTED_CANDIDATES
        .iter()
        .filter_map(|(object, field)| data.get(*object).and_then(|v| v.get(*field)));

    let candidate = flat.chain(nested).find_map(candidate_tag);

    let locale = candidate.as_deref().map(normalize_locale).unwrap_or_default();
    debug!(locale = %locale, tag = candidate.as_deref(), "resolved locale");
    locale
}

/// Text of a truthy candidate value
///
/// `null`, `false`, zero and the empty string are skipped. Other scalars are
/// used in their string form; arrays and objects never name a locale and end
/// up at the default.
fn candidate_tag(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
