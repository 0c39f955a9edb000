//! Email i18n - Locale detection and phrase dictionaries
//!
//! This crate provides:
//! - Locale detection from a template data context (`language`, `locale`, ...)
//! - Built-in phrase tables for en, de, fr, sv, da and no
//! - Per-call dictionaries with caller overrides from `i18n.<code>`
//!
//! # Example
//!
//! ```
//! use email_i18n::{build_dictionary, resolve_locale, Locale};
//! use serde_json::json;
//!
//! let data = json!({ "locale": "de-DE", "i18n": { "de": { "greeting": "Servus" } } });
//! let locale = resolve_locale(&data);
//! assert_eq!(locale, Locale::De);
//!
//! let dict = build_dictionary(locale, &data);
//! assert_eq!(dict.get("greeting"), Some("Servus"));
//! assert_eq!(dict.get("thanks"), Some("Vielen Dank"));
//! ```

mod dictionary;
mod locale;
mod phrases;

pub use dictionary::{build_dictionary, Dictionary};
pub use locale::{normalize_locale, resolve_locale, Locale};
pub use phrases::{builtin_phrases, PHRASE_KEYS};

use thiserror::Error;

/// Errors that can occur during locale handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, I18nError>;
