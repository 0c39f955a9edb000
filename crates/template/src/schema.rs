//! Token and conversion types

use email_i18n::Locale;
use serde::{Deserialize, Serialize};

/// Conversion options supplied by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Wrap the rendered fragment in the 600px email shell
    pub wrap: bool,

    /// Emit the inline stylesheet when wrapping
    pub inline_css: bool,
}

impl ConvertOptions {
    /// Options that wrap the output, with or without inline CSS
    pub fn wrapped(inline_css: bool) -> Self {
        Self {
            wrap: true,
            inline_css,
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Final pretty-printed HTML
    pub html: String,

    /// Locale detected from the data context
    pub locale: Locale,
}

/// Left-hand side of a `{{ ... }}` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `t 'key'` - direct dictionary lookup
    Translate(String),

    /// Key path or string literal, quotes not yet stripped
    Key(String),
}

/// Pipe-separated modifier applied to a resolved value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `t` - translate the resolved value
    Translate,

    /// `default: 'literal'` - fallback for missing, null or empty values
    Default(String),

    /// `date: '%Y-%m-%d'` - reformat a timestamp
    Date(String),

    /// Anything else; ignored during rendering
    Unknown(String),
}

/// A parsed `{{ directive | filter | ... }}` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub directive: Directive,
    pub filters: Vec<Filter>,
}

impl Token {
    /// Check for a bare `t` filter
    pub fn translates(&self) -> bool {
        self.filters.iter().any(|f| matches!(f, Filter::Translate))
    }

    /// Get the first `default` literal, if any
    pub fn default_literal(&self) -> Option<&str> {
        self.filters.iter().find_map(|f| match f {
            Filter::Default(literal) => Some(literal.as_str()),
            _ => None,
        })
    }

    /// Get `date` patterns in the order they appear
    pub fn date_patterns(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().filter_map(|f| match f {
            Filter::Date(pattern) => Some(pattern.as_str()),
            _ => None,
        })
    }
}
