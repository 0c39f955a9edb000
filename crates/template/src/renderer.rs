//! Template rendering

use crate::parser::{is_blank, parse_token, resolve_key, strip_quotes, value_to_string};
use crate::schema::{Directive, Filter, Token};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use email_i18n::Dictionary;
use regex::{Captures, Regex};
use serde_json::Value;
use std::fmt::Write;
use std::sync::LazyLock;
use tracing::debug;

/// `{{`, optional whitespace, content without `}`, optional whitespace, `}}`
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^}]+)\s*\}\}").expect("token pattern is valid"));

/// Template renderer
pub struct TemplateRenderer<'a> {
    /// Data context for key resolution
    data: &'a Value,
    /// Active phrase dictionary (for `t` lookups)
    dictionary: Option<&'a Dictionary>,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer over a data context
    pub fn new(data: &'a Value) -> Self {
        Self {
            data,
            dictionary: None,
        }
    }

    /// Set the dictionary used for translations
    ///
    /// Without a dictionary every translation falls back to its key.
    pub fn with_dictionary(mut self, dictionary: &'a Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Substitute every token in a template
    ///
    /// Tokens are replaced in a single left-to-right pass; substituted text is
    /// never scanned again. Tokens that cannot be resolved are left as written.
    pub fn render(&self, template: &str) -> String {
        TOKEN_PATTERN
            .replace_all(template, |caps: &Captures| {
                let token = parse_token(&caps[1]);
                self.render_token(&token).unwrap_or_else(|| {
                    debug!(token = &caps[0], "leaving unresolved token");
                    caps[0].to_string()
                })
            })
            .into_owned()
    }

    /// Render a single parsed token
    ///
    /// Returns `None` when the key cannot be resolved and no filter supplies a
    /// value.
    pub fn render_token(&self, token: &Token) -> Option<String> {
        let key = match &token.directive {
            Directive::Translate(key) => return Some(self.translate(key).to_string()),
            Directive::Key(key) => key.as_str(),
        };

        for filter in &token.filters {
            if let Filter::Unknown(name) = filter {
                debug!(filter = name.as_str(), key, "ignoring unknown filter");
            }
        }

        let resolved = resolve_key(key, self.data);

        if token.translates() {
            let lookup = resolved.map_or_else(|| strip_quotes(key).to_string(), value_to_string);
            return Some(self.translate(&lookup).to_string());
        }

        let mut output = match token.default_literal() {
            Some(literal) if is_blank(resolved) => Some(literal.to_string()),
            _ => resolved.map(value_to_string),
        };

        for pattern in token.date_patterns() {
            output = output.map(|text| format_date(&text, pattern).unwrap_or(text));
        }

        output
    }

    /// Look up a phrase, falling back to the key itself
    fn translate<'k>(&'k self, key: &'k str) -> &'k str {
        match self.dictionary {
            Some(dictionary) => dictionary.translate(key),
            None => key,
        }
    }
}

/// Substitute all tokens of a template against data and a dictionary
pub fn substitute(template: &str, data: &Value, dictionary: &Dictionary) -> String {
    TemplateRenderer::new(data)
        .with_dictionary(dictionary)
        .render(template)
}

/// Reformat a timestamp with a strftime pattern
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD`.
/// Returns `None` when the text is not a date or the pattern cannot be
/// rendered for it.
fn format_date(text: &str, pattern: &str) -> Option<String> {
    let text = text.trim();
    let mut out = String::new();

    let written = if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        write!(out, "{}", dt.format(pattern))
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        write!(out, "{}", dt.format(pattern))
    } else {
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        write!(out, "{}", date.and_hms_opt(0, 0, 0)?.format(pattern))
    };

    written.ok().map(|_| out)
}
