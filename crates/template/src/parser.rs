//! Token parsing and key resolution

use crate::schema::{Directive, Filter, Token};
use serde_json::Value;

/// Strip one layer of matching `'` or `"` quotes
pub fn strip_quotes(s: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| s.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(s)
}

/// Parse the inner content of a `{{ ... }}` token
///
/// Content is split on `|`; the first part is the directive and the rest are
/// filters. Every part is trimmed.
pub fn parse_token(content: &str) -> Token {
    let mut parts = content.split('|').map(str::trim);
    let left = parts.next().unwrap_or_default();

    let directive = match left
        .strip_prefix('t')
        .filter(|rest| rest.starts_with(char::is_whitespace))
    {
        Some(arg) => Directive::Translate(strip_quotes(arg.trim()).to_string()),
        None => Directive::Key(left.to_string()),
    };

    Token {
        directive,
        filters: parts.map(parse_filter).collect(),
    }
}

/// Parse a single filter segment
fn parse_filter(part: &str) -> Filter {
    if part == "t" {
        return Filter::Translate;
    }

    match part.split_once(':') {
        Some((name, arg)) if name.trim() == "default" => {
            Filter::Default(strip_quotes(arg.trim()).to_string())
        }
        Some((name, arg)) if name.trim() == "date" => {
            Filter::Date(strip_quotes(arg.trim()).to_string())
        }
        _ => Filter::Unknown(part.to_string()),
    }
}

/// Resolve a dotted key path against data
///
/// An exact top-level match wins, so flat keys such as `"event.customer_name"`
/// are found before the path is walked. Any missing or non-object level
/// resolves to `None`.
pub fn resolve_key<'a>(key: &str, data: &'a Value) -> Option<&'a Value> {
    let key = strip_quotes(key);

    if let Some(value) = data.as_object().and_then(|root| root.get(key)) {
        return Some(value);
    }

    let mut current = data;
    for segment in key.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Convert a JSON value to string for rendering
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Check if a value counts as missing for `default`
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
