//! Conversion pipeline

use crate::renderer::TemplateRenderer;
use crate::schema::{Conversion, ConvertOptions};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use email_i18n::{build_dictionary, resolve_locale};
use html_core::{format_html, wrap_email_at};
use serde_json::{json, Value};
use tracing::debug;

/// Built-in sample data, with `now` and `year` taken from `now`
pub fn default_context(now: DateTime<Utc>) -> Value {
    json!({
        "event.customer_name": "John Doe",
        "event.vehicle_make": "Toyota Prius",
        "event.license_plate_number": "ABC123",
        "customer": {
            "first_name": "John",
            "last_name": "Doe"
        },
        "now": now.to_rfc3339_opts(SecondsFormat::Millis, true),
        "year": now.year().to_string(),
    })
}

/// Shallow-merge caller data over defaults
///
/// Top-level keys of `overrides` replace the default entry as a whole. A
/// non-object override contributes nothing.
pub fn merge_context(mut defaults: Value, overrides: &Value) -> Value {
    if let (Some(base), Some(extra)) = (defaults.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    defaults
}

/// Template-to-HTML converter
pub struct Converter;

impl Converter {
    /// Convert a template using the current time
    pub fn convert(template: &str, overrides: &Value, options: &ConvertOptions) -> Conversion {
        Self::convert_at(template, overrides, options, Utc::now())
    }

    /// Convert a template with an explicit clock reading
    ///
    /// Runs the fixed pipeline: merge data, detect locale, build dictionary,
    /// substitute tokens, optionally wrap, pretty-print.
    pub fn convert_at(
        template: &str,
        overrides: &Value,
        options: &ConvertOptions,
        now: DateTime<Utc>,
    ) -> Conversion {
        let data = merge_context(default_context(now), overrides);
        let locale = resolve_locale(&data);
        let dictionary = build_dictionary(locale, &data);

        debug!(
            %locale,
            wrap = options.wrap,
            inline_css = options.inline_css,
            "converting template"
        );

        let body = TemplateRenderer::new(&data)
            .with_dictionary(&dictionary)
            .render(template);

        let html = if options.wrap {
            wrap_email_at(&body, options.inline_css, now.year())
        } else {
            body
        };

        Conversion {
            html: format_html(&html),
            locale,
        }
    }
}

/// Convert a template to pretty-printed HTML
///
/// # Example
/// ```
/// use serde_json::json;
/// use template::{convert, ConvertOptions};
///
/// let html = convert(
///     "<p>{{ t 'greeting' }}, {{ customer.first_name }}!</p>",
///     &json!({ "locale": "de" }),
///     &ConvertOptions::default(),
/// );
/// assert_eq!(html, "<p>\n  Hallo, John!\n</p>");
/// ```
pub fn convert(template: &str, overrides: &Value, options: &ConvertOptions) -> String {
    Converter::convert(template, overrides, options).html
}
