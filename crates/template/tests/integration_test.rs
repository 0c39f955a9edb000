//! Integration tests for template conversion

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};
use template::{convert, format_html, host, ConvertOptions, Converter, Locale};

fn unwrapped() -> ConvertOptions {
    ConvertOptions::default()
}

#[test]
fn test_vehicle_ready_example() {
    let template = "<p>Hi {{ event.customer_name | default: 'there' }}, your {{ event.vehicle_make }} \
                    plate {{ event.license_plate_number }} is ready.</p>";

    let html = convert(template, &json!({}), &unwrapped());

    assert_eq!(
        html,
        "<p>\n  Hi John Doe, your Toyota Prius plate ABC123 is ready.\n</p>"
    );
    assert_eq!(html.lines().filter(|l| l.starts_with("<p>")).count(), 1);
}

#[test]
fn test_french_greeting_example() {
    let html = convert(
        "{{ t 'greeting' }}, {{ customer.first_name }}!",
        &json!({ "locale": "fr" }),
        &unwrapped(),
    );
    assert!(html.starts_with("Bonjour, John!"));
}

#[test]
fn test_german_override_precedence() {
    let template = "{{ t 'greeting' }}";
    assert_eq!(convert(template, &json!({ "language": "de" }), &unwrapped()), "Hallo");
    assert_eq!(
        convert(
            template,
            &json!({ "language": "de", "i18n": { "de": { "greeting": "Servus" } } }),
            &unwrapped()
        ),
        "Servus"
    );
}

#[test]
fn test_override_data_wins() {
    let html = convert(
        "<td>{{ event.customer_name }} / {{ customer.first_name }}</td>",
        &json!({ "event.customer_name": "Ada Lovelace", "customer": { "first_name": "Ada" } }),
        &unwrapped(),
    );
    assert_eq!(html, "<td>\n  Ada Lovelace / Ada\n</td>");
}

#[test]
fn test_year_tokens() {
    let now = Utc.with_ymd_and_hms(2031, 2, 3, 4, 5, 6).unwrap();
    let conversion = Converter::convert_at(
        "{{ year }} {{ \"now\" | date: \"%Y\" }} {{ now | date: '%d.%m.' }}",
        &json!({}),
        &unwrapped(),
        now,
    );
    assert_eq!(conversion.html, "2031 2031 03.02.");
}

#[test]
fn test_wrap_markers() {
    let template = "<p>{{ t 'thanks' }}</p>";

    for inline_css in [true, false] {
        let html = convert(template, &json!({}), &ConvertOptions::wrapped(inline_css));
        assert_eq!(html.matches("max-width: 600px").count(), 1);
        assert_eq!(html.matches("All rights reserved.").count(), 1);
        assert_eq!(html.contains("<style"), inline_css);
        assert!(html.contains("Thank you"));
    }

    let html = convert(template, &json!({}), &unwrapped());
    assert!(!html.contains("max-width: 600px"));
    assert!(!html.contains("All rights reserved."));
}

#[test]
fn test_detected_locale_reported() {
    let conversion = Converter::convert("<p>x</p>", &json!({ "customer": { "locale": "nn" } }), &unwrapped());
    assert_eq!(conversion.locale, Locale::No);

    let conversion = Converter::convert("<p>x</p>", &json!({ "language": "xx" }), &unwrapped());
    assert_eq!(conversion.locale, Locale::En);
}

#[test]
fn test_host_validation_then_convert() {
    let data = host::parse_data(r#"{ "event.vehicle_make": "Volvo XC40" }"#).unwrap();
    let template = host::require_template("<b>{{ event.vehicle_make }}</b>").unwrap();
    assert_eq!(convert(template, &data, &unwrapped()), "<b>\n  Volvo XC40\n</b>");

    assert!(host::parse_data("{ broken").is_err());
    assert!(host::require_template("").is_err());
}

#[test]
fn test_output_is_pretty_printed_once() {
    let html = convert("<div><p>{{ t 'intro' }}</p></div>", &json!({}), &ConvertOptions::wrapped(true));
    assert_eq!(format_html(&html), html);
}

proptest! {
    /// Token-free templates are only pretty-printed.
    #[test]
    fn token_free_templates_only_formatted(body in "[a-z <>/=\"\n]{0,60}") {
        prop_assert_eq!(convert(&body, &json!({}), &unwrapped()), format_html(&body));
    }

    /// A lone `{{ k }}` renders the string form of its scalar value.
    #[test]
    fn present_key_renders_value(
        key in "k_[a-z]{1,8}(\\.[a-z]{1,6})?",
        value in "[A-Za-z0-9 ,.!-]{1,20}",
    ) {
        let mut data = serde_json::Map::new();
        data.insert(key.clone(), Value::String(value.clone()));
        let html = convert(&format!("{{{{ {key} }}}}"), &Value::Object(data), &unwrapped());
        prop_assert_eq!(html, format_html(&value));
    }

    /// Numbers render through their JSON form.
    #[test]
    fn numeric_value_renders(key in "k_[a-z]{1,8}", n in any::<i64>()) {
        let mut data = serde_json::Map::new();
        data.insert(key.clone(), json!(n));
        let html = convert(&format!("{{{{ {key} }}}}"), &Value::Object(data), &unwrapped());
        prop_assert_eq!(html, n.to_string());
    }

    /// Missing keys stay visible in the output.
    #[test]
    fn missing_key_left_in_output(key in "missing_[a-z]{1,8}(\\.[a-z]{1,6})?") {
        let token = format!("{{{{ {key} }}}}");
        let html = convert(&token, &json!({}), &unwrapped());
        prop_assert!(html.contains(&token));
    }

    /// Missing keys with a default render the default.
    #[test]
    fn missing_key_uses_default(
        key in "missing_[a-z]{1,8}",
        fallback in "[A-Za-z][A-Za-z0-9]{0,10}",
    ) {
        let html = convert(
            &format!("<p>{{{{ {key} | default: '{fallback}' }}}}</p>"),
            &json!({}),
            &unwrapped(),
        );
        prop_assert!(html.contains(&fallback));
        prop_assert!(!html.contains("{{"));
    }

    /// The converter never panics on arbitrary input.
    #[test]
    fn convert_never_panics(template in any::<String>(), wrap in any::<bool>()) {
        let options = ConvertOptions { wrap, inline_css: wrap };
        let _ = convert(&template, &json!({ "locale": template.clone() }), &options);
    }
}
