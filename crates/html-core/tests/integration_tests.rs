//! Integration tests for html-core
//!
//! These tests run the wrapper and the formatter together the way the
//! converter does.

use html_core::{format_html, wrap_email_at, CONTAINER_MAX_WIDTH};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_wrapped_document_indentation() {
    let pretty = format_html(&wrap_email_at("<p>Hello</p>", false, 2025));
    let lines: Vec<&str> = pretty.lines().collect();

    assert_eq!(lines[0], "<!DOCTYPE html>");
    assert_eq!(lines[1], "<html lang=\"en\">");
    assert_eq!(lines[2], "  <head>");
    assert_eq!(lines[3], "    <meta charset=\"utf-8\">");
    assert_eq!(*lines.last().unwrap(), "</html>");
    assert!(pretty.contains("\n                <p>\n                  Hello\n                </p>\n"));
}

#[test]
fn test_wrapped_document_balances_depth() {
    let pretty = format_html(&wrap_email_at("<div><p>a</p><p>b</p></div>", true, 2025));
    let body_open = pretty.lines().find(|l| l.trim() == "<body>").unwrap();
    let body_close = pretty.lines().find(|l| l.trim() == "</body>").unwrap();
    assert_eq!(body_open.len() - 6, body_close.len() - 7);
}

#[test]
fn test_markers_survive_formatting() {
    let pretty = format_html(&wrap_email_at("<p>x</p>", true, 2030));
    assert_eq!(pretty.matches(CONTAINER_MAX_WIDTH).count(), 1);
    assert_eq!(pretty.matches("&copy; 2030 All rights reserved.").count(), 1);
}

fn markup() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("<div>".to_string()),
        Just("</div>".to_string()),
        Just("<p class=\"x\">".to_string()),
        Just("</p>".to_string()),
        Just("<br>".to_string()),
        Just("<img src=\"a\"/>".to_string()),
        Just("<!-- c -->".to_string()),
        Just("\r\n".to_string()),
        Just("\n\n\n".to_string()),
        "[a-z &;<>/\t ]{0,12}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    /// Formatting a formatted string changes nothing.
    #[test]
    fn format_is_idempotent(html in markup()) {
        let once = format_html(&html);
        let twice = format_html(&once);
        prop_assert_eq!(twice, once);
    }

    /// Arbitrary input never panics and never ends in whitespace.
    #[test]
    fn format_never_panics(html in any::<String>()) {
        let out = format_html(&html);
        prop_assert!(!out.ends_with(char::is_whitespace));
    }
}
