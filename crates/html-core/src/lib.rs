//! HTML Core - Low-level HTML layout for email output
//!
//! This crate provides functionality for:
//! - Re-indenting HTML by tag nesting depth (best-effort, never fails)
//! - Wrapping a content fragment in a 600px table-based email shell
//!
//! # Example
//!
//! ```
//! use html_core::{format_html, wrap_email_at};
//!
//! let doc = wrap_email_at("<p>Hello</p>", true, 2025);
//! let pretty = format_html(&doc);
//! assert!(pretty.contains("&copy; 2025"));
//! ```

mod pretty;
mod wrapper;

pub use pretty::{format_html, tokenize, HtmlToken};
pub use wrapper::{wrap_email, wrap_email_at, CONTAINER_MAX_WIDTH, EMAIL_STYLES};

/// Indentation unit used per nesting level
pub const INDENT: &str = "  ";

/// Elements that never take a closing tag
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check whether a tag name is a void element (case-insensitive)
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_case_insensitive() {
        assert!(is_void_element("br"));
        assert!(is_void_element("IMG"));
        assert!(is_void_element("Meta"));
        assert!(!is_void_element("table"));
        assert!(!is_void_element(""));
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(INDENT.len(), 2);
    }
}
