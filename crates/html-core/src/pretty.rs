//! Depth-tracking HTML re-indentation
//!
//! This is a layout aid, not a parser: markup is split at tag boundaries and each
//! piece is placed on its own line, indented by how many tags are currently open.
//! Unclosed or stray tags are tolerated and only affect indentation.

use crate::{is_void_element, INDENT};
use regex::Regex;
use std::sync::LazyLock;

static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("inter-tag pattern is valid"));

static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").expect("blank-line pattern is valid"));

/// A single layout unit of an HTML string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlToken<'a> {
    /// Opening tag that increases nesting, e.g. `<td class="x">`
    Open(&'a str),
    /// Closing tag, e.g. `</td>`
    Close(&'a str),
    /// Tag that does not change nesting: void, self-closing, comment, doctype
    Standalone(&'a str),
    /// Run of text between tags
    Text(&'a str),
}

impl<'a> HtmlToken<'a> {
    /// Get the token source text (already trimmed)
    pub fn as_str(&self) -> &'a str {
        match self {
            HtmlToken::Open(s) | HtmlToken::Close(s) | HtmlToken::Standalone(s) | HtmlToken::Text(s) => s,
        }
    }

    fn classify(token: &'a str) -> Self {
        if token.starts_with("</") {
            return HtmlToken::Close(token);
        }

        let Some(rest) = token.strip_prefix('<') else {
            return HtmlToken::Text(token);
        };

        if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let name_len = rest
                .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
                .unwrap_or(rest.len());
            let name = &rest[..name_len];

            if token.ends_with("/>") || is_void_element(name) || closes_inline(token, name) {
                HtmlToken::Standalone(token)
            } else {
                HtmlToken::Open(token)
            }
        } else if rest.starts_with('!') || rest.starts_with('?') {
            HtmlToken::Standalone(token)
        } else {
            // A bare `<` in running text, e.g. "a < b"
            HtmlToken::Text(token)
        }
    }
}

/// Check if a tag token carries its own matching closing tag
fn closes_inline(token: &str, name: &str) -> bool {
    let closing = format!("</{}", name.to_ascii_lowercase());
    token.to_ascii_lowercase().contains(&closing)
}

/// Split HTML into trimmed, non-empty tokens
///
/// Boundaries are placed immediately before every `<` and immediately after
/// every `>`.
pub fn tokenize(html: &str) -> Vec<HtmlToken<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in html.char_indices() {
        match c {
            '<' if i > start => {
                pieces.push(&html[start..i]);
                start = i;
            }
            '>' => {
                pieces.push(&html[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < html.len() {
        pieces.push(&html[start..]);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(HtmlToken::classify)
        .collect()
}

/// Normalize line endings and whitespace ahead of tokenizing
fn normalize(html: &str) -> String {
    let unix = html.replace("\r\n", "\n").replace('\r', "\n");
    let tight = INTER_TAG_WHITESPACE.replace_all(&unix, "><");
    BLANK_LINE_RUNS.replace_all(&tight, "\n\n").into_owned()
}

/// Re-indent HTML by tag nesting depth
///
/// Each tag and each text run is placed on its own line, indented two spaces per
/// open tag. Formatting an already formatted string returns it unchanged.
///
/// # Examples
/// ```
/// use html_core::format_html;
///
/// let html = format_html("<div><p>Hi<br>there</p></div>");
/// assert_eq!(html, "<div>\n  <p>\n    Hi\n    <br>\n    there\n  </p>\n</div>");
/// ```
pub fn format_html(html: &str) -> String {
    let normalized = normalize(html);
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for token in tokenize(&normalized) {
        if let HtmlToken::Close(_) = token {
            depth = depth.saturating_sub(1);
        }

        lines.push(format!("{}{}", INDENT.repeat(depth), token.as_str()));

        if let HtmlToken::Open(_) = token {
            depth += 1;
        }
    }

    lines.join("\n")
}
