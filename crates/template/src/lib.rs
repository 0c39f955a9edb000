//! Template Engine - Liquid-style email templates to static HTML
//!
//! This crate provides:
//! - `{{ key }}` substitution against a JSON data context (flat or dotted keys)
//! - Filters: `t` (translate), `default: 'literal'`, `date: '%Y'`
//! - `{{ t 'key' }}` phrase lookups in the detected locale
//! - The conversion pipeline (merge data, substitute, wrap, pretty-print)
//! - Input validation helpers for hosts
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use template::{convert, ConvertOptions};
//!
//! let html = convert(
//!     "<p>Hi {{ event.customer_name | default: 'there' }}</p>",
//!     &json!({}),
//!     &ConvertOptions::default(),
//! );
//! assert_eq!(html, "<p>\n  Hi John Doe\n</p>");
//! ```

mod converter;
pub mod host;
pub mod parser;
mod renderer;
mod schema;

pub use converter::{convert, default_context, merge_context, Converter};
pub use renderer::{substitute, TemplateRenderer};
pub use schema::*;

pub use email_i18n::{build_dictionary, resolve_locale, Dictionary, Locale};
pub use html_core::{format_html, wrap_email};

use thiserror::Error;

/// Errors raised while validating converter input
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Please provide a template.")]
    EmptyTemplate,

    #[error("Sample data is not valid JSON.")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid sample data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
