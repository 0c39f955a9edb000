//! WASM bindings for mailtpl
//!
//! This crate provides JavaScript-friendly API for:
//! - Converting email templates with sample data
//! - Validating pasted JSON sample data before converting
//! - Formatting and wrapping HTML on its own
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { Converter, formatHtml, resolveLocale } from 'mailtpl-wasm';
//!
//! await init();
//!
//! const converter = new Converter();
//!
//! // Data as a JS object
//! const { html, locale } = converter.convert(templateText, { locale: "de" }, { wrap: true });
//!
//! // Or straight from a textarea; throws "Sample data is not valid JSON."
//! const result = converter.convertJson(templateText, sampleDataBox.value, true, true);
//!
//! // Show the detected language in the UI
//! badge.textContent = result.locale;
//! ```

use template::{host, ConvertOptions, Converter, TemplateError};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(err: TemplateError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Template converter
#[wasm_bindgen(js_name = Converter)]
pub struct EmailConverter;

#[wasm_bindgen(js_class = Converter)]
impl EmailConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EmailConverter {
        EmailConverter
    }

    /// Convert a template with sample data
    ///
    /// @param template - Template text
    /// @param data - Sample data object (overrides the built-in sample)
    /// @param options - `{ wrap?: boolean, inlineCss?: boolean }` (optional)
    /// @returns `{ html, locale }`
    pub fn convert(
        &self,
        template: &str,
        data: JsValue,
        options: JsValue,
    ) -> Result<JsValue, JsValue> {
        let template = host::require_template(template).map_err(to_js_error)?;
        let data: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
        let options: ConvertOptions = if options.is_undefined() || options.is_null() {
            ConvertOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        let conversion = Converter::convert(template, &data, &options);
        Ok(serde_wasm_bindgen::to_value(&conversion)?)
    }

    /// Convert a template with sample data given as JSON text
    ///
    /// @param template - Template text
    /// @param dataJson - Sample data JSON (blank means no overrides)
    /// @param wrap - Wrap the output in the 600px email shell
    /// @param inlineCss - Emit the inline stylesheet when wrapping
    /// @returns `{ html, locale }`
    #[wasm_bindgen(js_name = convertJson)]
    pub fn convert_json(
        &self,
        template: &str,
        data_json: &str,
        wrap: bool,
        inline_css: bool,
    ) -> Result<JsValue, JsValue> {
        let template = host::require_template(template).map_err(to_js_error)?;
        let data = host::parse_data(data_json).map_err(to_js_error)?;
        let options = ConvertOptions { wrap, inline_css };

        let conversion = Converter::convert(template, &data, &options);
        Ok(serde_wasm_bindgen::to_value(&conversion)?)
    }
}

impl Default for EmailConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-indent HTML by tag nesting
///
/// @param html - HTML text
/// @returns Indented HTML
#[wasm_bindgen(js_name = formatHtml)]
pub fn format_html(html: &str) -> String {
    template::format_html(html)
}

/// Wrap a fragment in the 600px email shell
///
/// @param fragment - Content HTML
/// @param inlineCss - Include the inline stylesheet
/// @returns Full HTML document (not indented)
#[wasm_bindgen(js_name = wrapEmail)]
pub fn wrap_email(fragment: &str, inline_css: bool) -> String {
    template::wrap_email(fragment, inline_css)
}

/// Detect the locale code of a sample data object
///
/// @param data - Sample data object
/// @returns One of "en", "de", "fr", "sv", "da", "no"
#[wasm_bindgen(js_name = resolveLocale)]
pub fn resolve_locale(data: JsValue) -> Result<String, JsValue> {
    let data: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    Ok(template::resolve_locale(&data).as_str().to_string())
}
