//! Fixed-width email shell

use chrono::{Datelike, Utc};

/// Inline style attribute marking the 600px container table
pub const CONTAINER_MAX_WIDTH: &str = "max-width: 600px";

/// Stylesheet embedded in the document head when inline CSS is requested
pub const EMAIL_STYLES: &str = "\
body { margin: 0; padding: 0; width: 100% !important; background-color: #f4f4f4; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }
table { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
img { border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }
.email-container { margin: 0 auto; width: 100%; background-color: #ffffff; }
.content { padding: 24px 32px; font-family: Arial, Helvetica, sans-serif; font-size: 16px; line-height: 1.5; color: #333333; }
.footer { padding: 16px 32px; font-family: Arial, Helvetica, sans-serif; font-size: 12px; color: #888888; text-align: center; }
.p-0 { padding: 0; }
.p-16 { padding: 16px; }
.text-center { text-align: center; }
.text-small { font-size: 12px; }
h1, h2, h3 { margin: 0 0 16px 0; font-family: Arial, Helvetica, sans-serif; color: #222222; }
p { margin: 0 0 16px 0; }
a.button { display: inline-block; padding: 12px 24px; border-radius: 4px; background-color: #1a73e8; color: #ffffff !important; font-weight: bold; text-decoration: none; }";

/// Wrap a content fragment in the email shell, stamping the current year
pub fn wrap_email(fragment: &str, inline_css: bool) -> String {
    wrap_email_at(fragment, inline_css, Utc::now().year())
}

/// Wrap a content fragment in the email shell with an explicit copyright year
///
/// # Arguments
/// * `fragment` - HTML placed inside the padded content cell
/// * `inline_css` - Emit the `<style>` block in the head
/// * `year` - Year shown in the footer copyright line
pub fn wrap_email_at(fragment: &str, inline_css: bool, year: i32) -> String {
    let style = if inline_css {
        format!("<style type=\"text/css\">\n{EMAIL_STYLES}\n</style>")
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\
<html lang=\"en\">\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\
<title></title>\
{style}\
</head>\
<body>\
<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\
<tr>\
<td align=\"center\">\
<table role=\"presentation\" class=\"email-container\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"{CONTAINER_MAX_WIDTH}; margin: 0 auto;\">\
<tr>\
<td class=\"content\">\
{fragment}\
</td>\
</tr>\
<tr>\
<td class=\"footer\">&copy; {year} All rights reserved.</td>\
</tr>\
</table>\
</td>\
</tr>\
</table>\
</body>\
</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_with_inline_css() {
        let html = wrap_email_at("<p>Hi</p>", true, 2024);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style type=\"text/css\">"));
        assert!(html.contains("a.button"));
        assert!(html.contains("<td class=\"content\"><p>Hi</p></td>"));
        assert!(html.contains("&copy; 2024 All rights reserved."));
    }

    #[test]
    fn test_wrap_without_inline_css_keeps_structure() {
        let styled = wrap_email_at("<p>Hi</p>", true, 2024);
        let plain = wrap_email_at("<p>Hi</p>", false, 2024);

        assert!(!plain.contains("<style"));
        let style_start = styled.find("<style").unwrap();
        let style_end = styled.find("</style>").unwrap() + "</style>".len();
        let stripped = format!("{}{}", &styled[..style_start], &styled[style_end..]);
        assert_eq!(stripped, plain);
    }

    #[test]
    fn test_container_marker_appears_once() {
        for inline_css in [true, false] {
            let html = wrap_email_at("", inline_css, 2024);
            assert_eq!(html.matches(CONTAINER_MAX_WIDTH).count(), 1);
            assert_eq!(html.matches("&copy;").count(), 1);
        }
    }

    #[test]
    fn test_wrap_email_uses_current_year() {
        let year = Utc::now().year();
        assert!(wrap_email("", false).contains(&format!("&copy; {year}")));
    }
}
