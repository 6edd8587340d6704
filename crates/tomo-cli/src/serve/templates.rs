//! HTML template rendering for the viewer page.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/index.html` - HTML structure
//! - `templates/styles.css` - CSS styles
//! - `templates/app.js` - JavaScript application code
//!
//! Files are embedded at compile time using `include_str!`.

// Embed template files at compile time
const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const STYLES: &str = include_str!("templates/styles.css");
const SCRIPT: &str = include_str!("templates/app.js");

/// Render the viewer page.
///
/// Assembles the final HTML by substituting placeholders in the template:
/// - `{{ASSET_BASE}}` - URL prefix of the character images
/// - `{{STYLES}}` - CSS styles
/// - `{{SCRIPT}}` - JavaScript code
pub fn render_page(asset_base: &str) -> String {
    HTML_TEMPLATE
        .replace("{{ASSET_BASE}}", &html_escape(asset_base))
        .replace("{{STYLES}}", STYLES)
        .replace("{{SCRIPT}}", SCRIPT)
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_replaced() {
        let page = render_page("/extracted_miis");
        assert!(!page.contains("{{"));
        assert!(page.contains("data-asset-base=\"/extracted_miis\""));
    }

    #[test]
    fn test_asset_base_escaped() {
        let page = render_page("\"><script>");
        assert!(page.contains("&quot;&gt;&lt;script&gt;"));
    }
}
