//! HTML helper functions

/// Escape text for use in HTML content and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a `<meta name=...>` tag
pub fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

/// Generate a `<meta property=...>` tag (Open Graph)
pub fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        html_escape(property),
        html_escape(content)
    )
}

/// Generate a `<link rel=...>` tag
pub fn link_rel(rel: &str, href: &str) -> String {
    format!(
        r#"<link rel="{}" href="{}">"#,
        html_escape(rel),
        html_escape(href)
    )
}
