/// Origin of the menu site; site-relative image paths are resolved against it
pub const SITE_ORIGIN: &str = "https://www.mcdonalds.co.jp";

/// Turn a site-relative path into an absolute URL.
///
/// Only values starting with `/` are rewritten, and the origin is prepended
/// verbatim. Absolute URLs and empty strings pass through unchanged.
pub fn absolutize_image_url(src: &str) -> String {
    if src.starts_with('/') {
        format!("{}{}", SITE_ORIGIN, src)
    } else {
        src.to_string()
    }
}

/// Escape text for inclusion in an HTML-formatted message
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
