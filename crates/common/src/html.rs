//! HTML escaping for text placed into the console panel.

/// Escape HTML text content.
///
/// Only the characters that can open markup are replaced; quotes are left as
/// they are since rendered text never lands inside an attribute.
pub fn escape_html_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Reverse [`escape_html_text`].
pub fn unescape_html_text(text: &str) -> String {
    // `&amp;` goes last so that escaped entities like `&amp;lt;` survive.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
