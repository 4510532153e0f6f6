//! HTML escaping for values inserted into pages.

/// Escape text for use in HTML bodies and double-quoted attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
