//! One-way escapes for HTML and script string contexts.
//!
//! Both transforms are one-way: no unescape is provided, and already-escaped
//! text will be escaped again. Apply them once, at render time, on the raw
//! value.

/// Escape the five HTML-significant characters with their named entities.
///
/// Output contains no raw `&`, `<`, `>`, `"`, or `'`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a value for embedding inside a script-context string literal.
///
/// Backslash is handled first so the escapes inserted for the remaining
/// characters are never escaped twice. Forward slash is included to keep
/// `</script>` from terminating an enclosing script element.
#[must_use]
pub fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '/' => escaped.push_str("\\/"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
