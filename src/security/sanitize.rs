//! Pattern-based input sanitization.
//!
//! This is a filter, not an HTML parser: it strips the obvious script-bearing
//! constructs and nothing more. Obfuscated or nested-encoding payloads can
//! get through, so callers must still escape at render time
//! (`security::escape`) rather than rely on sanitization alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tag and attribute fragments removed when HTML is not allowed.
///
/// Case-insensitive, non-greedy bodies. `.` does not cross newlines, so a
/// multi-line script body survives; that is part of the "not a parser"
/// caveat above.
static TAG_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)<script[^>]*>.*?</script>").expect("regex: script element"),
        Regex::new(r"(?i)<iframe[^>]*>.*?</iframe>").expect("regex: iframe element"),
        Regex::new(r"(?i)<object[^>]*>.*?</object>").expect("regex: object element"),
        Regex::new(r"(?i)<embed[^>]*>").expect("regex: embed tag"),
        Regex::new(r"(?i)on\w+\s*=").expect("regex: inline event handler"),
    ]
});

#[derive(Debug, Clone, Copy)]
pub struct SanitizeOptions {
    /// Keep markup as-is instead of stripping script-bearing tags.
    pub allow_html: bool,
    /// Maximum length in characters; longer input is truncated before
    /// tag-stripping runs.
    pub max_length: usize,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            allow_html: false,
            max_length: 10_000,
        }
    }
}

/// Trim, truncate, and strip script-bearing fragments from user input.
///
/// Truncation happens before tag-stripping, so a tag cut in half by the
/// length limit is still subject to the pattern pass.
#[must_use]
pub fn sanitize_input(input: &str, options: &SanitizeOptions) -> String {
    let trimmed = input.trim();

    let mut sanitized = if trimmed.chars().count() > options.max_length {
        trimmed.chars().take(options.max_length).collect()
    } else {
        trimmed.to_string()
    };

    if !options.allow_html {
        for pattern in TAG_PATTERNS.iter() {
            sanitized = pattern.replace_all(&sanitized, "").into_owned();
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::{sanitize_input, SanitizeOptions};

    #[test]
    fn strips_script_element() {
        let out = sanitize_input("<script>alert(1)</script>hello", &SanitizeOptions::default());
        assert!(out.contains("hello"));
        assert!(!out.contains("<script"));
        assert_eq!(out, "hello");
    }

    #[test]
    fn strips_iframe_object_embed() {
        let input = r#"a<iframe src="x">b</iframe>c<object>d</object>e<embed src="y">f"#;
        assert_eq!(sanitize_input(input, &SanitizeOptions::default()), "acef");
    }

    #[test]
    fn strips_inline_event_handlers() {
        let out = sanitize_input(
            r#"<img src="x" onerror=alert(1)>"#,
            &SanitizeOptions::default(),
        );
        assert!(!out.to_lowercase().contains("onerror"));
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let out = sanitize_input("<SCRIPT>alert(1)</SCRIPT>ok", &SanitizeOptions::default());
        assert_eq!(out, "ok");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            sanitize_input("  hello world  ", &SanitizeOptions::default()),
            "hello world"
        );
    }

    #[test]
    fn truncates_before_stripping() {
        let options = SanitizeOptions {
            allow_html: false,
            max_length: 10,
        };
        // The closing tag falls past the limit, so the pair pattern cannot
        // match; the dangling open tag remains, which render-time escaping
        // must handle.
        let out = sanitize_input("<script>alert(1)</script>", &options);
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let options = SanitizeOptions {
            allow_html: false,
            max_length: 3,
        };
        assert_eq!(sanitize_input("áéíóú", &options), "áéí");
    }

    #[test]
    fn allow_html_keeps_markup() {
        let options = SanitizeOptions {
            allow_html: true,
            ..SanitizeOptions::default()
        };
        let input = "<script>alert(1)</script>";
        assert_eq!(sanitize_input(input, &options), input);
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(sanitize_input("", &SanitizeOptions::default()), "");
        assert_eq!(sanitize_input("   ", &SanitizeOptions::default()), "");
    }
}
