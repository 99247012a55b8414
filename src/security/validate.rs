//! Format validators for user-supplied text.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// UX-level email syntax check: `non-whitespace@non-whitespace.non-whitespace`.
///
/// Intentionally permissive, nowhere near RFC 5322. A `true` here means the
/// text is shaped like an address, not that it is deliverable.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("regex: email"));

/// Patterns that mark input as unsafe for inclusion near SQL.
///
/// Matches bare keywords too ("please update your file" is rejected); that
/// breadth is deliberate and makes this a defense-in-depth heuristic only.
/// Parameterized queries remain the actual defense.
static SQL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)('|--|;|\||&&|xp_|sp_)").expect("regex: sql metacharacters"),
        Regex::new(r"(?i)UNION").expect("regex: sql union"),
        Regex::new(r"(?i)SELECT").expect("regex: sql select"),
        Regex::new(r"(?i)INSERT").expect("regex: sql insert"),
        Regex::new(r"(?i)UPDATE").expect("regex: sql update"),
        Regex::new(r"(?i)DELETE").expect("regex: sql delete"),
        Regex::new(r"(?i)DROP").expect("regex: sql drop"),
        Regex::new(r"(?i)CREATE").expect("regex: sql create"),
        Regex::new(r"(?i)ALTER").expect("regex: sql alter"),
        Regex::new(r"(?i)EXEC").expect("regex: sql exec"),
        Regex::new(r"(?i)EXECUTE").expect("regex: sql execute"),
    ]
});

/// Basic email format check.
#[must_use]
pub fn validate_email(text: &str) -> bool {
    !text.is_empty() && EMAIL_RE.is_match(text)
}

/// Accept iff the string parses as a structurally valid URL.
///
/// No scheme allow-list at this layer; callers requiring https-only must
/// check `Url::scheme` on their own parse.
#[must_use]
pub fn validate_url(text: &str) -> bool {
    !text.is_empty() && Url::parse(text).is_ok()
}

/// Heuristic SQL-injection screen: `true` means no known-dangerous pattern
/// matched. Not a substitute for parameterized queries.
#[must_use]
pub fn is_safe_sql_input(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    !SQL_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}
