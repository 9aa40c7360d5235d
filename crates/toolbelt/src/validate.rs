//! String validation predicates.
//!
//! Every predicate here is total over `&str` and answers with a plain
//! `bool`; an empty string never validates. The patterns are compiled
//! once into process-lifetime statics.
//!
//! The email and URL checks are deliberately pattern-only: a practical
//! shape test, not an RFC-grade parse. The URL scheme allowlist is
//! `http`, `https`, `ftp`, `ftps`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Practical email shape: local part, `@`, dotted domain, 2+ letter TLD.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("hard-coded pattern")
});

/// Scheme, optional `www.`, dotted host, optional port and path.
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|ftp|ftps)://(www\.)?[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+(:[0-9]{1,5})?(/.*)?$")
        .expect("hard-coded pattern")
});

/// ASCII letters and digits only, at least one character.
static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("hard-coded pattern"));

/// Whether a string looks like an email address.
///
/// # Examples
///
/// ```
/// use toolbelt::validate::is_email;
///
/// assert!(is_email("user@example.com"));
/// assert!(is_email("first.last@sub.example.co"));
/// assert!(!is_email("missing-at.example.com"));
/// assert!(!is_email(""));
/// ```
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whether a string looks like a URL with an allowed scheme.
///
/// # Examples
///
/// ```
/// use toolbelt::validate::is_url;
///
/// assert!(is_url("https://example.com/path"));
/// assert!(is_url("ftp://files.example.org:2121"));
/// assert!(!is_url("example.com"));
/// assert!(!is_url("mailto:user@example.com"));
/// ```
pub fn is_url(value: &str) -> bool {
    URL.is_match(value)
}

/// Whether a string is nonempty and contains only ASCII letters and
/// digits.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

/// Whether a string is at least `min` characters long.
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Whether a string is at most `max` characters long.
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── is_email tests ──────────────────────────────────────────────────

    #[test]
    fn test_email_accepts_common_shapes() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last@example.com"));
        assert!(is_email("user_name-1@sub.example.org"));
    }

    #[test]
    fn test_email_rejects_missing_parts() {
        assert!(!is_email("plainaddress"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@example"));
    }

    #[test]
    fn test_email_rejects_short_tld() {
        assert!(!is_email("user@example.c"));
        assert!(is_email("user@example.co"));
    }

    #[test]
    fn test_email_rejects_empty_and_spaces() {
        assert!(!is_email(""));
        assert!(!is_email("user name@example.com"));
    }

    // ── is_url tests ────────────────────────────────────────────────────

    #[test]
    fn test_url_accepts_allowed_schemes() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://www.example.com"));
        assert!(is_url("ftp://files.example.org"));
        assert!(is_url("ftps://files.example.org"));
    }

    #[test]
    fn test_url_accepts_port_and_path() {
        assert!(is_url("https://example.com:8080"));
        assert!(is_url("https://example.com/path/to/page?q=1"));
    }

    #[test]
    fn test_url_rejects_other_schemes_and_bare_hosts() {
        assert!(!is_url("file:///etc/passwd"));
        assert!(!is_url("mailto:user@example.com"));
        assert!(!is_url("example.com"));
        assert!(!is_url("https://"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_url_requires_dotted_host() {
        assert!(!is_url("https://localhost"));
        assert!(is_url("https://localhost.localdomain"));
    }

    // ── is_alphanumeric tests ───────────────────────────────────────────

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("ABC"));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_alphanumeric_is_ascii_only() {
        assert!(!is_alphanumeric("héllo"));
    }

    // ── length tests ────────────────────────────────────────────────────

    #[test]
    fn test_min_length() {
        assert!(min_length("hello", 3));
        assert!(min_length("hello", 5));
        assert!(!min_length("hello", 6));
        assert!(min_length("", 0));
    }

    #[test]
    fn test_max_length() {
        assert!(max_length("hello", 10));
        assert!(max_length("hello", 5));
        assert!(!max_length("hello", 4));
        assert!(max_length("", 0));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // Five characters, seven bytes.
        assert!(max_length("héllö", 5));
        assert!(min_length("héllö", 5));
    }
}
