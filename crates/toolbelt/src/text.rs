//! String transforms: capitalize, truncate, slugify.
//!
//! All three are total over `&str` and count characters, never bytes, so
//! multi-byte input is never split mid-character.

/// Capitalize each space-separated word: first character uppercased, the
/// rest lowercased. Runs of spaces survive unchanged.
///
/// # Examples
///
/// ```
/// use toolbelt::text::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello World");
/// assert_eq!(capitalize("HELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten a string to at most `max_len` characters, marking the cut with
/// `"..."`.
///
/// A string already within `max_len` comes back unchanged. The ellipsis
/// counts toward the limit, so a `max_len` under 3 leaves no room for it
/// and the result is a bare prefix.
///
/// # Examples
///
/// ```
/// use toolbelt::text::truncate;
///
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello", 2), "he");
/// assert_eq!(truncate("hello", 0), "");
/// ```
pub fn truncate(input: &str, max_len: usize) -> String {
    let char_count = input.chars().count();
    if char_count <= max_len {
        return input.to_string();
    }
    if max_len < 3 {
        return input.chars().take(max_len).collect();
    }

    let mut out: String = input.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

/// Reduce a string to a URL-friendly slug: lowercase, every run of
/// non-alphanumeric characters collapsed to a single hyphen, none at the
/// ends. Characters outside ASCII letters and digits count as separators.
///
/// # Examples
///
/// ```
/// use toolbelt::text::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  --Already--Slugged--  "), "already-slugged");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());

    for c in input.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

// ── Tests ───────────────────────────────────────────────────────────────────
