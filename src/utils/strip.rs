//! Whitespace and char-set stripping
//!
//! Results borrow from the input. Whitespace is whatever [`super::is_space`]
//! accepts.

use super::is_space;

/// Remove whitespace from both ends
///
/// # Example
/// ```rust
/// use strops::utils::strip::strip;
/// assert_eq!(strip("    string in python   "), "string in python");
/// assert_eq!(strip("This Is Test\n"), "This Is Test");
/// ```
pub fn strip(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Remove leading whitespace
pub fn lstrip(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Remove trailing whitespace
pub fn rstrip(s: &str) -> &str {
    s.trim_end_matches(is_space)
}

/// Remove any char found in `chars` from both ends
///
/// # Example
/// ```rust
/// use strops::utils::strip::strip_chars;
/// assert_eq!(strip_chars("www.example.com", "cmowz."), "example");
/// ```
pub fn strip_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_matches(|c: char| chars.contains(c))
}

/// Remove any char found in `chars` from the start
pub fn lstrip_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_start_matches(|c: char| chars.contains(c))
}

/// Remove any char found in `chars` from the end
pub fn rstrip_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_end_matches(|c: char| chars.contains(c))
}
