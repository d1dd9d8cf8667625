//! Padding: `zfill`, `center`, `ljust`, `rjust`
//!
//! Widths are measured in chars. A string already at least `width` long is
//! returned unchanged.

use super::char_len;

fn repeat(fill: char, n: usize) -> impl Iterator<Item = char> {
    std::iter::repeat(fill).take(n)
}

/// Pad a numeric string on the left with zeros
///
/// A leading sign stays in front of the zeros.
///
/// # Example
/// ```rust
/// use strops::utils::pad::zfill;
/// assert_eq!(zfill("1", 3), "001");
/// assert_eq!(zfill("-5", 4), "-005");
/// assert_eq!(zfill("1234", 3), "1234");
/// ```
pub fn zfill(s: &str, width: usize) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }

    let (sign, digits) = match s.chars().next() {
        Some(c @ ('+' | '-')) => (Some(c), &s[1..]),
        _ => (None, s),
    };

    let mut result = String::with_capacity(width);
    result.extend(sign);
    result.extend(repeat('0', width - len));
    result.push_str(digits);
    result
}

/// Center `s` in a field of `width` spaces
pub fn center(s: &str, width: usize) -> String {
    center_with(s, width, ' ')
}

/// Center `s` in a field of `width` chars filled with `fill`
///
/// When the padding is odd the extra char goes on the left only if `width`
/// is odd as well, matching CPython.
///
/// # Example
/// ```rust
/// use strops::utils::pad::center_with;
/// assert_eq!(center_with("ab", 5, '*'), "**ab*");
/// assert_eq!(center_with("abc", 6, '*'), "*abc**");
/// ```
pub fn center_with(s: &str, width: usize, fill: char) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);

    let mut result = String::with_capacity(s.len() + margin * fill.len_utf8());
    result.extend(repeat(fill, left));
    result.push_str(s);
    result.extend(repeat(fill, margin - left));
    result
}

/// Left-align `s` in a field of `width` chars
pub fn ljust(s: &str, width: usize, fill: char) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }
    let mut result = s.to_string();
    result.extend(repeat(fill, width - len));
    result
}

/// Right-align `s` in a field of `width` chars
pub fn rjust(s: &str, width: usize, fill: char) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }
    let mut result: String = repeat(fill, width - len).collect();
    result.push_str(s);
    result
}
