//! Prefix/suffix tests, find, count and index
//!
//! The `find` family reports a missing needle as `None`. The `index` family
//! turns the same condition into [`Error::SubstringNotFound`].

use super::{byte_offset, char_offset};
use crate::error::{Error, Result};

/// Does `s` start with `prefix`
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Does `s` end with `suffix`
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Char index of the first occurrence of `sub`
///
/// # Example
/// ```rust
/// use strops::utils::search::find;
/// assert_eq!(find("welcome to python", "come"), Some(3));
/// assert_eq!(find("welcome to python", "become"), None);
/// ```
pub fn find(s: &str, sub: &str) -> Option<usize> {
    s.find(sub).map(|b| char_offset(s, b))
}

/// Char index of the first occurrence of `sub` at or after char index `start`
///
/// A `start` past the end of `s` finds nothing, not even the empty string.
pub fn find_from(s: &str, sub: &str, start: usize) -> Option<usize> {
    let begin = byte_offset(s, start)?;
    s[begin..].find(sub).map(|b| char_offset(s, begin + b))
}

/// Char index of the last occurrence of `sub`
pub fn rfind(s: &str, sub: &str) -> Option<usize> {
    s.rfind(sub).map(|b| char_offset(s, b))
}

/// Number of non-overlapping occurrences of `sub`
///
/// The empty needle matches at every char boundary, so it counts `len + 1`.
pub fn count(s: &str, sub: &str) -> usize {
    s.matches(sub).count()
}

/// Like [`find`] but fails when `sub` is absent
pub fn index(s: &str, sub: &str) -> Result<usize> {
    find(s, sub).ok_or_else(|| Error::not_found(sub))
}

/// Like [`rfind`] but fails when `sub` is absent
pub fn rindex(s: &str, sub: &str) -> Result<usize> {
    rfind(s, sub).ok_or_else(|| Error::not_found(sub))
}
