//! Case transforms and literal replacement
//!
//! All functions return a new `String`; the input is never modified.

use super::{is_cased, push_titlecase};

/// Uppercase every char
///
/// # Example
/// ```rust
/// use strops::utils::transform::upper;
/// assert_eq!(upper("welcome to python"), "WELCOME TO PYTHON");
/// ```
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercase every char
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Flip the case of every cased char
///
/// # Example
/// ```rust
/// use strops::utils::transform::swapcase;
/// assert_eq!(swapcase("This Is Test"), "tHIS iS tEST");
/// ```
pub fn swapcase(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Titlecase the first char and lowercase the rest
///
/// # Example
/// ```rust
/// use strops::utils::transform::capitalize;
/// assert_eq!(capitalize("string in python"), "String in python");
/// assert_eq!(capitalize("hELLO"), "Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            push_titlecase(&mut result, first);
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

/// Titlecase the first cased char of every word, lowercase the rest
///
/// A word starts after any uncased char, so `"they're"` becomes `"They'Re"`.
pub fn title(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            result.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut result, c);
        }
        prev_cased = is_cased(c);
    }
    result
}

/// Replace every occurrence of `old` with `new`
///
/// An empty `old` inserts `new` at every char boundary.
///
/// # Example
/// ```rust
/// use strops::utils::transform::replace;
/// assert_eq!(replace("This Is Test", "Is", "Was"), "This Was Test");
/// ```
pub fn replace(s: &str, old: &str, new: &str) -> String {
    s.replace(old, new)
}

/// Replace at most `count` occurrences of `old` with `new`, left to right
pub fn replacen(s: &str, old: &str, new: &str, count: usize) -> String {
    s.replacen(old, new, count)
}
