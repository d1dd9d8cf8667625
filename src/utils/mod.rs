//! String utilities with Python `str` semantics
//!
//! Each submodule covers one family of `str` methods. Positions are counted in
//! chars (code points), never in bytes, so results line up with what Python
//! reports for the same input.
//!
//! # Usage
//! ```rust
//! use strops::utils::{pad, search, split};
//!
//! assert_eq!(pad::zfill("1", 3), "001");
//! assert_eq!(search::find("welcome to python", "come"), Some(3));
//! assert_eq!(split::split_whitespace("  a  b "), vec!["a", "b"]);
//! ```

pub mod classify;
pub mod pad;
pub mod range;
pub mod search;
pub mod split;
pub mod strip;
pub mod transform;

pub use range::Range;

/// Whitespace as Python's `str.isspace` sees it
///
/// Rust's `char::is_whitespace` misses the ASCII information separators
/// `\x1c`..`\x1f`, which Python treats as whitespace.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Titlecase letters (Unicode category Lt) such as `ǅ`
///
/// Rust's `is_uppercase`/`is_lowercase` are both false for these.
pub fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Has case: uppercase, lowercase or titlecase
pub fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase(c)
}

/// Append the titlecase form of `c`
///
/// Digraph letters (`ǆ`, `ǉ`, `ǌ`, `ǳ`) and the Greek letters with
/// ypogegrammeni map to their single titlecase char; everything else falls
/// back to the uppercase mapping.
pub(crate) fn push_titlecase(out: &mut String, c: char) {
    let title = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        c if is_titlecase(c) => Some(c),
        _ => None,
    };
    match title {
        Some(t) => out.push(t),
        None => out.extend(c.to_uppercase()),
    }
}

/// Number of chars in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `char_idx`, or `s.len()` when `char_idx` is one past the end
pub(crate) fn byte_offset(s: &str, char_idx: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// Char index of the char starting at byte offset `byte_idx`
pub(crate) fn char_offset(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}
