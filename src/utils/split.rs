//! Splitting, joining and partitioning
//!
//! Two split flavours exist and they behave differently on purpose:
//! [`split_whitespace`] collapses runs of whitespace and never yields empty
//! fields, while [`split`] on a literal delimiter keeps every empty field.

use super::is_space;
use crate::error::{Error, Result};

/// Split on runs of whitespace, ignoring leading and trailing whitespace
///
/// # Example
/// ```rust
/// use strops::utils::split::split_whitespace;
/// assert_eq!(split_whitespace("  string in\tpython "), vec!["string", "in", "python"]);
/// assert!(split_whitespace("   ").is_empty());
/// ```
pub fn split_whitespace(s: &str) -> Vec<&str> {
    s.split(is_space).filter(|field| !field.is_empty()).collect()
}

/// Split on every occurrence of the literal `sep`
///
/// # Example
/// ```rust
/// use strops::utils::split::split;
/// assert_eq!(split("a,,b", ",").unwrap(), vec!["a", "", "b"]);
/// assert!(split("abc", "").is_err());
/// ```
pub fn split<'a>(s: &'a str, sep: &str) -> Result<Vec<&'a str>> {
    if sep.is_empty() {
        return Err(Error::EmptySeparator);
    }
    Ok(s.split(sep).collect())
}

/// Split on `sep` at most `maxsplit` times, from the left
pub fn splitn<'a>(s: &'a str, sep: &str, maxsplit: usize) -> Result<Vec<&'a str>> {
    if sep.is_empty() {
        return Err(Error::EmptySeparator);
    }
    Ok(s.splitn(maxsplit.saturating_add(1), sep).collect())
}

/// Split on `sep` at most `maxsplit` times, from the right
///
/// Fields come back in their original left-to-right order.
pub fn rsplitn<'a>(s: &'a str, sep: &str, maxsplit: usize) -> Result<Vec<&'a str>> {
    if sep.is_empty() {
        return Err(Error::EmptySeparator);
    }
    let mut fields: Vec<&str> = s.rsplitn(maxsplit.saturating_add(1), sep).collect();
    fields.reverse();
    Ok(fields)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on line boundaries, dropping the line breaks
///
/// `\r\n` counts as a single boundary. A trailing line break does not
/// produce an empty last line.
///
/// # Example
/// ```rust
/// use strops::utils::split::splitlines;
/// assert_eq!(splitlines("hello\nmy name is\r\nMonty\n"), vec!["hello", "my name is", "Monty"]);
/// ```
pub fn splitlines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&s[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

/// Concatenate `items` with `sep` between consecutive elements
///
/// # Example
/// ```rust
/// use strops::utils::split::join;
/// assert_eq!(join(" ", ["string", "in", "python"]), "string in python");
/// assert_eq!(join(", ", Vec::<String>::new()), "");
/// ```
pub fn join<I>(sep: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut result = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            result.push_str(sep);
        }
        result.push_str(item.as_ref());
    }
    result
}

/// Split around the first `sep`: `(head, sep, tail)`
///
/// When `sep` is absent the result is `(s, "", "")`.
pub fn partition<'a>(s: &'a str, sep: &str) -> Result<(&'a str, &'a str, &'a str)> {
    if sep.is_empty() {
        return Err(Error::EmptySeparator);
    }
    Ok(match s.find(sep) {
        Some(i) => (&s[..i], &s[i..i + sep.len()], &s[i + sep.len()..]),
        None => (s, "", ""),
    })
}

/// Split around the last `sep`: `(head, sep, tail)`
///
/// When `sep` is absent the result is `("", "", s)`.
pub fn rpartition<'a>(s: &'a str, sep: &str) -> Result<(&'a str, &'a str, &'a str)> {
    if sep.is_empty() {
        return Err(Error::EmptySeparator);
    }
    Ok(match s.rfind(sep) {
        Some(i) => (&s[..i], &s[i..i + sep.len()], &s[i + sep.len()..]),
        None => ("", "", s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_whitespace() {
        assert_eq!(
            split_whitespace("string in python"),
            vec!["string", "in", "python"]
        );
        assert_eq!(split_whitespace("\t a \n\n b  "), vec!["a", "b"]);
        assert!(split_whitespace("").is_empty());
    }

    #[test]
    fn test_split_literal_keeps_empty_fields() {
        assert_eq!(
            split("hello\nmy name is\nMonty", "\n").unwrap(),
            vec!["hello", "my name is", "Monty"]
        );
        assert_eq!(split(",a,", ",").unwrap(), vec!["", "a", ""]);
        assert_eq!(split("", ",").unwrap(), vec![""]);
        assert!(matches!(split("a", ""), Err(Error::EmptySeparator)));
    }

    #[test]
    fn test_splitn_rsplitn() {
        assert_eq!(splitn("a-b-c", "-", 1).unwrap(), vec!["a", "b-c"]);
        assert_eq!(rsplitn("a-b-c", "-", 1).unwrap(), vec!["a-b", "c"]);
        assert_eq!(splitn("a-b-c", "-", 0).unwrap(), vec!["a-b-c"]);
        assert_eq!(splitn("a-b", "-", usize::MAX).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_splitlines() {
        assert_eq!(splitlines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(splitlines("a\rb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(splitlines("x\u{2028}y"), vec!["x", "y"]);
        assert!(splitlines("").is_empty());
        assert_eq!(splitlines("\n"), vec![""]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("-", ["a"]), "a");
        assert_eq!(join("", ["a", "b"]), "ab");
        let owned = vec!["x".to_string(), "y".to_string()];
        assert_eq!(join("/", &owned), "x/y");
    }

    #[test]
    fn test_partition() {
        assert_eq!(partition("k=v=w", "=").unwrap(), ("k", "=", "v=w"));
        assert_eq!(rpartition("k=v=w", "=").unwrap(), ("k=v", "=", "w"));
        assert_eq!(partition("kv", "=").unwrap(), ("kv", "", ""));
        assert_eq!(rpartition("kv", "=").unwrap(), ("", "", "kv"));
        assert!(partition("kv", "").is_err());
    }
}
