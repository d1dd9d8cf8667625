//! Character-class predicates (`isalnum`, `isalpha`, `isdigit`, ...)
//!
//! The empty string is never a member of any class. `is_lower`, `is_upper`
//! and `is_title` only look at cased characters, so `"welcome to python"`
//! counts as lowercase even though it contains spaces. Titlecase letters
//! such as `ǅ` are cased but neither upper nor lower: they make `is_lower`
//! and `is_upper` false and start a word for `is_title`.

use super::{is_space as is_space_char, is_titlecase};

fn all_chars(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

/// Every char is a letter or a number
///
/// # Example
/// ```rust
/// use strops::utils::classify::is_alnum;
/// assert!(is_alnum("abc123"));
/// assert!(!is_alnum("welcome to python"));
/// ```
pub fn is_alnum(s: &str) -> bool {
    all_chars(s, char::is_alphanumeric)
}

/// Every char is a letter
pub fn is_alpha(s: &str) -> bool {
    all_chars(s, char::is_alphabetic)
}

/// Every char is an ASCII decimal digit
///
/// # Example
/// ```rust
/// use strops::utils::classify::is_digit;
/// assert!(is_digit("2012"));
/// assert!(!is_digit("20.12"));
/// ```
pub fn is_digit(s: &str) -> bool {
    all_chars(s, |c| c.is_ascii_digit())
}

/// Every char has a Unicode numeric property (digits, fractions, numerals)
pub fn is_numeric(s: &str) -> bool {
    all_chars(s, char::is_numeric)
}

/// Every char is whitespace
pub fn is_space(s: &str) -> bool {
    all_chars(s, is_space_char)
}

/// At least one cased char, and no uppercase or titlecase ones
pub fn is_lower(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// At least one cased char, and no lowercase or titlecase ones
pub fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Uppercase chars only start words, lowercase chars only continue them
///
/// # Example
/// ```rust
/// use strops::utils::classify::is_title;
/// assert!(is_title("This Is Test"));
/// assert!(!is_title("This is Test"));
/// ```
pub fn is_title(s: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_never_a_member() {
        assert!(!is_alnum(""));
        assert!(!is_alpha(""));
        assert!(!is_digit(""));
        assert!(!is_numeric(""));
        assert!(!is_space(""));
        assert!(!is_lower(""));
        assert!(!is_upper(""));
        assert!(!is_title(""));
    }

    #[test]
    fn test_alnum_alpha() {
        assert!(is_alnum("welcome2"));
        assert!(!is_alnum("welcome to python"));
        assert!(is_alpha("welcome"));
        assert!(!is_alpha("welcome2"));
        assert!(!is_alpha("welcome to python"));
    }

    #[test]
    fn test_digit_numeric() {
        assert!(is_digit("2012"));
        assert!(!is_digit("-1"));
        assert!(is_numeric("2012"));
        assert!(is_numeric("½"));
        assert!(!is_digit("½"));
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_lower("welcome to python"));
        assert!(!is_upper("welcome to python"));
        assert!(is_upper("WELCOME TO PYTHON"));
        assert!(!is_lower("WELCOME TO PYTHON"));
        assert!(is_upper("WELCOME"));
        assert!(!is_lower("1234"));
        assert!(!is_upper("1234"));
        assert!(!is_lower("Mixed"));
    }

    #[test]
    fn test_space() {
        assert!(is_space("  \t"));
        assert!(is_space("\n\r"));
        assert!(!is_space(" a "));
    }

    #[test]
    fn test_title() {
        assert!(is_title("Hello World"));
        assert!(is_title("A1 B2"));
        assert!(!is_title("HEllo"));
        assert!(!is_title("hello"));
        assert!(!is_title("123"));
    }

    #[test]
    fn test_titlecase_letters() {
        assert!(!is_lower("ǅa"));
        assert!(!is_upper("ǅA"));
        assert!(!is_upper("ǅ"));
        assert!(is_lower("ǆa"));
        assert!(is_upper("ǄA"));
        assert!(is_title("ǅungla"));
        assert!(is_title("ǅ"));
        assert!(!is_title("Aǅ"));
        assert!(!is_title("ǅUngla"));
    }
}
