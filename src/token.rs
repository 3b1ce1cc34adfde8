//! Character-level helpers for the overlap rule.
//!
//! Widths count Unicode scalar values, so multi-byte tokens are split on
//! character boundaries rather than byte offsets.

/// First `width` characters of `token`, or `None` if it is shorter.
///
/// # Examples
///
/// ```
/// use overlap_dag::token::head;
///
/// assert_eq!(head("1234", 2), Some("12"));
/// assert_eq!(head("1", 2), None);
/// ```
pub fn head(token: &str, width: usize) -> Option<&str> {
    if width == 0 {
        return Some("");
    }
    match token.char_indices().nth(width) {
        Some((end, _)) => Some(&token[..end]),
        None if token.chars().count() == width => Some(token),
        None => None,
    }
}

/// Last `width` characters of `token`, or `None` if it is shorter.
///
/// # Examples
///
/// ```
/// use overlap_dag::token::tail;
///
/// assert_eq!(tail("1234", 2), Some("34"));
/// assert_eq!(tail("", 2), None);
/// ```
pub fn tail(token: &str, width: usize) -> Option<&str> {
    if width == 0 {
        return Some("");
    }
    token
        .char_indices()
        .rev()
        .nth(width - 1)
        .map(|(start, _)| &token[start..])
}

/// Everything after the first `width` characters (empty when too short).
pub fn strip_head(token: &str, width: usize) -> &str {
    match token.char_indices().nth(width) {
        Some((start, _)) => &token[start..],
        None => "",
    }
}

/// True iff the last `width` characters of `from` equal the first `width`
/// characters of `to`. Tokens shorter than `width` never overlap.
///
/// # Examples
///
/// ```
/// use overlap_dag::token::overlaps;
///
/// assert!(overlaps("1234", "3456", 2));
/// assert!(!overlaps("3456", "1234", 2));
/// assert!(!overlaps("4", "45", 2));
/// ```
pub fn overlaps(from: &str, to: &str, width: usize) -> bool {
    match (tail(from, width), head(to, width)) {
        (Some(suffix), Some(prefix)) => suffix == prefix,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_exact_length() {
        assert_eq!(head("ab", 2), Some("ab"));
        assert_eq!(head("abc", 3), Some("abc"));
    }

    #[test]
    fn test_tail_exact_length() {
        assert_eq!(tail("ab", 2), Some("ab"));
        assert_eq!(tail("a", 2), None);
    }

    #[test]
    fn test_multibyte_boundaries() {
        assert_eq!(head("äöü", 2), Some("äö"));
        assert_eq!(tail("äöü", 2), Some("öü"));
        assert_eq!(strip_head("äöü", 2), "ü");
        assert!(overlaps("xyäö", "äözz", 2));
    }

    #[test]
    fn test_strip_head() {
        assert_eq!(strip_head("3456", 2), "56");
        assert_eq!(strip_head("34", 2), "");
        assert_eq!(strip_head("3", 2), "");
    }

    #[test]
    fn test_overlaps_short_tokens_never_match() {
        assert!(!overlaps("", "", 2));
        assert!(!overlaps("x", "xy", 2));
        assert!(!overlaps("xy", "y", 2));
    }

    #[test]
    fn test_overlaps_wider_window() {
        assert!(overlaps("12345", "34567", 3));
        assert!(!overlaps("12345", "45678", 3));
    }
}
