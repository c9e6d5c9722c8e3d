//! Case-insensitive boat name handling.
//!
//! Names compare byte-wise after ASCII lowercasing, so `"alpha"`, `"Alpha"` and
//! `"ALPHA"` are the same boat and sort together.

use std::cmp::Ordering;

/// Orders two names ignoring ASCII case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Returns `true` if both names refer to the same boat.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ignores_case() {
        assert_eq!(compare_names("alpha", "ALPHA"), Ordering::Equal);
        assert_eq!(compare_names("Alpha", "beta"), Ordering::Less);
        assert_eq!(compare_names("beta", "Alpha"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Sea", "seahorse"), Ordering::Less);
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Betty", "bETTY"));
        assert!(!names_match("Betty", "Betty "));
    }
}
