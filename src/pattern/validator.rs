//! Completion check for a finished pattern

/// Whether a pattern of `selection_length` points is complete
pub fn matches_target(selection_length: usize, target_length: usize) -> bool {
    selection_length == target_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_matches() {
        assert!(matches_target(4, 4));
    }

    #[test]
    fn test_short_or_long_does_not_match() {
        assert!(!matches_target(3, 4));
        assert!(!matches_target(5, 4));
        assert!(!matches_target(0, 1));
    }
}
