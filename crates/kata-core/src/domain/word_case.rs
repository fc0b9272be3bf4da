//! Majority-case normalization of a single word

/// Letter case counts of a word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseCount {
    pub upper: usize,
    pub lower: usize,
}

impl CaseCount {
    /// Count ASCII uppercase and lowercase letters
    pub fn of(word: &str) -> Self {
        word.bytes().fold(Self::default(), |mut count, b| {
            if b.is_ascii_uppercase() {
                count.upper += 1;
            } else if b.is_ascii_lowercase() {
                count.lower += 1;
            }
            count
        })
    }
}

/// Rewrite `word` entirely in its majority case
///
/// Uppercase wins only with a strict majority; ties go to lowercase.
/// Non-letters are left untouched.
pub fn normalize_case(word: &str) -> String {
    let count = CaseCount::of(word);
    if count.upper > count.lower {
        word.to_ascii_uppercase()
    } else {
        word.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_count() {
        assert_eq!(CaseCount::of("HeLLo1"), CaseCount { upper: 3, lower: 2 });
    }

    #[test]
    fn test_normalize_case() {
        assert_eq!(normalize_case("Hello"), "hello");
        assert_eq!(normalize_case("HELLo"), "HELLO");
        assert_eq!(normalize_case("maTRIx"), "matrix");
        assert_eq!(normalize_case("HoUse"), "house");
        assert_eq!(normalize_case("ViP"), "VIP");
    }

    #[test]
    fn test_tie_goes_to_lowercase() {
        assert_eq!(normalize_case("AbCd"), "abcd");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(normalize_case("A-B_c9"), "A-B_C9");
    }
}
