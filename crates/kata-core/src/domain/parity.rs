//! Alternating sum `-1 + 2 - 3 + ... + (-1)^n n`

/// Closed form of the alternating sum up to `n`
///
/// `n / 2` for even `n`, `-(n + 1) / 2` for odd `n`. Written with an
/// arithmetic shift so `i64::MAX` does not overflow.
pub fn alternating_sum(n: i64) -> i64 {
    if n % 2 == 0 {
        n / 2
    } else {
        -(n >> 1) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(alternating_sum(4), 2);
        assert_eq!(alternating_sum(3), -2);
        assert_eq!(alternating_sum(0), 0);
        assert_eq!(alternating_sum(1), -1);
    }

    #[test]
    fn test_matches_explicit_sum() {
        let mut sum = 0i64;
        for k in 1..=200i64 {
            sum += if k % 2 == 0 { k } else { -k };
            assert_eq!(alternating_sum(k), sum, "n = {}", k);
        }
    }

    #[test]
    fn test_negative_odd_follows_formula() {
        // -(n + 1) / 2 with n = -3
        assert_eq!(alternating_sum(-3), 1);
        assert_eq!(alternating_sum(-4), -2);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(alternating_sum(i64::MAX), -(1i64 << 62));
        assert_eq!(alternating_sum(i64::MIN), i64::MIN / 2);
        assert_eq!(alternating_sum(1_000_000_000_000_000), 500_000_000_000_000);
    }
}
