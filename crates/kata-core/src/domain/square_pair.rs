//! Square pair search
//!
//! Finds the first coordinate pair whose sum squares to a target.

use crate::constants::PAIR_SEARCH_BOUND;

/// Search for the first `(i, j)` with `(i + j)^2 == target`
///
/// Both coordinates range over `0..PAIR_SEARCH_BOUND`. The scan runs `i`
/// ascending, then `j` ascending, so the reported pair has the smallest `i`
/// and, for that `i`, the smallest `j`.
///
/// # Returns
/// `None` if no pair inside the bound matches
pub fn find_square_pair(target: i64) -> Option<(i64, i64)> {
    (0..PAIR_SEARCH_BOUND)
        .flat_map(|i| (0..PAIR_SEARCH_BOUND).map(move |j| (i, j)))
        .find(|&(i, j)| (i + j) * (i + j) == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square_prefers_zero_first() {
        assert_eq!(find_square_pair(16), Some((0, 4)));
        assert_eq!(find_square_pair(0), Some((0, 0)));
    }

    #[test]
    fn test_large_square_shifts_first_coordinate() {
        // 150 does not fit in j alone, so i starts at 51
        assert_eq!(find_square_pair(150 * 150), Some((51, 99)));
        assert_eq!(find_square_pair(198 * 198), Some((99, 99)));
    }

    #[test]
    fn test_no_pair() {
        assert_eq!(find_square_pair(2), None);
        assert_eq!(find_square_pair(-4), None);
        assert_eq!(find_square_pair(199 * 199), None);
    }
}
