//! Gellyfish and Flower duel
//!
//! Decides the winner from the knight counts left once both sides have
//! traded blows evenly.

use std::fmt;

/// One duel record: `a b c d`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Duel {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

/// Winner of a duel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Gellyfish,
    Flower,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gellyfish => f.write_str("Gellyfish"),
            Self::Flower => f.write_str("Flower"),
        }
    }
}

impl Duel {
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// Knights left on each side after cancelling `min(c, d)`
    ///
    /// Widened to `i128`: `c - min(c, d)` spans up to `2^64 - 1` for
    /// arbitrary `i64` inputs.
    pub fn remaining(&self) -> (i128, i128) {
        let (c, d) = (i128::from(self.c), i128::from(self.d));
        let traded = c.min(d);
        (c - traded, d - traded)
    }

    /// Gellyfish wins when `b` does not exceed the remaining `c`
    pub fn winner(&self) -> Winner {
        let (remaining_c, _) = self.remaining();
        if i128::from(self.b) <= remaining_c {
            Winner::Gellyfish
        } else {
            Winner::Flower
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        assert_eq!(Duel::new(1, 1, 5, 3).remaining(), (2, 0));
        assert_eq!(Duel::new(1, 1, 3, 5).remaining(), (0, 2));
    }

    #[test]
    fn test_winner() {
        assert_eq!(Duel::new(1, 1, 1, 0).winner(), Winner::Gellyfish);
        assert_eq!(Duel::new(1, 2, 1, 0).winner(), Winner::Flower);
        assert_eq!(Duel::new(7, 0, 4, 4).winner(), Winner::Gellyfish);
        assert_eq!(Duel::new(7, 1, 4, 4).winner(), Winner::Flower);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let duel = Duel::new(1, 0, i64::MAX, i64::MIN);
        assert_eq!(duel.remaining(), (u64::MAX as i128, 0));
        assert_eq!(duel.winner(), Winner::Gellyfish);

        let duel = Duel::new(1, i64::MAX, i64::MIN, i64::MAX);
        assert_eq!(duel.remaining(), (0, u64::MAX as i128));
        assert_eq!(duel.winner(), Winner::Flower);
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::Gellyfish.to_string(), "Gellyfish");
        assert_eq!(Winner::Flower.to_string(), "Flower");
    }
}
