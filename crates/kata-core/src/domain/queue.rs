//! Boys letting girls forward in a queue
//!
//! Each second, every boy (`B`) standing directly in front of a girl (`G`)
//! swaps places with her. Swaps within one second never chain: a girl moves
//! at most one place per second.

/// Apply one second of swaps in place
///
/// Returns false if nothing moved; later seconds change nothing either.
pub fn step(queue: &mut [u8]) -> bool {
    let mut swapped = false;
    let mut i = 0;
    while i + 1 < queue.len() {
        if queue[i] == b'B' && queue[i + 1] == b'G' {
            queue.swap(i, i + 1);
            swapped = true;
            i += 2;
        } else {
            i += 1;
        }
    }
    swapped
}

/// Queue arrangement after `seconds` seconds
pub fn after_seconds(queue: &str, seconds: u64) -> String {
    let mut bytes = queue.as_bytes().to_vec();
    for _ in 0..seconds {
        if !step(&mut bytes) {
            break;
        }
    }
    // Swapping whole bytes of an ASCII `B`/`G` pair keeps the text valid.
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_seconds() {
        assert_eq!(after_seconds("BGGBG", 1), "GBGGB");
        assert_eq!(after_seconds("BGGBG", 2), "GGBGB");
        assert_eq!(after_seconds("GGGB", 1), "GGGB");
    }

    #[test]
    fn test_zero_seconds() {
        assert_eq!(after_seconds("BGBG", 0), "BGBG");
    }

    #[test]
    fn test_girl_moves_one_place_per_second() {
        assert_eq!(after_seconds("BBG", 1), "BGB");
        assert_eq!(after_seconds("BBG", 2), "GBB");
    }

    #[test]
    fn test_step_reports_movement() {
        let mut queue = *b"BG";
        assert!(step(&mut queue));
        assert!(!step(&mut queue));
        assert_eq!(&queue, b"GB");
    }

    #[test]
    fn test_huge_seconds_stops_once_settled() {
        assert_eq!(after_seconds("BG", 1_000_000_000_000_000_000), "GB");
        assert_eq!(after_seconds("BBGBG", u64::MAX), "GGBBB");
    }

    #[test]
    fn test_other_characters_stay() {
        assert_eq!(after_seconds("BxG", 3), "BxG");
    }
}
