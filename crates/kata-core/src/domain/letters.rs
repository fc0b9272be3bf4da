//! Letter coverage and character multisets
//!
//! This module provides:
//! - `LetterSet`: which of the 26 Latin letters appear in a text (pangram check)
//! - `CharMultiset`: case-folded character counts (anagram check)

use crate::constants::ALPHABET_SIZE;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as CountMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as CountMap;

/// Seen-letter table, case-insensitive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterSet {
    seen: [bool; ALPHABET_SIZE],
    count: usize,
}

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from every ASCII letter of `text`
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::new();
        set.extend(text.bytes());
        set
    }

    /// Record one byte; non-letters are ignored
    ///
    /// Returns true if the letter was not seen before.
    pub fn insert(&mut self, byte: u8) -> bool {
        if !byte.is_ascii_alphabetic() {
            return false;
        }
        let index = (byte.to_ascii_lowercase() - b'a') as usize;
        if self.seen[index] {
            return false;
        }
        self.seen[index] = true;
        self.count += 1;
        true
    }

    /// Number of distinct letters seen
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All 26 letters seen
    pub fn is_complete(&self) -> bool {
        self.count == ALPHABET_SIZE
    }

    /// Letters not yet seen, in alphabetical order
    pub fn missing(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .zip(self.seen.iter())
            .filter(|(_, seen)| !**seen)
            .map(|(letter, _)| char::from(letter))
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.insert(byte);
        }
    }
}

/// Check whether `text` contains every Latin letter, ignoring case
pub fn is_pangram(text: &str) -> bool {
    LetterSet::from_text(text).is_complete()
}

/// Case-folded character counts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharMultiset {
    counts: CountMap<char, usize>,
}

impl CharMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every character of `text`, lowercased
    pub fn add_text(&mut self, text: &str) {
        for c in text.chars().flat_map(char::to_lowercase) {
            *self.counts.entry(c).or_insert(0) += 1;
        }
    }

    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut multiset = Self::new();
        for text in texts {
            multiset.add_text(text);
        }
        multiset
    }
}

/// Check whether the letters of `guest` and `host` can be rearranged into `pile`
pub fn is_rearrangement(guest: &str, host: &str, pile: &str) -> bool {
    CharMultiset::from_texts([guest, host]) == CharMultiset::from_texts([pile])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pangram() {
        assert!(is_pangram("abcdefghijklmnopqrstuvwxyz"));
        assert!(is_pangram("TheQuickBrownFoxJumpsOverTheLazyDog"));
        assert!(!is_pangram("toosmall"));
        assert!(!is_pangram(""));
    }

    #[test]
    fn test_letter_set_ignores_case_and_symbols() {
        let set = LetterSet::from_text("aA1-Bb");
        assert_eq!(set.len(), 2);
        assert_eq!(set.missing().next(), Some('c'));
        assert_eq!(set.missing().count(), 24);
    }

    #[test]
    fn test_letter_set_insert_reports_new() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'Q'));
        assert!(!set.insert(b'?'));
    }

    #[test]
    fn test_missing_letters() {
        let set = LetterSet::from_text("abcdefghijklmnopqrstuvwx");
        assert_eq!(set.missing().collect::<String>(), "yz");
    }

    #[test]
    fn test_rearrangement() {
        assert!(is_rearrangement("SANTACLAUS", "DEDMOROZ", "SANTAMOROZDEDCLAUS"));
        assert!(!is_rearrangement("PAPAINOEL", "JOULUPUKKI", "JOULNAPAOILELUPUKKI"));
        assert!(!is_rearrangement("BABBONATALE", "FATHERCHRISTMAS", "BABCHRISTMASBONATALLEFATHER"));
    }

    #[test]
    fn test_rearrangement_ignores_case() {
        assert!(is_rearrangement("Ab", "c", "CBA"));
    }

    #[test]
    fn test_multiset_folds_case_and_keeps_multiplicity() {
        let multiset = CharMultiset::from_texts(["aAb", "B"]);
        assert_eq!(multiset, CharMultiset::from_texts(["abab"]));
        assert_ne!(multiset, CharMultiset::from_texts(["ab"]));
    }
}
