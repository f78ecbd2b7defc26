// This file holds the constants that define the daily puzzle, plus the small helpers that every
// other module uses to talk about words and their letters.
//
// The primary puzzle uses 7 letter words. A secondary 5 letter variant exists, and every algorithm
// takes its word length from the signature index, so switching variants is a matter of passing a
// different length when reading the word lists.

use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

// how many letters are in a puzzle word for the primary variant?
pub const WORD_LENGTH: usize = 7;
// how many letters are in a puzzle word for the secondary variant?
pub const SHORT_WORD_LENGTH: usize = 5;
// how many letters are in the english alphabet? (don't change this lol)
pub const ALPHABET_SIZE: usize = (('z' as usize) - ('a' as usize)) + 1;
// how many extra letters are offered per puzzle unless asked otherwise
pub const DEFAULT_NUM_EXTRA_LETTERS: usize = 1;
// most extra letters a puzzle can ask for; the safety search grows exponentially with bag size
pub const MAX_NUM_EXTRA_LETTERS: usize = 9;
// one day in epoch milliseconds
pub const DAY_MS: i64 = 86_400_000;

// This type allows you to switch between using f64 for all calculations and f32 if you so desire.
// The seeded generator must stay on f64 to reproduce existing lists, so only the frequency table
// uses this.
pub type PuzzleFloat = f64;

pub use crate::util::*;

///
/// The letters of a word sorted into canonical order. Two words are anagrams of each other iff
/// their signatures are equal. Used as a hash key, never shown to players.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Computes the signature of a word (or of any bag of letters)
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    /// Builds a signature from an already sorted bag of ASCII letters
    pub fn from_sorted_bytes(sorted: &[u8]) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        Self(sorted.iter().map(|b| *b as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Signature {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Lets a HashMap keyed by Signature be queried with a plain &str
impl Borrow<str> for Signature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the sorted letters of a word as bytes. This is the "letter bag" representation the
/// safety checker works on.
pub fn sorted_letters(word: &str) -> Vec<u8> {
    debug_assert!(word.is_ascii());
    let mut out = word.as_bytes().to_vec();
    out.sort_unstable();
    out
}

/// Returns the number of times each letter of the alphabet occurs in the argument. The &str should
/// be in lowercase. The output is indexed by the position of the letter in the alphabet.
pub fn count_letters(word: &str) -> [usize; ALPHABET_SIZE] {
    let mut out = [0; ALPHABET_SIZE];
    for b in word.bytes().filter(is_normal_puzzle_char) {
        out[letter_idx(b)] += 1;
    }

    out
}

/// Returns the index of the given letter within the alphabet (like 'a' = 0, 'b' = 1, etc...)
pub fn letter_idx(letter: u8) -> usize {
    ((letter as isize) - ('a' as isize)) as usize
}

/// Iterates 'a' through 'z' as bytes
pub fn alphabet() -> impl Iterator<Item = u8> + Clone {
    b'a'..=b'z'
}

/// Checks whether or not the passed string is a puzzle word of the given length (all lowercase
/// ascii letters, exactly word_length of them)
pub fn is_puzzle_word(v: &str, word_length: usize) -> bool {
    v.len() == word_length && v.bytes().all(|b| is_normal_puzzle_char(&b))
}

/// Given some input &str, try to clean it up such that it might be a puzzle word.
///
/// This function does not trim the length of a word or remove non alpha characters. It simply
/// cleans up words that are already valid by removing any spacing and converting to all
/// lowercase.
///
/// You should always verify that the output of this function passes is_puzzle_word.
pub fn normalize_puzzle_word(str: &str) -> String {
    str.trim().to_lowercase()
}

/// Verifies that a byte represents a lowercase alphabetic character
pub fn is_normal_puzzle_char(v: &u8) -> bool {
    v.is_ascii_lowercase()
}

/// Truncates an epoch millisecond timestamp to UTC midnight of the same day
pub fn utc_midnight(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(DAY_MS) * DAY_MS
}

/// Whole days elapsed between first_day and day, floor divided, clamped at 0
pub fn day_index(first_day: i64, day: i64) -> usize {
    (day - first_day).div_euclid(DAY_MS).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("garden", "danger", true)]
    #[test_case("listen", "silent", true)]
    #[test_case("abc", "abd", false)]
    #[test_case("aab", "abb", false)]
    #[test_case("dcabre", "cadreb", true)]
    fn test_signature_matches_only_anagrams(a: &str, b: &str, anagrams: bool) {
        assert_eq!(Signature::of(a) == Signature::of(b), anagrams);
    }

    #[test]
    fn test_signature_is_sorted() {
        assert_eq!(Signature::of("garden").as_str(), "adegnr");
        assert_eq!(Signature::from_sorted_bytes(&sorted_letters("garden")), Signature::of("garden"));
    }

    #[test_case("  Example\n", 7, true)]
    #[test_case("example", 5, false)]
    #[test_case("exa mple", 8, false)]
    #[test_case("éxample", 7, false)]
    #[test_case("", 7, false)]
    fn test_normalize_and_validate(raw: &str, len: usize, valid: bool) {
        assert_eq!(is_puzzle_word(&normalize_puzzle_word(raw), len), valid);
    }

    #[test]
    fn test_count_letters() {
        let counts = count_letters("settle");
        assert_eq!(counts[letter_idx(b't')], 2);
        assert_eq!(counts[letter_idx(b'e')], 2);
        assert_eq!(counts[letter_idx(b's')], 1);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    #[test]
    fn test_day_index_clamps_before_first_day() {
        let first_day = 1_700_006_400_000;
        assert_eq!(day_index(first_day, first_day - DAY_MS * 3), 0);
        assert_eq!(day_index(first_day, first_day), 0);
        assert_eq!(day_index(first_day, first_day + DAY_MS * 2 + 5), 2);
    }

    #[test]
    fn test_utc_midnight() {
        assert_eq!(utc_midnight(DAY_MS * 5 + 1234), DAY_MS * 5);
        assert_eq!(utc_midnight(-1), -DAY_MS);
    }
}
