/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::collections::HashMap;
use super::{prelude::*, signature::*};

///
/// Decides whether a bag of letters is "unsafe" for a given puzzle word.
///
/// A player may discard any of the offered letters. So for a bag made of the puzzle word plus some
/// extra letters, every sub-bag of exactly word_length letters is reachable. The bag is unsafe if
/// any of those sub-bags is the signature of a *different* dictionary word (the puzzle word's own
/// signature is always fine).
///
/// The search is exhaustive over removal order, which is exponential in the number of letters over
/// word_length. Callers keep that number small: the extra letter selector only ever grows the bag
/// one letter at a time. Results are memoized per sorted bag; a checker is tied to one puzzle
/// word (one original signature) so the cache never mixes answers for different words.
///
pub struct SafetyChecker<'a> {
    index: &'a SignatureIndex,
    original: Vec<u8>,
    cache: HashMap<Vec<u8>, bool>,
}

impl<'a> SafetyChecker<'a> {
    pub fn new(index: &'a SignatureIndex, original: &Signature) -> Self {
        Self {
            index,
            original: original.as_bytes().to_vec(),
            cache: HashMap::new(),
        }
    }

    ///
    /// Whether removing letters from this bag down to word_length can ever land on another
    /// dictionary word's signature. The bag does not need to be sorted. Bags shorter than
    /// word_length are never unsafe.
    ///
    pub fn is_unsafe(&mut self, letters: &[u8]) -> bool {
        let mut bag = letters.to_vec();
        bag.sort_unstable();
        self.is_unsafe_sorted(&bag)
    }

    fn is_unsafe_sorted(&mut self, bag: &[u8]) -> bool {
        let word_length = self.index.word_length();
        if bag.len() < word_length {
            return false;
        }

        if bag.len() == word_length {
            return bag != self.original.as_slice() && self.index.owner_of_sorted(bag).is_some();
        }

        if let Some(known) = self.cache.get(bag) {
            return *known;
        }

        let mut out = false;
        let mut sub = Vec::with_capacity(bag.len() - 1);
        for i in 0..bag.len() {
            // removing either copy of a repeated letter reaches the same sub-bag
            if i > 0 && bag[i] == bag[i - 1] {
                continue;
            }

            sub.clear();
            sub.extend_from_slice(&bag[..i]);
            sub.extend_from_slice(&bag[i + 1..]);
            if self.is_unsafe_sorted(&sub) {
                out = true;
                break;
            }
        }

        self.cache.insert(bag.to_vec(), out);
        out
    }

    /// Number of memoized bags, exposed for logging
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

///
/// One-shot form of SafetyChecker::is_unsafe, for callers that only have a single bag to test.
///
pub fn is_unsafe(index: &SignatureIndex, original: &Signature, letters: &[u8]) -> bool {
    SafetyChecker::new(index, original).is_unsafe(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn bag(word: &str, extras: &str) -> Vec<u8> {
        let mut out = word.as_bytes().to_vec();
        out.extend_from_slice(extras.as_bytes());
        out
    }

    fn index() -> SignatureIndex {
        SignatureIndex::build(6, ["garden", "danger", "snared", "graded", "ranged", "gander"])
    }

    #[test_case("s", true; "s then drop g makes snared")]
    #[test_case("d", true; "d then drop n makes graded")]
    #[test_case("q", false; "q reaches nothing")]
    #[test_case("g", false; "g reaches nothing")]
    #[test_case("", false; "the word itself")]
    fn test_single_extra(extras: &str, expected: bool) {
        let index = index();
        let mut checker = SafetyChecker::new(&index, &Signature::of("garden"));
        assert_eq!(checker.is_unsafe(&bag("garden", extras)), expected);
    }

    #[test]
    fn test_anagram_of_own_word_is_safe() {
        let index = SignatureIndex::build(6, ["dcabre", "cadreb"]);
        let original = Signature::of("dcabre");
        for extra in alphabet() {
            assert!(!is_unsafe(&index, &original, &bag("dcabre", &(extra as char).to_string())));
        }
    }

    #[test]
    fn test_unsafe_needs_two_removals() {
        // adding both 'q' and 's' then dropping 'q' and 'g' reaches snared
        let index = index();
        let mut checker = SafetyChecker::new(&index, &Signature::of("garden"));
        assert!(!checker.is_unsafe(&bag("garden", "q")));
        assert!(checker.is_unsafe(&bag("garden", "qs")));
    }

    #[test]
    fn test_monotonic_in_added_letters() {
        let index = index();
        let original = Signature::of("garden");
        let mut checker = SafetyChecker::new(&index, &original);
        for first in alphabet() {
            let base = bag("garden", &(first as char).to_string());
            if !checker.is_unsafe(&base) {
                continue;
            }

            for second in alphabet() {
                let mut grown = base.clone();
                grown.push(second);
                assert!(checker.is_unsafe(&grown), "adding {} to an unsafe bag made it safe", second as char);
            }
        }
    }

    #[test]
    fn test_short_bag_is_safe() {
        assert!(!is_unsafe(&index(), &Signature::of("garden"), b"gard"));
    }

    #[test]
    fn test_cache_agrees_with_fresh_checker() {
        let index = index();
        let original = Signature::of("garden");
        let mut cached = SafetyChecker::new(&index, &original);
        for extra in alphabet() {
            let letters = bag("garden", &format!("{}e", extra as char));
            let first = cached.is_unsafe(&letters);
            assert_eq!(first, cached.is_unsafe(&letters));
            assert_eq!(first, is_unsafe(&index, &original, &letters));
        }
        assert!(cached.cache_size() > 0);
    }
}
