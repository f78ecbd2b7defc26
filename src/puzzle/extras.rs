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

use super::{prelude::*, rng::*, safety::*, signature::*};

// each unit of frequency weight buys this many copies of a letter in the selection pool
const POOL_COPIES_PER_WEIGHT: PuzzleFloat = 10.0;

///
/// Relative weight of each letter of the alphabet. Letters without a weight are never offered as
/// extras.
///
#[derive(Clone, Debug, PartialEq)]
pub struct LetterFrequency {
    weights: [Option<PuzzleFloat>; ALPHABET_SIZE],
}

impl LetterFrequency {
    pub fn new<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (u8, PuzzleFloat)>,
    {
        let mut out = [None; ALPHABET_SIZE];
        for (letter, weight) in weights {
            if is_normal_puzzle_char(&letter) {
                out[letter_idx(letter)] = Some(weight);
            }
        }

        Self { weights: out }
    }

    pub fn weight(&self, letter: u8) -> Option<PuzzleFloat> {
        if !is_normal_puzzle_char(&letter) {
            return None;
        }

        self.weights[letter_idx(letter)]
    }

    /// How many times the letter goes into the selection pool (0 when it has no weight)
    pub fn pool_copies(&self, letter: u8) -> usize {
        self.weight(letter)
            .map(|w| (w * POOL_COPIES_PER_WEIGHT).floor().max(0.0) as usize)
            .unwrap_or(0)
    }
}

///
/// Picks which extra letters to offer alongside a puzzle word.
///
/// For each word:
///   * every letter of the alphabet that the word does not already hold twice is tried on its own;
///     the ones that keep the bag safe are candidates
///   * candidates go into a pool, each repeated by its frequency weight, so common letters are more
///     likely to come first
///   * the pool is shuffled with a generator restarted from the same seed for every word (primed, so
///     the shuffle starts on the second value of the stream), then reduced to first occurrences
///   * letters are accepted greedily in that order, as long as the bag including every letter
///     already accepted stays safe
///
/// Because the seed restarts for every word, two words with the same candidates get the same
/// extras. That is how the existing lists were produced, so it is kept.
///
pub struct ExtraLetterSelector<'a> {
    index: &'a SignatureIndex,
    frequency: &'a LetterFrequency,
}

impl<'a> ExtraLetterSelector<'a> {
    pub fn new(index: &'a SignatureIndex, frequency: &'a LetterFrequency) -> Self {
        Self {
            index,
            frequency,
        }
    }

    ///
    /// Returns up to count extra letters for the word, in the order they were accepted. Every prefix
    /// of the result keeps the word's bag safe.
    ///
    pub fn select(&self, word: &str, count: usize) -> Vec<char> {
        self.select_with_signature(word, &Signature::of(word), count)
    }

    pub fn select_with_signature(&self, word: &str, signature: &Signature, count: usize) -> Vec<char> {
        if count == 0 {
            return Vec::new();
        }

        let mut checker = SafetyChecker::new(self.index, signature);
        let letters = sorted_letters(word);
        let candidates = safe_candidates(&mut checker, word, &letters);
        log::debug!("{} has {} safe candidate letters", word, candidates.len());

        let mut pool: Vec<u8> = candidates
            .iter()
            .flat_map(|c| std::iter::repeat(*c).take(self.frequency.pool_copies(*c)))
            .collect();
        pool.seeded_shuffle(&mut SeededRng::primed(DEFAULT_SEED));

        let mut bag = letters;
        let mut out = Vec::with_capacity(count);
        for letter in pool.into_iter().unique_items() {
            if out.len() >= count {
                break;
            }

            bag.push(letter);
            if checker.is_unsafe(&bag) {
                bag.pop();
                continue;
            }

            out.push(letter as char);
        }

        out
    }
}

/// Letters which are safe to add to the word on their own, in alphabet order
fn safe_candidates(checker: &mut SafetyChecker<'_>, word: &str, letters: &[u8]) -> Vec<u8> {
    let counts = count_letters(word);
    let mut bag = Vec::with_capacity(letters.len() + 1);
    alphabet()
        .filter(|c| counts[letter_idx(*c)] < 2)
        .filter(|c| {
            bag.clear();
            bag.extend_from_slice(letters);
            bag.push(*c);
            !checker.is_unsafe(&bag)
        })
        .collect()
}
