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

use std::collections::{HashMap, HashSet};
use super::{canonical::*, extras::*, prelude::*, rng::*, signature::*};

///
/// Knobs for one publish cycle. The Default implementation produces the primary (7 letter) list
/// with a single extra letter per puzzle.
///
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateOptions {
    /// Length of every puzzle word (WORD_LENGTH or SHORT_WORD_LENGTH)
    pub word_length: usize,
    /// How many extra letters to try to offer with each puzzle (at most MAX_NUM_EXTRA_LETTERS)
    pub num_extra_letters: usize,
    /// Skip (and log) curated words whose signature is shared by a different dictionary word
    pub check_full_dictionary: bool,
    /// Drop upcoming entries which could not get num_extra_letters extras
    pub require_full_extras: bool,
    /// First day for a brand new list (ignored when a previous list exists). Defaults to UTC
    /// midnight of "now".
    pub first_day: Option<i64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            num_extra_letters: DEFAULT_NUM_EXTRA_LETTERS,
            check_full_dictionary: false,
            require_full_extras: false,
            first_day: None,
        }
    }
}

impl GenerateOptions {
    /// num_extra_letters, capped at MAX_NUM_EXTRA_LETTERS
    pub fn extra_letter_count(&self) -> usize {
        if self.num_extra_letters > MAX_NUM_EXTRA_LETTERS {
            log::warn!(
                "asked for {} extra letters, capping at {}",
                self.num_extra_letters, MAX_NUM_EXTRA_LETTERS,
            );
            return MAX_NUM_EXTRA_LETTERS;
        }

        self.num_extra_letters
    }
}

///
/// One position in a merged ordering. Elapsed slots are copied from the previous list verbatim
/// (including their extras); upcoming slots still need extras chosen.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<'p> {
    Elapsed(&'p PuzzleEntry),
    Upcoming(String),
}

impl<'p> Slot<'p> {
    pub fn word(&self) -> &str {
        match self {
            Slot::Elapsed(entry) => entry.word.as_str(),
            Slot::Upcoming(word) => word.as_str(),
        }
    }
}

/// Counters from a merge, logged after each publish
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub elapsed: usize,
    pub upcoming: usize,
    pub added: usize,
    pub retained: usize,
    pub pruned: usize,
}

///
/// Computes the new day order from the previous list and the current curated words.
///
/// Positions 0 through day_index_now (today included) have already been served, so they are copied
/// from the previous list and never move. Everything after that is reordered:
///
///   1. words in the previous list but missing from current_words are put back, and the whole
///      candidate list is sorted lexically
///   2. words that were not in the previous list are tagged as new
///   3. a stable sort moves every new word after every old word
///   4. the old words are shuffled with a generator started at DEFAULT_SEED
///   5. the served prefix is pinned, and the remaining (upcoming) words are shuffled again with a
///      second, fresh generator
///   6. removed words which were never served (previous index > day_index_now) are dropped
///
/// The result only depends on the inputs, so republishing with the same inputs is a no-op.
///
pub fn merge_slots<'p, S>(
    previous: &'p CanonicalList,
    current_words: &[S],
    day_index_now: usize,
) -> (Vec<Slot<'p>>, MergeStats)
where
    S: AsRef<str>,
{
    let mut stats = MergeStats::default();

    // first index each previous word was served at
    let mut previous_idx: HashMap<&'p str, usize> = HashMap::with_capacity(previous.len());
    for (idx, word) in previous.words().enumerate() {
        previous_idx.entry(word).or_insert(idx);
    }

    let current: HashSet<&str> = current_words.iter().map(|w| w.as_ref()).collect();
    let removed: HashSet<&'p str> = previous.words()
        .filter(|w| !current.contains(*w))
        .collect();

    // 1. retain removed words, lexical order
    let mut candidates: Vec<&str> = current.iter()
        .copied()
        .chain(removed.iter().copied())
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    // 2 & 3. new words go last, each group keeps its lexical order
    candidates.sort_by_key(|w| !previous_idx.contains_key(*w));
    let num_new = candidates.iter().filter(|w| !previous_idx.contains_key(**w)).count();
    stats.added = num_new;

    // 4. reshuffle the old words
    let num_old = candidates.len() - num_new;
    candidates[..num_old].seeded_shuffle(&mut SeededRng::default());

    // 5. pin the served prefix, reshuffle only what comes after it
    let num_elapsed = previous.len().min(day_index_now.saturating_add(1));
    let elapsed = &previous.entries[..num_elapsed];
    let pinned: HashSet<&str> = elapsed.iter().map(|e| e.word.as_str()).collect();

    let mut upcoming: Vec<&str> = candidates.into_iter()
        .filter(|w| !pinned.contains(*w))
        .collect();
    upcoming.seeded_shuffle(&mut SeededRng::default());

    // 6. a removed word is only kept if it was already served
    upcoming.retain(|w| {
        let keep = !removed.contains(*w) || previous_idx[*w] <= day_index_now;
        if !keep {
            log::debug!("pruning '{}' (removed before it was ever served)", w);
            stats.pruned += 1;
        }
        keep
    });

    stats.retained = removed.iter().filter(|w| pinned.contains(**w)).count();
    stats.elapsed = elapsed.len();
    stats.upcoming = upcoming.len();

    let slots = elapsed.iter()
        .map(Slot::Elapsed)
        .chain(upcoming.into_iter().map(|w| Slot::Upcoming(w.to_string())))
        .collect();

    (slots, stats)
}

///
/// Filters the curated word source down to the words the merger should consider.
///
/// Words are normalized and length checked first. Then the list is walked in order, keeping one
/// slot per signature:
///   * repeating a word that already holds a slot does nothing
///   * a word whose signature is held by a *different* word clears that slot, and is itself
///     skipped (two curated anagrams of each other would make each other's puzzle ambiguous)
///   * with check_full_dictionary, a word whose signature belongs to any other dictionary word is
///     skipped, and each collision is logged
///
/// Surviving words are returned in input order.
///
pub fn curate_words<S, D>(
    word_source: &[S],
    dictionary: &[D],
    word_length: usize,
    check_full_dictionary: bool,
) -> Vec<String>
where
    S: AsRef<str>,
    D: AsRef<str>,
{
    let mut dictionary_by_signature: HashMap<Signature, Vec<String>> = HashMap::new();
    if check_full_dictionary {
        for raw in dictionary {
            let word = normalize_puzzle_word(raw.as_ref());
            if is_puzzle_word(&word, word_length) {
                dictionary_by_signature.entry(Signature::of(&word)).or_default().push(word);
            }
        }
    }

    let mut slots: Vec<Option<String>> = Vec::new();
    let mut holder: HashMap<Signature, usize> = HashMap::new();
    for raw in word_source {
        let word = normalize_puzzle_word(raw.as_ref());
        if !is_puzzle_word(&word, word_length) {
            continue;
        }

        let signature = Signature::of(&word);
        if check_full_dictionary {
            let collisions: Vec<&String> = dictionary_by_signature
                .get(&signature)
                .map(|words| words.iter().filter(|w| **w != word).collect())
                .unwrap_or_default();
            if !collisions.is_empty() {
                for other in collisions {
                    log::warn!("word '{}' has a signature collision with dictionary word '{}'", word, other);
                }
                continue;
            }
        }

        if let Some(&slot_idx) = holder.get(&signature) {
            let slot = &mut slots[slot_idx];
            match slot.as_deref() {
                Some(held) if held == word => continue,
                Some(held) => {
                    log::warn!("dropping '{}' and '{}': they are anagrams of each other", held, word);
                    *slot = None;
                    holder.remove(&signature);
                    continue;
                }
                None => {}
            }
        }

        holder.insert(signature, slots.len());
        slots.push(Some(word));
    }

    slots.into_iter().flatten().collect()
}

///
/// Runs one publish cycle: curates the word source, merges it into the previous list and picks
/// extra letters for every upcoming word.
///
/// With no previous list, the new list starts at options.first_day (or UTC midnight of now) and
/// nothing is pinned. If no curated words survive, the result is an empty list; callers should
/// treat that as a configuration error rather than publishing it.
///
pub fn regenerate<S, D>(
    previous: Option<&CanonicalList>,
    word_source: &[S],
    dictionary: &[D],
    frequency: &LetterFrequency,
    options: &GenerateOptions,
    now: i64,
) -> CanonicalList
where
    S: AsRef<str>,
    D: AsRef<str>,
{
    let first_day = previous
        .map(|p| p.first_day)
        .or(options.first_day)
        .unwrap_or_else(|| utc_midnight(now));

    let index = SignatureIndex::build(options.word_length, dictionary);
    log::info!("built signature index of {} entries", index.len());

    let current = curate_words(word_source, dictionary, options.word_length, options.check_full_dictionary);
    log::info!("{} curated words survived filtering", current.len());
    if current.is_empty() {
        log::error!("no usable words in the word source, producing an empty list");
        return CanonicalList::new(first_day, Vec::new());
    }

    let empty = CanonicalList::new(first_day, Vec::new());
    let previous = previous.unwrap_or(&empty);
    let day_index_now = day_index(first_day, utc_midnight(now));
    let (slots, stats) = merge_slots(previous, &current, day_index_now);
    log::info!(
        "merged at day {}: {} elapsed, {} upcoming ({} new, {} pruned, {} removed but already served)",
        day_index_now, stats.elapsed, stats.upcoming, stats.added, stats.pruned, stats.retained,
    );

    let selector = ExtraLetterSelector::new(&index, frequency);
    let wanted = options.extra_letter_count();
    let mut short = 0usize;
    let entries: Vec<PuzzleEntry> = slots.into_iter()
        .filter_map(|slot| match slot {
            Slot::Elapsed(entry) => Some(entry.clone()),
            Slot::Upcoming(word) => {
                let extra_letters = selector.select(&word, wanted);
                if extra_letters.len() < wanted {
                    short += 1;
                    log::warn!("'{}' only got {} of {} extra letters", word, extra_letters.len(), wanted);
                    if options.require_full_extras {
                        return None;
                    }
                }
                Some(PuzzleEntry::new(word, extra_letters))
            }
        })
        .collect();

    if short > 0 {
        log::warn!(
            "{} upcoming words were short on extra letters ({})",
            short,
            if options.require_full_extras { "dropped" } else { "kept" },
        );
    }

    CanonicalList::new(first_day, entries)
}
