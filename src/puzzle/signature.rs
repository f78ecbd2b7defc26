use std::collections::HashMap;
use super::prelude::*;

///
/// Maps every signature in the reference dictionary to the word which owns it.
///
/// The reference dictionary is the full universe of acceptable words of the puzzle length. It is
/// only used to detect collisions, never to pick puzzle words.
///
/// If two dictionary words share a signature, the one inserted last owns it. Nobody has decided
/// whether those duplicates are intentional, so this keeps the input order tie-break rather than
/// inventing a new one.
///
#[derive(Clone, Debug)]
pub struct SignatureIndex {
    word_length: usize,
    owners: HashMap<Signature, String>,
}

impl SignatureIndex {
    /// Builds the index from dictionary words. Words that are not puzzle words of word_length
    /// (after normalization) are skipped.
    pub fn build<I, S>(word_length: usize, dictionary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut owners = HashMap::new();
        let mut skipped = 0usize;
        for raw in dictionary {
            let word = normalize_puzzle_word(raw.as_ref());
            if !is_puzzle_word(&word, word_length) {
                skipped += 1;
                continue;
            }

            owners.insert(Signature::of(&word), word);
        }

        if skipped > 0 {
            log::debug!("skipped {} dictionary lines which are not {} letter words", skipped, word_length);
        }

        Self {
            word_length,
            owners,
        }
    }

    /// The word length every entry in this index has
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the dictionary word owning the signature, if any
    pub fn owner_of(&self, signature: &str) -> Option<&str> {
        self.owners.get(signature).map(String::as_str)
    }

    /// Same as owner_of but for a sorted bag of ASCII letters
    pub fn owner_of_sorted(&self, sorted: &[u8]) -> Option<&str> {
        std::str::from_utf8(sorted)
            .ok()
            .and_then(|sig| self.owner_of(sig))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
