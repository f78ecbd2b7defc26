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

use super::{extras::LetterFrequency, prelude::*};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;
use thiserror::Error;

// Stores "input data" which is manually curated between publish cycles
pub const DATA_DIRECTORY: &str = "data/";
pub const WORD_SOURCE_FILE_NAME: &str = "wordlist.txt";
pub const DICTIONARY_FILE_NAME: &str = "allwords.txt";

// Stores the published canonical list, which is read back in on the next publish
pub const STATIC_DIRECTORY: &str = "static/";
pub const CANONICAL_LIST_FILE_NAME: &str = "wordlist.json";

// Stores static configuration which is embedded in the binary
pub const EMBED_DATA_DIRECTORY: &str = "txt_data/";
pub const LETTER_FREQUENCY_FILE_NAME: &str = "letter_frequency.txt";

lazy_static! {
    pub static ref DATA: Data = Data::read().expect("should have no failures reading data...");
}

#[derive(RustEmbed)]
#[folder = "txt_data/"]
struct RawData;

/// Holds all of the data represented by the static/embedded text files
#[derive(Clone, Debug)]
pub struct Data {
    /// Relative weight of each letter, used to bias which extra letters get offered
    pub letter_frequency: LetterFrequency,
}

#[derive(Error, Debug)]
pub enum LoadDataErr {
    #[error("missing letter frequency file")]
    MissingLetterFrequencyFile,
    #[error(transparent)]
    EncodingError(#[from] Utf8Error),
    #[error("malformed letter frequency line '{0}'")]
    BadFrequencyLine(String),
    #[error("malformed floating point text '{0}'")]
    BadFloatStr(String, #[source] ParseFloatError),
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Data {
    pub fn read() -> Result<Self, LoadDataErr> {
        let raw = retrieve_file_as_str(LETTER_FREQUENCY_FILE_NAME)?
            .ok_or(LoadDataErr::MissingLetterFrequencyFile)?;
        let out = Self {
            letter_frequency: parse_letter_frequency(&raw)?,
        };
        log::debug!("got letter frequency data from {}", LETTER_FREQUENCY_FILE_NAME);
        Ok(out)
    }
}

/// Default location of the curated word source
pub fn default_word_source_path() -> PathBuf {
    Path::new(DATA_DIRECTORY).join(WORD_SOURCE_FILE_NAME)
}

/// Default location of the reference dictionary
pub fn default_dictionary_path() -> PathBuf {
    Path::new(DATA_DIRECTORY).join(DICTIONARY_FILE_NAME)
}

/// Default location of the published canonical list
pub fn default_canonical_list_path() -> PathBuf {
    Path::new(STATIC_DIRECTORY).join(CANONICAL_LIST_FILE_NAME)
}

///
/// Parses a letter frequency table. Each line holds a letter and its weight, split by whitespace:
///
///   e 12.02
///
/// Blank lines and lines starting with '#' are ignored.
///
pub fn parse_letter_frequency(raw: &str) -> Result<LetterFrequency, LoadDataErr> {
    let mut weights = Vec::with_capacity(ALPHABET_SIZE);
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let entry = match (parts.next(), parts.next(), parts.next()) {
            (Some(letter), Some(weight), None) => {
                let letter = normalize_puzzle_word(letter);
                if !is_puzzle_word(&letter, 1) {
                    return Err(LoadDataErr::BadFrequencyLine(line.to_string()));
                }
                let weight = weight
                    .parse::<PuzzleFloat>()
                    .map_err(|err| LoadDataErr::BadFloatStr(weight.to_string(), err))?;
                (letter.as_bytes()[0], weight)
            }
            _ => return Err(LoadDataErr::BadFrequencyLine(line.to_string())),
        };
        weights.push(entry);
    }

    Ok(LetterFrequency::new(weights))
}

///
/// Turns raw word list text (one word per line) into puzzle words of word_length. Each line is
/// trimmed and lowercased; anything that is then not exactly word_length lowercase ascii letters
/// is dropped. Order is preserved and duplicates are kept.
///
pub fn parse_word_list(raw: &str, word_length: usize) -> Vec<String> {
    raw.lines()
        .map(normalize_puzzle_word)
        .filter(|word| is_puzzle_word(word, word_length))
        .collect()
}

/// Reads a word list text file, see parse_word_list
pub fn read_word_list(path: &Path, word_length: usize) -> Result<Vec<String>, LoadDataErr> {
    let raw = fs::read_to_string(path).map_err(|source| LoadDataErr::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let out = parse_word_list(&raw, word_length);
    log::info!("read {} {} letter words from {}", out.len(), word_length, path.display());
    Ok(out)
}

fn retrieve_file_as_str(name: &str) -> Result<Option<String>, LoadDataErr> {
    let f: rust_embed::EmbeddedFile = if let Some(data) = RawData::get(name) {
        data
    } else {
        if let Ok(out) = fs::read_to_string(format!("{}{}", EMBED_DATA_DIRECTORY, name)) {
            return Ok(Some(out));
        }

        return Ok(None);
    };

    Ok(Some(
        std::str::from_utf8(&f.data)
            .map_err(LoadDataErr::EncodingError)?
            .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_embedded_frequency_table() {
        let frequency = &DATA.letter_frequency;
        assert_eq!(frequency.weight(b'e'), Some(12.02));
        assert_eq!(frequency.weight(b'z'), Some(0.07));
        assert!(alphabet().all(|c| frequency.weight(c).is_some()));
    }

    #[test]
    fn test_parse_word_list() {
        let raw = "Example\n  tremble \r\nfoo\nfoo-bar\n\nreading\nexample\n";
        assert_eq!(parse_word_list(raw, 7), vec!["example", "tremble", "reading", "example"]);
        assert_eq!(parse_word_list(raw, 3), vec!["foo"]);
    }

    #[test_case("e 1.5\n# comment\n\nq 0.1"; "with comment")]
    #[test_case("E\t1.5\nq   0.1"; "mixed whitespace and case")]
    fn test_parse_frequency(raw: &str) {
        let frequency = parse_letter_frequency(raw).expect("should parse");
        assert_eq!(frequency.weight(b'e'), Some(1.5));
        assert_eq!(frequency.weight(b'q'), Some(0.1));
        assert_eq!(frequency.weight(b'a'), None);
    }

    #[test_case("e"; "missing weight")]
    #[test_case("ee 1.0"; "not a letter")]
    #[test_case("e 1.0 2.0"; "too many parts")]
    #[test_case("e one"; "not a float")]
    fn test_parse_frequency_rejects(raw: &str) {
        assert!(parse_letter_frequency(raw).is_err());
    }

    #[test]
    fn test_read_missing_word_list() {
        let err = read_word_list(Path::new("definitely/not/here.txt"), 7).unwrap_err();
        assert!(matches!(err, LoadDataErr::Io { .. }));
    }
}
