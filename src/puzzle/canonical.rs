use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use super::prelude::*;

///
/// A puzzle word plus the extra letters offered with it, in the order they were chosen.
///
/// On disk this is a JSON array: the word followed by each extra letter, like
/// ["example", "t", "o"]. A bare string is also accepted when reading, for lists that carry no
/// extra letters.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct PuzzleEntry {
    pub word: String,
    pub extra_letters: Vec<char>,
}

impl PuzzleEntry {
    pub fn new(word: impl Into<String>, extra_letters: Vec<char>) -> Self {
        Self {
            word: word.into(),
            extra_letters,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Bare(String),
    Letters(Vec<String>),
}

impl TryFrom<RawEntry> for PuzzleEntry {
    type Error = PersistErr;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let mut parts = match raw {
            RawEntry::Bare(word) => return Ok(Self::new(word, Vec::new())),
            RawEntry::Letters(parts) => parts.into_iter(),
        };

        let word = parts
            .next()
            .ok_or_else(|| PersistErr::InvalidEntry("empty entry".to_string()))?;

        let mut extra_letters = Vec::new();
        for letter in parts {
            let mut chars = letter.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => extra_letters.push(c),
                _ => return Err(PersistErr::InvalidEntry(format!(
                    "extra letter '{}' of '{}' is not a single character", letter, word))),
            }
        }

        Ok(Self { word, extra_letters })
    }
}

impl From<PuzzleEntry> for RawEntry {
    fn from(entry: PuzzleEntry) -> Self {
        let mut parts = Vec::with_capacity(entry.extra_letters.len() + 1);
        parts.push(entry.word);
        parts.extend(entry.extra_letters.into_iter().map(String::from));
        RawEntry::Letters(parts)
    }
}

///
/// The durable, day indexed ordering of puzzle words.
///
/// entries[i] is the puzzle for first_day + i days. The list wraps, so for any day the entry is
/// entries[day_index % len]. Once a day has been shown to players its entry must never change;
/// see merge.rs for how republishing keeps that promise.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalList {
    /// Epoch milliseconds of UTC midnight on the day entries[0] was (or will be) played
    pub first_day: i64,
    #[serde(rename = "list")]
    pub entries: Vec<PuzzleEntry>,
}

#[derive(Error, Debug)]
pub enum PersistErr {
    #[error("io error on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid canonical list entry: {0}")]
    InvalidEntry(String),
}

impl CanonicalList {
    pub fn new(first_day: i64, entries: Vec<PuzzleEntry>) -> Self {
        Self { first_day, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the words in day order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Day index of the given instant against this list's first day
    pub fn day_index_at(&self, epoch_ms: i64) -> usize {
        day_index(self.first_day, utc_midnight(epoch_ms))
    }

    pub fn from_json(raw: &str) -> Result<Self, PersistErr> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, PersistErr> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, PersistErr> {
        let f = fs::File::open(path).map_err(|source| PersistErr::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let out: Self = serde_json::from_reader(BufReader::new(f))?;
        log::debug!("loaded canonical list of {} entries from {}", out.len(), path.display());
        Ok(out)
    }

    /// Like load, but a missing file is Ok(None) (the very first publish)
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>, PersistErr> {
        if !path.exists() {
            return Ok(None);
        }

        Self::load(path).map(Some)
    }

    ///
    /// Writes the list as JSON. The file is written next to its destination first and then moved
    /// over it, so readers never see a partially written list.
    ///
    pub fn save(&self, path: &Path) -> Result<(), PersistErr> {
        let io_err = |source: io::Error| PersistErr::Io {
            path: path.to_path_buf(),
            source,
        };

        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(io_err)?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, self)?;
            writer.flush().map_err(io_err)?;
        }

        temp_file.persist(path).map_err(|err| io_err(err.error))?;
        log::debug!("saved canonical list of {} entries to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalList {
        CanonicalList::new(1_700_006_400_000, vec![
            PuzzleEntry::new("example", vec!['t']),
            PuzzleEntry::new("tremble", vec!['a', 'o']),
            PuzzleEntry::new("reading", vec![]),
        ])
    }

    #[test]
    fn test_wire_format() {
        let json = sample().to_json().expect("should serialize");
        assert_eq!(
            json,
            r#"{"firstDay":1700006400000,"list":[["example","t"],["tremble","a","o"],["reading"]]}"#,
        );
        assert_eq!(CanonicalList::from_json(&json).expect("should parse"), sample());
    }

    #[test]
    fn test_reads_bare_word_entries() {
        let list = CanonicalList::from_json(r#"{"firstDay":0,"list":["crane",["slate","o"]]}"#)
            .expect("should parse");
        assert_eq!(list.entries, vec![
            PuzzleEntry::new("crane", vec![]),
            PuzzleEntry::new("slate", vec!['o']),
        ]);
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!(CanonicalList::from_json(r#"{"firstDay":0,"list":[[]]}"#).is_err());
        assert!(CanonicalList::from_json(r#"{"firstDay":0,"list":[["crane","ab"]]}"#).is_err());
        assert!(CanonicalList::from_json(r#"{"firstDay":0,"list":[["crane",""]]}"#).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("nested").join("wordlist.json");
        assert!(CanonicalList::load_if_exists(&path).expect("missing is fine").is_none());

        sample().save(&path).expect("should save");
        assert_eq!(CanonicalList::load(&path).expect("should load"), sample());

        // overwriting replaces the whole file
        let shorter = CanonicalList::new(0, vec![PuzzleEntry::new("crane", vec![])]);
        shorter.save(&path).expect("should save");
        assert_eq!(CanonicalList::load_if_exists(&path).expect("should load"), Some(shorter));
    }

    #[test]
    fn test_day_index_at() {
        let list = sample();
        assert_eq!(list.day_index_at(list.first_day - 1), 0);
        assert_eq!(list.day_index_at(list.first_day + DAY_MS * 4 + 17), 4);
    }
}
