use serde::Serialize;
use super::{canonical::*, prelude::*};

/// The puzzle assigned to one UTC day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPuzzle<'a> {
    /// Epoch milliseconds of UTC midnight for this day
    pub day: i64,
    pub word: &'a str,
    pub extra_letters: &'a [char],
}

///
/// Yesterday's, today's and tomorrow's puzzles. All three are served so that players in any
/// timezone can play "their" day.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DailyRotation<'a> {
    pub yesterday: DailyPuzzle<'a>,
    pub today: DailyPuzzle<'a>,
    pub tomorrow: DailyPuzzle<'a>,
}

impl<'a> DailyRotation<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &DailyPuzzle<'a>> {
        [&self.yesterday, &self.today, &self.tomorrow].into_iter()
    }

    /// Finds the puzzle that matches both the day and the word. A submission for any other
    /// combination is not for a puzzle currently being served.
    pub fn find(&self, day: i64, word: &str) -> Option<&DailyPuzzle<'a>> {
        self.iter().find(|p| p.day == day && p.word == word)
    }
}

///
/// Resolves the puzzles around the given instant. Days before the list's first day resolve to
/// index 0, and days past the end wrap around. Returns None for an empty list.
///
pub fn resolve(now: i64, list: &CanonicalList) -> Option<DailyRotation<'_>> {
    let len = list.len();
    if len == 0 {
        return None;
    }

    let today = utc_midnight(now);
    let idx = day_index(list.first_day, today) % len;
    let puzzle = |idx: usize, day: i64| {
        let entry = &list.entries[idx];
        DailyPuzzle {
            day,
            word: entry.word.as_str(),
            extra_letters: entry.extra_letters.as_slice(),
        }
    };

    Some(DailyRotation {
        yesterday: puzzle((idx + len - 1) % len, today - DAY_MS),
        today: puzzle(idx, today),
        tomorrow: puzzle((idx + 1) % len, today + DAY_MS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_006_400_000;

    fn list(len: usize) -> CanonicalList {
        let words = ["example", "tremble", "reading", "panther", "kitchen",
            "morning", "balance", "captain", "fiction", "harmony"];
        CanonicalList::new(T, words.iter()
            .take(len)
            .enumerate()
            .map(|(i, w)| PuzzleEntry::new(*w, vec![(b'a' + i as u8) as char]))
            .collect())
    }

    #[test]
    fn test_resolves_around_today() {
        let list = list(10);
        let now = T + 2 * DAY_MS + 12_345;
        let rotation = resolve(now, &list).expect("non-empty list");
        assert_eq!(rotation.today.word, list.entries[2].word);
        assert_eq!(rotation.yesterday.word, list.entries[1].word);
        assert_eq!(rotation.tomorrow.word, list.entries[3].word);
        assert_eq!(rotation.today.extra_letters, &['c']);
        assert_eq!(rotation.today.day, T + 2 * DAY_MS);
        assert_eq!(rotation.yesterday.day, T + DAY_MS);
        assert_eq!(rotation.tomorrow.day, T + 3 * DAY_MS);
        assert_eq!(resolve(now, &list), Some(rotation));
    }

    #[test]
    fn test_before_first_day_uses_index_zero() {
        let list = list(10);
        let rotation = resolve(T - 5 * DAY_MS, &list).expect("non-empty list");
        assert_eq!(rotation.today.word, "example");
        assert_eq!(rotation.yesterday.word, "harmony");
        assert_eq!(rotation.tomorrow.word, "tremble");
        assert_eq!(rotation.today.day, T - 5 * DAY_MS);
    }

    #[test]
    fn test_wraps_past_end() {
        let list = list(10);
        let rotation = resolve(T + 19 * DAY_MS, &list).expect("non-empty list");
        assert_eq!(rotation.yesterday.word, "fiction");
        assert_eq!(rotation.today.word, "harmony");
        assert_eq!(rotation.tomorrow.word, "example");
    }

    #[test]
    fn test_single_entry_list() {
        let list = list(1);
        let rotation = resolve(T + 3 * DAY_MS, &list).expect("non-empty list");
        assert!(rotation.iter().all(|p| p.word == "example"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(resolve(T, &CanonicalList::new(T, vec![])), None);
    }

    #[test]
    fn test_find() {
        let list = list(10);
        let rotation = resolve(T + 4 * DAY_MS, &list).expect("non-empty list");
        assert!(rotation.find(T + 4 * DAY_MS, "kitchen").is_some());
        assert!(rotation.find(T + 5 * DAY_MS, "morning").is_some());
        assert!(rotation.find(T + 5 * DAY_MS, "kitchen").is_none());
        assert!(rotation.find(T + 7 * DAY_MS, "fiction").is_none());
    }

    #[test]
    fn test_json_shape() {
        let list = list(3);
        let rotation = resolve(T, &list).expect("non-empty list");
        let json = serde_json::to_value(rotation).expect("should serialize");
        assert_eq!(json["today"]["word"], "example");
        assert_eq!(json["today"]["extraLetters"][0], "a");
        assert_eq!(json["yesterday"]["day"], T - DAY_MS);
    }
}
