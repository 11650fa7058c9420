//! Letter values and word scores.
use crate::dictionary::Candidates;
use crate::Error;
use std::collections::BTreeMap;

/// Words with their definitions, grouped by score.
/// Within a score the words keep the order in which they were found.
pub type ScoredWords = BTreeMap<u32, Vec<(String, String)>>;

/// letter, points
type TileInfo = (char, u32);

const TILESET: [TileInfo; 26] = [
    ('a', 1),
    ('b', 3),
    ('c', 3),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 2),
    ('h', 4),
    ('i', 1),
    ('j', 8),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 3),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 1),
    ('v', 8),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// Return the points for `letter` in any case, or None if it is not in `a..z`.
pub fn letter_points(letter: char) -> Option<u32> {
    let letter = letter.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let (_, points) = TILESET[(letter as u8 - b'a') as usize];
    Some(points)
}

/// Calculate the score of `word`: the sum of the points of its letters.
/// ## Errors
/// If `word` contains a letter outside `a..z`.
/// ## Examples
/// ```
/// # use scrabble_finder::{score_word, Error};
/// assert_eq!(score_word("cat")?, 5);
/// assert_eq!(score_word("Quiz")?, 22);
/// # Ok::<(), Error>(())
/// ```
pub fn score_word(word: &str) -> Result<u32, Error> {
    word.chars()
        .map(|letter| {
            letter_points(letter).ok_or_else(|| Error::InvalidLetter {
                word: String::from(word),
                letter,
            })
        })
        .sum()
}

/// Group `candidates` by score.
/// ## Errors
/// If a word contains a letter outside `a..z`.
pub fn score_word_group(candidates: Candidates) -> Result<ScoredWords, Error> {
    let mut scored = ScoredWords::new();
    for (word, definition) in candidates {
        let score = score_word(&word)?;
        scored.entry(score).or_default().push((word, definition));
    }
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_letter_points() {
        assert_eq!(letter_points('a'), Some(1));
        assert_eq!(letter_points('Q'), Some(10));
        assert_eq!(letter_points('v'), Some(8));
        assert_eq!(letter_points('.'), None);
        assert_eq!(letter_points('é'), None);
        for (i, &(letter, _)) in TILESET.iter().enumerate() {
            assert_eq!(letter, (b'a' + i as u8) as char);
        }
    }

    #[test]
    fn test_score_word() -> Result<()> {
        assert_eq!(score_word("cat")?, 5);
        assert_eq!(score_word("CAT")?, 5);
        assert_eq!(score_word("carbon")?, 10);
        assert_eq!(score_word("")?, 0);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLetter { word: \"can't\", letter: '\\'' }")]
    fn test_invalid_letter() {
        score_word("can't").unwrap();
    }

    #[test]
    fn test_score_word_group() -> Result<()> {
        let mut candidates = Candidates::new();
        for &(word, definition) in &[
            ("cat", "a feline"),
            ("ab", "a muscle"),
            ("act", "a deed"),
            ("cab", "a taxi"),
        ] {
            candidates.insert(String::from(word), String::from(definition));
        }
        let scored = score_word_group(candidates)?;
        assert_eq!(scored.keys().copied().collect::<Vec<_>>(), vec![4, 5, 7]);
        // found order, not alphabetical
        let fives: Vec<&str> = scored[&5].iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(fives, vec!["cat", "act"]);
        assert_eq!(scored[&7], vec![(String::from("cab"), String::from("a taxi"))]);
        Ok(())
    }

    #[test]
    fn test_score_word_group_invalid() {
        let mut candidates = Candidates::new();
        candidates.insert(String::from("zoë"), String::new());
        assert!(matches!(
            score_word_group(candidates),
            Err(Error::InvalidLetter { letter: 'ë', .. })
        ));
    }
}
