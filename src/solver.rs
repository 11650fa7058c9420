use crate::board::Board;
use crate::dictionary::{Candidates, Dictionary};
use crate::scorer::{score_word_group, ScoredWords};
use crate::Error;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Finds the words that can be played with a rack of letters on a board.
///
/// The solver only reads its dictionary, so one solver can answer any number of
/// queries at the same time, from different threads.
///
/// ## Examples
/// ```
/// # use std::collections::HashMap;
/// use scrabble_finder::{Board, Dictionary, Solver};
///
/// let dictionary = Dictionary::from_definitions(vec![
///     ("CAT", "A small domesticated carnivore"),
///     ("AT", "In or near a place"),
/// ]);
/// let solver = Solver::new(dictionary);
/// let mut squares: HashMap<String, String> = (0..225)
///     .map(|i| (i.to_string(), String::from(".")))
///     .collect();
/// squares.insert(String::from("2"), String::from("C"));
/// let board = Board::from_sparse(&squares)?;
///
/// let results = solver.find_words(&board, "at")?;
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[&5][0].0, "cat");
/// # Ok::<(), scrabble_finder::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Dictionary,
}

impl Solver {
    /// Create a solver for `dictionary`.
    pub fn new(dictionary: Dictionary) -> Solver {
        Solver { dictionary }
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find the words that can be made with `letters` plus one letter on the board,
    /// and that fit on the board around a letter already there.
    /// On an empty board all words that can be made with `letters` are returned.
    /// The words are grouped by score.
    /// ## Errors
    /// - If a found word has no definition.
    /// - If a found word has a letter without points.
    pub fn find_words(&self, board: &Board, letters: &str) -> Result<ScoredWords, Error> {
        let candidates = self.candidates(board, letters)?;
        debug!(
            "found {} words for letters \"{}\" on board with {:?}",
            candidates.len(),
            letters,
            board.letters()
        );
        score_word_group(candidates)
    }

    /// The words that can be played, with definitions, before scoring.
    /// When a word can be played on more than one board letter, it is kept at
    /// the first board letter in alphabetical order.
    /// ## Errors
    /// If a found word has no definition.
    pub fn candidates(&self, board: &Board, letters: &str) -> Result<Candidates, Error> {
        let board_letters: Vec<char> = board.letters().iter().collect();
        if board_letters.is_empty() {
            return self.dictionary.find_words(letters);
        }
        let playable = |&anchor: &char| -> Result<Vec<(String, String)>, Error> {
            let mut letters = String::from(letters);
            letters.push(anchor);
            let found = self.dictionary.find_words(&letters)?;
            let total = found.len();
            let words: Vec<(String, String)> = found
                .into_iter()
                .filter(|(word, _)| board.fits(word))
                .collect();
            trace!("anchor '{}': {} of {} words fit", anchor, words.len(), total);
            Ok(words)
        };

        #[cfg(feature = "rayon")]
        let per_anchor = board_letters
            .par_iter()
            .map(playable)
            .collect::<Result<Vec<_>, Error>>()?;
        #[cfg(not(feature = "rayon"))]
        let per_anchor = board_letters
            .iter()
            .map(playable)
            .collect::<Result<Vec<_>, Error>>()?;

        let mut candidates = Candidates::new();
        for words in per_anchor {
            candidates.extend(words);
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SQUARES;
    use crate::grid::Grid;
    use std::collections::HashMap;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[(&str, &str)] = &[
        ("CAT", "a small carnivore"),
        ("ACT", "a thing done"),
        ("AT", "in or near"),
        ("TA", "thanks"),
        ("BAT", "a flying mammal"),
        ("TAB", "a small flap"),
        ("CAB", "a taxi"),
    ];

    fn solver() -> Solver {
        Solver::new(Dictionary::from_definitions(WORDS.iter().copied()))
    }

    fn board_with(tiles: &[(usize, char)]) -> Board {
        let mut grid = Grid::empty();
        for &(index, tile) in tiles {
            grid.set(index, tile);
        }
        Board::from(grid)
    }

    fn words(scored: &ScoredWords) -> Vec<&str> {
        scored
            .values()
            .flatten()
            .map(|(word, _)| word.as_str())
            .collect()
    }

    #[test]
    fn test_empty_board() -> Result<()> {
        let solver = solver();
        let board = Board::new();
        let scored = solver.find_words(&board, "tac")?;
        let direct = score_word_group(solver.dictionary().find_words("tac")?)?;
        assert_eq!(scored, direct);
        assert_eq!(words(&scored), vec!["at", "ta", "act", "cat"]);
        Ok(())
    }

    #[test]
    fn test_board_letter_is_added() -> Result<()> {
        let solver = solver();
        let board = board_with(&[(2, 'c')]);
        let scored = solver.find_words(&board, "at")?;
        // "at" and "ta" can be made, but have no c to anchor on
        assert_eq!(words(&scored), vec!["act", "cat"]);
        assert_eq!(scored[&5][1].1, "a small carnivore");
        Ok(())
    }

    #[test]
    fn test_uppercase_tile() -> Result<()> {
        let solver = solver();
        let board = board_with(&[(2, 'C')]);
        let scored = solver.find_words(&board, "at")?;
        assert_eq!(words(&scored), vec!["act", "cat"]);
        Ok(())
    }

    #[test]
    fn test_first_anchor_wins() -> Result<()> {
        let solver = solver();
        let board = board_with(&[(112, 'a'), (50, 'b')]);
        let candidates = solver.candidates(&board, "at")?;
        let found: Vec<&str> = candidates.words().collect();
        // anchor 'a' gives "at" and "ta"; anchor 'b' finds them again and adds "bat" and "tab"
        assert_eq!(found, vec!["at", "ta", "bat", "tab"]);
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<()> {
        let solver = solver();
        let board = board_with(&[(2, 'c'), (112, 'a')]);
        let first = solver.find_words(&board, "tab")?;
        let second = solver.find_words(&board, "tab")?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_words_in_dictionary() -> Result<()> {
        let solver = solver();
        let board = board_with(&[(2, 'c'), (112, 'a'), (224, 'b')]);
        let definitions: HashMap<&str, &str> = WORDS.iter().copied().collect();
        for (word, definition) in solver.find_words(&board, "tab")?.values().flatten() {
            assert_eq!(
                definitions.get(word.to_uppercase().as_str()),
                Some(&definition.as_str())
            );
        }
        Ok(())
    }

    #[test]
    fn test_full_board() -> Result<()> {
        let solver = solver();
        let mut grid = Grid::empty();
        for i in 0..SQUARES {
            grid.set(i, 'x');
        }
        let scored = solver.find_words(&Board::from(grid), "cat")?;
        assert!(scored.is_empty());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "MissingDefinition(\"TA\")")]
    fn test_missing_definition() {
        let wordlist = crate::Wordlist::from_words(&["at", "ta"]);
        let mut definitions = HashMap::new();
        definitions.insert(String::from("AT"), String::from("in or near"));
        let solver = Solver::new(Dictionary::new(wordlist, definitions));
        solver.find_words(&Board::new(), "at").unwrap();
    }
}
