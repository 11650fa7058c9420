use crate::letters::Letters;
use crate::wordlist::Wordlist;
use crate::Error;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::read_to_string;

/// Words with their definitions, in the order they were found.
///
/// A word is only added once: later inserts of the same word are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Candidates {
    entries: Vec<(String, String)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    seen: HashSet<String>,
}

impl Candidates {
    pub fn new() -> Candidates {
        Candidates::default()
    }

    /// Add `word` with `definition`, unless `word` is already present.
    /// Returns true if the word was added.
    pub fn insert(&mut self, word: String, definition: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.entries.push((word, definition));
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Get the definition of `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, definition)| definition.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (word, definition) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// The words, in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(w, _)| w.as_str())
    }
}

impl IntoIterator for Candidates {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<(String, String)> for Candidates {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (word, definition) in iter {
            self.insert(word, definition);
        }
    }
}

/// The words that can be played, with their definitions.
///
/// The dictionary is built once and is read only afterwards, so it can be shared
/// between threads that search it at the same time.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    wordlist: Wordlist,
    /// Definitions keyed by uppercase word.
    definitions: HashMap<String, String>,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes, {} definitions>",
            self.wordlist.word_count,
            self.wordlist.node_count,
            self.definitions.len()
        )
    }
}

impl Dictionary {
    /// Combine a `wordlist` with `definitions` keyed by uppercase word.
    ///
    /// Every word in `wordlist` should have a definition. A word without one makes
    /// [`find_words`](Dictionary::find_words) fail with
    /// [`MissingDefinition`](Error::MissingDefinition) when it is found.
    pub fn new(wordlist: Wordlist, definitions: HashMap<String, String>) -> Dictionary {
        let dictionary = Dictionary {
            wordlist,
            definitions,
        };
        info!("created {}", dictionary);
        dictionary
    }

    /// Build the dictionary from words with their definitions.
    /// The words are used both for the wordlist and to look up definitions.
    /// ## Examples
    /// ```
    /// use scrabble_finder::Dictionary;
    /// let dictionary = Dictionary::from_definitions(vec![
    ///     ("CAT", "A small domesticated carnivore"),
    ///     ("ACT", "A thing done"),
    /// ]);
    /// let words = dictionary.find_words("tac")?;
    /// assert_eq!(words.len(), 2);
    /// assert_eq!(words.get("cat"), Some("A small domesticated carnivore"));
    /// # Ok::<(), scrabble_finder::Error>(())
    /// ```
    pub fn from_definitions<I, S, T>(definitions: I) -> Dictionary
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let definitions: HashMap<String, String> = definitions
            .into_iter()
            .map(|(word, definition)| (word.into().to_uppercase(), definition.into()))
            .collect();
        let wordlist = Wordlist::from_words(definitions.keys());
        Dictionary::new(wordlist, definitions)
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line, followed by whitespace and its definition.
    /// Empty lines are skipped.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line.split_once(char::is_whitespace) {
                Some((word, definition)) => (word, definition.trim()),
                None => (line, ""),
            });
        Ok(Dictionary::from_definitions(entries))
    }

    #[cfg(feature = "persist")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DeserializeError(String::from(wordfile)))?;
        info!("loaded {} from {}", dictionary, wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "persist")]
    /// Write the dictionary to `wordfile` with bincode.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file =
            File::create(wordfile).map_err(|_| Error::SerializeError(String::from(wordfile)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::SerializeError(String::from(wordfile)))
    }

    /// Return reference to our wordlist
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Get the definition for `word`, in any case.
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.definitions
            .get(&word.to_uppercase())
            .map(String::as_str)
    }

    /// Find all words in the dictionary that can be made with `letters`.
    /// Each letter can be used as often as it occurs in `letters`; case is ignored.
    /// The words are returned depth first, in alphabetical order of their letters,
    /// with their definitions.
    /// ## Errors
    /// If a found word has no definition.
    pub fn find_words(&self, letters: &str) -> Result<Candidates, Error> {
        let mut letters = Letters::from(letters);
        let mut found = Vec::new();
        self.search(0, &mut letters, &mut found);

        let mut candidates = Candidates::new();
        for word in found {
            let definition = self
                .definition(word)
                .ok_or_else(|| Error::MissingDefinition(word.to_uppercase()))?;
            candidates.insert(String::from(word), String::from(definition));
        }
        Ok(candidates)
    }

    /// Depth first search from `node`, using each available letter at most once.
    /// A letter is taken before descending into a child and given back before the next child,
    /// so siblings see the same letters as their parent.
    fn search<'a>(&'a self, node: usize, letters: &mut Letters, found: &mut Vec<&'a str>) {
        if let Some(word) = self.wordlist.terminal_word(node) {
            found.push(word);
        }
        if !self.wordlist.has_children(node) || letters.total() == 0 {
            return;
        }
        for (letter, child) in self.wordlist.iter_children(node) {
            if letters.take(letter) {
                self.search(child, letters, found);
                letters.restore(letter);
            }
        }
    }
}
