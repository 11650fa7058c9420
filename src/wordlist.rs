mod trievec;

use self::trievec::TrieVec;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;

/// Label stored for the root node, which has no letter.
const ROOT_LABEL: char = '\0';

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the possible words.
///
/// The nodes are stored breadth first in flat vectors and addressed by index,
/// so the children of a node are a contiguous range sorted by letter.
/// Node 0 is the root.
pub struct Wordlist {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and the number of children.
    pub nodes: Vec<(u32, u32)>,
    /// The letter of each node.
    pub labels: Vec<char>,
    /// The complete word for terminal nodes.
    pub words: Vec<Option<String>>,
    /// The number of words in the wordlist
    pub word_count: usize,
    /// The number of nodes in the wordlist.
    pub node_count: usize,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes>",
            self.word_count, self.node_count
        )
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::from(TrieVec::new())
    }
}

impl From<TrieVec> for Wordlist {
    fn from(trie: TrieVec) -> Self {
        let mut nodes: Vec<(u32, u32)> = Vec::new();
        let mut labels: Vec<char> = Vec::new();
        let mut words: Vec<Option<String>> = Vec::new();
        let mut word_count = 0;

        // children are queued in order, so they get consecutive indices
        let mut next: usize = 1;
        let mut queue = VecDeque::new();
        queue.push_back((ROOT_LABEL, &trie));
        while let Some((label, node)) = queue.pop_front() {
            let n = node.children().len();
            for (c, child) in node.children() {
                queue.push_back((*c, &**child));
            }
            if node.word().is_some() {
                word_count += 1;
            }
            nodes.push((next as u32, n as u32));
            labels.push(label);
            words.push(node.word().map(String::from));
            next += n;
        }
        let node_count = nodes.len();
        Wordlist {
            nodes,
            labels,
            words,
            word_count,
            node_count,
        }
    }
}

impl Wordlist {
    /// Build a wordlist from a list of words. Words are lowercased before insertion.
    /// ## Examples
    /// ```
    /// use scrabble_finder::Wordlist;
    /// let wordlist = Wordlist::from_words(&["CAT", "car", "cart"]);
    /// assert_eq!(wordlist.word_count, 3);
    /// assert!(wordlist.is_word("cart"));
    /// assert!(!wordlist.is_word("ca"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieVec::new();
        for word in words {
            builder.insert(&word.as_ref().to_lowercase());
        }
        let wordlist = Wordlist::from(builder);
        debug!("built {}", wordlist);
        wordlist
    }

    /// Return the index range of the child nodes of node `i`.
    pub fn range_children(&self, i: usize) -> Range<usize> {
        let (start, len) = self.nodes[i];
        let start = start as usize;
        start..start + len as usize
    }

    /// Check if node `i` has any children.
    pub fn has_children(&self, i: usize) -> bool {
        self.nodes[i].1 > 0
    }

    /// Iterate over the (letter, index) of the children of node `i`.
    pub fn iter_children(&self, i: usize) -> impl Iterator<Item = (char, usize)> + '_ {
        self.range_children(i).map(move |child| (self.labels[child], child))
    }

    /// Get the index of child with `letter` for node `i` if present.
    pub fn get(&self, i: usize, letter: char) -> Option<usize> {
        let range = self.range_children(i);
        let start = range.start;
        self.labels[range]
            .binary_search(&letter)
            .ok()
            .map(|pos| start + pos)
    }

    /// The word that ends at node `i`, if any.
    pub fn terminal_word(&self, i: usize) -> Option<&str> {
        self.words[i].as_deref()
    }

    /// Returns true if `word` is in wordlist
    pub fn is_word(&self, word: &str) -> bool {
        let mut i = 0;
        for c in word.chars() {
            match self.get(i, c) {
                Some(child) => i = child,
                None => return false,
            }
        }
        self.words[i].is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS)
    }

    #[test]
    fn test_range() {
        let wordlist = test_wordlist();
        println!("{:?}", wordlist);
        assert_eq!(wordlist.word_count, 11);
        assert_eq!(wordlist.node_count, 17);
        assert_eq!(wordlist.range_children(0), 1..3);
        assert_eq!(wordlist.range_children(1), 3..7);
        assert!(!wordlist.has_children(4));
    }

    #[test]
    fn test_terminal() {
        let wordlist = test_wordlist();
        assert_eq!(wordlist.terminal_word(4), Some("af"));
        assert_eq!(wordlist.terminal_word(0), None);
        assert_eq!(wordlist.labels[1], 'a');
    }

    #[test]
    fn test_is_word() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.is_word(word));
        }
        assert!(!wordlist.is_word("be"));
        assert!(!wordlist.is_word("belts"));
        assert!(!wordlist.is_word(""));
    }

    #[test]
    fn test_get() {
        let wordlist = test_wordlist();
        let b = wordlist.get(0, 'b').unwrap();
        assert_eq!(wordlist.labels[b], 'b');
        assert_eq!(wordlist.get(0, 'c'), None);
        let children: Vec<char> = wordlist.iter_children(b).map(|(c, _)| c).collect();
        assert_eq!(children, vec!['a', 'e', 'i', 'o']);
    }

    #[test]
    fn test_lowercase() {
        let wordlist = Wordlist::from_words(&["CAT", "Dog"]);
        assert!(wordlist.is_word("cat"));
        assert!(wordlist.is_word("dog"));
        assert!(!wordlist.is_word("CAT"));
    }

    #[test]
    fn test_empty() {
        let wordlist = Wordlist::default();
        assert_eq!(wordlist.word_count, 0);
        assert_eq!(wordlist.node_count, 1);
        assert!(!wordlist.has_children(0));
    }
}
