//! Letter collections used during a search.
use multiset::HashMultiSet;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// The letters available for a search, with their remaining counts.
///
/// Letters are lowercased when added. Characters outside `a..z` are kept; they
/// never match a letter in the wordlist.
#[derive(Debug, Clone)]
pub struct Letters(HashMultiSet<char>);

impl Deref for Letters {
    type Target = HashMultiSet<char>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Letters {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// Number of `letter` still available.
    pub fn count(&self, letter: char) -> usize {
        self.0.count_of(&letter)
    }

    /// Total number of letters still available.
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// Use one `letter`. Returns false if none was left.
    pub fn take(&mut self, letter: char) -> bool {
        self.0.remove(&letter)
    }

    /// Give back a `letter` that was taken.
    pub fn restore(&mut self, letter: char) {
        self.0.insert(letter);
    }
}

impl Default for Letters {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Letters {
    fn from(letters: &str) -> Self {
        letters.chars().collect()
    }
}

impl FromIterator<char> for Letters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut bag = HashMultiSet::new();
        for c in iter {
            for lc in c.to_lowercase() {
                bag.insert(lc);
            }
        }
        Self(bag)
    }
}

/// A bitset of the letters `a..z`
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    fn bit(letter: char) -> Option<u32> {
        match letter.to_ascii_lowercase() {
            c @ 'a'..='z' => Some(1 << (c as u32 - 'a' as u32)),
            _ => None,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        Self::bit(letter).map_or(false, |bit| self.0 & bit != 0)
    }

    /// Insert `letter`. Returns false if it was already present or is not in `a..z`.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                let present = self.0 & bit != 0;
                self.0 |= bit;
                !present
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> {
        let value = self.0;
        (0..26u8)
            .filter(move |i| value & (1 << i) != 0)
            .map(|i| (b'a' + i) as char)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().collect::<String>())
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let mut letters = Letters::from("aAbx");
        assert_eq!(letters.count('a'), 2);
        assert_eq!(letters.count('b'), 1);
        assert_eq!(letters.count('c'), 0);
        assert_eq!(letters.total(), 4);
        assert!(letters.take('a'));
        assert!(letters.take('a'));
        assert!(!letters.take('a'));
        assert_eq!(letters.total(), 2);
        letters.restore('a');
        assert_eq!(letters.count('a'), 1);
    }

    #[test]
    fn test_letters_clone_is_independent() {
        let letters = Letters::from("ab");
        let mut copy = letters.clone();
        copy.take('a');
        assert_eq!(letters.count('a'), 1);
        assert_eq!(copy.count('a'), 0);
    }

    #[test]
    fn test_empty_letters() {
        let letters = Letters::from("");
        assert_eq!(letters.total(), 0);
    }

    #[test]
    fn test_letterset() {
        let mut set = LetterSet::new();
        for &c in &['c', 'Z', 'c', 'a'] {
            set.insert(c);
        }
        for &c in &['a', 'c', 'z'] {
            assert!(set.contains(c));
        }
        assert!(!set.contains('b'));
        assert!(!set.insert('.'));
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<String>(), "acz");
        assert_eq!(format!("{:?}", set), "{acz}");
    }
}
