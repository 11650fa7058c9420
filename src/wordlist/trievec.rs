/// Naive trie implementation supporting dynamic insertion.
///
/// Children are kept sorted by letter. A terminal node stores the complete word,
/// so a search can report it without rebuilding the path.
/// The structure is only used to build a [`Wordlist`](super::Wordlist).
#[derive(Debug, Default)]
pub struct TrieVec {
    children: Vec<(char, Box<TrieVec>)>,
    word: Option<String>,
}

impl TrieVec {
    pub fn new() -> TrieVec {
        TrieVec {
            children: Vec::new(),
            word: None,
        }
    }

    pub fn children(&self) -> &Vec<(char, Box<Self>)> {
        &self.children
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Insert `word`, creating a node for each missing letter.
    /// Inserting a word that is already present only marks the last node again.
    pub fn insert(&mut self, word: &str) {
        let mut t = self;
        for c in word.chars() {
            let next_pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut *{ t }.children[next_pos].1;
        }
        t.word = Some(String::from(word));
    }
}
