//! A scrabble word finder for Rust.
//! <br>
//! This crate finds the words you can play with the letters on your rack, given
//! the tiles already on a 15x15 scrabble board. Each word comes with its definition
//! and its score, and the words are grouped by score.
//! It can use the `rayon` crate to search around the letters on the board in parallel.
//!
//! # How to use `scrabble_finder`
//! Start by building a [`Dictionary`] from words and their definitions, and create a [`Solver`]
//! with it. The dictionary is built once; the solver can then be shared by any number of queries.
//! For each query, create a [`Board`] from the squares of the board, and ask the solver for the
//! words that can be played with your rack.
//!
//! # Basic usage
//!  ```
//! use scrabble_finder::{Board, Dictionary, Error, Solver};
//!
//! let dictionary = Dictionary::from_definitions(vec![
//!     ("RUST", "Iron oxide"),
//!     ("RUT", "A long deep track"),
//!     ("STAR", "A luminous body"),
//! ]);
//! let solver = Solver::new(dictionary);
//! let mut rows = vec!["..............."; 15];
//! rows[7] = "......S........";
//! let board = Board::from_strings(&rows)?;
//! let results = solver.find_words(&board, "rut")?;
//! for (score, words) in results.iter().rev() {
//!     for (word, definition) in words {
//!         println!("{} {} {}", score, word, definition);
//!     }
//! }
//! assert_eq!(results[&4][0].0, "rust");
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! The wordlist is a trie, flattened into vectors so its nodes are addressed by index.
//! A search walks the trie depth first and uses up one rack letter per step.
//! A word found this way is kept if it can be anchored on a letter of the board with
//! enough open squares on either side, along a row or along a column.
mod board;
mod dictionary;
mod error;
mod grid;
mod letters;
mod scorer;
mod solver;
mod wordlist;

pub use crate::board::{Board, SQUARES};
pub use crate::dictionary::{Candidates, Dictionary};
pub use crate::error::Error;
pub use crate::grid::{Grid, EMPTY, N};
pub use crate::letters::{LetterSet, Letters};
pub use crate::scorer::{letter_points, score_word, score_word_group, ScoredWords};
pub use crate::solver::Solver;
pub use crate::wordlist::Wordlist;
