use crate::grid::{Grid, EMPTY, N};
use crate::letters::LetterSet;
use crate::Error;
use std::collections::HashMap;
use std::fmt;
use tinyvec::TinyVec;

/// Number of squares on the board
pub const SQUARES: usize = N * N;

/// Quarter turns that make a column of the board read as a row.
const VERTICAL_TURNS: usize = 3;

/// Letters of a word, on the stack for normal word lengths.
type Chars = TinyVec<[char; 16]>;

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.horizontal)
    }
}

/// Represents the tiles on a scrabble board.
///
/// The board keeps the grid as given (`horizontal`) and the grid turned three
/// quarter turns clockwise (`vertical`), in which each column of the board reads as a row.
/// Both are built once, when the board is created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    horizontal: Grid,
    vertical: Grid,
}

/// Letters on the grid are lowercased.
impl From<Grid> for Board {
    fn from(mut grid: Grid) -> Self {
        for square in grid.iter_mut().flatten() {
            *square = square.to_ascii_lowercase();
        }
        Board {
            horizontal: grid,
            vertical: grid.rotated(VERTICAL_TURNS),
        }
    }
}

/// Parse the content of a square: `'.'` or a single letter.
fn parse_square(index: usize, value: &str) -> Result<char, Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(EMPTY), None) => Ok(EMPTY),
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(Error::InvalidSquare {
            index,
            value: String::from(value),
        }),
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Board {
        Board::from(Grid::empty())
    }

    /// Create the board from a map of square index (`"0"` .. `"224"`) to square content.
    /// The content is a letter in any case, or `"."` for an empty square.
    /// All 225 squares must be present, each under its decimal index without
    /// leading zeros or whitespace.
    /// ## Errors
    /// - If a key is not a square index.
    /// - If a square is missing.
    /// - If a value is not a letter or `"."`.
    /// ## Examples
    /// ```
    /// # use std::collections::HashMap;
    /// # use scrabble_finder::{Board, Error};
    /// let mut squares: HashMap<String, String> = (0..225)
    ///     .map(|i| (i.to_string(), String::from(".")))
    ///     .collect();
    /// squares.insert(String::from("2"), String::from("C"));
    /// let board = Board::from_sparse(&squares)?;
    /// assert_eq!(board.tile_at(0, 2), Some('c'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_sparse<K, V>(squares: &HashMap<K, V>) -> Result<Board, Error>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut grid = Grid::empty();
        let mut present = [false; SQUARES];
        for (key, value) in squares {
            let key = key.as_ref();
            let index = key
                .parse::<usize>()
                .ok()
                .filter(|&index| index < SQUARES && index.to_string() == key)
                .ok_or_else(|| Error::InvalidSquareIndex(String::from(key)))?;
            grid.set(index, parse_square(index, value.as_ref())?);
            present[index] = true;
        }
        if let Some(missing) = present.iter().position(|&p| !p) {
            return Err(Error::MissingSquare(missing));
        }
        Ok(Board::from(grid))
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters; `'.'` or `' '` is an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains something other than letters.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_finder::Board;
    /// let state = &[
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ".......CAT.....",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ];
    /// let board = Board::from_strings(state)?;
    /// assert_eq!(board.tile_at(7, 8), Some('a'));
    /// # Ok::<(), scrabble_finder::Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut grid = Grid::empty();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, c) in row.chars().enumerate() {
                let c = if c == ' ' { EMPTY } else { c };
                grid[i][j] = parse_square(i * N + j, c.encode_utf8(&mut [0; 4]))?;
            }
        }
        Ok(Board::from(grid))
    }

    /// Return the board state
    pub fn horizontal(&self) -> &Grid {
        &self.horizontal
    }

    /// Return the board state turned so the columns read as rows
    pub fn vertical(&self) -> &Grid {
        &self.vertical
    }

    /// Return letter at `row`, `column` or None if empty square or outside grid.
    pub fn tile_at(&self, row: usize, column: usize) -> Option<char> {
        match self.horizontal.get(row).and_then(|r| r.get(column)) {
            Some(&EMPTY) | None => None,
            Some(&c) => Some(c),
        }
    }

    /// Check if there are no tiles on the board.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty()
    }

    /// The distinct letters on the board.
    pub fn letters(&self) -> LetterSet {
        self.horizontal
            .iter()
            .flatten()
            .filter(|&&square| square != EMPTY)
            .copied()
            .collect()
    }

    /// Check if `word` fits on the board, horizontally or vertically, around one
    /// of the letters already on the board.
    ///
    /// Only the letter the word is anchored on is compared with the board. The
    /// squares to either side are counted while they are empty or hold that same
    /// letter; other tiles inside the run are not checked against the word.
    /// ## Examples
    /// ```
    /// # use scrabble_finder::{Board, Grid};
    /// let mut grid = Grid::empty();
    /// grid.set(2, 'c');
    /// grid.set(224, 'b');
    /// let board = Board::from(grid);
    /// assert!(board.fits("cat"));
    /// assert!(!board.fits("bat"));
    /// ```
    pub fn fits(&self, word: &str) -> bool {
        let word: Chars = word.chars().flat_map(char::to_lowercase).collect();
        check_orientation(&word, &self.horizontal) || check_orientation(&word, &self.vertical)
    }
}

/// Returns true if there is a position where `word` fits along a row of `grid`.
/// The first position that fits is enough.
fn check_orientation(word: &[char], grid: &Grid) -> bool {
    for (i, &letter) in word.iter().enumerate() {
        for row in grid.iter() {
            for (column, &square) in row.iter().enumerate() {
                if square == letter && fits_left_right(word, i, row, column) {
                    return true;
                }
            }
        }
    }
    false
}

/// Check if there is room on `row` for `word` when its letter at `i` is placed on
/// the tile at `column`.
fn fits_left_right(word: &[char], i: usize, row: &[char; N], column: usize) -> bool {
    let letter = word[i];
    // letters needed before the anchor
    let before_needed = word[i..]
        .iter()
        .position(|&c| c == letter)
        .map_or(i, |pos| i + pos);
    // the anchor and the letters after it
    let mut after_needed = word.len() - before_needed;
    // the last letter can sit on the right edge
    if column + after_needed == N {
        after_needed -= 1;
    }

    let is_open = |square: &&char| **square == EMPTY || **square == letter;
    let after_available = row[column + 1..].iter().take_while(is_open).count();
    let before_available = row[..column].iter().rev().take_while(is_open).count();

    before_needed <= before_available && after_needed <= after_available
}
