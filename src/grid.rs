#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// The dimension of a scrabble board: N x N squares
pub const N: usize = 15;

/// Content of an empty square
pub const EMPTY: char = '.';

type Inner = [[char; N]; N];

/// Scrabble board grid, consisting of 15x15 squares.
///
/// A square holds a lowercase letter, or [`EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Create a new grid with 15x15 empty squares.
    pub fn empty() -> Grid {
        Grid([[EMPTY; N]; N])
    }

    /// Set the square at linear index `index` (row = index / 15, column = index % 15).
    /// ## Panics
    /// If `index` is not below 225.
    pub fn set(&mut self, index: usize, square: char) {
        self.0[index / N][index % N] = square;
    }

    /// Check if all squares are empty.
    pub fn is_empty(&self) -> bool {
        self.iter().flatten().all(|&square| square == EMPTY)
    }

    /// Return the grid rotated 90 degrees clockwise: the rows are reversed,
    /// then transposed. The first row of the result is the first column read bottom up.
    /// ## Examples
    /// ```
    /// use scrabble_finder::Grid;
    /// let mut grid = Grid::empty();
    /// grid[14][0] = 'a';
    /// assert_eq!(grid.rotate()[0][0], 'a');
    /// ```
    #[must_use]
    pub fn rotate(&self) -> Grid {
        let mut rotated = Grid::empty();
        for (i, row) in rotated.iter_mut().enumerate() {
            for (j, square) in row.iter_mut().enumerate() {
                *square = self.0[N - 1 - j][i];
            }
        }
        rotated
    }

    /// Return the grid rotated `times` x 90 degrees clockwise.
    #[must_use]
    pub fn rotated(&self, times: usize) -> Grid {
        (0..times % 4).fold(*self, |grid, _| grid.rotate())
    }

    /// Get grid squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Grid {
        // a distinct letter pattern so every rotation is different
        let mut grid = Grid::empty();
        for i in 0..N {
            for j in 0..N {
                grid[i][j] = (b'a' + ((i * 7 + j * 3) % 26) as u8) as char;
            }
        }
        grid
    }

    #[test]
    fn test_rotate_four_times() {
        let grid = numbered();
        let mut rotated = grid;
        for _ in 0..4 {
            rotated = rotated.rotate();
        }
        assert_eq!(rotated, grid);
        assert_ne!(grid.rotate(), grid);
        assert_eq!(grid.rotated(4), grid);
    }

    #[test]
    fn test_rotate_direction() {
        let mut grid = Grid::empty();
        grid[0][0] = 'a';
        grid[0][2] = 'c';
        let rotated = grid.rotate();
        assert_eq!(rotated[0][14], 'a');
        assert_eq!(rotated[2][14], 'c');
        // three quarter turns: column j of the original becomes row 14 - j
        let rotated = grid.rotated(3);
        assert_eq!(rotated[14][0], 'a');
        assert_eq!(rotated[12][0], 'c');
    }

    #[test]
    fn test_index() {
        let mut grid = Grid::empty();
        assert!(grid.is_empty());
        grid.set(224, 'b');
        grid.set(16, 'x');
        assert_eq!(grid[14][14], 'b');
        assert_eq!(grid[1][1], 'x');
                assert!(!grid.is_empty());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::empty();
        grid[0][2] = 'c';
        let s = grid.to_string();
        assert_eq!(s.lines().count(), N);
        assert_eq!(s.lines().next(), Some("..c............"));
    }
}
