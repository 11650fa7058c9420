use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded dictionary
    #[cfg(feature = "persist")]
    #[error("Dictionary {0} could not be deserialized")]
    DeserializeError(String),

    /// Error writing bincoded dictionary
    #[cfg(feature = "persist")]
    #[error("Dictionary {0} could not be serialized")]
    SerializeError(String),

    /// A word from the wordlist has no entry in the definitions
    #[error("No definition for word \"{0}\"")]
    MissingDefinition(String),

    /// A word contains a letter that has no point value
    #[error("Invalid letter '{letter}' in word \"{word}\"")]
    InvalidLetter { word: String, letter: char },

    /// Board square index is not a number in 0..225
    #[error("Invalid square index \"{0}\"")]
    InvalidSquareIndex(String),

    /// Board is missing one of its 225 squares
    #[error("Missing square {0}")]
    MissingSquare(usize),

    /// Board square is neither a letter nor '.'
    #[error("Invalid value \"{value}\" for square {index}")]
    InvalidSquare { index: usize, value: String },

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),
}
