use thiserror::Error;

/// Failure to tokenize a line of source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { offset: usize, ch: char },

    #[error("string starting at offset {offset} has no closing quote")]
    UnterminatedString { offset: usize },

    #[error("number '{text}' is too big")]
    NumberTooBig { text: String },
}
