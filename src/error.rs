//! definition of the error reported when a connection word cannot be read from text

use core::fmt;

/**
    reason why an EDS numeric text could not be turned into a connection word

    Decoding a word never fails, only reading its text representation can. Callers rendering a connection usually do not report this error and simply show nothing for the word.
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WordError {
    /// the text holds no digit at all
    Empty,
    /// the text is not a decimal or `0x` prefixed hexadecimal number
    Invalid(&'static str),
    /// the number does not fit in 32 bits
    Overflow,
}

/// convenient alias to simplify return annotations
pub type WordResult<T> = core::result::Result<T, WordError>;

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty connection word"),
            Self::Invalid(message) => write!(f, "invalid connection word: {}", message),
            Self::Overflow => write!(f, "connection word does not fit in 32 bits"),
        }
    }
}

impl std::error::Error for WordError {}
