//! Error types for the Playfair library.

use std::fmt;

/// Errors produced by the Playfair library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayfairError {
    /// A character presented for position lookup is outside the 25-letter
    /// alphabet and therefore has no cell in the key matrix. Carries the
    /// offending character.
    LetterNotFound(char),
    /// Ciphertext does not decompose into whole digraphs: the filtered
    /// letter count is odd. Carries the offending length.
    InvalidLength(usize),
}

impl fmt::Display for PlayfairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayfairError::LetterNotFound(ch) => {
                write!(f, "Character '{}' is not in the key matrix", ch)
            }
            PlayfairError::InvalidLength(len) => {
                write!(
                    f,
                    "Ciphertext letter count must be even, got {} letters",
                    len
                )
            }
        }
    }
}

impl std::error::Error for PlayfairError {}
