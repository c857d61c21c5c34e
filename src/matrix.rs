//! KeyMatrix: the 5×5 letter grid derived from a keyword.
//!
//! The matrix is the sole lookup structure for digraph substitution. It holds
//! the 25-letter alphabet (A–Z with J folded into I), seeded by the keyword's
//! letters in first-seen order and completed with the remaining alphabet in
//! standard order. Built once per encrypt/decrypt call and immutable after
//! construction, so it is safe to share read-only across threads.

use std::fmt;

use crate::error::PlayfairError;

/// The 25-letter Playfair alphabet, in standard order, with J omitted.
pub const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Grid dimension. The matrix is always `SIZE` × `SIZE`.
pub const SIZE: usize = 5;

/// A (row, column) coordinate in `[0,4] × [0,4]` locating a letter within a
/// [`KeyMatrix`]. Derived on demand by [`KeyMatrix::position`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Ordered 5×5 grid of the 25 distinct Playfair letters.
///
/// # Invariants
/// - Exactly 25 cells, no duplicate letters.
/// - Every letter of [`ALPHABET`] appears exactly once; J never appears.
///
/// These hold for any keyword (including the empty string) because the
/// builder always falls back to the remaining alphabet letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [[char; SIZE]; SIZE],
}

/// Uppercases a character, folds J into I, and rejects non-alphabetic input.
///
/// This is the single normalization rule shared by the matrix builder, the
/// digraph preparer, and the ciphertext filter. Dropping non-alphabetic
/// characters is lossy and irreversible.
///
/// # Returns
/// The folded uppercase letter, or `None` for non-ASCII-alphabetic input.
pub(crate) fn fold_letter(ch: char) -> Option<char> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    let upper = ch.to_ascii_uppercase();
    Some(if upper == 'J' { 'I' } else { upper })
}

impl KeyMatrix {
    /// Builds the key matrix from a keyword.
    ///
    /// The keyword is uppercased, stripped of non-alphabetic characters
    /// (spaces included), and J-folded. Its letters are placed in first-seen
    /// order, then the rest of the alphabet is appended in standard order,
    /// and the resulting 25-letter sequence is laid out row-major.
    ///
    /// Never fails: any input yields a valid matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::KeyMatrix;
    ///
    /// let matrix = KeyMatrix::from_keyword("PLAYFAIR EXAMPLE");
    /// assert_eq!(matrix.display_lines()[0], "P L A Y F");
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(SIZE * SIZE);
        let keyed = keyword.chars().filter_map(fold_letter);
        let fallback = ALPHABET.chars();
        for ch in keyed.chain(fallback) {
            let slot = (ch as u8 - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                letters.push(ch);
            }
        }
        debug_assert_eq!(letters.len(), SIZE * SIZE);

        let mut cells = [[' '; SIZE]; SIZE];
        for (i, ch) in letters.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = ch;
        }
        KeyMatrix { cells }
    }

    /// Looks up the position of a letter in the matrix.
    ///
    /// A literal `J` is folded to `I` before lookup, matching the builder's
    /// normalization. Lowercase letters are uppercased.
    ///
    /// # Errors
    /// Returns [`PlayfairError::LetterNotFound`] if the character is outside
    /// the 25-letter alphabet. Callers that route input through the digraph
    /// preparer never hit this, but a bypassing caller must get a checked
    /// error, not a default position.
    pub fn position(&self, ch: char) -> Result<Position, PlayfairError> {
        let target = fold_letter(ch).ok_or(PlayfairError::LetterNotFound(ch))?;
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == target {
                    return Ok(Position { row, col });
                }
            }
        }
        Err(PlayfairError::LetterNotFound(ch))
    }

    /// Returns the letter at the given position.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside `[0,4]`. All positions produced by
    /// [`position`](Self::position) and the wrapping arithmetic are in range.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Formats the matrix as five display lines of five space-separated
    /// letters, row-major. Consumed by any caller wanting to show the matrix.
    pub fn display_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|ch| ch.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_lines().join("\n"))
    }
}
