//! Digraph preparation: normalizing text into letter pairs.
//!
//! Playfair operates on digraphs, ordered pairs of letters from the 25-letter
//! alphabet. Plaintext goes through a lossy normalization (non-alphabetic
//! characters dropped, case folded, J folded into I) followed by a single
//! left-to-right pairing pass that inserts a pad letter after a lone trailing
//! letter or between identical adjacent letters. Ciphertext is normalized the
//! same way but paired by plain sequential grouping.

use std::fmt;

use crate::error::PlayfairError;
use crate::matrix::fold_letter;

/// Default pad letter inserted to keep digraphs well-formed.
pub const DEFAULT_PAD: char = 'X';

/// An ordered pair of letters processed as one substitution unit.
///
/// A pure value type: two digraphs are equal exactly when their letters are.
/// A sequence of digraphs reconstructs message order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph {
    pub first: char,
    pub second: char,
}

impl Digraph {
    pub fn new(first: char, second: char) -> Self {
        Digraph { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

/// Filters text down to folded alphabet letters.
///
/// Digits, punctuation, and whitespace are silently dropped; this is lossy
/// and irreversible. Shared by plaintext and ciphertext normalization.
fn filter_letters(text: &str) -> Vec<char> {
    text.chars().filter_map(fold_letter).collect()
}

/// Prepares plaintext as a sequence of digraphs ready for matrix lookup.
///
/// Single left-to-right pass over the filtered letters, index `i` from 0:
/// 1. If `i` is the last remaining letter, emit `(letter[i], pad_char)` and
///    stop.
/// 2. Otherwise, if `letter[i] == letter[i + 1]`, emit `(letter[i], pad_char)`
///    and advance by one, so the second letter restarts the next pair;
///    else emit `(letter[i], letter[i + 1])` and advance by two.
///
/// A plaintext letter equal to `pad_char` gets no special treatment; the pad
/// is inserted by the same-letter rule regardless (so decryption output can
/// be ambiguous around legitimate pad letters — see [`crate::heuristic_clean`]).
///
/// Empty input yields an empty sequence. Never fails.
///
/// # Examples
///
/// ```
/// use playfair::{prepare_digraphs, Digraph, DEFAULT_PAD};
///
/// let digraphs = prepare_digraphs("balloon", DEFAULT_PAD);
/// assert_eq!(digraphs[1], Digraph::new('L', 'X'));
/// assert_eq!(digraphs.len(), 4);
/// ```
pub fn prepare_digraphs(plaintext: &str, pad_char: char) -> Vec<Digraph> {
    let letters = filter_letters(plaintext);
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if a == b => {
                digraphs.push(Digraph::new(a, pad_char));
                i += 1;
            }
            Some(&b) => {
                digraphs.push(Digraph::new(a, b));
                i += 2;
            }
            None => {
                digraphs.push(Digraph::new(a, pad_char));
                i += 1;
            }
        }
    }
    digraphs
}

/// Groups ciphertext into digraphs by plain sequential pairing.
///
/// Ciphertext digraphs are assumed well-formed from a prior encryption, so
/// there is no same-letter rule here. The filtered letter count must be even.
///
/// # Errors
/// Returns [`PlayfairError::InvalidLength`] with the filtered letter count
/// when it is odd. Hard precondition, not recoverable.
pub fn pair_ciphertext(ciphertext: &str) -> Result<Vec<Digraph>, PlayfairError> {
    let letters = filter_letters(ciphertext);
    if letters.len() % 2 != 0 {
        return Err(PlayfairError::InvalidLength(letters.len()));
    }
    Ok(letters
        .chunks_exact(2)
        .map(|pair| Digraph::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(digraphs: &[Digraph]) -> Vec<(char, char)> {
        digraphs.iter().map(|d| (d.first, d.second)).collect()
    }

    #[test]
    fn test_even_distinct_letters_pair_directly() {
        let digraphs = prepare_digraphs("GOLD", DEFAULT_PAD);
        assert_eq!(pairs(&digraphs), vec![('G', 'O'), ('L', 'D')]);
    }

    #[test]
    fn test_odd_length_pads_tail() {
        let digraphs = prepare_digraphs("GEM", DEFAULT_PAD);
        assert_eq!(pairs(&digraphs), vec![('G', 'E'), ('M', 'X')]);
    }

    #[test]
    fn test_double_letter_inserts_pad_and_reexamines() {
        // LL splits into (L,X) with the second L starting the next pair.
        let digraphs = prepare_digraphs("BALLOON", DEFAULT_PAD);
        assert_eq!(
            pairs(&digraphs),
            vec![('B', 'A'), ('L', 'X'), ('L', 'O'), ('O', 'N')]
        );
    }

    #[test]
    fn test_j_folds_and_case_and_noise_dropped() {
        let digraphs = prepare_digraphs("Jazz, 2024!", DEFAULT_PAD);
        // JAZZ -> IAZZ -> (I,A)(Z,X)(Z,X)
        assert_eq!(pairs(&digraphs), vec![('I', 'A'), ('Z', 'X'), ('Z', 'X')]);
    }

    #[test]
    fn test_known_example_digraphs() {
        let digraphs = prepare_digraphs("Hide the gold in the tree stump", DEFAULT_PAD);
        assert_eq!(
            pairs(&digraphs),
            vec![
                ('H', 'I'),
                ('D', 'E'),
                ('T', 'H'),
                ('E', 'G'),
                ('O', 'L'),
                ('D', 'I'),
                ('N', 'T'),
                ('H', 'E'),
                ('T', 'R'),
                ('E', 'X'),
                ('E', 'S'),
                ('T', 'U'),
                ('M', 'P'),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(prepare_digraphs("", DEFAULT_PAD).is_empty());
        assert!(prepare_digraphs("42 + 17!", DEFAULT_PAD).is_empty());
    }

    #[test]
    fn test_literal_pad_letter_gets_no_special_case() {
        // XX pairs as (X, pad) with the second X re-examined, same as any
        // other doubled letter.
        let digraphs = prepare_digraphs("XX", DEFAULT_PAD);
        assert_eq!(pairs(&digraphs), vec![('X', 'X'), ('X', 'X')]);
    }

    #[test]
    fn test_custom_pad_char() {
        let digraphs = prepare_digraphs("LL", 'Q');
        assert_eq!(pairs(&digraphs), vec![('L', 'Q'), ('L', 'Q')]);
    }

    #[test]
    fn test_pair_ciphertext_sequential() {
        let digraphs = pair_ciphertext("BMOD").unwrap();
        assert_eq!(pairs(&digraphs), vec![('B', 'M'), ('O', 'D')]);
    }

    #[test]
    fn test_pair_ciphertext_no_same_letter_rule() {
        let digraphs = pair_ciphertext("AABB").unwrap();
        assert_eq!(pairs(&digraphs), vec![('A', 'A'), ('B', 'B')]);
    }

    #[test]
    fn test_pair_ciphertext_filters_before_counting() {
        // Punctuation and spacing do not count toward the length check.
        let digraphs = pair_ciphertext("bm od").unwrap();
        assert_eq!(pairs(&digraphs), vec![('B', 'M'), ('O', 'D')]);
    }

    #[test]
    fn test_pair_ciphertext_odd_length_rejected() {
        assert_eq!(
            pair_ciphertext("ABCDE"),
            Err(PlayfairError::InvalidLength(5))
        );
    }

    #[test]
    fn test_digraph_display() {
        assert_eq!(format!("{}", Digraph::new('H', 'I')), "(H,I)");
    }
}
