//! Best-effort removal of pad letters from decrypted output.
//!
//! This is NOT part of the cipher's correctness contract. Once a pad letter
//! is inserted it is indistinguishable from a legitimate plaintext letter, so
//! any removal is a guess. The heuristic here errs toward removing: it can
//! corrupt plaintext that legitimately contained the pad letter, or doubled
//! letters that the pairing split (e.g. the `EE` of `TREE` comes back as a
//! single `E`). Callers wanting the exact decryption output should use
//! [`crate::decrypt`] directly.

use crate::digraph::DEFAULT_PAD;

/// Heuristically strips pad letters from a raw decrypted letter stream.
///
/// Two passes:
/// 1. Remove a single trailing [`DEFAULT_PAD`] if present (the odd-length
///    tail pad).
/// 2. Scan left to right, collapsing every `letter, pad, same letter` triple
///    into a single letter (the pad inserted between doubled letters, plus
///    the letter it duplicated).
pub fn heuristic_clean(text: &str) -> String {
    let mut letters: Vec<char> = text.chars().collect();
    if letters.last() == Some(&DEFAULT_PAD) {
        letters.pop();
    }

    let mut out = String::with_capacity(letters.len());
    let mut i = 0;
    while i < letters.len() {
        if i + 2 < letters.len() && letters[i + 1] == DEFAULT_PAD && letters[i] == letters[i + 2] {
            out.push(letters[i]);
            i += 3;
        } else {
            out.push(letters[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_single_trailing_pad() {
        assert_eq!(heuristic_clean("GEMX"), "GEM");
    }

    #[test]
    fn test_strips_only_one_trailing_pad() {
        assert_eq!(heuristic_clean("GEMXX"), "GEMX");
    }

    #[test]
    fn test_collapses_pad_between_doubled_letters() {
        assert_eq!(heuristic_clean("HIDETHEGOLDINTHETREXESTUMP"), "HIDETHEGOLDINTHETRESTUMP");
    }

    #[test]
    fn test_leaves_unrelated_x_alone() {
        // X between two different letters is kept.
        assert_eq!(heuristic_clean("BOXCAR"), "BOXCAR");
    }

    #[test]
    fn test_known_corruption_case() {
        // Legitimate EXE collapses to E: documented lossiness.
        assert_eq!(heuristic_clean("EXECUTE"), "ECUTE");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(heuristic_clean(""), "");
    }

    #[test]
    fn test_lone_pad() {
        assert_eq!(heuristic_clean("X"), "");
    }
}
