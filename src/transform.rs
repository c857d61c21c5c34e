//! Pair Transformer: the Playfair positional substitution rules.
//!
//! One digraph goes in, one digraph comes out, with an optional
//! human-readable trace of the rule applied. Rule selection order is fixed:
//! same row, then same column, then rectangle. Row and column shifts wrap
//! modulo 5 in both directions; the rectangle swap is its own inverse and is
//! identical for encryption and decryption.

use std::fmt;

use crate::digraph::Digraph;
use crate::error::PlayfairError;
use crate::matrix::{KeyMatrix, Position, SIZE};

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// The positional rule matched for one digraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Same row: each letter replaced by its right neighbor (wrapping).
    RowRight,
    /// Same row: each letter replaced by its left neighbor (wrapping).
    RowLeft,
    /// Same column: each letter replaced by the letter below (wrapping).
    ColumnBelow,
    /// Same column: each letter replaced by the letter above (wrapping).
    ColumnAbove,
    /// No shared row or column: columns swapped, rows kept.
    Rectangle,
}

impl Rule {
    fn describe(self) -> &'static str {
        match self {
            Rule::RowRight => "same row -> take right (wrap)",
            Rule::RowLeft => "same row -> take left (wrap)",
            Rule::ColumnBelow => "same column -> take below (wrap)",
            Rule::ColumnAbove => "same column -> take above (wrap)",
            Rule::Rectangle => "rectangle -> swap columns",
        }
    }
}

/// Human-readable record of one digraph transformation.
///
/// Purely observational: input letters, the positions found for them, the
/// rule matched, and the resulting pair. Trace lines are emitted one per
/// digraph, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    pub input: Digraph,
    pub pos_a: Position,
    pub pos_b: Position,
    pub rule: Rule,
    pub output: Digraph,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pair ({},{}): positions ({},{}) & ({},{}) | {} -> {}{}",
            self.input.first,
            self.input.second,
            self.pos_a.row,
            self.pos_a.col,
            self.pos_b.row,
            self.pos_b.col,
            self.rule.describe(),
            self.output.first,
            self.output.second,
        )
    }
}

/// Advances an index by one with wraparound, staying in `[0,4]`.
///
/// The decrement case adds `SIZE - 1` instead of subtracting, so the result
/// is a true non-negative modulo.
fn step(index: usize, mode: Mode) -> usize {
    match mode {
        Mode::Encrypt => (index + 1) % SIZE,
        Mode::Decrypt => (index + SIZE - 1) % SIZE,
    }
}

/// Transforms one digraph against the matrix.
///
/// Looks up both letters, selects the first matching rule (row, column,
/// rectangle), and returns the substituted digraph together with its trace
/// line. Pure function over an immutable matrix; safe to call concurrently.
///
/// # Errors
/// Returns [`PlayfairError::LetterNotFound`] if either letter has no cell in
/// the matrix. Input routed through the digraph preparer never triggers this.
pub fn transform_pair(
    matrix: &KeyMatrix,
    digraph: Digraph,
    mode: Mode,
) -> Result<(Digraph, TraceLine), PlayfairError> {
    let pos_a = matrix.position(digraph.first)?;
    let pos_b = matrix.position(digraph.second)?;

    let (rule, out_a, out_b) = if pos_a.row == pos_b.row {
        let rule = match mode {
            Mode::Encrypt => Rule::RowRight,
            Mode::Decrypt => Rule::RowLeft,
        };
        (
            rule,
            matrix.letter_at(pos_a.row, step(pos_a.col, mode)),
            matrix.letter_at(pos_b.row, step(pos_b.col, mode)),
        )
    } else if pos_a.col == pos_b.col {
        let rule = match mode {
            Mode::Encrypt => Rule::ColumnBelow,
            Mode::Decrypt => Rule::ColumnAbove,
        };
        (
            rule,
            matrix.letter_at(step(pos_a.row, mode), pos_a.col),
            matrix.letter_at(step(pos_b.row, mode), pos_b.col),
        )
    } else {
        (
            Rule::Rectangle,
            matrix.letter_at(pos_a.row, pos_b.col),
            matrix.letter_at(pos_b.row, pos_a.col),
        )
    };

    let output = Digraph::new(out_a, out_b);
    let trace = TraceLine {
        input: digraph,
        pos_a,
        pos_b,
        rule,
        output,
    };
    Ok((output, trace))
}
