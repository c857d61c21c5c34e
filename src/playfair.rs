//! Encrypt/decrypt orchestration.
//!
//! Builds the key matrix fresh for every call (no caching across calls, so
//! every call is reproducible from its inputs alone), prepares the digraph
//! sequence, and maps the pair transformer over it in order. The traced and
//! untraced entry points share one private worker.

use crate::digraph::{pair_ciphertext, prepare_digraphs, Digraph};
use crate::error::PlayfairError;
use crate::matrix::KeyMatrix;
use crate::transform::{transform_pair, Mode, TraceLine};

/// Maps the transformer over a digraph sequence, concatenating results and
/// collecting one trace line per digraph.
fn run(
    matrix: &KeyMatrix,
    digraphs: &[Digraph],
    mode: Mode,
) -> Result<(String, Vec<TraceLine>), PlayfairError> {
    let mut text = String::with_capacity(digraphs.len() * 2);
    let mut trace = Vec::with_capacity(digraphs.len());
    for &digraph in digraphs {
        let (result, line) = transform_pair(matrix, digraph, mode)?;
        text.push(result.first);
        text.push(result.second);
        trace.push(line);
    }
    Ok((text, trace))
}

/// Encrypts plaintext under the given keyword.
///
/// The plaintext goes through the lossy normalization described in
/// [`prepare_digraphs`]: non-alphabetic characters are dropped, case is
/// folded, and J becomes I. The ciphertext length is always even, two
/// letters per digraph, pads included.
///
/// # Errors
/// Returns [`PlayfairError::LetterNotFound`] only if `pad_char` is outside
/// the 25-letter alphabet; letters surviving normalization always resolve.
///
/// # Examples
///
/// ```
/// use playfair::{encrypt, DEFAULT_PAD};
///
/// let ciphertext = encrypt("PLAYFAIR EXAMPLE", "Hide the gold in the tree stump", DEFAULT_PAD)
///     .unwrap();
/// assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
/// ```
pub fn encrypt(key: &str, plaintext: &str, pad_char: char) -> Result<String, PlayfairError> {
    encrypt_with_trace(key, plaintext, pad_char).map(|(ciphertext, _)| ciphertext)
}

/// Encrypts plaintext and returns the per-digraph trace alongside.
///
/// The trace contains exactly one line per digraph, in processing order.
///
/// # Errors
/// Same conditions as [`encrypt`].
pub fn encrypt_with_trace(
    key: &str,
    plaintext: &str,
    pad_char: char,
) -> Result<(String, Vec<TraceLine>), PlayfairError> {
    let matrix = KeyMatrix::from_keyword(key);
    let digraphs = prepare_digraphs(plaintext, pad_char);
    run(&matrix, &digraphs, Mode::Encrypt)
}

/// Decrypts ciphertext under the given keyword.
///
/// The ciphertext is filtered to alphabet letters (uppercased, J folded to I)
/// and grouped sequentially into digraphs. The output is the raw decrypted
/// letter stream, still containing any pad letters inserted at encryption
/// time; removing those is explicitly not this function's job (see
/// [`crate::heuristic_clean`] for the best-effort utility).
///
/// # Errors
/// Returns [`PlayfairError::InvalidLength`] when the filtered letter count is
/// odd, carrying the offending length.
///
/// # Examples
///
/// ```
/// use playfair::decrypt;
///
/// let raw = decrypt("PLAYFAIR EXAMPLE", "BMODZBXDNABEKUDMUIXMMOUVIF").unwrap();
/// assert_eq!(raw, "HIDETHEGOLDINTHETREXESTUMP");
/// ```
pub fn decrypt(key: &str, ciphertext: &str) -> Result<String, PlayfairError> {
    decrypt_with_trace(key, ciphertext).map(|(plaintext, _)| plaintext)
}

/// Decrypts ciphertext and returns the per-digraph trace alongside.
///
/// # Errors
/// Same conditions as [`decrypt`].
pub fn decrypt_with_trace(
    key: &str,
    ciphertext: &str,
) -> Result<(String, Vec<TraceLine>), PlayfairError> {
    let matrix = KeyMatrix::from_keyword(key);
    let digraphs = pair_ciphertext(ciphertext)?;
    run(&matrix, &digraphs, Mode::Decrypt)
}
