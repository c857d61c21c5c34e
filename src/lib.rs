//! Playfair digraph substitution cipher engine.
//!
//! Implements the classical Playfair cipher: key-matrix construction,
//! plaintext-to-digraph preparation, and pairwise digraph transformation with
//! an optional human-readable trace of each rule applied.
//!
//! Playfair is a historical pen-and-paper cipher and trivially breakable;
//! this crate offers no security guarantees and performs no key management.
//!
//! # Architecture
//!
//! ```text
//! KeyMatrix      (5×5 grid of the 25-letter alphabet, built from a keyword)
//!     ↑ position lookup
//! transform_pair (one digraph in, one digraph + trace line out)
//!     ↑ mapped in order
//! encrypt / decrypt (build matrix, prepare digraphs, concatenate results)
//! ```
//!
//! All operations are pure functions over their inputs: the matrix is rebuilt
//! fresh for every call and immutable thereafter, digraphs and trace lines
//! are transient sequences local to a single call.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use playfair::{decrypt, encrypt, DEFAULT_PAD};
//!
//! let ciphertext = encrypt("PLAYFAIR EXAMPLE", "Hide the gold in the tree stump", DEFAULT_PAD)
//!     .unwrap();
//! assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
//!
//! // Decryption returns the raw letter stream, pad letters included.
//! let raw = decrypt("PLAYFAIR EXAMPLE", &ciphertext).unwrap();
//! assert_eq!(raw, "HIDETHEGOLDINTHETREXESTUMP");
//! ```
//!
//! Inspect the per-digraph transformation trace:
//!
//! ```
//! use playfair::{encrypt_with_trace, DEFAULT_PAD};
//!
//! let (_, trace) = encrypt_with_trace("PLAYFAIR EXAMPLE", "Hide", DEFAULT_PAD).unwrap();
//! assert_eq!(
//!     format!("{}", trace[0]),
//!     "Pair (H,I): positions (2,4) & (1,0) | rectangle -> swap columns -> BM"
//! );
//! ```

#![deny(clippy::all)]

pub mod error;

mod clean;
mod digraph;
mod matrix;
mod playfair;
mod transform;

pub use clean::heuristic_clean;
pub use digraph::{pair_ciphertext, prepare_digraphs, Digraph, DEFAULT_PAD};
pub use error::PlayfairError;
pub use matrix::{KeyMatrix, Position, ALPHABET};
pub use playfair::{decrypt, decrypt_with_trace, encrypt, encrypt_with_trace};
pub use transform::{transform_pair, Mode, Rule, TraceLine};
