//! Effective key derivation for key-driven codecs.

use crate::codec::{CodecError, CodecResult};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z]+").expect("valid non-letter regex"));

/// Letter-only, lower-cased key material driving the polyalphabetic cipher.
///
/// # Invariants
/// - Never empty.
/// - Contains only `a..=z`.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherKey {
    letters: Vec<u8>,
}

impl CipherKey {
    /// Derives the effective key from user input.
    ///
    /// Non-letters are stripped and the remainder lower-cased. A key with no
    /// letters left is rejected instead of degrading to identity.
    pub fn parse(raw: &str) -> CodecResult<Self> {
        let filtered = NON_LETTER_RE.replace_all(raw, "");
        if filtered.is_empty() {
            return Err(CodecError::MissingKey);
        }
        Ok(Self {
            letters: filtered.to_ascii_lowercase().into_bytes(),
        })
    }

    /// Returns whether `raw` would produce a usable effective key.
    pub fn is_usable(raw: &str) -> bool {
        raw.bytes().any(|byte| byte.is_ascii_alphabetic())
    }

    /// Shift amount (`0..26`) for the key letter under `cursor`.
    ///
    /// The cursor wraps around the key length.
    pub fn shift_at(&self, cursor: usize) -> u8 {
        self.letters[cursor % self.letters.len()] - b'a'
    }

    /// Number of letters in the effective key.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Never true for a parsed key.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Effective key as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }
}

// Key material stays out of debug output and logs.
impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherKey")
            .field("len", &self.letters.len())
            .finish()
    }
}
