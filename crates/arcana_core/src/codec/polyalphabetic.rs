//! Vigenère-style polyalphabetic cipher.
//!
//! # Invariants
//! - Only ASCII letters are shifted; case is preserved.
//! - The key cursor advances only after a letter is processed.
//! - `decode(encode(t)) == t` exactly for every text and usable key.

use crate::codec::key::CipherKey;
use crate::codec::CodecResult;

const ALPHABET_LEN: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Letter-shifting codec bound to one effective key.
#[derive(Debug, Clone)]
pub struct PolyalphabeticCipher {
    key: CipherKey,
}

impl PolyalphabeticCipher {
    /// Builds a cipher from a raw user key.
    ///
    /// Fails with `CodecError::MissingKey` when the key has no letters.
    pub fn new(raw_key: &str) -> CodecResult<Self> {
        Ok(Self::with_key(CipherKey::parse(raw_key)?))
    }

    pub fn with_key(key: CipherKey) -> Self {
        Self { key }
    }

    pub fn encode(&self, text: &str) -> String {
        self.apply(text, Direction::Forward)
    }

    pub fn decode(&self, text: &str) -> String {
        self.apply(text, Direction::Backward)
    }

    fn apply(&self, text: &str, direction: Direction) -> String {
        let mut cursor = 0usize;
        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let shifted = shift_letter(c as u8, self.key.shift_at(cursor), direction);
                cursor += 1;
                shifted as char
            })
            .collect()
    }
}

/// Encodes `text` with a raw user key.
pub fn encode(text: &str, raw_key: &str) -> CodecResult<String> {
    Ok(PolyalphabeticCipher::new(raw_key)?.encode(text))
}

/// Decodes `text` with a raw user key.
pub fn decode(text: &str, raw_key: &str) -> CodecResult<String> {
    Ok(PolyalphabeticCipher::new(raw_key)?.decode(text))
}

fn shift_letter(letter: u8, shift: u8, direction: Direction) -> u8 {
    let base = if letter.is_ascii_uppercase() {
        b'A'
    } else {
        b'a'
    };
    let offset = letter - base;
    let moved = match direction {
        Direction::Forward => (offset + shift) % ALPHABET_LEN,
        Direction::Backward => (offset + ALPHABET_LEN - shift) % ALPHABET_LEN,
    };
    moved + base
}
