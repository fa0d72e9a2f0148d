//! Composite "double" codec: polyalphabetic shift, then symbol substitution.
//!
//! # Invariants
//! - Encode lower-cases (ASCII only) between the two stages, so letter
//!   casing does not survive a round trip. Letter identity and every
//!   non-letter char do.
//! - Key failure is reported before any stage runs.

use crate::codec::polyalphabetic::PolyalphabeticCipher;
use crate::codec::symbol_table::SymbolTable;
use crate::codec::CodecResult;

/// Two-stage codec chaining `PolyalphabeticCipher` and `SymbolTable`.
#[derive(Debug, Clone)]
pub struct CompositeCodec {
    cipher: PolyalphabeticCipher,
    table: &'static SymbolTable,
}

impl CompositeCodec {
    pub fn new(raw_key: &str) -> CodecResult<Self> {
        Ok(Self::with_cipher(PolyalphabeticCipher::new(raw_key)?))
    }

    pub fn with_cipher(cipher: PolyalphabeticCipher) -> Self {
        Self {
            cipher,
            table: SymbolTable::global(),
        }
    }

    /// `symbols(lowercase(shift(text)))`.
    pub fn encode(&self, text: &str) -> String {
        let shifted = self.cipher.encode(text).to_ascii_lowercase();
        self.table.encode(&shifted)
    }

    /// `unshift(unsymbols(glyph_text))`.
    pub fn decode(&self, glyph_text: &str) -> String {
        self.cipher.decode(&self.table.decode(glyph_text))
    }
}

/// Encodes `text` with a raw user key.
pub fn encode(text: &str, raw_key: &str) -> CodecResult<String> {
    Ok(CompositeCodec::new(raw_key)?.encode(text))
}

/// Decodes `glyph_text` with a raw user key.
pub fn decode(glyph_text: &str, raw_key: &str) -> CodecResult<String> {
    Ok(CompositeCodec::new(raw_key)?.decode(glyph_text))
}
