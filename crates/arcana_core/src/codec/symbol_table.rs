//! Static character ↔ glyph substitution table.
//!
//! # Responsibility
//! - Define the recognized alphabet and its glyph images exactly once.
//! - Derive the inverse mapping mechanically from the same pair list.
//!
//! # Invariants
//! - The mapping is a bijection between alphabet chars and glyphs.
//! - No glyph is itself an alphabet member, so encoded text never collides
//!   with plaintext during decode.
//! - The table is read-only after construction.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Glyph standing for the space character.
pub const SPACE_GLYPH: char = '᛫';

/// Single source of truth: `(alphabet char, glyph)` in keyboard order.
const SYMBOL_PAIRS: &[(char, char)] = &[
    ('a', 'ᚨ'),
    ('b', 'ᛒ'),
    ('c', 'ᚲ'),
    ('d', 'ᛞ'),
    ('e', 'ᛖ'),
    ('f', 'ᚠ'),
    ('g', 'ᚷ'),
    ('h', 'ᚺ'),
    ('i', 'ᛁ'),
    ('j', 'ᛃ'),
    ('k', 'ᚴ'),
    ('l', 'ᛚ'),
    ('m', 'ᛗ'),
    ('n', 'ᚾ'),
    ('o', 'ᛟ'),
    ('p', 'ᛈ'),
    ('q', 'ᛩ'),
    ('r', 'ᚱ'),
    ('s', 'ᛊ'),
    ('t', 'ᛏ'),
    ('u', 'ᚢ'),
    ('v', 'ᚡ'),
    ('w', 'ᚹ'),
    ('x', 'ᛪ'),
    ('y', 'ᛦ'),
    ('z', 'ᛎ'),
    (' ', SPACE_GLYPH),
    ('0', '☉'),
    ('1', '☽'),
    ('2', '☿'),
    ('3', '♀'),
    ('4', '♁'),
    ('5', '♂'),
    ('6', '♃'),
    ('7', '♄'),
    ('8', '♅'),
    ('9', '♆'),
    ('.', '᛭'),
    (',', '᛬'),
    ('!', '☌'),
    ('?', '☍'),
    ('\'', '⚹'),
    ('"', '⚸'),
    ('-', '⚷'),
    (':', '⚴'),
    (';', '⚵'),
];

static SYMBOL_TABLE: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::from_pairs(SYMBOL_PAIRS));

/// Bidirectional substitution table between alphabet chars and glyphs.
#[derive(Debug)]
pub struct SymbolTable {
    pairs: &'static [(char, char)],
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl SymbolTable {
    /// Returns the process-wide table, built on first use.
    pub fn global() -> &'static SymbolTable {
        &SYMBOL_TABLE
    }

    fn from_pairs(pairs: &'static [(char, char)]) -> Self {
        let forward = pairs.iter().copied().collect::<HashMap<_, _>>();
        let inverse = pairs
            .iter()
            .map(|&(plain, glyph)| (glyph, plain))
            .collect::<HashMap<_, _>>();
        Self {
            pairs,
            forward,
            inverse,
        }
    }

    /// Maps one char to its glyph.
    ///
    /// ASCII uppercase letters fold to lowercase first (lossy). Chars outside
    /// the alphabet are returned unchanged.
    pub fn encode_char(&self, c: char) -> char {
        self.glyph_for(c).unwrap_or(c)
    }

    /// Maps one glyph back to its char; unknown glyphs are returned unchanged.
    pub fn decode_char(&self, glyph: char) -> char {
        self.char_for(glyph).unwrap_or(glyph)
    }

    /// Encodes every char of `text`, preserving length and order.
    pub fn encode(&self, text: &str) -> String {
        text.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Decodes every glyph of `text`, preserving length and order.
    pub fn decode(&self, text: &str) -> String {
        text.chars().map(|g| self.decode_char(g)).collect()
    }

    /// Glyph for `c` after case folding, if `c` is in the alphabet.
    pub fn glyph_for(&self, c: char) -> Option<char> {
        self.forward.get(&c.to_ascii_lowercase()).copied()
    }

    /// Alphabet char for `glyph`, if it is a known glyph.
    pub fn char_for(&self, glyph: char) -> Option<char> {
        self.inverse.get(&glyph).copied()
    }

    pub fn contains_glyph(&self, glyph: char) -> bool {
        self.inverse.contains_key(&glyph)
    }

    /// All `(char, glyph)` pairs in keyboard order.
    pub fn pairs(&self) -> &'static [(char, char)] {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
