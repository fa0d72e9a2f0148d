//! Method tags and codec modes shared by the facade, archive and hosts.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire value for the polyalphabetic method.
pub const METHOD_POLYALPHABETIC: &str = "polyalphabetic";
/// Wire value for the composite ("double") method.
pub const METHOD_COMPOSITE: &str = "composite";
/// Wire value for the symbol-only method.
pub const METHOD_SYMBOL_ONLY: &str = "symbol_only";

/// Wire value for encode mode.
pub const MODE_ENCODE: &str = "encode";
/// Wire value for decode mode.
pub const MODE_DECODE: &str = "decode";

/// Cipher method selected by the user; stored with archived entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherMethod {
    /// Key-driven letter shifting.
    Polyalphabetic,
    /// Letter shifting followed by symbol substitution.
    Composite,
    /// Symbol substitution only; needs no key.
    SymbolOnly,
}

impl CipherMethod {
    pub const ALL: [CipherMethod; 3] = [Self::Polyalphabetic, Self::Composite, Self::SymbolOnly];

    /// Stable string id used on the wire and by hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polyalphabetic => METHOD_POLYALPHABETIC,
            Self::Composite => METHOD_COMPOSITE,
            Self::SymbolOnly => METHOD_SYMBOL_ONLY,
        }
    }

    /// Whether this method needs a usable key.
    pub fn requires_key(self) -> bool {
        !matches!(self, Self::SymbolOnly)
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Polyalphabetic => "Shift each letter by the matching key letter.",
            Self::Composite => {
                "Shift letters with the key, then replace every symbol with a glyph."
            }
            Self::SymbolOnly => "Replace each letter, digit and punctuation mark with a glyph.",
        }
    }
}

impl Display for CipherMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a codec invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecMode {
    Encode,
    Decode,
}

impl CodecMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Encode => MODE_ENCODE,
            Self::Decode => MODE_DECODE,
        }
    }
}

impl Display for CodecMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a method tag from its wire string.
pub fn parse_cipher_method(value: &str) -> Result<CipherMethod, MethodParseError> {
    match normalize(value)? {
        METHOD_POLYALPHABETIC => Ok(CipherMethod::Polyalphabetic),
        METHOD_COMPOSITE => Ok(CipherMethod::Composite),
        METHOD_SYMBOL_ONLY => Ok(CipherMethod::SymbolOnly),
        other => Err(MethodParseError::Unsupported(other.to_string())),
    }
}

/// Parses a codec mode from its wire string.
pub fn parse_codec_mode(value: &str) -> Result<CodecMode, MethodParseError> {
    match normalize(value)? {
        MODE_ENCODE => Ok(CodecMode::Encode),
        MODE_DECODE => Ok(CodecMode::Decode),
        other => Err(MethodParseError::Unsupported(other.to_string())),
    }
}

fn normalize(value: &str) -> Result<&str, MethodParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MethodParseError::Empty);
    }
    Ok(trimmed)
}

/// Boundary parse errors for method/mode strings coming from hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodParseError {
    Empty,
    Unsupported(String),
}

impl Display for MethodParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "method/mode value must not be empty"),
            Self::Unsupported(value) => write!(f, "method/mode is unsupported: {value}"),
        }
    }
}

impl Error for MethodParseError {}
