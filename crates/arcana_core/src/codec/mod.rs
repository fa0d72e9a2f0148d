//! Message codecs: symbol substitution, polyalphabetic shifting and the
//! composite "double" transform chaining both.
//!
//! # Responsibility
//! - Provide pure, length-preserving text transforms.
//! - Own the single core error kind (`CodecError::MissingKey`).
//!
//! # Invariants
//! - Every transform maps one input char to exactly one output char.
//! - Characters outside the recognized alphabet pass through unchanged.
//! - Key-driven transforms either fully succeed or are fully refused.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod composite;
pub mod key;
pub mod polyalphabetic;
pub mod symbol_table;

pub type CodecResult<T> = Result<T, CodecError>;

/// Core codec failure.
///
/// Symbol substitution and input composition are total, so the only failure
/// a transform can report is an unusable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Key-driven method invoked with an empty or letter-free key.
    MissingKey,
}

impl CodecError {
    /// User-facing guidance shown at the UI boundary.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::MissingKey => {
                "Enter a key containing at least one letter (a-z) to use this method."
            }
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey => write!(f, "cipher key must contain at least one letter"),
        }
    }
}

impl Error for CodecError {}
