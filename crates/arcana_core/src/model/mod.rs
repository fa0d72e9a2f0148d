//! Value types shared across codecs, services and hosts.
//!
//! # Responsibility
//! - Define method/mode tags with stable wire strings.
//! - Define the archive entry handed to the external archive.
//!
//! # Invariants
//! - Wire strings are snake_case and never change meaning.

pub mod archive;
pub mod method;
