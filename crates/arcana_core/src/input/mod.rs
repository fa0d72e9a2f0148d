//! Input composition for glyph-first message entry.
//!
//! # Responsibility
//! - Turn UI key events into a plain message buffer.
//! - Stay free of any rendering or framework lifecycle.

pub mod compositor;
