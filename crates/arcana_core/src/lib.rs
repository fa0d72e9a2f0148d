//! Core message-encoding logic for Arcana.
//! This crate is the single source of truth for codec invariants.

pub mod codec;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;

pub use codec::composite::CompositeCodec;
pub use codec::key::CipherKey;
pub use codec::polyalphabetic::PolyalphabeticCipher;
pub use codec::symbol_table::{SymbolTable, SPACE_GLYPH};
pub use codec::{CodecError, CodecResult};
pub use input::compositor::{InputCompositor, KeyEvent};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::archive::{ArchiveEntry, ArchiveEntryId};
pub use model::method::{
    parse_cipher_method, parse_codec_mode, CipherMethod, CodecMode, MethodParseError,
};
pub use service::codec_service::{CodecRequest, CodecService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
