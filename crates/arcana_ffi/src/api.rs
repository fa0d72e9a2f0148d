//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level codec functions to Dart via FRB.
//! - Map core errors into simple envelopes with user-facing guidance.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.
//! - A rejected key never yields partial output.

use arcana_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_cipher_method,
    parse_codec_mode, CodecRequest, CodecService, InputCompositor, KeyEvent, SymbolTable,
};
use log::warn;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for one codec invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecResponse {
    /// Whether the transform ran.
    pub ok: bool,
    /// Transformed text; empty when `ok == false`.
    pub output: String,
    /// `true` when the failure is a missing/unusable key, so the UI can
    /// prompt for one instead of showing a generic error.
    pub needs_key: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl CodecResponse {
    fn success(output: String) -> Self {
        Self {
            ok: true,
            output,
            needs_key: false,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>, needs_key: bool) -> Self {
        Self {
            ok: false,
            output: String::new(),
            needs_key,
            message: message.into(),
        }
    }
}

/// Envelope carrying a serialized archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResponse {
    pub ok: bool,
    /// JSON object `{id, original, encoded, method, date}` on success.
    pub entry_json: Option<String>,
    pub needs_key: bool,
    pub message: String,
}

/// One virtual keyboard key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardKey {
    /// Plain alphabet character.
    pub character: String,
    /// Glyph shown on the key.
    pub glyph: String,
}

/// Encodes or decodes `text`.
///
/// Input semantics:
/// - `method`: `polyalphabetic|composite|symbol_only`.
/// - `mode`: `encode|decode`.
/// - `key`: ignored for `symbol_only`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn codec_transform(
    text: String,
    key: Option<String>,
    method: String,
    mode: String,
) -> CodecResponse {
    let method = match parse_cipher_method(&method) {
        Ok(method) => method,
        Err(err) => return CodecResponse::failure(format!("codec_transform failed: {err}"), false),
    };
    let mode = match parse_codec_mode(&mode) {
        Ok(mode) => mode,
        Err(err) => return CodecResponse::failure(format!("codec_transform failed: {err}"), false),
    };

    let request = CodecRequest {
        text,
        key,
        method,
        mode,
    };
    match CodecService::new().transform(&request) {
        Ok(output) => CodecResponse::success(output),
        Err(err) => CodecResponse::failure(err.guidance(), true),
    }
}

/// Encodes `text` and returns the archive entry as JSON for the archive
/// collaborator to store.
///
/// # FFI contract
/// - Sync call; reads the system clock for the entry date.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn codec_archive_entry(text: String, key: Option<String>, method: String) -> ArchiveResponse {
    let method = match parse_cipher_method(&method) {
        Ok(method) => method,
        Err(err) => return archive_failure(format!("codec_archive_entry failed: {err}"), false),
    };

    let entry = match CodecService::new().encode_for_archive(text, key.as_deref(), method) {
        Ok(entry) => entry,
        Err(err) => return archive_failure(err.guidance(), true),
    };

    match serde_json::to_string(&entry) {
        Ok(json) => ArchiveResponse {
            ok: true,
            entry_json: Some(json),
            needs_key: false,
            message: "Archive entry created.".to_string(),
        },
        Err(err) => {
            warn!("event=archive_serialize module=ffi status=error error={err}");
            archive_failure(format!("codec_archive_entry failed: {err}"), false)
        }
    }
}

/// Returns the virtual keyboard layout in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn symbol_keyboard_layout() -> Vec<KeyboardKey> {
    SymbolTable::global()
        .pairs()
        .iter()
        .map(|&(character, glyph)| KeyboardKey {
            character: character.to_string(),
            glyph: glyph.to_string(),
        })
        .collect()
}

/// Virtual keyboard session owned by one Dart input surface.
///
/// Opaque to Dart; each instance has a single writer.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct KeyboardSession {
    compositor: InputCompositor,
}

impl KeyboardSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every char of `symbol` in order; empty input is ignored.
    #[flutter_rust_bridge::frb(sync)]
    pub fn press(&mut self, symbol: String) -> String {
        for glyph in symbol.chars() {
            self.compositor.apply(KeyEvent::Glyph(glyph));
        }
        self.compositor.snapshot()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn backspace(&mut self) -> String {
        self.compositor.apply(KeyEvent::Backspace);
        self.compositor.snapshot()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn space(&mut self) -> String {
        self.compositor.apply(KeyEvent::Space);
        self.compositor.snapshot()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn newline(&mut self) -> String {
        self.compositor.apply(KeyEvent::Newline);
        self.compositor.snapshot()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn clear(&mut self) -> String {
        self.compositor.clear();
        self.compositor.snapshot()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> String {
        self.compositor.snapshot()
    }
}

fn archive_failure(message: impl Into<String>, needs_key: bool) -> ArchiveResponse {
    ArchiveResponse {
        ok: false,
        entry_json: None,
        needs_key,
        message: message.into(),
    }
}
