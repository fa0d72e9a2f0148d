//! Codec use-case service.
//!
//! # Responsibility
//! - Select the codec for a method/mode pair and run it.
//! - Validate key presence before any key-driven transform.
//! - Build archive entries for the external archive collaborator.
//!
//! # Invariants
//! - Symbol-only requests ignore the key entirely.
//! - A rejected key yields no output at all, never a partial transform.
//! - Identical requests always produce identical output.
//! - Logs carry metadata only (method, mode, lengths), never text or keys.

use crate::codec::composite::CompositeCodec;
use crate::codec::key::CipherKey;
use crate::codec::polyalphabetic::PolyalphabeticCipher;
use crate::codec::symbol_table::SymbolTable;
use crate::codec::{CodecError, CodecResult};
use crate::model::archive::ArchiveEntry;
use crate::model::method::{CipherMethod, CodecMode};
use log::{debug, warn};

/// One transform invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecRequest {
    /// Plaintext (encode) or encoded text (decode).
    pub text: String,
    /// Raw user key; only consulted by key-driven methods.
    pub key: Option<String>,
    pub method: CipherMethod,
    pub mode: CodecMode,
}

impl CodecRequest {
    pub fn new(text: impl Into<String>, method: CipherMethod, mode: CodecMode) -> Self {
        Self {
            text: text.into(),
            key: None,
            method,
            mode,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Facade over the symbol, polyalphabetic and composite codecs.
#[derive(Debug, Clone, Copy)]
pub struct CodecService {
    table: &'static SymbolTable,
}

impl Default for CodecService {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecService {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::global(),
        }
    }

    /// Runs `request` and returns the transformed text.
    ///
    /// # Errors
    /// - `CodecError::MissingKey` when a key-driven method gets no key, an
    ///   empty key, or a key without letters.
    pub fn transform(&self, request: &CodecRequest) -> CodecResult<String> {
        let output = match self.dispatch(request) {
            Ok(output) => output,
            Err(err) => {
                warn!(
                    "event=codec_transform module=codec status=rejected method={} mode={} reason={:?}",
                    request.method, request.mode, err
                );
                return Err(err);
            }
        };

        debug!(
            "event=codec_transform module=codec status=ok method={} mode={} input_chars={} output_chars={}",
            request.method,
            request.mode,
            request.text.chars().count(),
            output.chars().count()
        );
        Ok(output)
    }

    /// Encodes `text` and wraps the result into an archive entry.
    ///
    /// The entry records the plaintext as `original`. On key failure no
    /// entry is built.
    pub fn encode_for_archive(
        &self,
        text: impl Into<String>,
        key: Option<&str>,
        method: CipherMethod,
    ) -> CodecResult<ArchiveEntry> {
        let mut request = CodecRequest::new(text, method, CodecMode::Encode);
        request.key = key.map(str::to_owned);
        let encoded = self.transform(&request)?;
        let entry = ArchiveEntry::new(request.text, encoded, method);
        debug!(
            "event=archive_entry_built module=codec status=ok method={} entry_id={}",
            method,
            entry.id()
        );
        Ok(entry)
    }

    fn dispatch(&self, request: &CodecRequest) -> CodecResult<String> {
        let text = request.text.as_str();
        match request.method {
            CipherMethod::SymbolOnly => Ok(match request.mode {
                CodecMode::Encode => self.table.encode(text),
                CodecMode::Decode => self.table.decode(text),
            }),
            CipherMethod::Polyalphabetic => {
                let cipher = PolyalphabeticCipher::new(required_key(request)?)?;
                Ok(match request.mode {
                    CodecMode::Encode => cipher.encode(text),
                    CodecMode::Decode => cipher.decode(text),
                })
            }
            CipherMethod::Composite => {
                let codec = CompositeCodec::new(required_key(request)?)?;
                Ok(match request.mode {
                    CodecMode::Encode => codec.encode(text),
                    CodecMode::Decode => codec.decode(text),
                })
            }
        }
    }
}

fn required_key(request: &CodecRequest) -> CodecResult<&str> {
    request
        .key
        .as_deref()
        .filter(|key| CipherKey::is_usable(key))
        .ok_or(CodecError::MissingKey)
}
