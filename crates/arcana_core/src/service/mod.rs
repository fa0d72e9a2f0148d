//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate codec calls into use-case level APIs.
//! - Keep UI/FFI/CLI hosts decoupled from codec details.

pub mod codec_service;
