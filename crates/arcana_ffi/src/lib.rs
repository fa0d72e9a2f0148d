//! Flutter bridge surface for the Arcana core.

pub mod api;
