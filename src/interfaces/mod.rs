//! Inbound adapters: decoding transport payloads from external sources.

pub mod json;
