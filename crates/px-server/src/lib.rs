//! HTTP API for pixscii.
//!
//! Thin request layer over the px-convert pipeline: multipart upload in,
//! JSON or plain text out. The router is exposed so integration tests can
//! drive it in-process.

pub mod api;
pub mod error;
pub mod server;
