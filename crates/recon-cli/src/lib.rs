//! Library surface of the `recon` CLI.
//!
//! The binary in `main.rs` stays thin; command pipelines live here so the
//! integration tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
