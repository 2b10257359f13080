//! Cross-cutting error types for Saarthi.
//!
//! Domain-specific errors (`AuthError`, `ConfigError`) live in their own
//! crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Saarthi crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown role name, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),
}
