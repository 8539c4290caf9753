//! Cross-cutting error types for bix.
//!
//! Lookup errors raised at the reporter boundary live here so every crate
//! reports them the same way. Engine-specific errors (`ResolveError`,
//! `ModelError`) are defined in `bix-inspector`; `ConfigError` in `bix-config`.

use thiserror::Error;

/// Errors surfaced to reporters. None of them abort an inspection pass.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A single-symbol lookup named something the namespace does not expose.
    #[error("Symbol not found: {name}")]
    NotFound { name: String },

    /// A category lookup used an identifier outside the five categories.
    #[error("Unknown category: {requested} (available: {})", valid.join(", "))]
    UnknownCategory {
        requested: String,
        valid: Vec<String>,
    },
}

impl CoreError {
    /// Build an `UnknownCategory` error carrying every valid identifier.
    #[must_use]
    pub fn unknown_category(requested: impl Into<String>) -> Self {
        Self::UnknownCategory {
            requested: requested.into(),
            valid: crate::enums::Category::identifiers(),
        }
    }
}
