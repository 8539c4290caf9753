//! Error types for bix-inspector.

/// A namespace name that could not be resolved to an object.
///
/// Resolution failures are per-name diagnostics: the pass skips the name and
/// keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("'{name}' is no longer bound in the namespace")]
    Missing { name: String },

    #[error("access to '{name}' denied: {reason}")]
    AccessDenied { name: String, reason: String },
}

impl ResolveError {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::AccessDenied { name, .. } => name,
        }
    }
}

/// Errors raised while assembling an object model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("type '{name}' is defined twice")]
    DuplicateType { name: String },

    #[error("type '{name}' lists base '{base}' more than once")]
    DuplicateBase { name: String, base: String },

    #[error("type '{name}' names unknown base '{base}'")]
    UnknownBase { name: String, base: String },

    #[error("cannot create a consistent method resolution order for '{name}' (bases: {bases})")]
    InconsistentHierarchy { name: String, bases: String },

    #[error("'{name}' refers to an object that was never defined")]
    UnknownObject { name: String },

    #[error("error root '{name}' is not a type")]
    InvalidErrorRoot { name: String },
}

/// Errors raised while loading a namespace snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML snapshot: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported snapshot extension: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised while preparing a namespace for inspection.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("failed to build the embedded namespace: {0}")]
    Model(#[from] ModelError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
