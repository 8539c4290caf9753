//! # bix-inspector
//!
//! Classification and introspection engine for a runtime's built-in namespace.
//!
//! A pass runs in one direction:
//! [`SymbolResolver`] enumerates and resolves names, [`classifier::classify`]
//! assigns each symbol one [`Category`](bix_core::enums::Category),
//! [`MetadataExtractor`] builds the category's record, and the records land in
//! an immutable [`Catalog`]. Everything the engine learns about an object goes
//! through the [`ReflectionProvider`] trait.
//!
//! [`ObjectModel`] is the provided implementation: an in-memory arena built
//! either from the embedded CPython 3.12 table ([`builtins::cpython`]) or from
//! a namespace [`snapshot`] file.

pub mod builtins;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod extract;
pub mod inspector;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod snapshot;

use std::path::Path;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::{InspectError, ModelError, ResolveError, SnapshotError};
pub use extract::MetadataExtractor;
pub use inspector::Inspector;
pub use model::ObjectModel;
pub use provider::ReflectionProvider;
pub use resolver::{Symbol, SymbolResolver};

/// Load the namespace to inspect: a snapshot file when given, otherwise the
/// embedded CPython table.
pub fn load_namespace(snapshot: Option<&Path>) -> Result<ObjectModel, InspectError> {
    match snapshot {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading namespace snapshot");
            Ok(snapshot::load(path)?)
        }
        None => Ok(builtins::cpython()?),
    }
}
