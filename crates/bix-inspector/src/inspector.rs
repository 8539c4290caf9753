//! The inspection pass: resolve, classify, extract, catalog.

use bix_core::enums::Category;
use bix_core::errors::CoreError;
use bix_core::records::CatalogEntry;
use rayon::prelude::*;

use crate::catalog::{Catalog, CatalogBuilder};
use crate::classifier;
use crate::error::ResolveError;
use crate::extract::{MetadataExtractor, doc};
use crate::provider::ReflectionProvider;
use crate::resolver::{Symbol, SymbolResolver};

/// Runs inspection passes over one namespace.
#[derive(Debug)]
pub struct Inspector<P> {
    provider: P,
    doc_max_lines: usize,
}

impl<P: ReflectionProvider> Inspector<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            doc_max_lines: doc::DEFAULT_MAX_LINES,
        }
    }

    /// Lines scanned when summarizing documentation.
    #[must_use]
    pub const fn with_doc_max_lines(mut self, lines: usize) -> Self {
        self.doc_max_lines = lines;
        self
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn collect_names(&self) -> Vec<String> {
        SymbolResolver::new(&self.provider).collect_names()
    }

    pub fn resolve(&self, name: &str) -> Result<Symbol<P::Handle>, ResolveError> {
        SymbolResolver::new(&self.provider).resolve(name)
    }

    pub fn classify(&self, symbol: &Symbol<P::Handle>) -> Category {
        classifier::classify(&self.provider, &symbol.name, &symbol.handle)
    }

    /// Inspect a single name. Resolution failures surface as `NotFound`.
    pub fn inspect_symbol(&self, name: &str) -> Result<CatalogEntry, CoreError> {
        self.inspect_name(name).map_err(|error| {
            tracing::debug!(name, %error, "symbol lookup failed");
            CoreError::NotFound {
                name: name.to_string(),
            }
        })
    }

    /// Sequential pass over every name in sorted order.
    #[must_use]
    pub fn inspect_all(&self) -> Catalog {
        let names = self.collect_names();
        let outcomes = names.iter().map(|name| (name.as_str(), self.inspect_name(name)));
        Self::assemble(names.len(), outcomes)
    }

    fn inspect_name(&self, name: &str) -> Result<CatalogEntry, ResolveError> {
        let symbol = self.resolve(name)?;
        let category = self.classify(&symbol);
        tracing::debug!(name, %category, "classified symbol");
        Ok(self.extractor().extract(name, &symbol.handle, category))
    }

    const fn extractor(&self) -> MetadataExtractor<'_, P> {
        MetadataExtractor::new(&self.provider).with_doc_max_lines(self.doc_max_lines)
    }

    fn assemble<'n>(
        expected: usize,
        outcomes: impl Iterator<Item = (&'n str, Result<CatalogEntry, ResolveError>)>,
    ) -> Catalog {
        let mut builder = CatalogBuilder::new();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(entry) => {
                    builder.add(entry);
                }
                Err(error) => {
                    tracing::warn!(name, %error, "skipping unresolvable name");
                    builder.add_failure(name, error.to_string());
                }
            }
        }
        let catalog = builder.finish();
        tracing::info!(
            names = expected,
            inspected = catalog.len(),
            failed = catalog.failures().len(),
            "inspection pass complete"
        );
        catalog
    }
}

impl<P: ReflectionProvider + Sync> Inspector<P> {
    /// Parallel pass. Per-name work runs on the rayon pool; entries are
    /// inserted in sorted-name order so the result matches [`Self::inspect_all`].
    #[must_use]
    pub fn inspect_all_parallel(&self) -> Catalog {
        let names = self.collect_names();
        let mut outcomes: Vec<(&str, Result<CatalogEntry, ResolveError>)> = names
            .par_iter()
            .map(|name| (name.as_str(), self.inspect_name(name)))
            .collect();
        outcomes.sort_unstable_by(|a, b| a.0.cmp(b.0));
        Self::assemble(names.len(), outcomes.into_iter())
    }
}
