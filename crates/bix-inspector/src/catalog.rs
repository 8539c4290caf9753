//! The per-pass catalog of classified records.

use std::collections::BTreeMap;

use bix_core::enums::Category;
use bix_core::errors::CoreError;
use bix_core::records::CatalogEntry;
use bix_core::responses::{CatalogResponse, CategoryListing, ResolutionFailure, Summary};

/// Accumulates entries during a pass. Consumed by [`CatalogBuilder::finish`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<Category, Vec<CatalogEntry>>,
    failures: Vec<ResolutionFailure>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at its sorted-name position within its category.
    ///
    /// Returns `false` when the category already holds an entry of that name.
    pub fn add(&mut self, entry: CatalogEntry) -> bool {
        let bucket = self.entries.entry(entry.category()).or_default();
        let position = bucket.partition_point(|existing| existing.name() < entry.name());
        if bucket
            .get(position)
            .is_some_and(|existing| existing.name() == entry.name())
        {
            return false;
        }
        bucket.insert(position, entry);
        true
    }

    pub fn add_failure(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.failures.push(ResolutionFailure {
            name: name.into(),
            reason: reason.into(),
        });
    }

    #[must_use]
    pub fn finish(mut self) -> Catalog {
        self.failures.sort_by(|a, b| a.name.cmp(&b.name));
        Catalog {
            entries: self.entries,
            failures: self.failures,
        }
    }
}

/// Immutable result of one inspection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Category, Vec<CatalogEntry>>,
    failures: Vec<ResolutionFailure>,
}

impl Catalog {
    /// Entries of one category in sorted-name order.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Entries for a category identifier, matched exactly.
    ///
    /// A valid identifier with no entries yields an empty slice; anything
    /// else is [`CoreError::UnknownCategory`].
    pub fn category(&self, identifier: &str) -> Result<&[CatalogEntry], CoreError> {
        Category::from_identifier(identifier)
            .map(|category| self.entries(category))
            .ok_or_else(|| CoreError::unknown_category(identifier))
    }

    /// Look up one entry by symbol name in any category.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.values().find_map(|bucket| {
            bucket
                .binary_search_by(|entry| entry.name().cmp(name))
                .ok()
                .and_then(|index| bucket.get(index))
        })
    }

    /// Every entry, category by category in report order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.entries(category).iter())
    }

    #[must_use]
    pub fn failures(&self) -> &[ResolutionFailure] {
        &self.failures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let count = |category| self.entries(category).len();
        Summary {
            total_symbols: self.len(),
            functions: count(Category::Function),
            types: count(Category::Type),
            exception_types: count(Category::ExceptionType),
            constants: count(Category::Constant),
            other: count(Category::Other),
            failed: self.failures.len(),
        }
    }

    #[must_use]
    pub fn listing(&self, category: Category) -> CategoryListing {
        CategoryListing {
            category,
            entries: self.entries(category).to_vec(),
        }
    }

    /// The full view: summary, every category in report order, failures.
    #[must_use]
    pub fn to_response(&self) -> CatalogResponse {
        CatalogResponse {
            summary: self.summary(),
            categories: Category::ALL
                .into_iter()
                .map(|category| self.listing(category))
                .collect(),
            failures: self.failures.clone(),
        }
    }
}
