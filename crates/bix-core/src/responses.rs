//! Response types handed to reporters by the `bix` commands.
//!
//! These structs define the JSON shape of `bix summary`, `bix category`, and
//! `bix all`. `bix inspect` emits a bare [`CatalogEntry`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::records::CatalogEntry;

/// Per-category counts for one inspection pass.
///
/// `total_symbols` counts resolved symbols only; names that failed to resolve
/// are reported in `failed` and excluded from every other field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Summary {
    pub total_symbols: usize,
    pub functions: usize,
    pub types: usize,
    pub exception_types: usize,
    pub constants: usize,
    pub other: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        match category {
            Category::Function => self.functions,
            Category::Type => self.types,
            Category::ExceptionType => self.exception_types,
            Category::Constant => self.constants,
            Category::Other => self.other,
        }
    }

    /// Sum of the per-category counts. Equals `total_symbols` for a consistent summary.
    #[must_use]
    pub const fn categorized(&self) -> usize {
        self.functions + self.types + self.exception_types + self.constants + self.other
    }

    /// `(category, count)` pairs in report order.
    #[must_use]
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
            .collect()
    }
}

/// A name the resolver enumerated but could not resolve.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolutionFailure {
    pub name: String,
    pub reason: String,
}

/// Response from `bix category <NAME>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub entries: Vec<CatalogEntry>,
}

impl CategoryListing {
    /// Entry names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::name).collect()
    }
}

/// Response from `bix all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogResponse {
    pub summary: Summary,
    pub categories: Vec<CategoryListing>,
    pub failures: Vec<ResolutionFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_report_order() {
        let summary = Summary {
            total_symbols: 10,
            functions: 4,
            types: 3,
            exception_types: 1,
            constants: 1,
            other: 1,
            failed: 2,
        };
        assert_eq!(summary.categorized(), summary.total_symbols);
        assert_eq!(
            summary.counts(),
            vec![
                (Category::Function, 4),
                (Category::Type, 3),
                (Category::ExceptionType, 1),
                (Category::Constant, 1),
                (Category::Other, 1),
            ]
        );
    }

    #[test]
    fn default_summary_is_empty() {
        let summary = Summary::default();
        assert_eq!(summary.categorized(), 0);
        assert_eq!(summary.count(Category::Constant), 0);
    }
}
