//! Symbol categories for bix.
//!
//! `Category` serializes with its exact boundary identifier (`Function`,
//! `Type`, `ExceptionType`, `Constant`, `Other`). Those identifiers are the
//! only spelling the core accepts; aliases are a CLI concern.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The single category every resolved symbol is assigned to.
///
/// Declaration order is the report order used by full and summary views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    Function,
    Type,
    ExceptionType,
    Constant,
    Other,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Self; 5] = [
        Self::Function,
        Self::Type,
        Self::ExceptionType,
        Self::Constant,
        Self::Other,
    ];

    /// Boundary identifier, as matched by [`Category::from_identifier`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Type => "Type",
            Self::ExceptionType => "ExceptionType",
            Self::Constant => "Constant",
            Self::Other => "Other",
        }
    }

    /// Human-facing heading used by text reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Function => "Built-in Function",
            Self::Type => "Built-in Class",
            Self::ExceptionType => "Exception Class",
            Self::Constant => "Constant",
            Self::Other => "Other",
        }
    }

    /// Plural heading used by the summary view.
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Function => "Built-in Functions",
            Self::Type => "Built-in Classes",
            Self::ExceptionType => "Exception Classes",
            Self::Constant => "Constants",
            Self::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup of a boundary identifier.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == identifier)
    }

    /// Boundary identifiers of all categories, in report order.
    #[must_use]
    pub fn identifiers() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
