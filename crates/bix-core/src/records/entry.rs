use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ConstantRecord, FunctionRecord, OtherRecord, TypeRecord};
use crate::enums::Category;

/// A classified symbol paired with the record its category calls for.
///
/// The variant *is* the category, so a record can never be filed under a
/// category it does not belong to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "category", content = "record")]
pub enum CatalogEntry {
    Function(FunctionRecord),
    Type(TypeRecord),
    ExceptionType(TypeRecord),
    Constant(ConstantRecord),
    Other(OtherRecord),
}

impl CatalogEntry {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Function(_) => Category::Function,
            Self::Type(_) => Category::Type,
            Self::ExceptionType(_) => Category::ExceptionType,
            Self::Constant(_) => Category::Constant,
            Self::Other(_) => Category::Other,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(record) => &record.name,
            Self::Type(record) | Self::ExceptionType(record) => &record.name,
            Self::Constant(record) => &record.name,
            Self::Other(record) => &record.name,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionRecord> {
        match self {
            Self::Function(record) => Some(record),
            _ => None,
        }
    }

    /// Type metadata for both `Type` and `ExceptionType` entries.
    #[must_use]
    pub const fn as_type(&self) -> Option<&TypeRecord> {
        match self {
            Self::Type(record) | Self::ExceptionType(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_constant(&self) -> Option<&ConstantRecord> {
        match self {
            Self::Constant(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_other(&self) -> Option<&OtherRecord> {
        match self {
            Self::Other(record) => Some(record),
            _ => None,
        }
    }
}
