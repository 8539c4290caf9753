use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fallback for symbols that are neither constants, types, nor callables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OtherRecord {
    pub name: String,
    pub runtime_type_name: String,
    pub literal_value_rendering: String,
}
