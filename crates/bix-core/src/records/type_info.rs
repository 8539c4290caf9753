use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A type (or exception type) symbol with its hierarchy and method sets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TypeRecord {
    pub name: String,
    pub runtime_type_name: String,
    pub declaring_module: String,
    pub is_callable: bool,
    pub documentation_summary: String,
    /// Method resolution order: the type itself first, the most general ancestor last.
    pub ancestry_chain: Vec<String>,
    /// Sorted callable attributes without a leading underscore.
    pub public_method_names: Vec<String>,
    /// Sorted `__dunder__` attribute names.
    pub protocol_method_names: Vec<String>,
}
