use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the runtime's literal singleton constants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConstantRecord {
    pub name: String,
    pub literal_value_rendering: String,
    pub runtime_type_name: String,
    pub declaring_module: String,
    pub documentation_summary: String,
}
