use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A callable symbol that is not itself a type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    pub runtime_type_name: String,
    pub declaring_module: String,
    pub is_callable: bool,
    pub documentation_summary: String,
    pub implementation_note: String,
    /// Protocol method the operation invokes on its operand, e.g. `__len__` for `len`.
    pub triggered_protocol_method: Option<String>,
}
