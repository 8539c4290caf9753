//! Inspection records produced for each classified symbol.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so reporters
//! can emit them as JSON and `bix schema` can describe them.

mod constant;
mod entry;
mod function;
mod other;
mod type_info;

pub use constant::ConstantRecord;
pub use entry::CatalogEntry;
pub use function::FunctionRecord;
pub use other::OtherRecord;
pub use type_info::TypeRecord;
