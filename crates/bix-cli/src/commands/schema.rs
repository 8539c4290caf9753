use bix_core::records::CatalogEntry;
use bix_core::responses::{CatalogResponse, CategoryListing, Summary};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// JSON Schema of one output type.
pub fn schema_of(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::CatalogEntry => schema_for!(CatalogEntry),
        SchemaType::Summary => schema_for!(Summary),
        SchemaType::CategoryListing => schema_for!(CategoryListing),
        SchemaType::Catalog => schema_for!(CatalogResponse),
    };
    Ok(serde_json::to_value(schema)?)
}

/// Handle `bix schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(args.type_name)?;
    let rendered = if flags.format == Some(OutputFormat::Raw) {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use bix_core::records::{CatalogEntry, FunctionRecord};
    use bix_core::responses::Summary;

    use super::{SchemaType, schema_of};

    #[test]
    fn catalog_entry_schema_accepts_a_serialized_record() {
        let schema = schema_of(SchemaType::CatalogEntry).expect("schema");
        let validator = jsonschema::validator_for(&schema).expect("valid schema");
        let entry = CatalogEntry::Function(FunctionRecord {
            name: "len".into(),
            runtime_type_name: "builtin_function_or_method".into(),
            declaring_module: "builtins".into(),
            is_callable: true,
            documentation_summary: "Return the number of items in a container.".into(),
            implementation_note: "C (CPython interpreter)".into(),
            triggered_protocol_method: Some("__len__".into()),
        });
        let instance = serde_json::to_value(&entry).expect("serialize");
        assert!(validator.is_valid(&instance));
        assert!(!validator.is_valid(&serde_json::json!({"category": "Function"})));
    }

    #[test]
    fn summary_schema_requires_counts() {
        let schema = schema_of(SchemaType::Summary).expect("schema");
        let validator = jsonschema::validator_for(&schema).expect("valid schema");
        let summary = serde_json::to_value(Summary::default()).expect("serialize");
        assert!(validator.is_valid(&summary));
        assert!(!validator.is_valid(&serde_json::json!({"total_symbols": "many"})));
    }

    #[test]
    fn every_schema_type_generates() {
        for type_name in [
            SchemaType::CatalogEntry,
            SchemaType::Summary,
            SchemaType::CategoryListing,
            SchemaType::Catalog,
        ] {
            let schema = schema_of(type_name).expect("schema");
            assert!(schema.is_object());
        }
    }
}
