//! Serde roundtrip and JsonSchema validation tests for all record types.

use bix_core::enums::Category;
use bix_core::records::*;
use bix_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn len_record() -> FunctionRecord {
    FunctionRecord {
        name: "len".into(),
        runtime_type_name: "builtin_function_or_method".into(),
        declaring_module: "builtins".into(),
        is_callable: true,
        documentation_summary: "Return the number of items in a container.".into(),
        implementation_note: "C (CPython interpreter)".into(),
        triggered_protocol_method: Some("__len__".into()),
    }
}

fn dict_record() -> TypeRecord {
    TypeRecord {
        name: "dict".into(),
        runtime_type_name: "type".into(),
        declaring_module: "builtins".into(),
        is_callable: true,
        documentation_summary: "dict() -> new empty dictionary".into(),
        ancestry_chain: vec!["dict".into(), "object".into()],
        public_method_names: vec!["clear".into(), "get".into(), "items".into()],
        protocol_method_names: vec!["__getitem__".into(), "__len__".into()],
    }
}

roundtrip_and_validate!(function_record_roundtrip, FunctionRecord, len_record());

roundtrip_and_validate!(type_record_roundtrip, TypeRecord, dict_record());

roundtrip_and_validate!(
    constant_record_roundtrip,
    ConstantRecord,
    ConstantRecord {
        name: "True".into(),
        literal_value_rendering: "True".into(),
        runtime_type_name: "bool".into(),
        declaring_module: "builtins".into(),
        documentation_summary: "Returns True when the argument is true, False otherwise.".into(),
    }
);

roundtrip_and_validate!(
    function_entry_roundtrip,
    CatalogEntry,
    CatalogEntry::Function(FunctionRecord {
        triggered_protocol_method: None,
        ..len_record()
    })
);

roundtrip_and_validate!(
    exception_entry_roundtrip,
    CatalogEntry,
    CatalogEntry::ExceptionType(dict_record())
);

roundtrip_and_validate!(
    summary_roundtrip,
    Summary,
    Summary {
        total_symbols: 3,
        functions: 1,
        types: 1,
        exception_types: 0,
        constants: 1,
        other: 0,
        failed: 1,
    }
);

roundtrip_and_validate!(
    catalog_response_roundtrip,
    CatalogResponse,
    CatalogResponse {
        summary: Summary {
            total_symbols: 2,
            functions: 1,
            types: 1,
            ..Summary::default()
        },
        categories: vec![
            CategoryListing {
                category: Category::Function,
                entries: vec![CatalogEntry::Function(len_record())],
            },
            CategoryListing {
                category: Category::Type,
                entries: vec![CatalogEntry::Type(dict_record())],
            },
        ],
        failures: vec![ResolutionFailure {
            name: "__secret__".into(),
            reason: "access denied".into(),
        }],
    }
);
