//! Human-readable reports.
//!
//! Every view is a sequence of printed blocks joined by newlines. Section
//! titles sit on their own line preceded by a blank line and underlined with
//! `=` (top-level sections) or `-` (one symbol).

use bix_config::OutputConfig;
use bix_core::records::{CatalogEntry, ConstantRecord, FunctionRecord, OtherRecord, TypeRecord};
use bix_core::responses::{CatalogResponse, CategoryListing, ResolutionFailure, Summary};

/// Protocol methods called out in the type view before the full list.
const IMPORTANT_SPECIAL_METHODS: [&str; 10] = [
    "__init__",
    "__str__",
    "__repr__",
    "__len__",
    "__getitem__",
    "__setitem__",
    "__iter__",
    "__next__",
    "__contains__",
    "__call__",
];

pub const HELP_HINT: &str = "\nUse --help to see available options";

/// Preview limits for the text views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub method_preview: usize,
    pub special_preview: usize,
    pub names_per_line: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for TextStyle {
    fn from(config: &OutputConfig) -> Self {
        Self {
            method_preview: config.method_preview,
            special_preview: config.special_preview,
            names_per_line: config.names_per_line.max(1),
        }
    }
}

#[must_use]
pub fn section_header(title: &str, underline: char) -> String {
    let rule: String = std::iter::repeat_n(underline, title.chars().count()).collect();
    format!("\n{title}\n{rule}")
}

const fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[must_use]
pub fn function(record: &FunctionRecord) -> String {
    let mut lines = vec![
        section_header(&format!("Function: {}", record.name), '-'),
        format!("Type: {}", record.runtime_type_name),
        format!("Module: {}", record.declaring_module),
        format!("Callable: {}", py_bool(record.is_callable)),
        format!("Implementation: {}", record.implementation_note),
    ];

    if let Some(method) = &record.triggered_protocol_method {
        lines.push(format!("Triggers Magic Method: {method}"));
        lines.push(format!(
            "  └─ When you call {}(obj), Python looks for obj.{method}()",
            record.name
        ));
    }

    lines.push(format!(
        "\nDocumentation:\n  {}",
        record.documentation_summary
    ));
    lines.join("\n")
}

/// Class view, shared by ordinary and exception types.
#[must_use]
pub fn type_record(record: &TypeRecord, style: &TextStyle) -> String {
    let mut lines = vec![
        section_header(&format!("Class: {}", record.name), '-'),
        format!("Type: {}", record.runtime_type_name),
        format!("Module: {}", record.declaring_module),
        format!("Callable: {} (creates instances)", py_bool(record.is_callable)),
        "\nInheritance Chain (MRO):".to_string(),
    ];

    let last = record.ancestry_chain.len().saturating_sub(1);
    for (index, ancestor) in record.ancestry_chain.iter().enumerate() {
        let prefix = if index == last { "  └─" } else { "  ├─" };
        lines.push(format!("{prefix} {ancestor}"));
    }

    let public = &record.public_method_names;
    if !public.is_empty() {
        lines.push(format!("\nPublic Methods ({}):", public.len()));
        lines.push(preview(public, style.method_preview));
        push_remainder(&mut lines, public.len(), style.method_preview);
        lines.push("  Note: These are called on instances, e.g., my_obj.method()".to_string());
    }

    let special = &record.protocol_method_names;
    if !special.is_empty() {
        lines.push(format!("\nSpecial Methods ({}):", special.len()));
        let important: Vec<&str> = special
            .iter()
            .map(String::as_str)
            .filter(|name| IMPORTANT_SPECIAL_METHODS.contains(name))
            .collect();
        if !important.is_empty() {
            lines.push(format!("  Important: {}", important.join(", ")));
        }
        lines.push(format!(
            "  All: {}",
            special
                .iter()
                .take(style.special_preview)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        push_remainder(&mut lines, special.len(), style.special_preview);
    }

    lines.push(format!(
        "\nDocumentation:\n  {}",
        record.documentation_summary
    ));
    lines.join("\n")
}

fn preview(names: &[String], limit: usize) -> String {
    let shown: Vec<&str> = names.iter().take(limit).map(String::as_str).collect();
    format!("  {}", shown.join(", "))
}

fn push_remainder(lines: &mut Vec<String>, total: usize, limit: usize) {
    if total > limit {
        lines.push(format!("  ... and {} more", total - limit));
    }
}

#[must_use]
pub fn constant(record: &ConstantRecord) -> String {
    [
        section_header(&format!("Constant: {}", record.name), '-'),
        format!("Value: {}", record.literal_value_rendering),
        format!("Type: {}", record.runtime_type_name),
        format!("Module: {}", record.declaring_module),
        format!("\nDocumentation:\n  {}", record.documentation_summary),
    ]
    .join("\n")
}

#[must_use]
pub fn other(record: &OtherRecord) -> String {
    [
        format!("Name: {}", record.name),
        format!("Type: {}", record.runtime_type_name),
        format!("Value: {}", record.literal_value_rendering),
    ]
    .join("\n")
}

#[must_use]
pub fn entry(entry: &CatalogEntry, style: &TextStyle) -> String {
    match entry {
        CatalogEntry::Function(record) => function(record),
        CatalogEntry::Type(record) | CatalogEntry::ExceptionType(record) => {
            type_record(record, style)
        }
        CatalogEntry::Constant(record) => constant(record),
        CatalogEntry::Other(record) => other(record),
    }
}

#[must_use]
pub fn summary(summary: &Summary) -> String {
    let mut lines = vec![
        section_header("SUMMARY", '='),
        format!("Total Symbols: {}", summary.total_symbols),
    ];
    lines.extend(
        summary
            .counts()
            .into_iter()
            .map(|(category, count)| format!("{}: {count}", category.plural_label())),
    );
    if summary.failed > 0 {
        lines.push(format!("Unresolved: {}", summary.failed));
    }
    lines.join("\n")
}

/// Names of one category, `names_per_line` to a line.
#[must_use]
pub fn listing(listing: &CategoryListing, style: &TextStyle) -> String {
    let names = listing.names();
    let mut lines = vec![section_header(
        &format!("{} ({})", listing.category.label(), names.len()),
        '=',
    )];
    lines.extend(
        names
            .chunks(style.names_per_line.max(1))
            .map(|chunk| format!("  {}", chunk.join(", "))),
    );
    lines.join("\n")
}

fn failures(failures: &[ResolutionFailure]) -> String {
    let mut lines = vec![section_header(
        &format!("Unresolved ({})", failures.len()),
        '=',
    )];
    lines.extend(
        failures
            .iter()
            .map(|failure| format!("  {}: {}", failure.name, failure.reason)),
    );
    lines.join("\n")
}

/// Summary, then every non-empty category in report order with a blank
/// line after each symbol.
#[must_use]
pub fn catalog(response: &CatalogResponse, style: &TextStyle) -> String {
    let mut blocks = vec![summary(&response.summary)];
    for listing in &response.categories {
        if listing.entries.is_empty() {
            continue;
        }
        blocks.push(format!(
            "\n\n{}\n",
            section_header(listing.category.label(), '=')
        ));
        for item in &listing.entries {
            blocks.push(entry(item, style));
            blocks.push(String::new());
        }
    }
    if !response.failures.is_empty() {
        blocks.push(failures(&response.failures));
    }
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bix_core::enums::Category;
    use pretty_assertions::assert_eq;

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

    fn names(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}{i:02}")).collect()
    }

    #[test]
    fn header_is_underlined_to_title_width() {
        assert_eq!(section_header("SUMMARY", '='), "\nSUMMARY\n=======");
    }

    #[test]
    fn function_view_includes_protocol_hint() {
        assert_eq!(
            function(&len_record()),
            "\nFunction: len\n-------------\n\
             Type: builtin_function_or_method\n\
             Module: builtins\n\
             Callable: True\n\
             Implementation: C (CPython interpreter)\n\
             Triggers Magic Method: __len__\n  \
             └─ When you call len(obj), Python looks for obj.__len__()\n\
             \nDocumentation:\n  Return the number of items in a container."
        );
    }

    #[test]
    fn function_without_protocol_skips_hint() {
        let record = FunctionRecord {
            triggered_protocol_method: None,
            ..len_record()
        };
        assert!(!function(&record).contains("Magic Method"));
    }

    #[test]
    fn type_view_draws_mro_tree_and_truncates_lists() {
        let mut protocol = names("__p", 20);
        protocol.push("__len__".into());
        protocol.push("__init__".into());
        protocol.sort();
        let record = TypeRecord {
            name: "Thing".into(),
            runtime_type_name: "type".into(),
            declaring_module: "demo".into(),
            is_callable: true,
            documentation_summary: "A thing.".into(),
            ancestry_chain: vec!["Thing".into(), "Base".into(), "object".into()],
            public_method_names: names("m", 12),
            protocol_method_names: protocol,
        };

        let text = type_record(&record, &TextStyle::default());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.contains(&"  ├─ Thing"));
        assert!(lines.contains(&"  ├─ Base"));
        assert!(lines.contains(&"  └─ object"));
        assert!(lines.contains(&"Public Methods (12):"));
        assert!(lines.contains(&"  m00, m01, m02, m03, m04, m05, m06, m07, m08, m09"));
        assert!(lines.contains(&"  ... and 2 more"));
        assert!(lines.contains(&"Special Methods (22):"));
        assert!(lines.contains(&"  Important: __init__, __len__"));
        assert!(lines.contains(&"  ... and 7 more"));
        assert!(lines.contains(&"Callable: True (creates instances)"));
    }

    #[test]
    fn type_view_omits_empty_method_sections() {
        let record = TypeRecord {
            name: "Bare".into(),
            runtime_type_name: "type".into(),
            declaring_module: "demo".into(),
            is_callable: true,
            documentation_summary: "No documentation available.".into(),
            ancestry_chain: vec!["Bare".into()],
            public_method_names: Vec::new(),
            protocol_method_names: Vec::new(),
        };
        let text = type_record(&record, &TextStyle::default());
        assert!(!text.contains("Public Methods"));
        assert!(!text.contains("Special Methods"));
        assert!(text.contains("  └─ Bare"));
    }

    #[test]
    fn constant_view_shows_literal() {
        let record = ConstantRecord {
            name: "True".into(),
            literal_value_rendering: "True".into(),
            runtime_type_name: "bool".into(),
            declaring_module: "builtins".into(),
            documentation_summary: "Returns True when the argument is true.".into(),
        };
        assert_eq!(
            constant(&record),
            "\nConstant: True\n--------------\nValue: True\nType: bool\nModule: builtins\n\
             \nDocumentation:\n  Returns True when the argument is true."
        );
    }

    #[test]
    fn summary_lists_categories_in_report_order() {
        let text = summary(&Summary {
            total_symbols: 6,
            functions: 2,
            types: 1,
            exception_types: 1,
            constants: 1,
            other: 1,
            failed: 0,
        });
        assert_eq!(
            text,
            "\nSUMMARY\n=======\nTotal Symbols: 6\nBuilt-in Functions: 2\nBuilt-in Classes: 1\n\
             Exception Classes: 1\nConstants: 1\nOther: 1"
        );
    }

    #[test]
    fn summary_reports_unresolved_names() {
        let text = summary(&Summary {
            failed: 2,
            ..Summary::default()
        });
        assert!(text.ends_with("Unresolved: 2"));
    }

    #[test]
    fn listing_wraps_names() {
        let entries = ["a", "b", "c", "d", "e", "f", "g"]
            .into_iter()
            .map(|name| {
                CatalogEntry::Other(OtherRecord {
                    name: name.into(),
                    runtime_type_name: "str".into(),
                    literal_value_rendering: "''".into(),
                })
            })
            .collect();
        let listing = CategoryListing {
            category: Category::Other,
            entries,
        };
        assert_eq!(
            super::listing(&listing, &TextStyle::default()),
            "\nOther (7)\n=========\n  a, b, c, d, e\n  f, g"
        );

        let narrow = TextStyle {
            names_per_line: 3,
            ..TextStyle::default()
        };
        assert_eq!(
            super::listing(&listing, &narrow),
            "\nOther (7)\n=========\n  a, b, c\n  d, e, f\n  g"
        );
    }

    #[test]
    fn catalog_skips_empty_categories() {
        let response = CatalogResponse {
            summary: Summary {
                total_symbols: 1,
                functions: 1,
                ..Summary::default()
            },
            categories: vec![
                CategoryListing {
                    category: Category::Function,
                    entries: vec![CatalogEntry::Function(len_record())],
                },
                CategoryListing {
                    category: Category::Constant,
                    entries: Vec::new(),
                },
            ],
            failures: vec![ResolutionFailure {
                name: "vault".into(),
                reason: "access denied".into(),
            }],
        };
        let text = catalog(&response, &TextStyle::default());
        assert!(text.contains("\n\n\nBuilt-in Function\n=================\n\n"));
        assert!(!text.contains("\nConstant\n"));
        assert!(text.contains("Function: len"));
        assert!(text.ends_with("\nUnresolved (1)\n==============\n  vault: access denied"));
    }
}
