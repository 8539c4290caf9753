//! Aligned plain-text tables for `--format table`.

use bix_core::records::CatalogEntry;
use bix_core::responses::{CatalogResponse, CategoryListing, Summary};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Column headers plus string rows.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render(table: &Table, options: TableOptions) -> String {
    if table.rows.is_empty() {
        return String::from("(no rows)");
    }

    let headers = &table.headers;
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            let visible = text.chars().count();
            format_cell(&text, *width, false, visible)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = table.rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let plain_len = truncated.chars().count();
                let cell = if options.color {
                    colorize_flag(&truncated)
                } else {
                    truncated
                };
                format_cell(&cell, *width, numeric, plain_len)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + table.rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

/// Pad to `width`. `visible` excludes any escape codes in `value`.
fn format_cell(value: &str, width: usize, numeric: bool, visible: usize) -> String {
    let pad = " ".repeat(width.saturating_sub(visible));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

fn colorize_flag(value: &str) -> String {
    let code = match value {
        "True" => "32",
        "False" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

const fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// One row per category, then the totals.
#[must_use]
pub fn summary(summary: &Summary) -> Table {
    let mut rows: Vec<Vec<String>> = summary
        .counts()
        .into_iter()
        .map(|(category, count)| vec![category.as_str().to_string(), count.to_string()])
        .collect();
    rows.push(vec!["Total".into(), summary.total_symbols.to_string()]);
    if summary.failed > 0 {
        rows.push(vec!["Unresolved".into(), summary.failed.to_string()]);
    }
    Table {
        headers: vec!["category", "count"],
        rows,
    }
}

/// Field/value pairs for one record.
#[must_use]
pub fn entry(entry: &CatalogEntry) -> Table {
    let mut rows = vec![
        vec!["name".into(), entry.name().to_string()],
        vec!["category".into(), entry.category().to_string()],
    ];
    let mut field = |key: &str, value: String| rows.push(vec![key.to_string(), value]);

    match entry {
        CatalogEntry::Function(record) => {
            field("type", record.runtime_type_name.clone());
            field("module", record.declaring_module.clone());
            field("callable", py_bool(record.is_callable).to_string());
            field("implementation", record.implementation_note.clone());
            if let Some(method) = &record.triggered_protocol_method {
                field("protocol method", method.clone());
            }
            field("documentation", record.documentation_summary.clone());
        }
        CatalogEntry::Type(record) | CatalogEntry::ExceptionType(record) => {
            field("type", record.runtime_type_name.clone());
            field("module", record.declaring_module.clone());
            field("callable", py_bool(record.is_callable).to_string());
            field("mro", record.ancestry_chain.join(" -> "));
            field("public methods", record.public_method_names.join(", "));
            field("special methods", record.protocol_method_names.join(", "));
            field("documentation", record.documentation_summary.clone());
        }
        CatalogEntry::Constant(record) => {
            field("value", record.literal_value_rendering.clone());
            field("type", record.runtime_type_name.clone());
            field("module", record.declaring_module.clone());
            field("documentation", record.documentation_summary.clone());
        }
        CatalogEntry::Other(record) => {
            field("type", record.runtime_type_name.clone());
            field("value", record.literal_value_rendering.clone());
        }
    }

    Table {
        headers: vec!["field", "value"],
        rows,
    }
}

fn brief(entry: &CatalogEntry) -> [String; 3] {
    match entry {
        CatalogEntry::Function(record) => [
            record.runtime_type_name.clone(),
            record.declaring_module.clone(),
            record.documentation_summary.clone(),
        ],
        CatalogEntry::Type(record) | CatalogEntry::ExceptionType(record) => [
            record.runtime_type_name.clone(),
            record.declaring_module.clone(),
            record.documentation_summary.clone(),
        ],
        CatalogEntry::Constant(record) => [
            record.runtime_type_name.clone(),
            record.declaring_module.clone(),
            record.documentation_summary.clone(),
        ],
        CatalogEntry::Other(record) => [
            record.runtime_type_name.clone(),
            "-".to_string(),
            record.literal_value_rendering.clone(),
        ],
    }
}

#[must_use]
pub fn listing(listing: &CategoryListing) -> Table {
    Table {
        headers: vec!["name", "type", "module", "summary"],
        rows: listing
            .entries
            .iter()
            .map(|entry| {
                let [type_name, module, summary] = brief(entry);
                vec![entry.name().to_string(), type_name, module, summary]
            })
            .collect(),
    }
}

/// Every entry of every category, plus unresolved names.
#[must_use]
pub fn catalog(response: &CatalogResponse) -> Table {
    let mut rows: Vec<Vec<String>> = response
        .categories
        .iter()
        .flat_map(|listing| &listing.entries)
        .map(|entry| {
            let [type_name, _, summary] = brief(entry);
            vec![
                entry.category().to_string(),
                entry.name().to_string(),
                type_name,
                summary,
            ]
        })
        .collect();
    rows.extend(response.failures.iter().map(|failure| {
        vec![
            "Unresolved".to_string(),
            failure.name.clone(),
            "-".to_string(),
            failure.reason.clone(),
        ]
    }));
    Table {
        headers: vec!["category", "name", "type", "summary"],
        rows,
    }
}
