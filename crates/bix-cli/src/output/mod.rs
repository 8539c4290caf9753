use bix_core::records::CatalogEntry;
use bix_core::responses::{CatalogResponse, CategoryListing, Summary};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod text;

use table::{Table, TableOptions};
use text::TextStyle;

/// A response that can be printed in every output format.
pub trait Report: Serialize {
    fn to_text(&self, style: &TextStyle) -> String;
    fn to_table(&self) -> Table;
}

impl Report for Summary {
    fn to_text(&self, _style: &TextStyle) -> String {
        text::summary(self)
    }

    fn to_table(&self) -> Table {
        table::summary(self)
    }
}

impl Report for CatalogEntry {
    fn to_text(&self, style: &TextStyle) -> String {
        text::entry(self, style)
    }

    fn to_table(&self) -> Table {
        table::entry(self)
    }
}

impl Report for CategoryListing {
    fn to_text(&self, style: &TextStyle) -> String {
        text::listing(self, style)
    }

    fn to_table(&self) -> Table {
        table::listing(self)
    }
}

impl Report for CatalogResponse {
    fn to_text(&self, style: &TextStyle) -> String {
        text::catalog(self, style)
    }

    fn to_table(&self) -> Table {
        table::catalog(self)
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Report>(
    value: &T,
    format: OutputFormat,
    style: &TextStyle,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_text(style)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render(&value.to_table(), options))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Report>(value: &T, format: OutputFormat, style: &TextStyle) -> anyhow::Result<()> {
    let rendered = render(value, format, style)?;
    println!("{rendered}");
    Ok(())
}
