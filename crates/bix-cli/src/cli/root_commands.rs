use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Default, Subcommand)]
pub enum Commands {
    /// Show per-category counts.
    #[default]
    Summary,
    /// Inspect one name in detail.
    Inspect(InspectArgs),
    /// List every name in a category.
    Category(CategoryArgs),
    /// Summary followed by a detailed report of every name.
    All,
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Name bound in the namespace (e.g. `dict`, `len`, `True`).
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryArgs {
    /// Category identifier (`Function`, `Type`, `ExceptionType`, `Constant`,
    /// `Other`) or its report label (`Built-in Function`, ...). Case-insensitive.
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output type whose schema to print.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Output types with a published JSON Schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    /// A single record, as printed by `bix inspect`.
    CatalogEntry,
    /// Per-category counts, as printed by `bix summary`.
    Summary,
    /// One category, as printed by `bix category`.
    CategoryListing,
    /// The full catalog, as printed by `bix all`.
    Catalog,
}
