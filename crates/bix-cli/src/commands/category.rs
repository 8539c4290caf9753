use bix_core::enums::Category;
use bix_core::errors::CoreError;
use bix_core::responses::CategoryListing;

use crate::cli::root_commands::CategoryArgs;
use crate::context::AppContext;
use crate::output;

/// Map user input to a category.
///
/// Accepts the exact identifier, the report label (`Built-in Function`,
/// `Built-in Class`, `Exception Class`, ...), and either of those in any case.
pub fn resolve_alias(input: &str) -> Option<Category> {
    let input = input.trim();
    Category::from_identifier(input).or_else(|| {
        Category::ALL.into_iter().find(|category| {
            category.as_str().eq_ignore_ascii_case(input)
                || category.label().eq_ignore_ascii_case(input)
        })
    })
}

/// Handle `bix category <NAME>`.
pub fn handle(args: &CategoryArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let category =
        resolve_alias(&args.name).ok_or_else(|| CoreError::unknown_category(&args.name))?;

    let catalog = ctx.catalog();
    let listing = CategoryListing {
        category,
        entries: catalog.category(category.as_str())?.to_vec(),
    };
    output::output(&listing, ctx.format, &ctx.style())
}
