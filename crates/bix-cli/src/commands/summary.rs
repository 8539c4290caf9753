use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{self, text};

/// Handle `bix summary`, and bare `bix` when `hint` is set.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags, hint: bool) -> anyhow::Result<()> {
    let summary = ctx.catalog().summary();
    output::output(&summary, ctx.format, &ctx.style())?;

    if hint && ctx.format == OutputFormat::Text && !flags.quiet {
        println!("{}", text::HELP_HINT);
    }
    Ok(())
}
