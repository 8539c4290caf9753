use anyhow::Context;

use crate::cli::root_commands::InspectArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `bix inspect <NAME>`.
pub fn handle(args: &InspectArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let entry = ctx
        .inspector
        .inspect_symbol(&args.name)
        .with_context(|| format!("Could not inspect '{}'", args.name))?;
    output::output(&entry, ctx.format, &ctx.style())
}
