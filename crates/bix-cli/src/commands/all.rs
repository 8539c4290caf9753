use crate::context::AppContext;
use crate::output;

/// Handle `bix all`.
pub fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let response = ctx.catalog().to_response();
    output::output(&response, ctx.format, &ctx.style())
}
