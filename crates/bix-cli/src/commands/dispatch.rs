use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// No command shows the summary followed by a pointer to `--help`.
pub fn dispatch(
    command: Option<Commands>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(command) = command else {
        return commands::summary::handle(ctx, flags, true);
    };

    match command {
        Commands::Summary => commands::summary::handle(ctx, flags, false),
        Commands::Inspect(args) => commands::inspect::handle(&args, ctx),
        Commands::Category(args) => commands::category::handle(&args, ctx),
        Commands::All => commands::all::handle(ctx),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
