use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Evidence(args) => commands::evidence::handle(&args, ctx, flags).await,
        Commands::Claims(args) => commands::claims::handle(&args, ctx, flags),
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::Providers => commands::providers::handle(&ctx.config, flags),
    }
}
