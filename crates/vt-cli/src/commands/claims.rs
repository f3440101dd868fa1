use crate::cli::root_commands::ClaimsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::MatchRow;
use crate::context::AppContext;
use crate::output;

/// Handle `vt claims`.
pub fn handle(args: &ClaimsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx.verifier.index();
    if index.is_empty() {
        tracing::warn!("claim corpus is empty; pass --corpus or set general.corpus_path");
    }

    let rows: Vec<MatchRow> = index.search(&args.query).iter().map(MatchRow::from).collect();

    match flags.format {
        OutputFormat::Table => {
            output::print_section("Similar claims", &rows);
            Ok(())
        }
        format => output::output(&rows, format),
    }
}
