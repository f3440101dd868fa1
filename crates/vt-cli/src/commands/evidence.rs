use serde::Serialize;
use vt_pipeline::PageWindow;

use crate::cli::root_commands::EvidenceArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{self, EntryRow, FeedRow, SlotRow};
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct EvidenceReport {
    query: String,
    providers: Vec<SlotRow>,
    evidence: Vec<EntryRow>,
    news_page: PageWindow,
    news: Vec<FeedRow>,
}

/// Handle `vt evidence`.
pub async fn handle(
    args: &EvidenceArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::gather(ctx, &args.query).await?;

    let page_size = ctx.page_size();
    let mut feed = ctx.verifier.news_feed(page_size);
    feed.jump(args.page);

    let session = ctx.verifier.session();
    let report = EvidenceReport {
        query: args.query.clone(),
        providers: shared::slot_rows(session),
        evidence: shared::entry_rows(session),
        news_page: feed.window(),
        news: feed.current_slice().iter().map(FeedRow::from).collect(),
    };

    match flags.format {
        OutputFormat::Table => {
            output::print_section("Providers", &report.providers);
            output::print_section("Evidence", &report.evidence);
            output::print_section(&news_title(report.news_page), &report.news);
            Ok(())
        }
        format => output::output(&report, format),
    }
}

fn news_title(window: PageWindow) -> String {
    format!("News (page {} of {})", window.page, window.total_pages.max(1))
}
