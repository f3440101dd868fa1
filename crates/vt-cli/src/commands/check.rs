use std::num::NonZeroUsize;

use serde::Serialize;
use vt_core::{EvidenceEntry, LabelCounts, VerdictSummary};
use vt_pipeline::{PageWindow, Paginator};

use crate::cli::root_commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{self, EntryRow, FeedRow, MatchRow, SlotRow};
use crate::context::AppContext;
use crate::output::{self, Tabular};
use crate::progress::Spinner;

const NO_VERDICT: &str = "No agreeing or contradicting sources were found; no verdict.";

#[derive(Debug, Serialize)]
struct CheckReport {
    claim: String,
    verdict: Option<VerdictSummary>,
    summary: String,
    counts: LabelCounts,
    agreeing_page: PageWindow,
    agreeing: Vec<FeedRow>,
    contradicting_page: PageWindow,
    contradicting: Vec<FeedRow>,
    providers: Vec<SlotRow>,
    matches: Vec<MatchRow>,
}

/// Evidence that was gathered before classification failed.
#[derive(Debug, Serialize)]
struct FailedCheckReport {
    claim: String,
    error: String,
    providers: Vec<SlotRow>,
    evidence: Vec<EntryRow>,
    matches: Vec<MatchRow>,
}

#[derive(Debug)]
struct CountRow {
    label: &'static str,
    count: usize,
}

impl Tabular for CountRow {
    const HEADERS: &'static [&'static str] = &["label", "count"];

    fn cells(&self) -> Vec<String> {
        vec![self.label.to_string(), self.count.to_string()]
    }
}

/// Handle `vt check`.
pub async fn handle(
    args: &CheckArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::gather(ctx, &args.claim).await?;
    let page_size = ctx.page_size();

    let spinner = Spinner::start("Classifying evidence");
    let result = ctx.verifier.classify().await.cloned();
    let session = ctx.verifier.session();

    let outcome = match result {
        Ok(outcome) => {
            spinner.finish();
            outcome
        }
        Err(error) => {
            spinner.fail("classification failed");
            let report = FailedCheckReport {
                claim: args.claim.clone(),
                error: error.to_string(),
                providers: shared::slot_rows(session),
                evidence: shared::entry_rows(session),
                matches: shared::match_rows(session),
            };
            print_failed(&report, flags.format)?;
            return Err(error.into());
        }
    };

    let (agreeing_page, agreeing) = page(outcome.agreeing, page_size, args.page);
    let (contradicting_page, contradicting) = page(outcome.contradicting, page_size, args.page);
    let report = CheckReport {
        claim: args.claim.clone(),
        summary: summary(outcome.verdict.as_ref()),
        verdict: outcome.verdict,
        counts: outcome.counts,
        agreeing_page,
        agreeing,
        contradicting_page,
        contradicting,
        providers: shared::slot_rows(session),
        matches: shared::match_rows(session),
    };

    match flags.format {
        OutputFormat::Table => {
            println!("{}\n", report.summary);
            output::print_section("Labels", &count_rows(report.counts));
            output::print_section(
                &format!(
                    "Agreeing (page {} of {})",
                    report.agreeing_page.page,
                    report.agreeing_page.total_pages.max(1)
                ),
                &report.agreeing,
            );
            output::print_section(
                &format!(
                    "Contradicting (page {} of {})",
                    report.contradicting_page.page,
                    report.contradicting_page.total_pages.max(1)
                ),
                &report.contradicting,
            );
            output::print_section("Providers", &report.providers);
            output::print_section("Similar claims", &report.matches);
            Ok(())
        }
        format => output::output(&report, format),
    }
}

fn print_failed(report: &FailedCheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            output::print_section("Providers", &report.providers);
            output::print_section("Evidence", &report.evidence);
            output::print_section("Similar claims", &report.matches);
            Ok(())
        }
        format => output::output(report, format),
    }
}

fn summary(verdict: Option<&VerdictSummary>) -> String {
    verdict.map_or_else(|| NO_VERDICT.to_string(), VerdictSummary::sentence)
}

fn page(
    entries: Vec<EvidenceEntry>,
    page_size: NonZeroUsize,
    n: i64,
) -> (PageWindow, Vec<FeedRow>) {
    let mut pager = Paginator::new(entries, page_size);
    pager.jump(n);
    (
        pager.window(),
        pager.current_slice().iter().map(FeedRow::from).collect(),
    )
}

fn count_rows(counts: LabelCounts) -> [CountRow; 3] {
    [
        CountRow {
            label: "agree",
            count: counts.agree,
        },
        CountRow {
            label: "neutral",
            count: counts.neutral,
        },
        CountRow {
            label: "contradict",
            count: counts.contradict,
        },
    ]
}
