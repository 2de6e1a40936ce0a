//! janitor find - Report apps not uploaded since a cutoff

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::cf::{CfCurlSource, FileSource, RecordSource, SpaceTarget, resolve_space, walk_pages};
use crate::cli::formatters::StaleAppsReport;
use crate::cli::output::Formattable;
use crate::error::Result;
use crate::staleness::{self, FilterOutcome, StalenessFilter};

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Report apps last uploaded before this instant: "now" or RFC 3339
    #[arg(long)]
    pub before: Option<String>,

    /// Never report apps whose name matches this regular expression
    #[arg(long)]
    pub ignore: Option<String>,

    /// Space to inspect (default: the space targeted by the cf CLI)
    #[arg(long)]
    pub space_guid: Option<String>,

    /// Read a saved apps payload instead of calling cf
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Print an "Ignoring <name>" line for each excluded app
    #[arg(long)]
    pub show_ignored: bool,
}

pub fn run(ctx: &AppContext, args: &FindArgs) -> Result<()> {
    // User input is validated before anything is fetched.
    let cutoff = staleness::resolve(args.before.as_deref().unwrap_or_default(), Utc::now())?;
    let exclusion = staleness::compile(args.ignore.as_deref().unwrap_or_default())?;
    debug!(target: "janitor::find", %cutoff, ignore = ?exclusion.as_ref().map(|p| p.as_str()), "arguments resolved");

    let space = match args.input.as_ref() {
        Some(path) => offline_space(ctx, args, path),
        None => resolve_space(args.space_guid.as_deref(), &ctx.config.cf)?,
    };
    let source: Box<dyn RecordSource> = match args.input.as_ref() {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let cf = CfCurlSource::from_config(&ctx.config.cf);
            cf.ensure_available()?;
            Box::new(cf)
        }
    };
    info!(target: "janitor::find", space = %space.guid, "finding stale apps");

    let ignore_pattern = exclusion.as_ref().map(|p| p.as_str().to_string());
    let filter = StalenessFilter::new(cutoff, exclusion);
    let mut outcome = FilterOutcome::default();
    let walk = walk_pages(
        &*source,
        &space.guid,
        ctx.config.cf.max_pages,
        |records| filter.apply(records, &mut outcome),
    )?;

    for record in &outcome.malformed {
        warn!(target: "janitor::find", app = %record.name, reason = %record.reason, "skipping app");
    }
    if walk.truncated {
        warn!(target: "janitor::find", pages = walk.pages, "page limit reached; results are incomplete");
    }
    debug!(
        target: "janitor::find",
        pages = walk.pages,
        records = walk.records,
        stale = outcome.stale.len(),
        "filter complete"
    );

    let report = StaleAppsReport {
        space,
        cutoff,
        ignore_pattern,
        outcome,
        walk,
        show_ignored: args.show_ignored || ctx.config.output.show_ignored,
    };
    let rendered = report.format(ctx.output_format);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// A saved payload still gets labelled with the configured space when there is one.
fn offline_space(ctx: &AppContext, args: &FindArgs, path: &Path) -> SpaceTarget {
    let guid = args
        .space_guid
        .clone()
        .or_else(|| ctx.config.cf.space_guid.clone())
        .unwrap_or_default();
    SpaceTarget {
        guid,
        name: Some(path.display().to_string()),
    }
}
