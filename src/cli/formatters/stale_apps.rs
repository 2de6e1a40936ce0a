//! Stale apps formatter
//!
//! Renders a filtering outcome as human text, plain lines, a JSON robot
//! envelope, or JSONL.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::cf::{PageWalk, SpaceTarget};
use crate::cli::output::{Formattable, HumanLayout, OutputFormat, robot_ok};
use crate::staleness::{FilterOutcome, StaleApp};

/// RFC 3339 with second precision and a `Z` suffix.
#[must_use]
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Everything needed to report one `find` run.
#[derive(Debug, Clone)]
pub struct StaleAppsReport {
    pub space: SpaceTarget,
    pub cutoff: DateTime<Utc>,
    pub ignore_pattern: Option<String>,
    pub outcome: FilterOutcome,
    pub walk: PageWalk,
    /// Include "Ignoring <name>" lines in text output
    pub show_ignored: bool,
}

#[derive(Debug, Serialize)]
struct StaleAppJson {
    name: String,
    last_uploaded: String,
}

impl From<&StaleApp> for StaleAppJson {
    fn from(app: &StaleApp) -> Self {
        Self {
            name: app.name.clone(),
            last_uploaded: format_timestamp(&app.last_update),
        }
    }
}

#[derive(Debug, Serialize)]
struct StaleAppsJson {
    space_guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    space_name: Option<String>,
    before: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore: Option<String>,
    count: usize,
    stale: Vec<StaleAppJson>,
    ignored: Vec<String>,
    malformed: Vec<crate::staleness::MalformedRecord>,
    pages: usize,
    truncated: bool,
}

impl StaleAppsReport {
    /// Non-fatal problems worth surfacing next to the result.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .outcome
            .malformed
            .iter()
            .map(|record| format!("skipped {}: {}", record.name, record.reason))
            .collect();
        if self.walk.truncated {
            warnings.push(format!(
                "stopped after {} pages; results are incomplete",
                self.walk.pages
            ));
        }
        warnings
    }

    fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.show_ignored {
            lines.extend(self.outcome.ignored.iter().map(|name| format!("Ignoring {name}")));
        }
        lines.extend(self.outcome.stale.iter().map(|app| {
            format!("{} last uploaded {}", app.name, format_timestamp(&app.last_update))
        }));
        lines
    }

    fn format_human(&self) -> String {
        let space = self.space.name.as_deref().unwrap_or(&self.space.guid);
        let mut layout = HumanLayout::new();
        layout.title(&format!(
            "Apps in {space} last uploaded before {}",
            format_timestamp(&self.cutoff)
        ));
        for line in self.text_lines() {
            layout.push_line(line);
        }
        if self.outcome.stale.is_empty() {
            layout.dim("No stale apps found.");
        }
        layout.blank().dim(&format!(
            "{} stale, {} ignored, {} skipped ({} apps in {} pages)",
            self.outcome.stale.len(),
            self.outcome.ignored.len(),
            self.outcome.malformed.len(),
            self.walk.records,
            self.walk.pages
        ));
        layout.build()
    }

    fn to_json(&self) -> StaleAppsJson {
        StaleAppsJson {
            space_guid: self.space.guid.clone(),
            space_name: self.space.name.clone(),
            before: format_timestamp(&self.cutoff),
            ignore: self.ignore_pattern.clone(),
            count: self.outcome.stale.len(),
            stale: self.outcome.stale.iter().map(StaleAppJson::from).collect(),
            ignored: self.outcome.ignored.clone(),
            malformed: self.outcome.malformed.clone(),
            pages: self.walk.pages,
            truncated: self.walk.truncated,
        }
    }

    fn format_json(&self) -> String {
        let mut response = robot_ok(self.to_json());
        response.warnings = self.warnings();
        serde_json::to_string_pretty(&response).unwrap_or_default()
    }

    fn format_jsonl(&self) -> String {
        self.outcome
            .stale
            .iter()
            .filter_map(|app| serde_json::to_string(&StaleAppJson::from(app)).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for StaleAppsReport {
    fn format(&self, fmt: OutputFormat) -> String {
        debug!(target: "janitor::find", format = ?fmt, stale = self.outcome.stale.len(), "rendering report");
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Plain => self.text_lines().join("\n"),
            OutputFormat::Json => self.format_json(),
            OutputFormat::Jsonl => self.format_jsonl(),
        }
    }
}
