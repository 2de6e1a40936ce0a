//! The staleness filter.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::cutoff::Cutoff;
use super::exclusion::ExclusionPattern;
use super::record::ApplicationRecord;

/// An application whose package predates the cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleApp {
    pub name: String,
    pub last_update: DateTime<Utc>,
}

/// Stale applications in input order.
pub type FilterResult = Vec<StaleApp>;

/// A record that could not be classified because it has no usable timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    pub reason: String,
}

/// Everything one filtering pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub stale: FilterResult,
    /// Names suppressed by the exclusion pattern.
    pub ignored: Vec<String>,
    pub malformed: Vec<MalformedRecord>,
}

impl FilterOutcome {
    /// Append the outcome of a later page.
    pub fn extend(&mut self, other: Self) {
        self.stale.extend(other.stale);
        self.ignored.extend(other.ignored);
        self.malformed.extend(other.malformed);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stale.is_empty() && self.ignored.is_empty() && self.malformed.is_empty()
    }
}

/// Cutoff and exclusion bound together so pages can be filtered one at a time.
#[derive(Debug, Clone)]
pub struct StalenessFilter {
    cutoff: Cutoff,
    exclusion: Option<ExclusionPattern>,
}

impl StalenessFilter {
    #[must_use]
    pub const fn new(cutoff: Cutoff, exclusion: Option<ExclusionPattern>) -> Self {
        Self { cutoff, exclusion }
    }

    /// Classify `records` in order, appending to `outcome`.
    pub fn apply(&self, records: &[ApplicationRecord], outcome: &mut FilterOutcome) {
        for record in records {
            if self
                .exclusion
                .as_ref()
                .is_some_and(|pattern| pattern.matches(&record.name))
            {
                outcome.ignored.push(record.name.clone());
                continue;
            }

            let Some(last_update) = record.last_update else {
                outcome.malformed.push(MalformedRecord {
                    name: record.name.clone(),
                    guid: record.guid.clone(),
                    reason: "no package upload timestamp".to_string(),
                });
                continue;
            };

            // Strict: an app updated exactly at the cutoff is not stale.
            if last_update < self.cutoff {
                outcome.stale.push(StaleApp {
                    name: record.name.clone(),
                    last_update,
                });
            }
        }
    }
}

/// Run a single filtering pass over `records`.
#[must_use]
pub fn filter(
    records: &[ApplicationRecord],
    cutoff: Cutoff,
    exclusion: Option<&ExclusionPattern>,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    StalenessFilter::new(cutoff, exclusion.cloned()).apply(records, &mut outcome);
    outcome
}
