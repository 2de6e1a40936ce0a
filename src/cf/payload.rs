//! Decoding of the v2 `/spaces/:guid/apps` payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{JanitorError, Result};
use crate::staleness::ApplicationRecord;

/// One page of a paginated apps listing.
#[derive(Debug, Deserialize)]
struct PaginatedApplications {
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    total_pages: Option<u64>,
    #[serde(default)]
    next_url: Option<String>,
    #[serde(default)]
    resources: Option<Vec<ApplicationResource>>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    description: Option<String>,
    /// v3-style error list
    #[serde(default)]
    errors: Option<Vec<ApiError>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplicationResource {
    #[serde(default)]
    metadata: ResourceMetadata,
    entity: ApplicationEntity,
}

#[derive(Debug, Default, Deserialize)]
struct ResourceMetadata {
    #[serde(default)]
    guid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplicationEntity {
    name: String,
    /// Kept loose so one odd value cannot fail the whole page.
    #[serde(default)]
    package_updated_at: Option<Value>,
}

/// Records of one page plus the link to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPage {
    pub records: Vec<ApplicationRecord>,
    pub next_url: Option<String>,
    pub total_results: Option<u64>,
    pub total_pages: Option<u64>,
}

/// Decode one raw page.
///
/// A structurally broken payload fails the whole page. A record whose
/// `package_updated_at` is null or unreadable is kept with no timestamp.
pub fn decode(raw: &[u8]) -> Result<DecodedPage> {
    let page: PaginatedApplications = serde_json::from_slice(raw)
        .map_err(|e| JanitorError::Decode(format!("invalid apps payload: {e}")))?;

    let Some(resources) = page.resources else {
        if let Some(code) = page.error_code {
            let description = page.description.unwrap_or_default();
            return Err(JanitorError::Fetch(format!("{code}: {description}")));
        }
        if let Some(error) = page.errors.as_ref().and_then(|errors| errors.first()) {
            let title = error.title.as_deref().unwrap_or("CF-Error");
            let detail = error.detail.as_deref().unwrap_or_default();
            return Err(JanitorError::Fetch(format!("{title}: {detail}")));
        }
        return Err(JanitorError::Decode(
            "apps payload has no resources field".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(resources.len());
    for (index, resource) in resources.into_iter().enumerate() {
        let name = resource.entity.name;
        if name.is_empty() {
            return Err(JanitorError::Decode(format!(
                "resource {index} has an empty name"
            )));
        }
        let last_update = resource
            .entity
            .package_updated_at
            .as_ref()
            .and_then(|value| timestamp_value(&name, value));
        records.push(ApplicationRecord {
            name,
            guid: resource.metadata.guid,
            last_update,
        });
    }

    Ok(DecodedPage {
        records,
        next_url: page.next_url.filter(|url| !url.is_empty()),
        total_results: page.total_results,
        total_pages: page.total_pages,
    })
}

fn timestamp_value(name: &str, value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Null => None,
        Value::String(raw) => parse_timestamp(name, raw),
        other => {
            debug!(target: "janitor::cf", app = name, value = %other, "package_updated_at is not a string");
            None
        }
    }
}

fn parse_timestamp(name: &str, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            debug!(target: "janitor::cf", app = name, value = raw, error = %e, "unreadable package_updated_at");
            None
        }
    }
}
