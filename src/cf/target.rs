//! Target space resolution.
//!
//! Uses an explicit GUID when one is given, otherwise the space the `cf`
//! CLI is currently targeting (`SpaceFields` in `$CF_HOME/.cf/config.json`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::CfConfig;
use crate::error::{JanitorError, Result};

/// The space whose apps are inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceTarget {
    pub guid: String,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CfCliConfig {
    #[serde(rename = "SpaceFields", default)]
    space_fields: SpaceFields,
}

#[derive(Debug, Default, Deserialize)]
struct SpaceFields {
    #[serde(rename = "GUID", default)]
    guid: String,
    #[serde(rename = "Name", default)]
    name: String,
}

/// Resolve the target space.
///
/// Precedence: `explicit` (the `--space-guid` flag), then `cf.space_guid`
/// from configuration, then the cf CLI's own target.
pub fn resolve_space(explicit: Option<&str>, config: &CfConfig) -> Result<SpaceTarget> {
    let configured = explicit
        .filter(|guid| !guid.is_empty())
        .or_else(|| config.space_guid.as_deref().filter(|guid| !guid.is_empty()));
    if let Some(guid) = configured {
        return Ok(SpaceTarget {
            guid: guid.to_string(),
            name: None,
        });
    }

    let path = cf_config_path(config)?;
    read_targeted_space(&path)
}

fn cf_config_path(config: &CfConfig) -> Result<PathBuf> {
    let home = match config.cf_home.as_ref() {
        Some(home) => home.clone(),
        None => dirs::home_dir().ok_or_else(|| {
            JanitorError::NoTarget("home directory not found; pass --space-guid".to_string())
        })?,
    };
    Ok(home.join(".cf").join("config.json"))
}

fn read_targeted_space(path: &Path) -> Result<SpaceTarget> {
    if !path.exists() {
        return Err(JanitorError::NoTarget(format!(
            "cf config {} not found; run `cf login` and `cf target -s <space>`, or pass --space-guid",
            path.display()
        )));
    }
    let raw = std::fs::read_to_string(path)?;
    let cf_config: CfCliConfig = serde_json::from_str(&raw).map_err(|e| {
        JanitorError::NoTarget(format!("unreadable cf config {}: {e}", path.display()))
    })?;

    let fields = cf_config.space_fields;
    if fields.guid.is_empty() {
        return Err(JanitorError::NoTarget(
            "no space targeted; run `cf target -s <space>` or pass --space-guid".to_string(),
        ));
    }
    Ok(SpaceTarget {
        guid: fields.guid,
        name: (!fields.name.is_empty()).then_some(fields.name),
    })
}
