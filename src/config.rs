use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JanitorError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cf: CfConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("JANITOR_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Parse a config file without consulting the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        if let Some(patch) = Self::load_patch(path)? {
            config.merge_patch(patch);
        }
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("janitor/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            JanitorError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            JanitorError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.cf {
            self.cf.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    /// Apply `JANITOR_*` and `CF_HOME` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("JANITOR_ROBOT").is_some_and(|value| parse_bool(&value)) {
            self.output.format = "json".to_string();
        }

        if let Some(value) = lookup("JANITOR_CF_PATH") {
            self.cf.cf_path = value;
        }
        if let Some(value) = lookup("JANITOR_SPACE_GUID") {
            self.cf.space_guid = Some(value);
        }
        if let Some(value) = lookup("CF_HOME") {
            self.cf.cf_home = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("JANITOR_MAX_PAGES") {
            self.cf.max_pages = value.parse::<usize>().map_err(|err| {
                JanitorError::Config(format!("invalid JANITOR_MAX_PAGES value {value}: {err}"))
            })?;
        }

        if let Some(value) = lookup("JANITOR_FORMAT") {
            self.output.format = value;
        }
        if let Some(value) = lookup("JANITOR_SHOW_IGNORED") {
            self.output.show_ignored = parse_bool(&value);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfConfig {
    /// cf binary to invoke
    #[serde(default = "default_cf_path")]
    pub cf_path: String,
    /// Flags placed before every cf subcommand
    #[serde(default)]
    pub default_flags: Vec<String>,
    /// Fixed target space; unset means whatever `cf target` points at
    #[serde(default)]
    pub space_guid: Option<String>,
    /// Overrides the directory holding `.cf/config.json`
    #[serde(default)]
    pub cf_home: Option<PathBuf>,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for CfConfig {
    fn default() -> Self {
        Self {
            cf_path: default_cf_path(),
            default_flags: Vec::new(),
            space_guid: None,
            cf_home: None,
            max_pages: default_max_pages(),
        }
    }
}

impl CfConfig {
    fn merge(&mut self, patch: CfPatch) {
        if let Some(value) = patch.cf_path {
            self.cf_path = value;
        }
        if let Some(value) = patch.default_flags {
            self.default_flags = value;
        }
        if let Some(value) = patch.space_guid {
            self.space_guid = Some(value);
        }
        if let Some(value) = patch.cf_home {
            self.cf_home = Some(value);
        }
        if let Some(value) = patch.max_pages {
            self.max_pages = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// human, plain, json or jsonl
    #[serde(default = "default_format")]
    pub format: String,
    /// Print an "Ignoring <name>" line for each excluded app
    #[serde(default)]
    pub show_ignored: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_ignored: false,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.show_ignored {
            self.show_ignored = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub cf: Option<CfPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CfPatch {
    pub cf_path: Option<String>,
    pub default_flags: Option<Vec<String>>,
    pub space_guid: Option<String>,
    pub cf_home: Option<PathBuf>,
    pub max_pages: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
    pub show_ignored: Option<bool>,
}

fn default_cf_path() -> String {
    "cf".to_string()
}

const fn default_max_pages() -> usize {
    1000
}

fn default_format() -> String {
    "human".to_string()
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
