//! Record sources.
//!
//! `CfCurlSource` wraps `cf curl` so janitor rides on the user's existing
//! `cf login` session. `FileSource` replays a saved payload.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::config::CfConfig;
use crate::error::{JanitorError, Result};

/// Raw bytes of one page of the apps listing.
pub type RawPayload = Vec<u8>;

/// API path of the first apps page of a space.
#[must_use]
pub fn apps_path(space_guid: &str) -> String {
    format!("/v2/spaces/{space_guid}/apps")
}

/// Supplies raw application listings for a space.
pub trait RecordSource {
    /// Fetch the first page of apps for `space_guid`.
    fn fetch_raw(&self, space_guid: &str) -> Result<RawPayload>;

    /// Fetch a follow-up page named by a previous page's `next_url`.
    fn fetch_next(&self, next_url: &str) -> Result<RawPayload>;

    /// Whether `next_url` links should be followed.
    fn follows_pages(&self) -> bool {
        true
    }
}

/// Fetches pages with `cf curl`.
pub struct CfCurlSource {
    /// Path to cf binary (default: "cf")
    cf_bin: PathBuf,

    /// Flags placed before the `curl` subcommand
    default_flags: Vec<String>,

    /// CF_HOME handed to the child process, if overridden
    cf_home: Option<PathBuf>,
}

impl CfCurlSource {
    pub fn from_config(config: &CfConfig) -> Self {
        Self {
            cf_bin: PathBuf::from(&config.cf_path),
            default_flags: config.default_flags.clone(),
            cf_home: config.cf_home.clone(),
        }
    }

    /// Fail early when the cf binary cannot be found on `PATH` or at its path.
    pub fn ensure_available(&self) -> Result<()> {
        which::which(&self.cf_bin).map(|_| ()).map_err(|_| {
            JanitorError::Fetch(format!("cf CLI not found: {}", self.cf_bin.display()))
        })
    }

    fn curl(&self, path: &str) -> Result<RawPayload> {
        let mut cmd = Command::new(&self.cf_bin);
        cmd.args(&self.default_flags).arg("curl").arg(path);
        if let Some(home) = self.cf_home.as_ref() {
            cmd.env("CF_HOME", home);
        }
        debug!(target: "janitor::cf", command = %command_string(&cmd), "running cf");

        let output = cmd.output().map_err(|e| {
            JanitorError::Fetch(format!(
                "failed to execute {}: {e}",
                self.cf_bin.display()
            ))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(JanitorError::Fetch(format!("cf curl {path} failed: {detail}")));
        }
        Ok(output.stdout)
    }
}

impl RecordSource for CfCurlSource {
    fn fetch_raw(&self, space_guid: &str) -> Result<RawPayload> {
        self.curl(&apps_path(space_guid))
    }

    fn fetch_next(&self, next_url: &str) -> Result<RawPayload> {
        self.curl(next_url)
    }
}

/// Reads a single saved page from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn fetch_raw(&self, _space_guid: &str) -> Result<RawPayload> {
        std::fs::read(&self.path).map_err(|e| {
            JanitorError::Fetch(format!("read payload {}: {e}", self.path.display()))
        })
    }

    fn fetch_next(&self, next_url: &str) -> Result<RawPayload> {
        Err(JanitorError::Fetch(format!(
            "saved payload {} cannot serve {next_url}",
            self.path.display()
        )))
    }

    fn follows_pages(&self) -> bool {
        false
    }
}

fn command_string(cmd: &Command) -> String {
    let mut parts = Vec::new();
    parts.push(cmd.get_program().to_string_lossy().to_string());
    for arg in cmd.get_args() {
        parts.push(arg.to_string_lossy().to_string());
    }
    parts.join(" ")
}
