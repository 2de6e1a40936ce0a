use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{JanitorError, Result};

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled output for terminals
    #[default]
    Human,
    /// One line per app, no decoration
    Plain,
    /// Single JSON document
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Machine-readable formats, which also get JSON errors and logs.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

impl FromStr for OutputFormat {
    type Err = JanitorError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "plain" => Ok(Self::Plain),
            "json" | "robot" => Ok(Self::Json),
            "jsonl" => Ok(Self::Jsonl),
            _ => Err(JanitorError::Config(format!(
                "invalid output format {value} (expected human|plain|json|jsonl)"
            ))),
        }
    }
}

/// Anything that can render itself in every output format.
pub trait Formattable {
    fn format(&self, fmt: OutputFormat) -> String;
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub struct HumanLayout {
    lines: Vec<String>,
}

impl HumanLayout {
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn dim(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).dim().to_string());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}
