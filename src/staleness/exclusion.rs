//! Exclusion pattern compilation for `--ignore`.

use regex::Regex;

use crate::error::{JanitorError, Result};

/// Names matching this pattern are never reported, however old they are.
#[derive(Debug, Clone)]
pub struct ExclusionPattern {
    regex: Regex,
}

impl ExclusionPattern {
    /// True if the pattern matches anywhere in `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile the raw `--ignore` value. An empty string means no exclusion.
pub fn compile(raw: &str) -> Result<Option<ExclusionPattern>> {
    if raw.is_empty() {
        return Ok(None);
    }
    Regex::new(raw)
        .map(|regex| Some(ExclusionPattern { regex }))
        .map_err(|source| JanitorError::InvalidPattern {
            input: raw.to_string(),
            source,
        })
}
