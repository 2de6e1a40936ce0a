//! Cutoff resolution for `--before`.

use chrono::{DateTime, Utc};

use crate::error::{JanitorError, Result};

/// Literal accepted in place of a timestamp.
pub const NOW: &str = "now";

/// The instant records must precede to be reported as stale.
pub type Cutoff = DateTime<Utc>;

/// Resolve the raw `--before` value against `now`.
///
/// `now` is used verbatim for the `"now"` literal so callers control the
/// clock. Timestamps may carry any UTC offset; comparison is by instant.
pub fn resolve(raw: &str, now: DateTime<Utc>) -> Result<Cutoff> {
    match raw {
        "" => Err(JanitorError::MissingArgument("--before".to_string())),
        NOW => Ok(now),
        _ => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|source| JanitorError::InvalidTimestamp {
                input: raw.to_string(),
                source,
            }),
    }
}
