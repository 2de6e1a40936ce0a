use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployed application as seen by one filtering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    /// When the app's package was last uploaded. `None` when the source
    /// reported no usable timestamp.
    pub last_update: Option<DateTime<Utc>>,
}

impl ApplicationRecord {
    pub fn new(name: impl Into<String>, last_update: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            guid: None,
            last_update,
        }
    }

    #[must_use]
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }
}
