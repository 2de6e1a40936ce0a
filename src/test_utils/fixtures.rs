use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

/// Build one page of a v2 apps listing.
///
/// Each app is `(name, package_updated_at)`; `None` writes a JSON null.
#[must_use]
pub fn apps_page(apps: &[(&str, Option<&str>)], next_url: Option<&str>) -> String {
    let resources: Vec<_> = apps
        .iter()
        .enumerate()
        .map(|(index, (name, updated))| {
            json!({
                "metadata": {
                    "guid": format!("guid-{index}"),
                    "url": format!("/v2/apps/guid-{index}"),
                },
                "entity": {
                    "name": name,
                    "state": "STARTED",
                    "package_updated_at": updated,
                },
            })
        })
        .collect();
    json!({
        "total_results": apps.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": next_url,
        "resources": resources,
    })
    .to_string()
}

/// Temp directory holding saved payloads and a fake CF_HOME.
pub struct PayloadFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for PayloadFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Write a file relative to the fixture root.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write an apps page built by [`apps_page`].
    #[must_use]
    pub fn write_page(
        &self,
        relative_path: &str,
        apps: &[(&str, Option<&str>)],
        next_url: Option<&str>,
    ) -> PathBuf {
        self.create_file(relative_path, &apps_page(apps, next_url))
    }

    /// Write `.cf/config.json` targeting `space_guid`; returns the CF_HOME to use.
    #[must_use]
    pub fn write_cf_target(&self, space_guid: &str, space_name: &str) -> PathBuf {
        let config = json!({
            "ConfigVersion": 3,
            "Target": "https://api.example.com",
            "SpaceFields": {"GUID": space_guid, "Name": space_name, "AllowSSH": true},
        });
        let _ = self.create_file(".cf/config.json", &config.to_string());
        self.data_path.clone()
    }
}
