//! Repository configuration settings.
//!
//! Read from the `[repository]` table of the pipeline configuration file and
//! overridable through `CATALOG_REPOSITORY` / `DATABASE_URL`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

pub const REPOSITORY_TYPE_ENV: &str = "CATALOG_REPOSITORY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Name of the cleaned catalog table.
    #[serde(default = "default_snapshot_name")]
    pub snapshot_name: String,
}

fn default_repo_type() -> String {
    "local".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_snapshot_name() -> String {
    super::repository::DEFAULT_SNAPSHOT_NAME.to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            database_url: None,
            max_connections: default_max_connections(),
            snapshot_name: default_snapshot_name(),
        }
    }
}

impl RepositorySettings {
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repo_type)
    }

    /// Apply `CATALOG_REPOSITORY` and `DATABASE_URL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(REPOSITORY_TYPE_ENV).ok(),
            std::env::var(DATABASE_URL_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, repo_type: Option<String>, database_url: Option<String>) {
        if let Some(repo_type) = repo_type.filter(|s| !s.trim().is_empty()) {
            self.repo_type = repo_type;
        }
        if let Some(url) = database_url.filter(|s| !s.trim().is_empty()) {
            self.database_url = Some(url);
        }
    }
}
