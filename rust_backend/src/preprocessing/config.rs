//! Pipeline configuration.
//!
//! Loaded from a TOML file (conventionally `catalog.toml`). Every section and
//! every key is optional; a missing file section falls back to its default.
//!
//! ```toml
//! [paths]
//! input = "input/netflix_titles.csv"
//! coordinates = "input/country_coordinates.csv"
//! output = "output/cleaned_netflix.csv"
//!
//! [cleaner]
//! strict_date_format = true
//!
//! [sentiment]
//! parallel = true
//!
//! [repository]
//! type = "local"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::repo_config::RepositorySettings;
use crate::sentiment::{LexiconError, PolarityLexicon};
use crate::transformations::CleanerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Country coordinate table; the map step is skipped when the file is absent.
    #[serde(default = "default_coordinates")]
    pub coordinates: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("input/netflix_titles.csv")
}

fn default_coordinates() -> PathBuf {
    PathBuf::from("input/country_coordinates.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("output/cleaned_netflix.csv")
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            coordinates: default_coordinates(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSettings {
    /// Custom TOML lexicon replacing the embedded one.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    #[serde(default)]
    pub parallel: bool,
}

impl SentimentSettings {
    /// Load the configured lexicon, or `None` for the embedded default.
    pub fn load_lexicon(&self) -> Result<Option<PolarityLexicon>, ConfigError> {
        match &self.lexicon_path {
            Some(path) => Ok(Some(PolarityLexicon::from_file(path)?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub cleaner: CleanerConfig,
    #[serde(default)]
    pub sentiment: SentimentSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
}

impl PipelineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply repository environment overrides (`CATALOG_REPOSITORY`, `DATABASE_URL`).
    pub fn apply_env_overrides(&mut self) {
        self.repository.apply_env_overrides();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert!(config.cleaner.strict_date_format);
        assert_eq!(config.paths.output, PathBuf::from("output/cleaned_netflix.csv"));
        assert_eq!(config.repository.snapshot_name, "CleanedNetflixData");
    }

    #[test]
    fn test_partial_sections() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [paths]
            input = "data/titles.csv"

            [cleaner]
            strict_date_format = false

            [sentiment]
            parallel = true

            [repository]
            type = "postgres"
            database_url = "postgres://localhost/catalog"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.input, PathBuf::from("data/titles.csv"));
        assert_eq!(config.paths.coordinates, default_coordinates());
        assert!(!config.cleaner.strict_date_format);
        assert!(config.sentiment.parallel);
        assert_eq!(config.repository.repo_type, "postgres");
        assert_eq!(config.repository.max_connections, 10);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = PipelineConfig::from_toml_str("[paths\ninput = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PipelineConfig::from_file(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }

    #[test]
    fn test_custom_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "version = \"test\"\nnegations = [\"not\"]\n[words]\nsplendid = 0.8\n"
        )
        .unwrap();

        let settings = SentimentSettings {
            lexicon_path: Some(file.path().to_path_buf()),
            parallel: false,
        };
        let lexicon = settings.load_lexicon().unwrap().unwrap();
        assert_eq!(lexicon.version(), "test");
        assert_eq!(lexicon.polarity("splendid"), Some(0.8));

        assert!(SentimentSettings::default().load_lexicon().unwrap().is_none());
    }
}
