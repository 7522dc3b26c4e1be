//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositorySettings;
use super::repositories::LocalRepository;
use super::repository::{CatalogRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository
    Local,
    /// PostgreSQL via Diesel (feature `postgres-repo`)
    Postgres,
}

impl FromStr for RepositoryType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(RepositoryError::ConfigurationError(format!(
                "Unknown repository type: {}. Use 'local' or 'postgres'",
                other
            ))),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use netflix_insights::db::repository::CatalogRepository;
/// use netflix_insights::db::{RepositoryFactory, RepositoryType};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = RepositoryFactory::create(RepositoryType::Local, None).await.unwrap();
///     assert!(repo.health_check().await.unwrap());
/// });
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `database_url` is required for Postgres.
    pub async fn create(
        repo_type: RepositoryType,
        database_url: Option<&str>,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        Self::create_with_pool_size(repo_type, database_url, 10).await
    }

    /// Create a repository from `[repository]` settings.
    pub async fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo_type = settings.repository_type()?;
        Self::create_with_pool_size(
            repo_type,
            settings.database_url.as_deref(),
            settings.max_connections,
        )
        .await
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn CatalogRepository> {
        Arc::new(LocalRepository::new())
    }

    async fn create_with_pool_size(
        repo_type: RepositoryType,
        database_url: Option<&str>,
        max_pool_size: u32,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::Postgres => {
                let database_url = database_url.ok_or_else(|| {
                    RepositoryError::ConfigurationError(
                        "Postgres repository requires a database URL".to_string(),
                    )
                })?;
                Self::create_postgres(database_url, max_pool_size).await
            }
        }
    }

    #[cfg(feature = "postgres-repo")]
    async fn create_postgres(
        database_url: &str,
        max_pool_size: u32,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        use super::repositories::{PostgresConfig, PostgresRepository};

        let config = PostgresConfig {
            database_url: database_url.to_string(),
            max_pool_size,
        };
        // Pool creation and migrations block
        let repo = tokio::task::spawn_blocking(move || PostgresRepository::new(config))
            .await
            .map_err(|e| RepositoryError::InternalError(e.to_string()))??;
        Ok(Arc::new(repo))
    }

    #[cfg(not(feature = "postgres-repo"))]
    async fn create_postgres(
        _database_url: &str,
        _max_pool_size: u32,
    ) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        Err(RepositoryError::ConfigurationError(
            "Postgres support requires the 'postgres-repo' feature".to_string(),
        ))
    }
}
