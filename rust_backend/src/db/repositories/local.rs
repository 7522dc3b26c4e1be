//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. All data lives in
//! memory behind a single `RwLock`, so every replace is atomic with respect
//! to concurrent readers.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::domain::CountryCoordinate;
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use netflix_insights::db::repositories::LocalRepository;
/// use netflix_insights::db::repository::{CatalogRepository, CatalogSnapshot};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::new();
///     let snapshot = CatalogSnapshot::new("CleanedNetflixData", vec![]).unwrap();
///     repo.store_snapshot(&snapshot).await.unwrap();
///
///     let snapshots = repo.list_snapshots().await.unwrap();
///     assert_eq!(snapshots.len(), 1);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct StoredSnapshot {
    info: SnapshotInfo,
    snapshot: CatalogSnapshot,
}

struct LocalData {
    snapshots: BTreeMap<String, StoredSnapshot>,
    coordinates: Vec<CountryCoordinate>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            snapshots: BTreeMap::new(),
            coordinates: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) -> RepositoryResult<()> {
        self.write()?.is_healthy = healthy;
        Ok(())
    }

    /// Clear all data from the repository.
    pub fn clear(&self) -> RepositoryResult<()> {
        let mut data = self.write()?;
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
        Ok(())
    }

    /// Get the number of snapshots stored.
    pub fn snapshot_count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.snapshots.len())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        self.data
            .read()
            .map_err(|e| RepositoryError::InternalError(format!("Lock poisoned: {}", e)))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, LocalData>> {
        self.data
            .write()
            .map_err(|e| RepositoryError::InternalError(format!("Lock poisoned: {}", e)))
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(data: &LocalData) -> RepositoryResult<()> {
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.read()?.is_healthy)
    }

    async fn store_snapshot(&self, snapshot: &CatalogSnapshot) -> RepositoryResult<SnapshotInfo> {
        if snapshot.name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "Snapshot name must not be empty".to_string(),
            ));
        }

        let mut data = self.write()?;
        Self::check_health(&data)?;

        let info = SnapshotInfo {
            name: snapshot.name.clone(),
            checksum: snapshot.checksum.clone(),
            row_count: snapshot.len(),
            stored_at: Utc::now(),
        };
        data.snapshots.insert(
            snapshot.name.clone(),
            StoredSnapshot {
                info: info.clone(),
                snapshot: snapshot.clone(),
            },
        );

        Ok(info)
    }

    async fn get_snapshot(&self, name: &str) -> RepositoryResult<CatalogSnapshot> {
        let data = self.read()?;
        Self::check_health(&data)?;
        data.snapshots
            .get(name)
            .map(|stored| stored.snapshot.clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("Snapshot '{}' not found", name)))
    }

    async fn get_snapshot_info(&self, name: &str) -> RepositoryResult<Option<SnapshotInfo>> {
        let data = self.read()?;
        Self::check_health(&data)?;
        Ok(data.snapshots.get(name).map(|stored| stored.info.clone()))
    }

    async fn list_snapshots(&self) -> RepositoryResult<Vec<SnapshotInfo>> {
        let data = self.read()?;
        Self::check_health(&data)?;
        Ok(data.snapshots.values().map(|s| s.info.clone()).collect())
    }

    async fn store_coordinates(
        &self,
        coordinates: &[CountryCoordinate],
    ) -> RepositoryResult<usize> {
        let mut data = self.write()?;
        Self::check_health(&data)?;
        data.coordinates = coordinates.to_vec();
        Ok(coordinates.len())
    }

    async fn get_coordinates(&self) -> RepositoryResult<Vec<CountryCoordinate>> {
        let data = self.read()?;
        Self::check_health(&data)?;
        Ok(data.coordinates.clone())
    }
}
