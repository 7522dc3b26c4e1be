use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::RepositoryResult;
use crate::core::domain::{AnnotatedRecord, CountryCoordinate};
use crate::db::checksum::calculate_checksum;

/// Default name of the cleaned catalog table.
pub const DEFAULT_SNAPSHOT_NAME: &str = "CleanedNetflixData";

/// A named, complete copy of the annotated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub name: String,
    /// SHA-256 (hex) of the JSON serialisation of `records`.
    pub checksum: String,
    pub records: Vec<AnnotatedRecord>,
}

impl CatalogSnapshot {
    pub fn new(name: impl Into<String>, records: Vec<AnnotatedRecord>) -> RepositoryResult<Self> {
        let checksum = records_checksum(&records)?;
        Ok(Self {
            name: name.into(),
            checksum,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Checksum of a record set, as stored alongside a snapshot.
pub fn records_checksum(records: &[AnnotatedRecord]) -> RepositoryResult<String> {
    let json = serde_json::to_string(records)?;
    Ok(calculate_checksum(&json))
}

/// Snapshot metadata without the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub name: String,
    pub checksum: String,
    pub row_count: usize,
    pub stored_at: DateTime<Utc>,
}

/// Sink for the annotated catalog and the country coordinate table.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across tasks.
///
/// # Atomicity
/// `store_snapshot` and `store_coordinates` replace the previous contents
/// as a whole: readers observe either the old or the new data, never a mix.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check if the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a snapshot, replacing any snapshot with the same name.
    async fn store_snapshot(&self, snapshot: &CatalogSnapshot) -> RepositoryResult<SnapshotInfo>;

    /// Retrieve a snapshot with all records, in stored order.
    ///
    /// Returns `RepositoryError::NotFound` if no snapshot has that name.
    async fn get_snapshot(&self, name: &str) -> RepositoryResult<CatalogSnapshot>;

    /// Metadata of a snapshot, if present.
    async fn get_snapshot_info(&self, name: &str) -> RepositoryResult<Option<SnapshotInfo>>;

    /// All snapshots, ordered by name.
    async fn list_snapshots(&self) -> RepositoryResult<Vec<SnapshotInfo>>;

    /// Replace the coordinate table. Returns the number of rows stored.
    async fn store_coordinates(&self, coordinates: &[CountryCoordinate])
        -> RepositoryResult<usize>;

    async fn get_coordinates(&self) -> RepositoryResult<Vec<CountryCoordinate>>;
}
