//! High-level database service layer.
//!
//! Repository-agnostic operations holding the logic that must behave the
//! same on every backend, such as checksum deduplication.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  Pipeline / CLI / Python bindings             │
//! └───────────────────┬───────────────────────────┘
//!                     │
//! ┌───────────────────▼───────────────────────────┐
//! │  Service Layer (services.rs)                  │
//! └───────────────────┬───────────────────────────┘
//!                     │
//! ┌───────────────────▼───────────────────────────┐
//! │  CatalogRepository (repository/)              │
//! └───────────────────┬───────────────────────────┘
//!         ┌───────────┴────────────┐
//! ┌───────▼──────────┐   ┌─────────▼──────────┐
//! │ Local (memory)   │   │ Postgres (diesel)  │
//! └──────────────────┘   └────────────────────┘
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::repository::{CatalogRepository, CatalogSnapshot, RepositoryResult, SnapshotInfo};
use crate::core::domain::{AnnotatedRecord, CountryCoordinate};

/// Result of a deduplicated store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOutcome {
    pub info: SnapshotInfo,
    /// `true` when an identical snapshot was already stored.
    pub unchanged: bool,
}

pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: CatalogRepository + ?Sized,
{
    repo.health_check().await
}

/// Store the annotated catalog under `name`, skipping the write when the
/// stored snapshot already has the same checksum.
pub async fn store_catalog<R>(
    repo: &R,
    name: &str,
    records: Vec<AnnotatedRecord>,
) -> RepositoryResult<StoreOutcome>
where
    R: CatalogRepository + ?Sized,
{
    let snapshot = CatalogSnapshot::new(name, records)?;

    if let Some(existing) = repo.get_snapshot_info(name).await? {
        if existing.checksum == snapshot.checksum {
            info!(
                "Snapshot '{}' unchanged (checksum {}), skipping write",
                name,
                snapshot.checksum.get(..12).unwrap_or(&snapshot.checksum)
            );
            return Ok(StoreOutcome {
                info: existing,
                unchanged: true,
            });
        }
    }

    let info = repo.store_snapshot(&snapshot).await?;
    info!(
        "Stored snapshot '{}' with {} rows",
        info.name, info.row_count
    );
    Ok(StoreOutcome {
        info,
        unchanged: false,
    })
}

/// Replace the coordinate table.
pub async fn store_coordinates<R>(
    repo: &R,
    coordinates: &[CountryCoordinate],
) -> RepositoryResult<usize>
where
    R: CatalogRepository + ?Sized,
{
    if coordinates.is_empty() {
        warn!("Storing an empty country coordinate table");
    }
    let stored = repo.store_coordinates(coordinates).await?;
    info!("Country coordinates saved ({} rows)", stored);
    Ok(stored)
}

/// Load the annotated catalog stored under `name`.
pub async fn load_catalog<R>(repo: &R, name: &str) -> RepositoryResult<Vec<AnnotatedRecord>>
where
    R: CatalogRepository + ?Sized,
{
    Ok(repo.get_snapshot(name).await?.records)
}

pub async fn list_snapshots<R>(repo: &R) -> RepositoryResult<Vec<SnapshotInfo>>
where
    R: CatalogRepository + ?Sized,
{
    repo.list_snapshots().await
}
