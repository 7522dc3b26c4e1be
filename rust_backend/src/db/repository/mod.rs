//! Repository trait definitions for catalog storage.
//!
//! - [`error`]: Error types for repository operations
//! - [`catalog`]: The `CatalogRepository` trait and snapshot types

pub mod catalog;
pub mod error;

pub use catalog::{
    records_checksum, CatalogRepository, CatalogSnapshot, SnapshotInfo, DEFAULT_SNAPSHOT_NAME,
};
pub use error::{RepositoryError, RepositoryResult};
