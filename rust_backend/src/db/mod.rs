//! Database module for catalog storage.
//!
//! Storage backends are hidden behind the [`CatalogRepository`] trait so the
//! pipeline can write to memory in tests and to Postgres in production.
//!
//! - `services`: High-level operations (use these in application code)
//! - `repository`: Trait definition and snapshot types
//! - `repositories::local`: In-memory implementation
//! - `repositories::postgres`: Diesel implementation (feature `postgres-repo`)
//! - `factory`: Creates repository instances from configuration
//!
//! ```no_run
//! use netflix_insights::db::{services, RepositoryFactory, RepositorySettings};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_settings(&RepositorySettings::default()).await?;
//!     let snapshots = services::list_snapshots(repo.as_ref()).await?;
//!     println!("Found {} snapshots", snapshots.len());
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositorySettings;
pub use repository::{
    CatalogRepository, CatalogSnapshot, RepositoryError, RepositoryResult, SnapshotInfo,
};
pub use services::StoreOutcome;
