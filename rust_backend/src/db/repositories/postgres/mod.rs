//! Postgres repository implementation using Diesel.
//!
//! Snapshots live in `catalog_snapshots` / `catalog_records`, coordinates in
//! `country_coordinates`. Every replace runs in a single transaction.

use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{FileBasedMigrations, MigrationHarness};
use std::collections::BTreeMap;
use tokio::task;

use crate::core::domain::CountryCoordinate;
use crate::db::repository::{
    CatalogRepository, CatalogSnapshot, RepositoryError, RepositoryResult, SnapshotInfo,
};

mod models;
mod schema;

use models::*;
use schema::*;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Rows per INSERT statement; keeps bind parameters under the Postgres limit.
const INSERT_CHUNK_SIZE: usize = 1000;

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_pool_size: u32,
}

impl PostgresConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            max_pool_size,
        })
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .build(manager)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        {
            let mut conn = pool.get()?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self { pool })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let migrations =
            FileBasedMigrations::from_path(format!("{}/migrations", env!("CARGO_MANIFEST_DIR")))
                .map_err(|e| {
                    RepositoryError::InternalError(format!("Migrations not found: {e}"))
                })?;

        conn.run_pending_migrations(migrations)
            .map_err(|e| RepositoryError::InternalError(format!("Migration error: {e}")))?;
        Ok(())
    }

    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::InternalError(e.to_string()))?
    }
}

#[async_trait]
impl CatalogRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1").execute(conn)?;
            Ok(true)
        })
        .await
    }

    async fn store_snapshot(&self, snapshot: &CatalogSnapshot) -> RepositoryResult<SnapshotInfo> {
        if snapshot.name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "Snapshot name must not be empty".to_string(),
            ));
        }

        let name = snapshot.name.clone();
        let rows = snapshot
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| NewCatalogRecordRow::from_record(&name, i, r))
            .collect::<RepositoryResult<Vec<_>>>()?;
        let row_count = i32::try_from(rows.len()).map_err(|_| {
            RepositoryError::ValidationError(format!("Too many rows: {}", rows.len()))
        })?;
        let new_snapshot = NewSnapshotRow {
            snapshot_name: name,
            checksum: snapshot.checksum.clone(),
            row_count,
            stored_at: Utc::now(),
        };

        self.with_conn(move |conn| {
            conn.transaction::<_, RepositoryError, _>(|tx| {
                diesel::delete(
                    catalog_records::table
                        .filter(catalog_records::snapshot_name.eq(&new_snapshot.snapshot_name)),
                )
                .execute(tx)?;
                diesel::delete(
                    catalog_snapshots::table
                        .filter(catalog_snapshots::snapshot_name.eq(&new_snapshot.snapshot_name)),
                )
                .execute(tx)?;

                let stored: SnapshotRow = diesel::insert_into(catalog_snapshots::table)
                    .values(&new_snapshot)
                    .returning(SnapshotRow::as_returning())
                    .get_result(tx)?;

                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    diesel::insert_into(catalog_records::table)
                        .values(chunk)
                        .execute(tx)?;
                }

                Ok(stored.into_info())
            })
        })
        .await
    }

    async fn get_snapshot(&self, name: &str) -> RepositoryResult<CatalogSnapshot> {
        let name = name.to_string();
        self.with_conn(move |conn| {
            let header: Option<SnapshotRow> = catalog_snapshots::table
                .filter(catalog_snapshots::snapshot_name.eq(&name))
                .select(SnapshotRow::as_select())
                .first(conn)
                .optional()?;
            let header = header
                .ok_or_else(|| RepositoryError::NotFound(format!("Snapshot '{}' not found", name)))?;

            let rows: Vec<CatalogRecordRow> = catalog_records::table
                .filter(catalog_records::snapshot_name.eq(&name))
                .order(catalog_records::row_index.asc())
                .select(CatalogRecordRow::as_select())
                .load(conn)?;

            Ok(CatalogSnapshot {
                name: header.snapshot_name,
                checksum: header.checksum,
                records: rows.into_iter().map(CatalogRecordRow::into_record).collect(),
            })
        })
        .await
    }

    async fn get_snapshot_info(&self, name: &str) -> RepositoryResult<Option<SnapshotInfo>> {
        let name = name.to_string();
        self.with_conn(move |conn| {
            let row: Option<SnapshotRow> = catalog_snapshots::table
                .filter(catalog_snapshots::snapshot_name.eq(&name))
                .select(SnapshotRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(SnapshotRow::into_info))
        })
        .await
    }

    async fn list_snapshots(&self) -> RepositoryResult<Vec<SnapshotInfo>> {
        self.with_conn(|conn| {
            let rows: Vec<SnapshotRow> = catalog_snapshots::table
                .order(catalog_snapshots::snapshot_name.asc())
                .select(SnapshotRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(SnapshotRow::into_info).collect())
        })
        .await
    }

    async fn store_coordinates(
        &self,
        coordinates: &[CountryCoordinate],
    ) -> RepositoryResult<usize> {
        // Country is the primary key; later duplicates win
        let deduped: BTreeMap<&str, &CountryCoordinate> = coordinates
            .iter()
            .map(|c| (c.country.as_str(), c))
            .collect();
        let rows: Vec<CoordinateRow> = deduped.into_values().map(CoordinateRow::from).collect();

        self.with_conn(move |conn| {
            conn.transaction::<_, RepositoryError, _>(|tx| {
                diesel::delete(country_coordinates::table).execute(tx)?;
                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    inserted += diesel::insert_into(country_coordinates::table)
                        .values(chunk)
                        .execute(tx)?;
                }
                Ok(inserted)
            })
        })
        .await
    }

    async fn get_coordinates(&self) -> RepositoryResult<Vec<CountryCoordinate>> {
        self.with_conn(|conn| {
            let rows: Vec<CoordinateRow> = country_coordinates::table
                .order(country_coordinates::country.asc())
                .select(CoordinateRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(CountryCoordinate::from).collect())
        })
        .await
    }
}
