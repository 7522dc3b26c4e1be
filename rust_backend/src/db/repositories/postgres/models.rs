use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::{catalog_records, catalog_snapshots, country_coordinates};
use crate::core::domain::{AnnotatedRecord, CleanedRecord, ContentType, CountryCoordinate};
use crate::db::repository::{RepositoryError, RepositoryResult, SnapshotInfo};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = catalog_snapshots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SnapshotRow {
    pub snapshot_name: String,
    pub checksum: String,
    pub row_count: i32,
    pub stored_at: DateTime<Utc>,
}

impl SnapshotRow {
    pub fn into_info(self) -> SnapshotInfo {
        SnapshotInfo {
            name: self.snapshot_name,
            checksum: self.checksum,
            row_count: usize::try_from(self.row_count).unwrap_or(0),
            stored_at: self.stored_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = catalog_snapshots)]
pub struct NewSnapshotRow {
    pub snapshot_name: String,
    pub checksum: String,
    pub row_count: i32,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = catalog_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // snapshot_name and row_index are only used for ordering
pub struct CatalogRecordRow {
    pub snapshot_name: String,
    pub row_index: i32,
    pub show_id: Option<String>,
    pub content_type: String,
    pub title: Option<String>,
    pub director: String,
    pub cast_members: String,
    pub country: String,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: String,
    pub listed_in: Option<String>,
    pub description: String,
    pub date_added_parsed: Option<NaiveDate>,
    pub year_added: Option<i32>,
    pub month_added: Option<i32>,
    pub primary_genre: String,
    pub description_tone: f64,
    pub sentiment_label: String,
}

impl CatalogRecordRow {
    /// The label column is informational; it is re-derived from the tone.
    pub fn into_record(self) -> AnnotatedRecord {
        let record = CleanedRecord {
            show_id: self.show_id,
            content_type: ContentType::parse(Some(&self.content_type)),
            title: self.title,
            director: self.director,
            cast: self.cast_members,
            country: self.country,
            date_added: self.date_added,
            release_year: self.release_year,
            rating: self.rating,
            duration: self.duration,
            listed_in: self.listed_in,
            description: self.description,
            date_added_parsed: self.date_added_parsed,
            year_added: self.year_added,
            month_added: self.month_added.and_then(|m| u32::try_from(m).ok()),
            primary_genre: self.primary_genre,
        };
        AnnotatedRecord::new(record, self.description_tone)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = catalog_records)]
pub struct NewCatalogRecordRow {
    pub snapshot_name: String,
    pub row_index: i32,
    pub show_id: Option<String>,
    pub content_type: String,
    pub title: Option<String>,
    pub director: String,
    pub cast_members: String,
    pub country: String,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: String,
    pub listed_in: Option<String>,
    pub description: String,
    pub date_added_parsed: Option<NaiveDate>,
    pub year_added: Option<i32>,
    pub month_added: Option<i32>,
    pub primary_genre: String,
    pub description_tone: f64,
    pub sentiment_label: String,
}

impl NewCatalogRecordRow {
    pub fn from_record(
        snapshot_name: &str,
        row_index: usize,
        annotated: &AnnotatedRecord,
    ) -> RepositoryResult<Self> {
        let row_index = i32::try_from(row_index).map_err(|_| {
            RepositoryError::ValidationError(format!("Row index {} out of range", row_index))
        })?;
        let r = &annotated.record;

        Ok(Self {
            snapshot_name: snapshot_name.to_string(),
            row_index,
            show_id: r.show_id.clone(),
            content_type: r.content_type.as_str().to_string(),
            title: r.title.clone(),
            director: r.director.clone(),
            cast_members: r.cast.clone(),
            country: r.country.clone(),
            date_added: r.date_added.clone(),
            release_year: r.release_year,
            rating: r.rating.clone(),
            duration: r.duration.clone(),
            listed_in: r.listed_in.clone(),
            description: r.description.clone(),
            date_added_parsed: r.date_added_parsed,
            year_added: r.year_added,
            month_added: r.month_added.and_then(|m| i32::try_from(m).ok()),
            primary_genre: r.primary_genre.clone(),
            description_tone: annotated.description_tone,
            sentiment_label: annotated.sentiment_label.as_str().to_string(),
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = country_coordinates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CoordinateRow {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&CountryCoordinate> for CoordinateRow {
    fn from(c: &CountryCoordinate) -> Self {
        Self {
            country: c.country.clone(),
            lat: c.lat,
            lon: c.lon,
        }
    }
}

impl From<CoordinateRow> for CountryCoordinate {
    fn from(row: CoordinateRow) -> Self {
        Self {
            country: row.country,
            lat: row.lat,
            lon: row.lon,
        }
    }
}
