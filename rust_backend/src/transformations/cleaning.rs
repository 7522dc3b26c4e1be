//! Field-level repair of raw catalog rows.
//!
//! The cleaner never drops a row and never fails on a bad value. Missing or
//! malformed fields are repaired to a sentinel (`"Unknown"`, the empty
//! description, or an absent date) and counted in [`RepairStats`].
//!
//! Multi-valued `country` and `listed_in` fields are reduced to their first
//! comma-separated token. This is a deliberate loss of information: a title
//! produced in "United States, India" is attributed to the United States only.

use anyhow::Result;
use chrono::Datelike;
use log::info;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::core::domain::{CleanedRecord, ContentRecord, ContentType, UNKNOWN};
use crate::parsing::csv_parser;
use crate::parsing::dates::{DateParser, DatePolicy};

/// Cleaner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Accept only `"<Month name> <day>, <year>"` dates when true.
    #[serde(default = "default_strict_date_format")]
    pub strict_date_format: bool,
}

fn default_strict_date_format() -> bool {
    true
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            strict_date_format: default_strict_date_format(),
        }
    }
}

/// Counts of values repaired by one cleaning pass. Observability only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairStats {
    pub total_rows: usize,
    /// Rows whose `date_added` was absent or did not parse.
    pub invalid_dates: usize,
    pub missing_countries: usize,
    pub missing_ratings: usize,
    pub missing_durations: usize,
    pub missing_directors: usize,
    pub missing_cast: usize,
    pub missing_genres: usize,
    pub empty_descriptions: usize,
    pub unknown_types: usize,
}

impl RepairStats {
    /// Fold another pass's counts into this one.
    pub fn merge(&mut self, other: &RepairStats) {
        self.total_rows += other.total_rows;
        self.invalid_dates += other.invalid_dates;
        self.missing_countries += other.missing_countries;
        self.missing_ratings += other.missing_ratings;
        self.missing_durations += other.missing_durations;
        self.missing_directors += other.missing_directors;
        self.missing_cast += other.missing_cast;
        self.missing_genres += other.missing_genres;
        self.empty_descriptions += other.empty_descriptions;
        self.unknown_types += other.unknown_types;
    }

    /// Total number of individual field repairs.
    pub fn total_repairs(&self) -> usize {
        self.invalid_dates
            + self.missing_countries
            + self.missing_ratings
            + self.missing_durations
            + self.missing_directors
            + self.missing_cast
            + self.missing_genres
            + self.empty_descriptions
            + self.unknown_types
    }
}

/// Output of a cleaning pass.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub records: Vec<CleanedRecord>,
    pub stats: RepairStats,
}

/// Repairs raw catalog rows into [`CleanedRecord`]s.
///
/// # Examples
///
/// ```
/// use netflix_insights::core::ContentRecord;
/// use netflix_insights::transformations::cleaning::Cleaner;
///
/// let raw = ContentRecord {
///     country: Some("United States, India".to_string()),
///     listed_in: Some("Dramas, International Movies".to_string()),
///     date_added: Some("January 5, 2020".to_string()),
///     ..Default::default()
/// };
///
/// let outcome = Cleaner::default().clean_records(&[raw]);
/// let row = &outcome.records[0];
/// assert_eq!(row.country, "United States");
/// assert_eq!(row.primary_genre, "Dramas");
/// assert_eq!(row.year_added, Some(2020));
/// assert_eq!(row.month_added, Some(1));
/// assert_eq!(row.rating, "Unknown");
/// assert_eq!(row.description, "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    config: CleanerConfig,
}

impl Cleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Clean a raw catalog table.
    ///
    /// Fails only when required columns are missing from the table, in which
    /// case the returned error wraps a [`SchemaError`](crate::core::SchemaError)
    /// and nothing is produced.
    pub fn clean_frame(&self, df: &DataFrame) -> Result<CleanOutcome> {
        let records = csv_parser::dataframe_to_records(df)?;
        Ok(self.clean_records(&records))
    }

    /// Clean typed rows. Infallible: every row yields exactly one cleaned row.
    pub fn clean_records(&self, records: &[ContentRecord]) -> CleanOutcome {
        let policy = DatePolicy::from_strict_flag(self.config.strict_date_format);
        let mut stats = RepairStats {
            total_rows: records.len(),
            ..Default::default()
        };

        let cleaned: Vec<CleanedRecord> = records
            .iter()
            .map(|record| self.clean_record(record, policy, &mut stats))
            .collect();

        info!("Filled {} missing countries with '{}'", stats.missing_countries, UNKNOWN);
        info!(
            "Removed {} invalid or malformed 'date_added' entries",
            stats.invalid_dates
        );
        info!(
            "Cleaned {} rows ({} field repairs, strict_date_format={})",
            stats.total_rows,
            stats.total_repairs(),
            self.config.strict_date_format
        );

        CleanOutcome {
            records: cleaned,
            stats,
        }
    }

    fn clean_record(
        &self,
        record: &ContentRecord,
        policy: DatePolicy,
        stats: &mut RepairStats,
    ) -> CleanedRecord {
        let date_added_parsed = record
            .date_added
            .as_deref()
            .and_then(|raw| DateParser::parse(raw, policy));
        if date_added_parsed.is_none() {
            stats.invalid_dates += 1;
        }

        let country = match record.country.as_deref() {
            Some(raw) => first_token(raw),
            None => {
                stats.missing_countries += 1;
                UNKNOWN.to_string()
            }
        };

        let primary_genre = match record.listed_in.as_deref() {
            Some(raw) => first_token(raw),
            None => {
                stats.missing_genres += 1;
                UNKNOWN.to_string()
            }
        };

        let content_type = ContentType::parse(record.content_type.as_deref());
        if content_type == ContentType::Unknown {
            stats.unknown_types += 1;
        }

        let description = record
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if description.is_empty() {
            stats.empty_descriptions += 1;
        }

        CleanedRecord {
            show_id: record.show_id.clone(),
            content_type,
            title: record.title.clone(),
            director: or_unknown(&record.director, &mut stats.missing_directors),
            cast: or_unknown(&record.cast, &mut stats.missing_cast),
            country,
            date_added: record.date_added.clone(),
            release_year: record.release_year,
            rating: or_unknown(&record.rating, &mut stats.missing_ratings),
            duration: or_unknown(&record.duration, &mut stats.missing_durations),
            listed_in: record.listed_in.clone(),
            description,
            year_added: date_added_parsed.map(|d| d.year()),
            month_added: date_added_parsed.map(|d| d.month()),
            date_added_parsed,
            primary_genre,
        }
    }
}

/// Text before the first comma, trimmed.
///
/// # Examples
///
/// ```
/// use netflix_insights::transformations::cleaning::first_token;
///
/// assert_eq!(first_token(" United States, India"), "United States");
/// assert_eq!(first_token("France"), "France");
/// assert_eq!(first_token(", Japan"), "");
/// ```
pub fn first_token(raw: &str) -> String {
    raw.split(',').next().unwrap_or_default().trim().to_string()
}

fn or_unknown(value: &Option<String>, counter: &mut usize) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            *counter += 1;
            UNKNOWN.to_string()
        }
    }
}
