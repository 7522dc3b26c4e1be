//! Domain models for catalog titles at each pipeline stage.
//!
//! A title starts life as a [`ContentRecord`] (one raw CSV row, every field
//! optional), is repaired into a [`CleanedRecord`] (critical fields always
//! populated) and finally scored into an [`AnnotatedRecord`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel written into categorical fields whose raw value was absent.
pub const UNKNOWN: &str = "Unknown";

/// Columns that must be present in a raw catalog table.
///
/// `show_id` is carried through when present but is not required.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

/// Kind of catalog entry.
///
/// Raw values are matched case-insensitively after trimming. Anything that is
/// neither a movie nor a TV show (including an absent value) maps to
/// [`ContentType::Unknown`].
///
/// # Examples
///
/// ```
/// use netflix_insights::core::ContentType;
///
/// assert_eq!(ContentType::parse(Some("TV Show")), ContentType::TvShow);
/// assert_eq!(ContentType::parse(Some(" movie ")), ContentType::Movie);
/// assert_eq!(ContentType::parse(None), ContentType::Unknown);
/// assert_eq!(ContentType::TvShow.to_string(), "TV Show");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ContentType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("movie") => Self::Movie,
            Some("tv show") => Self::TvShow,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
            Self::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete sentiment derived from a polarity score.
///
/// The mapping is total: strictly positive polarity is `Positive`, strictly
/// negative is `Negative`, everything else (zero, NaN) is `Neutral`.
///
/// # Examples
///
/// ```
/// use netflix_insights::core::SentimentLabel;
///
/// assert_eq!(SentimentLabel::from_polarity(0.4), SentimentLabel::Positive);
/// assert_eq!(SentimentLabel::from_polarity(-0.2), SentimentLabel::Negative);
/// assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw row of the catalog, exactly as read from the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

/// A repaired row: every categorical field the dashboard relies on is
/// populated, and the date has been parsed or explicitly marked absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: Option<String>,
    pub director: String,
    pub cast: String,
    /// First listed country only; multi-country titles are collapsed on purpose.
    pub country: String,
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: String,
    pub listed_in: Option<String>,
    /// Trimmed; the empty string stands in for an absent description.
    pub description: String,
    pub date_added_parsed: Option<NaiveDate>,
    pub year_added: Option<i32>,
    pub month_added: Option<u32>,
    pub primary_genre: String,
}

impl From<&CleanedRecord> for ContentRecord {
    /// Re-expresses a cleaned row as raw input so it can be cleaned again.
    fn from(record: &CleanedRecord) -> Self {
        Self {
            show_id: record.show_id.clone(),
            content_type: Some(record.content_type.as_str().to_string()),
            title: record.title.clone(),
            director: Some(record.director.clone()),
            cast: Some(record.cast.clone()),
            country: Some(record.country.clone()),
            date_added: record.date_added.clone(),
            release_year: record.release_year,
            rating: Some(record.rating.clone()),
            duration: Some(record.duration.clone()),
            listed_in: record.listed_in.clone(),
            description: Some(record.description.clone()),
        }
    }
}

/// A cleaned row with its description sentiment attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: CleanedRecord,
    /// Polarity of `description`, in `[-1.0, 1.0]`.
    pub description_tone: f64,
    pub sentiment_label: SentimentLabel,
}

impl AnnotatedRecord {
    pub fn new(record: CleanedRecord, description_tone: f64) -> Self {
        Self {
            record,
            description_tone,
            sentiment_label: SentimentLabel::from_polarity(description_tone),
        }
    }
}

/// Map position for a normalized country name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCoordinate {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}
