use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use crate::core::domain::{
    AnnotatedRecord, CleanedRecord, ContentRecord, ContentType, REQUIRED_COLUMNS,
};
use crate::core::error::SchemaError;

/// Column order of the annotated output table.
pub const OUTPUT_COLUMNS: [&str; 18] = [
    "show_id",
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
    "date_added_parsed",
    "year_added",
    "month_added",
    "primary_genre",
    "description_tone",
    "sentiment_label",
];

/// Parse a catalog CSV file into a Polars DataFrame.
///
/// Every column is read as a string so that free-form values (years with
/// stray characters, ratings that look numeric) never fail type inference.
/// Empty fields become nulls.
pub fn parse_catalog_csv(csv_path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")
}

/// Parse in-memory CSV content into a Polars DataFrame.
pub fn parse_catalog_csv_str(content: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()
        .context("Failed to parse CSV content into DataFrame")
}

/// Check that every required catalog column is present.
///
/// Reports all missing columns at once rather than the first one found.
pub fn validate_catalog_schema(df: &DataFrame) -> Result<(), SchemaError> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !column_names.iter().any(|name| name == *required))
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::new(missing))
    }
}

/// Convert a raw catalog DataFrame into `ContentRecord` rows.
///
/// Fails with a [`SchemaError`] (inside the `anyhow::Error`) when required
/// columns are absent.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<ContentRecord>> {
    validate_catalog_schema(df)?;

    let height = df.height();
    let show_ids = optional_string_values(df, "show_id", height)?;
    let types = string_values(df, "type")?;
    let titles = string_values(df, "title")?;
    let directors = string_values(df, "director")?;
    let casts = string_values(df, "cast")?;
    let countries = string_values(df, "country")?;
    let dates = string_values(df, "date_added")?;
    let release_years = string_values(df, "release_year")?;
    let ratings = string_values(df, "rating")?;
    let durations = string_values(df, "duration")?;
    let genres = string_values(df, "listed_in")?;
    let descriptions = string_values(df, "description")?;

    let mut records = Vec::with_capacity(height);
    for i in 0..height {
        records.push(ContentRecord {
            show_id: show_ids[i].clone(),
            content_type: types[i].clone(),
            title: titles[i].clone(),
            director: directors[i].clone(),
            cast: casts[i].clone(),
            country: countries[i].clone(),
            date_added: dates[i].clone(),
            release_year: release_years[i].as_deref().and_then(parse_year),
            rating: ratings[i].clone(),
            duration: durations[i].clone(),
            listed_in: genres[i].clone(),
            description: descriptions[i].clone(),
        });
    }

    Ok(records)
}

/// Convert annotated records into a DataFrame in [`OUTPUT_COLUMNS`] order.
pub fn records_to_dataframe(records: &[AnnotatedRecord]) -> Result<DataFrame> {
    let n = records.len();

    let mut show_ids = Vec::with_capacity(n);
    let mut types = Vec::with_capacity(n);
    let mut titles = Vec::with_capacity(n);
    let mut directors = Vec::with_capacity(n);
    let mut casts = Vec::with_capacity(n);
    let mut countries = Vec::with_capacity(n);
    let mut dates = Vec::with_capacity(n);
    let mut release_years = Vec::with_capacity(n);
    let mut ratings = Vec::with_capacity(n);
    let mut durations = Vec::with_capacity(n);
    let mut genres = Vec::with_capacity(n);
    let mut descriptions = Vec::with_capacity(n);
    let mut parsed_dates = Vec::with_capacity(n);
    let mut years_added = Vec::with_capacity(n);
    let mut months_added = Vec::with_capacity(n);
    let mut primary_genres = Vec::with_capacity(n);
    let mut tones = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);

    for annotated in records {
        let r = &annotated.record;
        show_ids.push(r.show_id.clone());
        types.push(r.content_type.as_str().to_string());
        titles.push(r.title.clone());
        directors.push(r.director.clone());
        casts.push(r.cast.clone());
        countries.push(r.country.clone());
        dates.push(r.date_added.clone());
        release_years.push(r.release_year);
        ratings.push(r.rating.clone());
        durations.push(r.duration.clone());
        genres.push(r.listed_in.clone());
        descriptions.push(r.description.clone());
        parsed_dates.push(r.date_added_parsed.map(|d| d.format("%Y-%m-%d").to_string()));
        years_added.push(r.year_added);
        months_added.push(r.month_added);
        primary_genres.push(r.primary_genre.clone());
        tones.push(annotated.description_tone);
        labels.push(annotated.sentiment_label.as_str().to_string());
    }

    let df = df!(
        "show_id" => show_ids,
        "type" => types,
        "title" => titles,
        "director" => directors,
        "cast" => casts,
        "country" => countries,
        "date_added" => dates,
        "release_year" => release_years,
        "rating" => ratings,
        "duration" => durations,
        "listed_in" => genres,
        "description" => descriptions,
        "date_added_parsed" => parsed_dates,
        "year_added" => years_added,
        "month_added" => months_added,
        "primary_genre" => primary_genres,
        "description_tone" => tones,
        "sentiment_label" => labels,
    )?;

    Ok(df)
}

/// Read back an annotated table previously produced by [`records_to_dataframe`].
///
/// Used by consumers (dashboard bridge, summary reports) that start from the
/// persisted CSV rather than from the raw catalog.
pub fn dataframe_to_annotated_records(df: &DataFrame) -> Result<Vec<AnnotatedRecord>> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let missing: Vec<String> = OUTPUT_COLUMNS
        .iter()
        .filter(|c| **c != "show_id" && !column_names.iter().any(|name| name == *c))
        .map(|s| s.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::new(missing).into());
    }

    let height = df.height();
    let show_ids = optional_string_values(df, "show_id", height)?;
    let types = string_values(df, "type")?;
    let titles = string_values(df, "title")?;
    let directors = string_values(df, "director")?;
    let casts = string_values(df, "cast")?;
    let countries = string_values(df, "country")?;
    let dates = string_values(df, "date_added")?;
    let release_years = string_values(df, "release_year")?;
    let ratings = string_values(df, "rating")?;
    let durations = string_values(df, "duration")?;
    let genres = string_values(df, "listed_in")?;
    let descriptions = string_values(df, "description")?;
    let parsed_dates = string_values(df, "date_added_parsed")?;
    let years_added = string_values(df, "year_added")?;
    let months_added = string_values(df, "month_added")?;
    let primary_genres = string_values(df, "primary_genre")?;
    let tones = string_values(df, "description_tone")?;

    let mut records = Vec::with_capacity(height);
    for i in 0..height {
        let date_added_parsed = match parsed_dates[i].as_deref() {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("Invalid date_added_parsed at row {}: {}", i, raw))?,
            ),
            None => None,
        };
        let description_tone = match tones[i].as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid description_tone at row {}: {}", i, raw))?,
            None => 0.0,
        };

        let record = CleanedRecord {
            show_id: show_ids[i].clone(),
            content_type: ContentType::parse(types[i].as_deref()),
            title: titles[i].clone(),
            director: directors[i].clone().unwrap_or_default(),
            cast: casts[i].clone().unwrap_or_default(),
            country: countries[i].clone().unwrap_or_default(),
            date_added: dates[i].clone(),
            release_year: release_years[i].as_deref().and_then(parse_year),
            rating: ratings[i].clone().unwrap_or_default(),
            duration: durations[i].clone().unwrap_or_default(),
            listed_in: genres[i].clone(),
            description: descriptions[i].clone().unwrap_or_default(),
            date_added_parsed,
            year_added: years_added[i].as_deref().and_then(parse_year),
            month_added: months_added[i]
                .as_deref()
                .and_then(|s| parse_whole_number(s).and_then(|m| u32::try_from(m).ok())),
            primary_genre: primary_genres[i].clone().unwrap_or_default(),
        };

        // sentiment_label is re-derived from the tone
        records.push(AnnotatedRecord::new(record, description_tone));
    }

    Ok(records)
}

fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)?
        .cast(&DataType::String)
        .with_context(|| format!("Failed to read column '{}' as text", name))?;
    let values = column.str()?;
    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn optional_string_values(
    df: &DataFrame,
    name: &str,
    height: usize,
) -> Result<Vec<Option<String>>> {
    if df.get_column_names().iter().any(|s| s.as_str() == name) {
        string_values(df, name)
    } else {
        Ok(vec![None; height])
    }
}

/// Accept `"2019"` as well as the `"2019.0"` a float-typed column renders to.
fn parse_whole_number(raw: &str) -> Option<i64> {
    let value = raw.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

fn parse_year(raw: &str) -> Option<i32> {
    parse_whole_number(raw).and_then(|n| i32::try_from(n).ok())
}
