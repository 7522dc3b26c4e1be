use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::core::domain::CountryCoordinate;
use crate::core::error::SchemaError;

const COORDINATE_COLUMNS: [&str; 3] = ["country", "lat", "lon"];

/// Parse a `country,lat,lon` CSV file into coordinate rows.
pub fn parse_coordinates_csv(csv_path: &Path) -> Result<Vec<CountryCoordinate>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .with_context(|| format!("Failed to open coordinates file {}", csv_path.display()))?
        .finish()
        .context("Failed to parse coordinates CSV into DataFrame")?;

    dataframe_to_coordinates(&df)
}

/// Convert a coordinates DataFrame into rows.
///
/// Rows without a country name are skipped; non-numeric latitude or
/// longitude values are an error.
pub fn dataframe_to_coordinates(df: &DataFrame) -> Result<Vec<CountryCoordinate>> {
    let missing: Vec<String> = COORDINATE_COLUMNS
        .iter()
        .filter(|c| !df.get_column_names().iter().any(|s| s.as_str() == **c))
        .map(|s| s.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::new(missing).into());
    }

    let countries = df.column("country")?.cast(&DataType::String)?;
    let lats = df.column("lat")?.cast(&DataType::Float64)?;
    let lons = df.column("lon")?.cast(&DataType::Float64)?;
    let countries = countries.str()?;
    let lats = lats.f64()?;
    let lons = lons.f64()?;

    let mut coordinates = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let Some(country) = countries.get(i).map(str::trim).filter(|s| !s.is_empty()) else {
            continue;
        };
        let lat = lats
            .get(i)
            .with_context(|| format!("Missing or invalid lat for '{}' at row {}", country, i))?;
        let lon = lons
            .get(i)
            .with_context(|| format!("Missing or invalid lon for '{}' at row {}", country, i))?;

        coordinates.push(CountryCoordinate {
            country: country.to_string(),
            lat,
            lon,
        });
    }

    Ok(coordinates)
}

/// Index coordinates by country name. Later duplicates win.
pub fn coordinates_by_country(coordinates: &[CountryCoordinate]) -> HashMap<&str, (f64, f64)> {
    coordinates
        .iter()
        .map(|c| (c.country.as_str(), (c.lat, c.lon)))
        .collect()
}
