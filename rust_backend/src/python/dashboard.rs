use pyo3::prelude::*;
use std::path::PathBuf;

use super::{runtime_error, value_error};
use crate::core::domain::{AnnotatedRecord, CountryCoordinate};
use crate::io::loaders::{AnnotatedCatalogLoader, CoordinatesLoader};
use crate::services::{self, summary};
use crate::transformations::{distinct_values, CatalogFilter};

fn load_records(csv_path: &str) -> PyResult<Vec<AnnotatedRecord>> {
    AnnotatedCatalogLoader::load_from_file(&PathBuf::from(csv_path))
        .map_err(|e| runtime_error("Failed to load annotated catalog", format!("{:#}", e)))
}

fn load_coordinates(path: Option<&str>) -> PyResult<Vec<CountryCoordinate>> {
    match path {
        Some(path) => CoordinatesLoader::load_from_file(&PathBuf::from(path))
            .map_err(|e| runtime_error("Failed to load coordinates", format!("{:#}", e))),
        None => Ok(Vec::new()),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| runtime_error("Failed to serialize result", e))
}

/// Compute every dashboard panel for one filter selection
///
/// Args:
///     csv_path: Path to the annotated catalog (cleaned_netflix.csv)
///     filter_json: JSON object with optional "content_types", "genres",
///         "countries" lists and a "tone_range" pair. "{}" selects everything.
///     coordinates_path: Optional country_coordinates.csv for the map panel
///
/// Returns:
///     str: JSON-encoded dashboard view
#[pyfunction]
#[pyo3(signature = (csv_path, filter_json="{}", coordinates_path=None))]
pub fn dashboard_view(
    csv_path: &str,
    filter_json: &str,
    coordinates_path: Option<&str>,
) -> PyResult<String> {
    let filter: CatalogFilter =
        serde_json::from_str(filter_json).map_err(|e| value_error("Invalid filter", e))?;
    let records = load_records(csv_path)?;
    let coordinates = load_coordinates(coordinates_path)?;

    to_json(&services::dashboard_view(&records, &coordinates, &filter))
}

/// Distinct values offered by the dashboard multiselects
///
/// Returns:
///     str: JSON object with "genres", "countries" and "content_types" lists
#[pyfunction]
pub fn filter_options(csv_path: &str) -> PyResult<String> {
    let records = load_records(csv_path)?;
    let options = serde_json::json!({
        "genres": distinct_values(&records, |r| r.record.primary_genre.as_str()),
        "countries": distinct_values(&records, |r| r.record.country.as_str()),
        "content_types": distinct_values(&records, |r| r.record.content_type.as_str()),
    });
    Ok(options.to_string())
}

/// Top `k` primary genres as a JSON list of {value, count}
#[pyfunction]
#[pyo3(signature = (csv_path, k=summary::DEFAULT_TOP_K))]
pub fn top_genres(csv_path: &str, k: usize) -> PyResult<String> {
    to_json(&summary::top_genres(&load_records(csv_path)?, k))
}

/// Top `k` ratings as a JSON list of {value, count}
#[pyfunction]
#[pyo3(signature = (csv_path, k=summary::DEFAULT_TOP_K))]
pub fn top_ratings(csv_path: &str, k: usize) -> PyResult<String> {
    to_json(&summary::top_ratings(&load_records(csv_path)?, k))
}

/// Row counts per content type as a JSON list of {value, count}
#[pyfunction]
pub fn content_type_distribution(csv_path: &str) -> PyResult<String> {
    to_json(&summary::content_type_distribution(&load_records(csv_path)?))
}

pub fn register_dashboard_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dashboard_view, m)?)?;
    m.add_function(wrap_pyfunction!(filter_options, m)?)?;
    m.add_function(wrap_pyfunction!(top_genres, m)?)?;
    m.add_function(wrap_pyfunction!(top_ratings, m)?)?;
    m.add_function(wrap_pyfunction!(content_type_distribution, m)?)?;
    Ok(())
}
