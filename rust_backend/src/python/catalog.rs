use pyo3::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

use super::runtime_error;
use crate::core::domain::AnnotatedRecord;
use crate::io::loaders::{AnnotatedCatalogLoader, CatalogLoader};
use crate::io::writers::write_annotated_csv;
use crate::sentiment::SentimentAnnotator;
use crate::transformations::{Cleaner, CleanerConfig, RepairStats};

#[derive(Serialize)]
struct CleanedCatalog<'a> {
    stats: &'a RepairStats,
    records: &'a [AnnotatedRecord],
}

/// Clean and annotate a raw catalog CSV
///
/// Args:
///     csv_path: Path to netflix_titles.csv
///     output_path: Optional path for the annotated CSV
///     strict_dates: Accept only "September 24, 2021" style dates (default True)
///
/// Returns:
///     str: JSON object with "stats" and "records"
///
/// Example:
///     >>> import json, netflix_insights
///     >>> result = json.loads(netflix_insights.clean_catalog_csv("input/netflix_titles.csv"))
///     >>> result["stats"]["invalid_dates"]
#[pyfunction]
#[pyo3(signature = (csv_path, output_path=None, strict_dates=true))]
pub fn clean_catalog_csv(
    csv_path: &str,
    output_path: Option<&str>,
    strict_dates: bool,
) -> PyResult<String> {
    let loaded = CatalogLoader::load_from_file(&PathBuf::from(csv_path))
        .map_err(|e| runtime_error("Failed to load catalog", format!("{:#}", e)))?;

    let cleaner = Cleaner::new(CleanerConfig {
        strict_date_format: strict_dates,
    });
    let outcome = cleaner
        .clean_frame(&loaded.dataframe)
        .map_err(|e| runtime_error("Failed to clean catalog", e))?;
    let records = SentimentAnnotator::default().annotate_parallel(outcome.records);

    if let Some(output) = output_path {
        write_annotated_csv(&PathBuf::from(output), &records)
            .map_err(|e| runtime_error("Failed to write catalog", format!("{:#}", e)))?;
    }

    serde_json::to_string(&CleanedCatalog {
        stats: &outcome.stats,
        records: &records,
    })
    .map_err(|e| runtime_error("Failed to serialize result", e))
}

/// Load a previously annotated catalog CSV as a JSON array of records
#[pyfunction]
pub fn load_annotated_catalog(csv_path: &str) -> PyResult<String> {
    let records = AnnotatedCatalogLoader::load_from_file(&PathBuf::from(csv_path))
        .map_err(|e| runtime_error("Failed to load annotated catalog", format!("{:#}", e)))?;
    serde_json::to_string(&records).map_err(|e| runtime_error("Failed to serialize result", e))
}

/// Polarity in [-1, 1] of a single text with the embedded lexicon
#[pyfunction]
pub fn description_tone(text: &str) -> f64 {
    SentimentAnnotator::default().analyzer().polarity(text)
}

pub fn register_catalog_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clean_catalog_csv, m)?)?;
    m.add_function(wrap_pyfunction!(load_annotated_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(description_tone, m)?)?;
    Ok(())
}
