use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::{AnnotatedRecord, ContentRecord, CountryCoordinate};
use crate::parsing::coordinates_parser;
use crate::parsing::csv_parser;

/// Result of loading a raw catalog file
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub dataframe: DataFrame,
    pub num_rows: usize,
}

impl CatalogLoadResult {
    pub fn new(dataframe: DataFrame) -> Self {
        let num_rows = dataframe.height();
        Self {
            dataframe,
            num_rows,
        }
    }

    /// Convert to raw records after checking the required columns.
    pub fn into_records(self) -> Result<Vec<ContentRecord>> {
        csv_parser::dataframe_to_records(&self.dataframe)
    }
}

fn ensure_csv(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .context("File has no extension")?;

    match extension.to_lowercase().as_str() {
        "csv" => Ok(()),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

/// Loads the raw catalog (`netflix_titles.csv` layout).
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load_from_file(path: &Path) -> Result<CatalogLoadResult> {
        ensure_csv(path)?;
        let df = csv_parser::parse_catalog_csv(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
        Ok(CatalogLoadResult::new(df))
    }

    pub fn load_from_str(content: &str) -> Result<CatalogLoadResult> {
        let df = csv_parser::parse_catalog_csv_str(content).context("Failed to parse catalog CSV")?;
        Ok(CatalogLoadResult::new(df))
    }
}

/// Loads a previously written annotated catalog.
pub struct AnnotatedCatalogLoader;

impl AnnotatedCatalogLoader {
    pub fn load_from_file(path: &Path) -> Result<Vec<AnnotatedRecord>> {
        ensure_csv(path)?;
        let df = csv_parser::parse_catalog_csv(path)
            .with_context(|| format!("Failed to load annotated catalog from {}", path.display()))?;
        csv_parser::dataframe_to_annotated_records(&df)
    }
}

/// Loads the `country,lat,lon` lookup table.
pub struct CoordinatesLoader;

impl CoordinatesLoader {
    pub fn load_from_file(path: &Path) -> Result<Vec<CountryCoordinate>> {
        ensure_csv(path)?;
        coordinates_parser::parse_coordinates_csv(path)
            .with_context(|| format!("Failed to load coordinates from {}", path.display()))
    }
}
