use anyhow::{Context, Result};
use log::{info, warn};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::domain::AnnotatedRecord;
use crate::db::repository::CatalogRepository;
use crate::db::services::{self, StoreOutcome};
use crate::db::RepositoryFactory;
use crate::io::loaders::{CatalogLoader, CoordinatesLoader};
use crate::io::writers::write_annotated_csv;
use crate::preprocessing::config::PipelineConfig;
use crate::sentiment::{PolarityAnalyzer, SentimentAnnotator};
use crate::transformations::{Cleaner, RepairStats};

/// Result of one pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub records: Vec<AnnotatedRecord>,
    pub stats: RepairStats,
    pub output_path: PathBuf,
    pub store: StoreOutcome,
    /// `None` when no coordinate table was found.
    pub coordinates_stored: Option<usize>,
}

/// Load → clean → annotate → write CSV → store.
///
/// Every step before the sinks is pure; a failure while reading or cleaning
/// leaves both sinks untouched. The CSV sink is replaced atomically and the
/// repository store runs in a single transaction.
pub struct CatalogPipeline {
    config: PipelineConfig,
    cleaner: Cleaner,
    annotator: SentimentAnnotator,
}

impl CatalogPipeline {
    /// Build a pipeline, loading the custom lexicon when one is configured.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let analyzer = match config.sentiment.load_lexicon()? {
            Some(lexicon) => {
                info!(
                    "Using lexicon '{}' ({} words)",
                    lexicon.version(),
                    lexicon.len()
                );
                PolarityAnalyzer::new(Arc::new(lexicon))
            }
            None => PolarityAnalyzer::default(),
        };

        Ok(Self {
            cleaner: Cleaner::new(config.cleaner),
            annotator: SentimentAnnotator::new(analyzer),
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Clean and annotate an in-memory catalog frame.
    pub fn prepare_frame(&self, df: &DataFrame) -> Result<(Vec<AnnotatedRecord>, RepairStats)> {
        let outcome = self.cleaner.clean_frame(df)?;
        let records = if self.config.sentiment.parallel {
            self.annotator.annotate_parallel(outcome.records)
        } else {
            self.annotator.annotate(outcome.records)
        };
        Ok((records, outcome.stats))
    }

    /// Load and prepare the configured input file without writing anything.
    pub fn prepare(&self) -> Result<(Vec<AnnotatedRecord>, RepairStats)> {
        let input = &self.config.paths.input;
        info!("Loading catalog from {}", input.display());
        let loaded = CatalogLoader::load_from_file(input)?;
        info!("Loaded {} rows", loaded.num_rows);
        self.prepare_frame(&loaded.dataframe)
            .with_context(|| format!("Failed to clean catalog {}", input.display()))
    }

    /// Run the full pipeline against `repo`.
    pub async fn run(&self, repo: &dyn CatalogRepository) -> Result<PipelineResult> {
        let (records, stats) = self.prepare()?;

        let output_path = self.config.paths.output.clone();
        write_annotated_csv(&output_path, &records)?;
        info!(
            "Wrote {} annotated rows to {}",
            records.len(),
            output_path.display()
        );

        let store = services::store_catalog(
            repo,
            &self.config.repository.snapshot_name,
            records.clone(),
        )
        .await
        .context("Failed to store cleaned catalog")?;

        let coordinates_stored = self.store_coordinates(repo).await?;

        Ok(PipelineResult {
            records,
            stats,
            output_path,
            store,
            coordinates_stored,
        })
    }

    async fn store_coordinates(&self, repo: &dyn CatalogRepository) -> Result<Option<usize>> {
        let path: &Path = &self.config.paths.coordinates;
        if !path.exists() {
            warn!(
                "Coordinate table {} not found, skipping map data",
                path.display()
            );
            return Ok(None);
        }

        let coordinates = CoordinatesLoader::load_from_file(path)?;
        let stored = services::store_coordinates(repo, &coordinates)
            .await
            .context("Failed to store country coordinates")?;
        Ok(Some(stored))
    }
}

/// Run the pipeline with the repository described by `config.repository`.
pub async fn run_pipeline(config: PipelineConfig) -> Result<PipelineResult> {
    let repo = RepositoryFactory::from_settings(&config.repository)
        .await
        .context("Failed to create repository")?;
    if !services::health_check(repo.as_ref()).await? {
        anyhow::bail!("Repository health check failed");
    }

    let pipeline = CatalogPipeline::new(config)?;
    pipeline.run(repo.as_ref()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{SentimentLabel, UNKNOWN};
    use crate::core::error::SchemaError;
    use crate::db::repositories::LocalRepository;
    use crate::parsing::csv_parser::parse_catalog_csv_str;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,A,,,\"United States, India\",\"January 5, 2020\",2019,PG,90 min,\"Dramas, International Movies\",A wonderful and delightful story.
s2,TV Show,B,Dir,Cast,,not a date,2021,,1 Season,Crime TV Shows,A terrible and brutal crime.
s3,,C,,,,,,,,,
";

    fn config_in(dir: &Path) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        config.paths.input = dir.join("netflix_titles.csv");
        config.paths.coordinates = dir.join("country_coordinates.csv");
        config.paths.output = dir.join("out").join("cleaned_netflix.csv");
        config
    }

    #[test]
    fn test_prepare_frame_cleans_and_annotates() {
        let pipeline = CatalogPipeline::new(PipelineConfig::default()).unwrap();
        let df = parse_catalog_csv_str(CATALOG).unwrap();
        let (records, stats) = pipeline.prepare_frame(&df).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.invalid_dates, 2);
        assert_eq!(records[0].record.country, "United States");
        assert_eq!(records[0].sentiment_label, SentimentLabel::Positive);
        assert_eq!(records[1].sentiment_label, SentimentLabel::Negative);
        assert_eq!(records[2].sentiment_label, SentimentLabel::Neutral);
        assert_eq!(records[2].record.primary_genre, UNKNOWN);
    }

    #[test]
    fn test_prepare_frame_rejects_missing_columns() {
        let pipeline = CatalogPipeline::new(PipelineConfig::default()).unwrap();
        let df = parse_catalog_csv_str("title,description\nA,B\n").unwrap();
        let err = pipeline.prepare_frame(&df).unwrap_err();
        assert!(err.downcast_ref::<SchemaError>().is_some());
    }

    #[tokio::test]
    async fn test_run_writes_csv_and_stores_snapshot() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, CATALOG).unwrap();
        fs::write(&config.paths.coordinates, "country,lat,lon\nUnited States,37.09,-95.71\n")
            .unwrap();

        let repo = LocalRepository::new();
        let pipeline = CatalogPipeline::new(config.clone()).unwrap();
        let result = pipeline.run(&repo).await.unwrap();

        assert!(result.output_path.exists());
        assert!(!result.store.unchanged);
        assert_eq!(result.store.info.row_count, 3);
        assert_eq!(result.coordinates_stored, Some(1));

        let stored = services::load_catalog(&repo, &config.repository.snapshot_name)
            .await
            .unwrap();
        assert_eq!(stored, result.records);

        let rerun = pipeline.run(&repo).await.unwrap();
        assert!(rerun.store.unchanged);
    }

    #[tokio::test]
    async fn test_run_without_coordinates() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, CATALOG).unwrap();

        let repo = LocalRepository::new();
        let result = CatalogPipeline::new(config).unwrap().run(&repo).await.unwrap();
        assert_eq!(result.coordinates_stored, None);
    }

    #[tokio::test]
    async fn test_schema_failure_leaves_sinks_untouched() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, "title,description\nA,B\n").unwrap();

        let repo = LocalRepository::new();
        let result = CatalogPipeline::new(config.clone()).unwrap().run(&repo).await;

        assert!(result.is_err());
        assert!(!config.paths.output.exists());
        assert_eq!(repo.snapshot_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_run_pipeline_with_local_repository() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.paths.input, CATALOG).unwrap();

        let result = run_pipeline(config).await.unwrap();
        assert_eq!(result.records.len(), 3);
    }
}
