//! End-to-end tests of the catalog pipeline against the in-memory repository.

mod common;

use std::fs;
use std::path::Path;

use common::{SAMPLE_CATALOG, SAMPLE_COORDINATES};
use netflix_insights::core::domain::{ContentType, UNKNOWN};
use netflix_insights::db::repositories::LocalRepository;
use netflix_insights::db::CatalogRepository;
use netflix_insights::io::loaders::AnnotatedCatalogLoader;
use netflix_insights::preprocessing::{CatalogPipeline, PipelineConfig};
use netflix_insights::services::{self, summary};
use netflix_insights::transformations::CatalogFilter;
use tempfile::tempdir;

fn config_in(dir: &Path) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.paths.input = dir.join("netflix_titles.csv");
    config.paths.coordinates = dir.join("country_coordinates.csv");
    config.paths.output = dir.join("output").join("cleaned_netflix.csv");
    fs::write(&config.paths.input, SAMPLE_CATALOG).unwrap();
    fs::write(&config.paths.coordinates, SAMPLE_COORDINATES).unwrap();
    config
}

#[tokio::test]
async fn test_prepare_writes_csv_matching_stored_table() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let repo = LocalRepository::new();

    let result = CatalogPipeline::new(config.clone())
        .unwrap()
        .run(&repo)
        .await
        .unwrap();

    assert_eq!(result.records.len(), 6);
    assert_eq!(result.stats.total_rows, 6);
    // s4 uses an ISO date, rejected by the strict policy
    assert_eq!(result.stats.invalid_dates, 1);
    assert_eq!(result.stats.missing_countries, 2);
    assert_eq!(result.stats.missing_ratings, 1);
    assert_eq!(result.stats.empty_descriptions, 1);

    let from_csv = AnnotatedCatalogLoader::load_from_file(&result.output_path).unwrap();
    let from_repo = repo
        .get_snapshot(&config.repository.snapshot_name)
        .await
        .unwrap()
        .records;
    assert_eq!(from_csv.len(), from_repo.len());
    for (a, b) in from_csv.iter().zip(&from_repo) {
        assert_eq!(a.record, b.record);
        assert_eq!(a.sentiment_label, b.sentiment_label);
    }

    assert_eq!(repo.get_coordinates().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_cleaned_rows_satisfy_dashboard_contract() {
    let dir = tempdir().unwrap();
    let repo = LocalRepository::new();
    let result = CatalogPipeline::new(config_in(dir.path()))
        .unwrap()
        .run(&repo)
        .await
        .unwrap();

    for r in &result.records {
        assert!(!r.record.country.is_empty());
        assert!(!r.record.primary_genre.is_empty());
        assert!(!r.record.rating.is_empty());
        assert!((-1.0..=1.0).contains(&r.description_tone));
    }

    let by_id = |id: &str| {
        result
            .records
            .iter()
            .find(|r| r.record.show_id.as_deref() == Some(id))
            .unwrap()
    };
    assert_eq!(by_id("s5").record.country, "United States");
    assert_eq!(by_id("s5").record.rating, UNKNOWN);
    assert_eq!(by_id("s3").record.country, UNKNOWN);
    assert_eq!(by_id("s2").record.primary_genre, "International TV Shows");
    assert_eq!(by_id("s6").record.description, "");
    assert_eq!(by_id("s6").description_tone, 0.0);
    assert_eq!(by_id("s1").record.month_added, Some(9));
}

#[tokio::test]
async fn test_lenient_dates_accept_iso() {
    let dir = tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.cleaner.strict_date_format = false;
    config.sentiment.parallel = true;

    let repo = LocalRepository::new();
    let result = CatalogPipeline::new(config).unwrap().run(&repo).await.unwrap();
    assert_eq!(result.stats.invalid_dates, 0);
}

#[tokio::test]
async fn test_dashboard_over_prepared_catalog() {
    let dir = tempdir().unwrap();
    let repo = LocalRepository::new();
    let result = CatalogPipeline::new(config_in(dir.path()))
        .unwrap()
        .run(&repo)
        .await
        .unwrap();
    let coordinates = repo.get_coordinates().await.unwrap();

    let filter = CatalogFilter::all().with_content_types([ContentType::TvShow]);
    let view = services::dashboard_view(&result.records, &coordinates, &filter);

    assert_eq!(view.filtered_count, 3);
    let distribution_total: usize = view.content_types.iter().map(|c| c.count).sum();
    assert_eq!(distribution_total, 6);
    // s3 has no country, so only South Africa and India are mapped
    assert_eq!(view.map_points.len(), 2);

    let genres = summary::top_genres(&result.records, 2);
    assert_eq!(genres[0].value, "International TV Shows");
    assert_eq!(genres[0].count, 2);
}
