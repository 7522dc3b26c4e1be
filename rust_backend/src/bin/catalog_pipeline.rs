use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use netflix_insights::io::loaders::{AnnotatedCatalogLoader, CatalogLoader};
use netflix_insights::io::writers::write_json;
use netflix_insights::preprocessing::{run_pipeline, PipelineConfig};
use netflix_insights::services::{
    content_type_distribution, explore_frame, top_countries, top_genres, top_ratings,
    CategoryCount, DEFAULT_TOP_K,
};

#[derive(Parser, Debug)]
#[command(
    name = "catalog-pipeline",
    version,
    about = "Clean, annotate and summarise the Netflix catalog"
)]
struct Cli {
    /// Pipeline configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean and annotate the raw catalog, then write the CSV and store the table
    Prepare {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        coordinates: Option<PathBuf>,
        /// Repository backend: local|postgres
        #[arg(long)]
        repository: Option<String>,
        #[arg(long)]
        database_url: Option<String>,
        /// Accept ISO and other common date layouts besides "September 24, 2021"
        #[arg(long)]
        lenient_dates: bool,
        /// Score descriptions across all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Print an exploratory summary of a raw catalog
    Explore {
        input: Option<PathBuf>,
        /// Also write the summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print top categories of an annotated catalog
    Summary {
        input: Option<PathBuf>,
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CategoryReport {
    top_genres: Vec<CategoryCount>,
    top_ratings: Vec<CategoryCount>,
    top_countries: Vec<CategoryCount>,
    content_types: Vec<CategoryCount>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.cmd {
        Commands::Prepare {
            input,
            output,
            coordinates,
            repository,
            database_url,
            lenient_dates,
            parallel,
        } => {
            if let Some(input) = input {
                config.paths.input = input;
            }
            if let Some(output) = output {
                config.paths.output = output;
            }
            if let Some(coordinates) = coordinates {
                config.paths.coordinates = coordinates;
            }
            if let Some(repository) = repository {
                config.repository.repo_type = repository;
            }
            if let Some(url) = database_url {
                config.repository.database_url = Some(url);
            }
            if lenient_dates {
                config.cleaner.strict_date_format = false;
            }
            if parallel {
                config.sentiment.parallel = true;
            }
            cmd_prepare(config).await
        }
        Commands::Explore { input, json } => {
            let input = input.unwrap_or(config.paths.input);
            cmd_explore(&input, json.as_deref())
        }
        Commands::Summary { input, top_k, json } => {
            let input = input.unwrap_or(config.paths.output);
            cmd_summary(&input, top_k, json.as_deref())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => {
            info!(config = %path.display(), "Loading pipeline configuration");
            PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}

async fn cmd_prepare(config: PipelineConfig) -> Result<()> {
    info!(
        input = %config.paths.input.display(),
        repository = %config.repository.repo_type,
        "Starting catalog preparation"
    );
    let result = run_pipeline(config).await?;
    let stats = &result.stats;

    println!("Prepared {} titles", result.records.len());
    println!("  invalid dates:      {}", stats.invalid_dates);
    println!("  missing countries:  {}", stats.missing_countries);
    println!("  missing ratings:    {}", stats.missing_ratings);
    println!("  missing durations:  {}", stats.missing_durations);
    println!("  unknown types:      {}", stats.unknown_types);
    println!("Output: {}", result.output_path.display());
    if result.store.unchanged {
        println!("Table '{}' already up to date", result.store.info.name);
    } else {
        println!(
            "Table '{}' stored ({} rows)",
            result.store.info.name, result.store.info.row_count
        );
    }
    if let Some(n) = result.coordinates_stored {
        println!("Country coordinates stored ({} rows)", n);
    }
    Ok(())
}

fn cmd_explore(input: &Path, json: Option<&Path>) -> Result<()> {
    let loaded = CatalogLoader::load_from_file(input)?;
    let summary = explore_frame(&loaded.dataframe)?;
    println!("{}", summary);

    if let Some(path) = json {
        write_json(path, &summary)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn cmd_summary(input: &Path, top_k: usize, json: Option<&Path>) -> Result<()> {
    let records = AnnotatedCatalogLoader::load_from_file(input)?;
    let report = CategoryReport {
        top_genres: top_genres(&records, top_k),
        top_ratings: top_ratings(&records, top_k),
        top_countries: top_countries(&records, top_k),
        content_types: content_type_distribution(&records),
    };

    print_counts("Top genres", &report.top_genres);
    print_counts("Top ratings", &report.top_ratings);
    print_counts("Top countries", &report.top_countries);
    print_counts("Content types", &report.content_types);

    if let Some(path) = json {
        write_json(path, &report)?;
    }
    Ok(())
}

fn print_counts(title: &str, counts: &[CategoryCount]) {
    println!("{}:", title);
    for c in counts {
        println!("  {:<32} {}", c.value, c.count);
    }
}
