//! End-to-end catalog preparation: configuration and orchestration.

pub mod config;
pub mod pipeline;

pub use config::{ConfigError, PathSettings, PipelineConfig, SentimentSettings};
pub use pipeline::{run_pipeline, CatalogPipeline, PipelineResult};
