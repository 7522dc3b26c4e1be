//! File-level loading and writing of catalog data.
//!
//! Loaders combine the CSV parsers with error context; writers replace
//! their target atomically so a failed run never leaves a partial file.
//!
//! # Example
//!
//! ```no_run
//! use netflix_insights::io::loaders::CatalogLoader;
//! use std::path::Path;
//!
//! let result = CatalogLoader::load_from_file(Path::new("input/netflix_titles.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} rows", result.num_rows);
//! ```

pub mod loaders;
pub mod writers;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{AnnotatedCatalogLoader, CatalogLoadResult, CatalogLoader, CoordinatesLoader};
pub use writers::{write_annotated_csv, write_atomic, write_json};
