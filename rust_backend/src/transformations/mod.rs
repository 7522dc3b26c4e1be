//! Data transformation and cleaning utilities.
//!
//! This module repairs raw catalog rows into the cleaned schema and filters
//! annotated rows for the dashboard.
//!
//! # Modules
//!
//! - [`cleaning`]: Repair missing/malformed fields, derive date and genre columns
//! - [`filtering`]: Request-scoped filters over annotated records
//!
//! # Example
//!
//! ```no_run
//! use netflix_insights::transformations::{Cleaner, CleanerConfig};
//! use netflix_insights::parsing::csv_parser::parse_catalog_csv;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let df = parse_catalog_csv(Path::new("input/netflix_titles.csv"))?;
//! let outcome = Cleaner::new(CleanerConfig::default()).clean_frame(&df)?;
//! println!("{} invalid dates", outcome.stats.invalid_dates);
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{first_token, CleanOutcome, Cleaner, CleanerConfig, RepairStats};
pub use filtering::{distinct_values, CatalogFilter};
