//! Parsers for catalog input formats.
//!
//! This module turns tabular source files into typed records, and the
//! annotated result back into tables.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Read catalog CSV files into DataFrames and records
//! - [`coordinates_parser`]: Read the country coordinate lookup table
//! - [`dates`]: Parse `date_added` values under a strict or lenient policy
//!
//! # Example
//!
//! ```no_run
//! use netflix_insights::parsing::csv_parser::{dataframe_to_records, parse_catalog_csv};
//! use std::path::Path;
//!
//! let df = parse_catalog_csv(Path::new("input/netflix_titles.csv"))
//!     .expect("Failed to parse catalog");
//! let records = dataframe_to_records(&df).expect("Catalog is missing columns");
//! ```

pub mod coordinates_parser;
pub mod csv_parser;
pub mod dates;

#[cfg(test)]
mod csv_parser_tests;

pub use dates::{DateParser, DatePolicy, CATALOG_DATE_FORMAT};
