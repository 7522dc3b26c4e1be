//! Netflix catalog preparation and insights.
//!
//! Cleans the raw `netflix_titles.csv` catalog, scores each description's
//! tone, persists the annotated table and serves the aggregates behind the
//! dashboard.
//!
//! # Modules
//!
//! - [`core`]: Record types and schema errors
//! - [`parsing`]: CSV and date parsing
//! - [`transformations`]: The cleaner and dashboard filters
//! - [`sentiment`]: Lexicon-based polarity scoring and annotation
//! - [`services`]: Summaries, dashboard aggregates and exploration
//! - [`preprocessing`]: Pipeline configuration and orchestration
//! - [`io`]: File loaders and atomic writers
//! - [`db`]: Repository abstraction over the cleaned-table sink

pub mod core;
pub mod db;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod sentiment;
pub mod services;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module consumed by the Streamlit dashboard
#[cfg(feature = "python")]
#[pymodule]
fn netflix_insights(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::catalog::register_catalog_functions(m)?;
    python::dashboard::register_dashboard_functions(m)?;
    Ok(())
}
