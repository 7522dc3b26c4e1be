//! Python bindings for the Streamlit dashboard.
//!
//! Functions exchange JSON strings rather than Python objects so the
//! dashboard can hand results straight to pandas / pydeck.
//!
//! # Modules
//!
//! - [`catalog`]: Cleaning and loading of catalog files
//! - [`dashboard`]: Filtered dashboard views and summaries
//!
//! # Python API
//!
//! All functions are available in the `netflix_insights` Python module
//! after installation.

pub mod catalog;
pub mod dashboard;

pub use catalog::*;
pub use dashboard::*;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyErr;

pub(crate) fn runtime_error(context: &str, err: impl std::fmt::Display) -> PyErr {
    PyRuntimeError::new_err(format!("{}: {}", context, err))
}

pub(crate) fn value_error(context: &str, err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(format!("{}: {}", context, err))
}
