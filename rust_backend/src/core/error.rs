//! Error types raised at the tabular schema boundary.

/// The input table is structurally unusable: one or more required columns
/// are absent entirely.
///
/// Field-level problems (missing or malformed values) are never reported
/// through this type; they are repaired by the cleaner and only counted.
///
/// # Examples
///
/// ```
/// use netflix_insights::core::SchemaError;
///
/// let err = SchemaError::new(vec!["country".to_string(), "rating".to_string()]);
/// assert_eq!(
///     err.to_string(),
///     "Schema error: missing required column(s): country, rating"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Schema error: missing required column(s): {}", .missing_columns.join(", "))]
pub struct SchemaError {
    pub missing_columns: Vec<String>,
}

impl SchemaError {
    pub fn new(missing_columns: Vec<String>) -> Self {
        Self { missing_columns }
    }
}
