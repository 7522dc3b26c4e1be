//! Core domain models for the content catalog.
//!
//! This module defines the record shapes that flow through every stage of the
//! pipeline (raw, cleaned, annotated) and the errors raised at the schema
//! boundary.

pub mod domain;
pub mod error;

pub use domain::{
    AnnotatedRecord, CleanedRecord, ContentRecord, ContentType, CountryCoordinate,
    SentimentLabel, REQUIRED_COLUMNS, UNKNOWN,
};
pub use error::SchemaError;
