//! Error types for the inference core

use thiserror::Error;

/// Failures the inference pipeline reports instead of producing garbage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Input '{field}' must be finite, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Invalid discretization: {0}")]
    InvalidDiscretization(String),

    #[error("Distribution has {xs} sample points but {degrees} degrees")]
    MismatchedDistribution { xs: usize, degrees: usize },
}

/// A single record that could not be evaluated in a batch
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Record {record_id}: {source}")]
pub struct BatchError {
    pub record_id: u64,
    #[source]
    pub source: InferenceError,
}

pub type Result<T> = std::result::Result<T, InferenceError>;
