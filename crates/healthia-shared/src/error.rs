//! Error types for HealthIA.
//!
//! Three families, one per stage of a request's life:
//! - `LoadError`: artifacts could not be read or are inconsistent (startup, fatal)
//! - `InferenceError`: the pipeline failed for a single request
//! - `ValidationError`: the caller sent input that can be corrected

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{artifact}: unsupported format_version {found} (expected {expected})")]
    UnsupportedVersion {
        artifact: &'static str,
        found: u32,
        expected: u32,
    },

    #[error("{artifact}: unsupported kind '{found}'")]
    UnsupportedKind {
        artifact: &'static str,
        found: String,
    },

    #[error("invalid token pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),

    #[error("encoder predicts labels missing from the disease catalog: {}", unknown.join(", "))]
    LabelMismatch { unknown: Vec<String> },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("feature vector has {actual} columns, classifier expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("classifier produced non-finite scores")]
    NonFiniteScores,

    #[error("class index {0} is outside the label encoder")]
    UnknownClass(usize),

    #[error("classifier produced an empty distribution")]
    EmptyDistribution,
}

/// Input rejected before it reaches the engine.
///
/// Messages are returned verbatim to API clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sintomas não podem estar vazios")]
    Empty,

    #[error("Sintomas devem ter pelo menos {min} caracteres (recebido: {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Sintomas devem ter no máximo {max} caracteres (recebido: {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Requisição inválida: {0}")]
    Malformed(String),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
