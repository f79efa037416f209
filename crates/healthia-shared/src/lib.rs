//! Shared types and inference pipeline for HealthIA components.

pub mod api;
pub mod artifacts;
pub mod catalog;
pub mod catalog_data;
pub mod classifier;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod text;
pub mod vectorizer;

pub use artifacts::{ArtifactPaths, ModelBundle};
pub use catalog::{CatalogStats, DiseaseCatalog, SymptomRecord};
pub use engine::{InferenceEngine, ModelInfo, Prediction, TopPrediction, TOP_N};
pub use error::{InferenceError, LoadError, ValidationError};
