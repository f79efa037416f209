//! Inference engine: symptom text in, ranked diagnosis out.
//!
//! Pipeline per call:
//! 1. normalize the raw text
//! 2. vectorize with the fitted tf-idf transform
//! 3. score every class with the linear classifier
//! 4. decode the best class through the label encoder
//! 5. rank the distribution and keep the top entries
//!
//! The engine is immutable after `load`, so one instance can be shared
//! across threads and called concurrently.

use crate::artifacts::{ArtifactPaths, ModelBundle};
use crate::catalog::DiseaseCatalog;
use crate::error::{InferenceError, LoadError, LoadResult};
use crate::text;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of ranked alternatives returned with each prediction
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPrediction {
    pub disease: String,
    /// Percentage, rounded to two decimals
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub diagnosis: String,
    /// Highest class probability as a percentage, rounded to two decimals
    pub confidence: f64,
    pub processed_tokens: Vec<String>,
    pub top_predictions: Vec<TopPrediction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_loaded: bool,
    pub vectorizer_loaded: bool,
    pub encoder_loaded: bool,
    pub total_diseases: usize,
    pub available_diseases: Vec<String>,
}

impl ModelInfo {
    /// Report for a process that has no model bundle
    pub fn unloaded(catalog: &DiseaseCatalog) -> Self {
        Self {
            model_loaded: false,
            vectorizer_loaded: false,
            encoder_loaded: false,
            total_diseases: catalog.diseases().len(),
            available_diseases: catalog.list_diseases(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InferenceEngine {
    bundle: ModelBundle,
    catalog: DiseaseCatalog,
}

impl InferenceEngine {
    /// Read and validate all artifacts. Any error here means the process
    /// cannot serve predictions.
    pub fn load(paths: &ArtifactPaths, catalog: &DiseaseCatalog) -> LoadResult<Self> {
        let bundle = ModelBundle::load(paths)?;
        Self::from_bundle(bundle, catalog)
    }

    pub fn from_bundle(bundle: ModelBundle, catalog: &DiseaseCatalog) -> LoadResult<Self> {
        check_label_space(&bundle, catalog)?;
        Ok(Self {
            bundle,
            catalog: catalog.clone(),
        })
    }

    pub fn predict(&self, raw_text: &str) -> Result<Prediction, InferenceError> {
        let normalized = text::normalize(raw_text);

        let features = self.bundle.vectorizer.transform(&normalized);
        debug!(
            "Vectorized '{}': {} of {} columns set",
            normalized,
            features.nnz(),
            features.dim
        );

        let scores = self.bundle.classifier.predict_proba(&features)?;

        let diagnosis = self
            .bundle
            .encoder
            .decode(scores.class_index)
            .ok_or(InferenceError::UnknownClass(scores.class_index))?
            .to_string();
        let confidence = round2(scores.max_probability() * 100.0);

        let top_predictions = self.rank(&scores.probabilities, TOP_N)?;

        Ok(Prediction {
            diagnosis,
            confidence,
            processed_tokens: text::tokens(&normalized),
            top_predictions,
        })
    }

    /// Highest `n` classes, most probable first. Ties keep encoder order.
    fn rank(&self, probabilities: &[f64], n: usize) -> Result<Vec<TopPrediction>, InferenceError> {
        let mut order: Vec<usize> = (0..probabilities.len()).collect();
        order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));

        order
            .into_iter()
            .take(n)
            .map(|i| {
                let disease = self
                    .bundle
                    .encoder
                    .decode(i)
                    .ok_or(InferenceError::UnknownClass(i))?;
                Ok(TopPrediction {
                    disease: disease.to_string(),
                    probability: round2(probabilities[i] * 100.0),
                })
            })
            .collect()
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_loaded: true,
            vectorizer_loaded: true,
            encoder_loaded: true,
            total_diseases: self.catalog.diseases().len(),
            available_diseases: self.catalog.list_diseases(),
        }
    }

    pub fn catalog(&self) -> &DiseaseCatalog {
        &self.catalog
    }

    /// Labels the classifier can emit, in class-index order
    pub fn labels(&self) -> &[String] {
        self.bundle.encoder.classes()
    }
}

/// Every label the encoder can produce must exist in the catalog.
fn check_label_space(bundle: &ModelBundle, catalog: &DiseaseCatalog) -> LoadResult<()> {
    let unknown: Vec<String> = bundle
        .encoder
        .classes()
        .iter()
        .filter(|label| !catalog.contains(label))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(LoadError::LabelMismatch { unknown });
    }

    let unreachable: Vec<&str> = catalog
        .diseases()
        .iter()
        .filter(|d| bundle.encoder.encode(d).is_none())
        .map(String::as_str)
        .collect();
    if !unreachable.is_empty() {
        warn!(
            "{} catalog diseases cannot be predicted by the loaded model: {}",
            unreachable.len(),
            unreachable.join(", ")
        );
    }
    Ok(())
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
