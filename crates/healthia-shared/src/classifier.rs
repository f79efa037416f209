//! Multinomial linear classifier with a softmax output layer.

use crate::error::{InferenceError, LoadError, LoadResult};
use crate::vectorizer::FeatureVector;
use serde::{Deserialize, Serialize};

pub const CLASSIFIER_FORMAT_VERSION: u32 = 1;

/// On-disk form of the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    pub kind: String,
    pub n_features: usize,
    pub n_classes: usize,
    /// One row of `n_features` weights per class
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// Predicted class plus the full distribution it was picked from
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores {
    pub class_index: usize,
    pub probabilities: Vec<f64>,
}

impl ClassScores {
    pub fn max_probability(&self) -> f64 {
        self.probabilities[self.class_index]
    }
}

#[derive(Debug, Clone)]
pub struct LinearClassifier {
    n_features: usize,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn from_artifact(artifact: ClassifierArtifact) -> LoadResult<Self> {
        if artifact.format_version != CLASSIFIER_FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                artifact: "classifier",
                found: artifact.format_version,
                expected: CLASSIFIER_FORMAT_VERSION,
            });
        }
        if artifact.kind != "linear_softmax" {
            return Err(LoadError::UnsupportedKind {
                artifact: "classifier",
                found: artifact.kind,
            });
        }
        if artifact.n_classes == 0 || artifact.n_features == 0 {
            return Err(LoadError::Invalid(
                "classifier must have at least one class and one feature".to_string(),
            ));
        }
        if artifact.coef.len() != artifact.n_classes {
            return Err(LoadError::Invalid(format!(
                "classifier declares {} classes but has {} coefficient rows",
                artifact.n_classes,
                artifact.coef.len()
            )));
        }
        if let Some((class, row)) = artifact
            .coef
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != artifact.n_features)
        {
            return Err(LoadError::Invalid(format!(
                "coefficient row {} has {} weights, expected {}",
                class,
                row.len(),
                artifact.n_features
            )));
        }
        if artifact.intercept.len() != artifact.n_classes {
            return Err(LoadError::Invalid(format!(
                "classifier has {} intercepts for {} classes",
                artifact.intercept.len(),
                artifact.n_classes
            )));
        }
        let all_finite = artifact.intercept.iter().all(|w| w.is_finite())
            && artifact.coef.iter().flatten().all(|w| w.is_finite());
        if !all_finite {
            return Err(LoadError::Invalid("classifier contains non-finite weights".to_string()));
        }

        Ok(Self {
            n_features: artifact.n_features,
            coef: artifact.coef,
            intercept: artifact.intercept,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_classes(&self) -> usize {
        self.intercept.len()
    }

    /// Raw per-class scores before softmax
    pub fn decision_function(&self, x: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        if x.dim != self.n_features {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                actual: x.dim,
            });
        }
        if let Some(&(column, _)) = x.entries.iter().find(|(c, _)| *c >= self.n_features) {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                actual: column + 1,
            });
        }

        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| b + x.entries.iter().map(|&(j, v)| row[j] * v).sum::<f64>())
            .collect())
    }

    pub fn predict_proba(&self, x: &FeatureVector) -> Result<ClassScores, InferenceError> {
        let scores = self.decision_function(x)?;
        let probabilities = softmax(&scores)?;
        let class_index = argmax(&probabilities).ok_or(InferenceError::EmptyDistribution)?;
        Ok(ClassScores {
            class_index,
            probabilities,
        })
    }
}

/// Numerically stable softmax
pub fn softmax(scores: &[f64]) -> Result<Vec<f64>, InferenceError> {
    if scores.is_empty() {
        return Err(InferenceError::EmptyDistribution);
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(InferenceError::NonFiniteScores);
    }
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    Ok(exps.into_iter().map(|e| e / total).collect())
}

/// Index of the first maximum
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
