//! TF-IDF vectorizer restored from a fitted artifact.
//!
//! Vocabulary and idf weights are frozen at fit time; `transform` never
//! learns new terms.

use crate::error::{LoadError, LoadResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const VECTORIZER_FORMAT_VERSION: u32 = 1;
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Vector normalization applied after tf-idf weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

/// On-disk form of the vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub format_version: u32,
    pub kind: String,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

fn default_lowercase() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Sparse feature row. Entries are sorted by column and never repeat one.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub dim: usize,
    pub entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    lowercase: bool,
    pattern: Regex,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Norm,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> LoadResult<Self> {
        if artifact.format_version != VECTORIZER_FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                artifact: "vectorizer",
                found: artifact.format_version,
                expected: VECTORIZER_FORMAT_VERSION,
            });
        }
        if artifact.kind != "tfidf" {
            return Err(LoadError::UnsupportedKind {
                artifact: "vectorizer",
                found: artifact.kind,
            });
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(LoadError::Invalid(format!(
                "vectorizer ngram_range ({}, {}) must satisfy 1 <= min <= max",
                min_n, max_n
            )));
        }
        if artifact.idf.is_empty() {
            return Err(LoadError::Invalid("vectorizer has an empty idf table".to_string()));
        }
        if artifact.idf.iter().any(|w| !w.is_finite()) {
            return Err(LoadError::Invalid("vectorizer idf contains non-finite weights".to_string()));
        }

        let n_features = artifact.idf.len();
        let mut seen = HashSet::with_capacity(artifact.vocabulary.len());
        for (term, &column) in &artifact.vocabulary {
            if column >= n_features {
                return Err(LoadError::Invalid(format!(
                    "vocabulary term '{}' maps to column {} but idf has {} entries",
                    term, column, n_features
                )));
            }
            if !seen.insert(column) {
                return Err(LoadError::Invalid(format!(
                    "vocabulary column {} is assigned to more than one term",
                    column
                )));
            }
        }

        let pattern = Regex::new(&artifact.token_pattern).map_err(|source| LoadError::InvalidPattern {
            pattern: artifact.token_pattern.clone(),
            source,
        })?;

        Ok(Self {
            lowercase: artifact.lowercase,
            pattern,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
        })
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Word n-grams of `text` in document order
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let words: Vec<&str> = self.pattern.find_iter(text).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut grams = Vec::new();
        for n in min_n..=max_n {
            if n > words.len() {
                break;
            }
            grams.extend(words.windows(n).map(|w| w.join(" ")));
        }
        grams
    }

    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for gram in self.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&gram) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + f64::from(count).ln()
                } else {
                    f64::from(count)
                };
                (column, tf * self.idf[column])
            })
            .collect();
        entries.sort_unstable_by_key(|&(column, _)| column);

        if self.norm == Norm::L2 {
            let length = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
            if length > 0.0 {
                for (_, v) in &mut entries {
                    *v /= length;
                }
            }
        }

        FeatureVector {
            dim: self.n_features(),
            entries,
        }
    }
}
