//! Label encoder: class index <-> disease name.

use crate::error::{LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ENCODER_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderArtifact {
    pub format_version: u32,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn from_artifact(artifact: EncoderArtifact) -> LoadResult<Self> {
        if artifact.format_version != ENCODER_FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                artifact: "encoder",
                found: artifact.format_version,
                expected: ENCODER_FORMAT_VERSION,
            });
        }
        if artifact.classes.is_empty() {
            return Err(LoadError::Invalid("label encoder has no classes".to_string()));
        }

        let mut index = HashMap::with_capacity(artifact.classes.len());
        for (i, label) in artifact.classes.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(LoadError::Invalid(format!(
                    "label '{}' appears more than once in the encoder",
                    label
                )));
            }
        }

        Ok(Self {
            classes: artifact.classes,
            index,
        })
    }

    pub fn decode(&self, class_index: usize) -> Option<&str> {
        self.classes.get(class_index).map(String::as_str)
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
