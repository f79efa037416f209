//! HTTP API data contracts.
//!
//! Shared by the daemon (serialization) and its tests (deserialization).

use crate::engine::TopPrediction;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const MIN_SYMPTOMS_CHARS: usize = 3;
pub const MAX_SYMPTOMS_CHARS: usize = 500;

pub const DISCLAIMER: &str = "⚠️ IMPORTANTE: Este é um diagnóstico automático baseado em Machine Learning. \
NÃO substitui consulta médica. \
Procure um profissional de saúde para confirmação e tratamento adequado.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomsRequest {
    pub symptoms: String,
}

impl SymptomsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_symptoms(&self.symptoms)
    }
}

/// Length is counted in characters, then the text must not be blank.
pub fn validate_symptoms(symptoms: &str) -> Result<(), ValidationError> {
    let chars = symptoms.chars().count();
    if chars < MIN_SYMPTOMS_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_SYMPTOMS_CHARS,
            actual: chars,
        });
    }
    if chars > MAX_SYMPTOMS_CHARS {
        return Err(ValidationError::TooLong {
            max: MAX_SYMPTOMS_CHARS,
            actual: chars,
        });
    }
    if symptoms.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub diagnosis: String,
    pub confidence: f64,
    pub symptoms_received: Vec<String>,
    pub recommendations: String,
    #[serde(default)]
    pub top_predictions: Vec<TopPrediction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub app_name: String,
    pub version: String,
    pub model_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableDiseasesResponse {
    pub total_diseases: usize,
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStatsResponse {
    pub total_samples: usize,
    pub total_diseases: usize,
    pub diseases: Vec<String>,
}

/// Entry in the `/docs` endpoint index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: Option<String>,
}
