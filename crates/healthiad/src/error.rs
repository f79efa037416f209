//! Mapping from service failures to HTTP responses.
//!
//! Validation messages go back to the caller verbatim. Everything else is
//! logged in full and answered with a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use healthia_shared::api::ErrorResponse;
use healthia_shared::error::{InferenceError, ValidationError};
use thiserror::Error;
use tracing::{error, warn};

pub const INTERNAL_ERROR: &str = "Erro interno do servidor";
pub const UNEXPECTED_DETAIL: &str = "Um erro inesperado ocorreu. Por favor, tente novamente.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("model bundle is not loaded")]
    ModelUnavailable,

    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,

    /// `detail` is sent to the client, `reason` is only logged
    #[error("{detail}: {reason}")]
    Internal { detail: &'static str, reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Inference(_) | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (error, detail) = match self {
            ApiError::Validation(e) => ("Sintomas inválidos", e.to_string()),
            ApiError::Inference(_) => (
                INTERNAL_ERROR,
                "Erro ao processar diagnóstico. Tente novamente.".to_string(),
            ),
            ApiError::ModelUnavailable => (
                "Serviço indisponível",
                "O modelo de diagnóstico não está carregado.".to_string(),
            ),
            ApiError::PayloadTooLarge => (
                "Requisição muito grande",
                "O corpo da requisição excede o limite permitido.".to_string(),
            ),
            ApiError::Internal { detail, .. } => (INTERNAL_ERROR, detail.to_string()),
        };
        ErrorResponse {
            error: error.to_string(),
            detail: Some(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(e) => warn!("Validation error: {}", e),
            ApiError::PayloadTooLarge => warn!("Rejected oversized request body"),
            other => error!("Request failed: {}", other),
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// Body for failures that escaped every handler
pub fn unexpected_error() -> ErrorResponse {
    ErrorResponse {
        error: INTERNAL_ERROR.to_string(),
        detail: Some(UNEXPECTED_DETAIL.to_string()),
    }
}
