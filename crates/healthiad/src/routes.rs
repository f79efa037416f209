//! API routes for healthiad

use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use healthia_shared::api::{
    AvailableDiseasesResponse, DatasetStatsResponse, DiagnosisResponse, EndpointDoc,
    ErrorResponse, HealthCheckResponse, RootResponse, SymptomsRequest, DISCLAIMER,
};
use healthia_shared::error::ValidationError;
use healthia_shared::ModelInfo;
use std::sync::Arc;
use tracing::{debug, info, warn};

type AppStateArc = Arc<AppState>;

pub const DOCS_PATH: &str = "/docs";

/// Path of `route` under `prefix`. The API root is `prefix` itself.
fn under(prefix: &str, route: &str) -> String {
    match (prefix.is_empty(), route) {
        (true, _) => route.to_string(),
        (false, "/") => prefix.to_string(),
        (false, _) => format!("{}{}", prefix, route),
    }
}

// ============================================================================
// API Routes
// ============================================================================

pub fn api_routes(prefix: &str) -> Router<AppStateArc> {
    let mut router = Router::new()
        .route(&under(prefix, "/"), get(root))
        .route(&under(prefix, "/health"), get(health_check))
        .route(&under(prefix, "/diseases"), get(list_diseases))
        .route(&under(prefix, "/predict"), post(predict))
        .route(&under(prefix, "/model-info"), get(model_info))
        .route(&under(prefix, "/stats"), get(dataset_stats));

    // Accept the root with a trailing slash too
    if !prefix.is_empty() {
        router = router.route(&format!("{}/", prefix), get(root));
    }
    router
}

async fn root(State(state): State<AppStateArc>) -> Json<RootResponse> {
    let app = &state.config.app;
    Json(RootResponse {
        message: format!("Bem-vindo ao {}", app.name),
        version: app.version.clone(),
        docs: DOCS_PATH.to_string(),
        description: app.description.clone(),
    })
}

/// Always 200; degradation is reported in the body
async fn health_check(State(state): State<AppStateArc>) -> Json<HealthCheckResponse> {
    let model_loaded = state.model_info().model_loaded;
    if !model_loaded {
        warn!("Health check: model bundle not loaded");
    }

    Json(HealthCheckResponse {
        status: if model_loaded { "healthy" } else { "unhealthy" }.to_string(),
        app_name: state.config.app.name.clone(),
        version: state.config.app.version.clone(),
        model_loaded,
    })
}

async fn list_diseases(
    State(state): State<AppStateArc>,
) -> Result<Json<AvailableDiseasesResponse>, ApiError> {
    let diseases = state.catalog.list_diseases();
    if diseases.is_empty() {
        return Err(ApiError::Internal {
            detail: "Erro ao buscar lista de doenças",
            reason: "disease catalog is empty".to_string(),
        });
    }

    Ok(Json(AvailableDiseasesResponse {
        total_diseases: diseases.len(),
        diseases,
    }))
}

async fn predict(
    State(state): State<AppStateArc>,
    payload: Result<Json<SymptomsRequest>, JsonRejection>,
) -> Result<Json<DiagnosisResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ValidationError::Malformed(rejection.body_text()).into()
        }
    })?;
    request.validate()?;

    let engine = state.engine.as_ref().ok_or(ApiError::ModelUnavailable)?;

    debug!("New diagnosis request: {}", request.symptoms);
    let prediction = engine.predict(&request.symptoms)?;
    info!(
        "Diagnosis: {} (confidence: {:.2}%)",
        prediction.diagnosis, prediction.confidence
    );

    Ok(Json(DiagnosisResponse {
        diagnosis: prediction.diagnosis,
        confidence: prediction.confidence,
        symptoms_received: prediction.processed_tokens,
        recommendations: DISCLAIMER.to_string(),
        top_predictions: prediction.top_predictions,
    }))
}

async fn model_info(State(state): State<AppStateArc>) -> Json<ModelInfo> {
    Json(state.model_info())
}

async fn dataset_stats(State(state): State<AppStateArc>) -> Json<DatasetStatsResponse> {
    let stats = state.catalog.stats();
    Json(DatasetStatsResponse {
        total_samples: stats.sample_count,
        total_diseases: stats.disease_count,
        diseases: stats.diseases,
    })
}

// ============================================================================
// Docs Routes
// ============================================================================

pub fn docs_routes() -> Router<AppStateArc> {
    Router::new().route(DOCS_PATH, get(docs))
}

async fn docs(State(state): State<AppStateArc>) -> Json<Vec<EndpointDoc>> {
    let prefix = state.config.app.api_prefix.as_str();
    let endpoint = |method: &str, route: &str, summary: &str| EndpointDoc {
        method: method.to_string(),
        path: under(prefix, route),
        summary: summary.to_string(),
    };

    Json(vec![
        endpoint("GET", "/", "Informações básicas da API"),
        endpoint("GET", "/health", "Verifica se a API e o modelo estão funcionando"),
        endpoint("GET", "/diseases", "Lista as doenças que o modelo pode diagnosticar"),
        endpoint("POST", "/predict", "Recebe sintomas e retorna diagnóstico"),
        endpoint("GET", "/model-info", "Informações sobre o modelo carregado"),
        endpoint("GET", "/stats", "Estatísticas do conjunto de dados"),
    ])
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Não encontrado".to_string(),
            detail: Some(format!("Rota {} não existe", uri.path())),
        }),
    )
}
