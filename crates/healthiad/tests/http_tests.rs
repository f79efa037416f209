//! End-to-end HTTP tests against an in-process router

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use healthia_shared::api::{
    AvailableDiseasesResponse, DatasetStatsResponse, DiagnosisResponse, EndpointDoc,
    ErrorResponse, HealthCheckResponse, RootResponse, DISCLAIMER,
};
use healthia_shared::{ArtifactPaths, DiseaseCatalog, InferenceEngine, ModelInfo};
use healthiad::config::Config;
use healthiad::server::{build_router, catch_panic_layer, AppState};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tower::ServiceExt;

fn model_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../model")
}

fn loaded_app() -> Router {
    let engine = InferenceEngine::load(&ArtifactPaths::in_dir(model_dir()), DiseaseCatalog::builtin())
        .expect("shipped model should load");
    build_router(AppState::new(Config::default(), Some(engine)))
}

fn degraded_app() -> Router {
    build_router(AppState::new(Config::default(), None))
}

async fn get_path(app: Router, path: &str) -> Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, path: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Info endpoints
// ============================================================================

#[tokio::test]
async fn test_root() {
    let response = get_path(loaded_app(), "/api/v1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: RootResponse = json_body(response).await;
    assert_eq!(body.message, "Bem-vindo ao HealthIA API");
    assert_eq!(body.docs, "/docs");
    assert_eq!(body.version, Config::default().app.version);
}

#[tokio::test]
async fn test_root_with_trailing_slash() {
    let response = get_path(loaded_app(), "/api/v1/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_when_loaded() {
    let response = get_path(loaded_app(), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthCheckResponse = json_body(response).await;
    assert_eq!(body.status, "healthy");
    assert!(body.model_loaded);
    assert_eq!(body.app_name, "HealthIA API");
}

#[tokio::test]
async fn test_health_when_degraded_is_still_200() {
    let response = get_path(degraded_app(), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthCheckResponse = json_body(response).await;
    assert_eq!(body.status, "unhealthy");
    assert!(!body.model_loaded);
}

#[tokio::test]
async fn test_list_diseases() {
    let response = get_path(loaded_app(), "/api/v1/diseases").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: AvailableDiseasesResponse = json_body(response).await;
    assert_eq!(body.total_diseases, 20);
    assert_eq!(body.diseases.len(), 20);
    assert!(body.diseases.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_model_info() {
    let response = get_path(loaded_app(), "/api/v1/model-info").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: ModelInfo = json_body(response).await;
    assert!(body.model_loaded && body.vectorizer_loaded && body.encoder_loaded);
    assert_eq!(body.total_diseases, 20);
    assert_eq!(body.available_diseases, DiseaseCatalog::builtin().list_diseases());
}

#[tokio::test]
async fn test_model_info_when_degraded() {
    let response = get_path(degraded_app(), "/api/v1/model-info").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: ModelInfo = json_body(response).await;
    assert!(!body.model_loaded);
    assert_eq!(body.total_diseases, 20);
}

#[tokio::test]
async fn test_dataset_stats() {
    let response = get_path(loaded_app(), "/api/v1/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: DatasetStatsResponse = json_body(response).await;
    assert_eq!(body.total_samples, 197);
    assert_eq!(body.total_diseases, 20);
}

#[tokio::test]
async fn test_docs_lists_prefixed_routes() {
    let response = get_path(loaded_app(), "/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<EndpointDoc> = json_body(response).await;
    assert!(body.iter().any(|e| e.method == "POST" && e.path == "/api/v1/predict"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let response = get_path(loaded_app(), "/api/v2/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = json_body(response).await;
    assert!(body.detail.unwrap().contains("/api/v2/health"));
}

// ============================================================================
// Predict
// ============================================================================

#[tokio::test]
async fn test_predict_diabetes() {
    let response = post_json(
        loaded_app(),
        "/api/v1/predict",
        r#"{"symptoms": "sede constante, micção frequente, perda de peso rápida"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: DiagnosisResponse = json_body(response).await;
    assert_eq!(body.diagnosis, "Diabetes Tipo 1");
    assert!(body.confidence > 0.0);
    assert_eq!(
        body.symptoms_received,
        vec!["sede", "constante", "micção", "frequente", "perda", "de", "peso", "rápida"]
    );
    assert_eq!(body.recommendations, DISCLAIMER);
    assert_eq!(body.top_predictions.len(), 3);
    assert_eq!(body.top_predictions[0].disease, "Diabetes Tipo 1");
}

#[tokio::test]
async fn test_predict_too_short_is_400() {
    let response = post_json(loaded_app(), "/api/v1/predict", r#"{"symptoms": "a"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert!(body.detail.unwrap().contains("pelo menos 3"));
}

#[tokio::test]
async fn test_predict_validation_runs_before_model_check() {
    // Rejected as invalid even though no model is loaded
    let response = post_json(degraded_app(), "/api/v1/predict", r#"{"symptoms": "a"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_blank_is_400() {
    let response = post_json(loaded_app(), "/api/v1/predict", r#"{"symptoms": "      "}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.detail.as_deref(), Some("Sintomas não podem estar vazios"));
}

#[tokio::test]
async fn test_predict_too_long_is_400() {
    let body = serde_json::json!({ "symptoms": "febre ".repeat(100) }).to_string();
    let response = post_json(loaded_app(), "/api/v1/predict", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_malformed_json_is_400() {
    let response = post_json(loaded_app(), "/api/v1/predict", r#"{"symptoms": "#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(loaded_app(), "/api/v1/predict", r#"{"sintomas": "febre alta"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_without_model_is_503() {
    let response = post_json(degraded_app(), "/api/v1/predict", r#"{"symptoms": "febre alta"}"#).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_predict_normalization_is_case_insensitive() {
    let a: DiagnosisResponse =
        json_body(post_json(loaded_app(), "/api/v1/predict", r#"{"symptoms": "Febre Alta, Dor"}"#).await).await;
    let b: DiagnosisResponse =
        json_body(post_json(loaded_app(), "/api/v1/predict", r#"{"symptoms": "febre alta dor"}"#).await).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_predict_rejects_oversized_body() {
    let mut config = Config::default();
    config.server.max_body_bytes = 16;
    let app = build_router(AppState::new(config, None));
    let response = post_json(app, "/api/v1/predict", r#"{"symptoms": "febre alta dor no corpo"}"#).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_oversized_body_with_content_length_gets_json_413() {
    let mut config = Config::default();
    config.server.max_body_bytes = 16;
    let app = build_router(AppState::new(config, None));
    let body = r#"{"symptoms": "febre alta dor no corpo"}"#;
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, body.len())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error, "Requisição muito grande");
    assert!(body.detail.is_some());
}

#[tokio::test]
async fn test_body_limit_above_axum_default_is_honored() {
    let mut config = Config::default();
    config.server.max_body_bytes = 4 * 1024 * 1024;
    let app = build_router(AppState::new(config, None));
    // ~3 MiB: passes the configured limit, then fails length validation
    let body = serde_json::json!({ "symptoms": "febre ".repeat(500_000) }).to_string();
    let response = post_json(app, "/api/v1/predict", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let response = loaded_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let response = loaded_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = loaded_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/predict")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "POST"
    );
}

async fn exploding_handler() -> &'static str {
    panic!("index out of bounds")
}

#[tokio::test]
async fn test_panics_become_generic_500() {
    let app: Router = Router::new()
        .route("/boom", get(exploding_handler))
        .layer(catch_panic_layer());
    let response = get_path(app, "/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error, "Erro interno do servidor");
    assert!(!body.detail.unwrap().contains("index"));
}
