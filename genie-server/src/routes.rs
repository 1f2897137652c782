use crate::{ApiError, ServerConfig};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use genie_core::{FileNode, GenieError};
use genie_generator::ProjectGenerator;
use genie_github::Publisher;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

#[derive(Clone)]
struct AppState {
    generator: Option<Arc<ProjectGenerator>>,
    publisher: Publisher,
}

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.security.allowed_origins.is_empty() {
        // Development mode: allow all origins
        cors.allow_origin(AllowOrigin::any())
    } else {
        // Production mode: only allow specified origins
        let origins: Vec<HeaderValue> =
            config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Create the server application.
pub fn create_app(config: ServerConfig) -> Router {
    let state = AppState {
        generator: config.model.clone().map(|model| Arc::new(ProjectGenerator::new(model))),
        publisher: Publisher::new().with_base_url(config.effective_github_base_url()),
    };

    let api_router = Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate_project))
        .route("/upload", post(upload_project))
        .with_state(state);

    let app = Router::new().nest("/api", api_router);

    let cors_layer = build_cors_layer(&config);

    app.layer(
        ServiceBuilder::new()
            // Tracing for observability
            .layer(TraceLayer::new_for_http())
            // Request timeout
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                config.security.request_timeout,
            ))
            // Request body size limit
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            // CORS configuration
            .layer(cors_layer)
            // Security headers
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    repo: Option<String>,
    #[serde(default)]
    files: Option<Vec<FileNode>>,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    success: bool,
}

/// `POST /api/generate`: run the generation pipeline against the server's
/// model and answer with the project tree.
async fn generate_project(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<FileNode>>, ApiError> {
    let Json(request) = payload?;
    let prompt = request.prompt.as_deref().map(str::trim).unwrap_or_default();
    if prompt.is_empty() {
        return Err(GenieError::MissingParameters("prompt".to_string()).into());
    }

    let generator = state.generator.as_ref().ok_or(GenieError::MissingCredential)?;
    let tree = generator.generate(prompt).await?;
    Ok(Json(tree))
}

/// `POST /api/upload`: create the repository and push every generated file,
/// using the GitHub token the request carries.
async fn upload_project(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(request) = payload?;
    let (Some(access_token), Some(repo), Some(files)) =
        (request.access_token, request.repo, request.files)
    else {
        return Err(GenieError::MissingParameters(
            "accessToken, repo, or files".to_string(),
        )
        .into());
    };

    state.publisher.publish(&access_token, &repo, &files).await?;
    Ok(Json(UploadResponse { success: true }))
}

async fn health_check() -> &'static str {
    "OK"
}
