// HTTP request handlers
use crate::infrastructure::http_response::{
    HTML_CONTENT_TYPE, SVG_CONTENT_TYPE, accepts_brotli, document_response,
};
use crate::presentation::app_state::AppState;
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/heatmap.svg", get(heatmap_svg))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The page, with the chart inline when the render pass succeeded
pub async fn index(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match document_response(&state.page, HTML_CONTENT_TYPE, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Standalone chart
pub async fn heatmap_svg(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(svg) = &state.svg else {
        tracing::debug!("No heatmap rendered, nothing to serve");
        return StatusCode::NOT_FOUND.into_response();
    };

    match document_response(svg, SVG_CONTENT_TYPE, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
