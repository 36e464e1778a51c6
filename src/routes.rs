use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers,
    openai::{ImageGenerator, Summarizer},
    picker::CandidatePicker,
    youtube::VideoSource,
    SummaryPipeline,
};

/// Allows every origin unless a single one is configured
pub fn cors_layer(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    Ok(match origin {
        Some(origin) => cors.allow_origin(origin.parse::<HeaderValue>()?),
        None => cors.allow_origin(Any),
    })
}

/// Creates and returns the main router with all routes
pub fn create_router<V, S, I, P>(
    pipeline: Arc<SummaryPipeline<V, S, I, P>>,
    cors: CorsLayer,
) -> Router
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    P: CandidatePicker + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/search_and_summarize",
            post(handlers::search_and_summarize::<V, S, I, P>),
        )
        .with_state(pipeline)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
