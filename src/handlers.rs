use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, Json, State};
use serde_json::json;

use crate::{
    error::AppError,
    openai::{ImageGenerator, Summarizer},
    picker::CandidatePicker,
    types::{ResponsePayload, SearchRequest},
    youtube::VideoSource,
    SummaryPipeline,
};

/// Health check handler - returns server status
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Pulls a non-empty topic out of the request body.
/// Unparseable bodies are treated like a missing topic.
pub fn validate_topic(
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body");
            SearchRequest::default()
        }
    };

    match request.topic {
        Some(topic) if !topic.is_empty() => Ok(topic),
        _ => Err(AppError::MissingParameter),
    }
}

pub async fn search_and_summarize<V, S, I, P>(
    State(pipeline): State<Arc<SummaryPipeline<V, S, I, P>>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ResponsePayload>, AppError>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    P: CandidatePicker + Send + Sync + 'static,
{
    let topic = validate_topic(body)?;
    tracing::info!(%topic, "Received summarize request");

    let payload = pipeline.run(&topic).await?;
    Ok(Json(payload))
}
