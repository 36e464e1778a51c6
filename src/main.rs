use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use topic_video_summarizer::{
    config::Config, openai::OpenAIClient, routes, youtube::YouTubeClient, SummaryPipelineBuilder,
};

/// Main entry point for the summarizer server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let youtube_key = config.youtube_api_key.clone().unwrap_or_else(|| {
        tracing::warn!("YOUTUBE_API_KEY is not set, video searches will fail");
        String::new()
    });
    let openai_key = config.openai_api_key.clone().unwrap_or_else(|| {
        tracing::warn!("OPENAI_API_KEY is not set, summaries and covers will be degraded");
        String::new()
    });

    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;
    let openai = OpenAIClient::new(http_client.clone(), openai_key);

    let pipeline = SummaryPipelineBuilder::new()
        .videos(YouTubeClient::new(http_client, youtube_key))
        .summarizer(openai.clone())
        .images(openai)
        .picker(config.picker())
        .options(config.pipeline_options())
        .build();

    let app = routes::create_router(
        Arc::new(pipeline),
        routes::cors_layer(config.cors_origin.as_deref())?,
    );
    let addr = config.socket_addr()?;

    tracing::info!(
        %addr,
        max_results = config.max_results,
        selection = ?config.selection,
        cover = ?config.cover_mode,
        "Server running"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
