use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat based text summarization.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: std::fmt::Display + Send;

    fn summarize(
        &self,
        content: &str,
        params: &CompletionParams,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Prompt-to-image generation, returns a hosted image url.
pub trait ImageGenerator {
    type Error: std::fmt::Display + Send;

    fn generate_image(&self, prompt: &str)
        -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Sampling knobs for a single completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No {0} in response")]
    MissingField(&'static str),
}

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &'static str = "Summarize the following YouTube video description into 3 to 5 bullet points in clear English. Each point should be no more than 15 words. Begin each point with a dash ('-').";
    pub const IMAGE_SIZE: &'static str = "512x512";

    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, OpenAIError> {
        let resp = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, path, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api {
                status,
                message: api_error_message(&message),
            });
        }

        Ok(resp.json::<T>().await?)
    }

    pub async fn send_completion_request(
        &self,
        model_name: &str,
        user_content: &str,
        params: &CompletionParams,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model_name,
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ],
            "max_tokens": params.max_tokens,
            "temperature": params.temperature
        });

        self.post_json("chat/completions", &body).await
    }

    pub async fn send_image_request(&self, prompt: &str) -> Result<ImageResponse, OpenAIError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "n": 1,
            "size": Self::IMAGE_SIZE
        });

        self.post_json("images/generations", &body).await
    }
}

/// OpenAI wraps failures as `{"error": {"message": ...}}`; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

impl CompletionResponse {
    fn into_text(self) -> Result<String, OpenAIError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(OpenAIError::MissingField("content"))
    }
}

impl Summarizer for OpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-3.5-turbo";

    type Error = OpenAIError;

    #[tracing::instrument(skip_all)]
    async fn summarize(
        &self,
        content: &str,
        params: &CompletionParams,
    ) -> Result<String, OpenAIError> {
        self.send_completion_request(Self::SUMMARIZER_MODEL, content, params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?
            .into_text()
    }
}

impl ImageGenerator for OpenAIClient {
    type Error = OpenAIError;

    #[tracing::instrument(skip_all)]
    async fn generate_image(&self, prompt: &str) -> Result<String, OpenAIError> {
        self.send_image_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate image"))?
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or(OpenAIError::MissingField("image url"))
    }
}
