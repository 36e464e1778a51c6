use std::future::Future;

use reqwest::Client;
use serde::Deserialize;

use crate::types::VideoCandidate;

/// Video platform lookups the pipeline depends on.
pub trait VideoSource {
    type Error: std::fmt::Display + Send;

    /// Searches videos matching `topic`, in ranking order.
    fn search(
        &self,
        topic: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<VideoCandidate>, Self::Error>> + Send;

    /// Raw `viewCount` statistic for a single video.
    fn view_count(&self, video_id: &str)
        -> impl Future<Output = Result<String, Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: status {status}")]
    Api { status: u16, message: String },
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),
}

/// YouTube Data API v3 client
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub const MAX_RESULTS_LIMIT: u32 = 50;

    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            // the url carries the api key
            .map_err(reqwest::Error::without_url)
            .inspect_err(|e| tracing::error!(error = %e, path, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::error!(status, %message, path, "YouTube API error");
            return Err(YouTubeError::Api { status, message });
        }

        resp.json::<T>()
            .await
            .map_err(reqwest::Error::without_url)
            .inspect_err(|e| tracing::error!(error = %e, path, "Malformed YouTube response"))
            .map_err(YouTubeError::from)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
}

impl SearchResponse {
    /// Channel or playlist hits carry no `videoId` and are skipped.
    fn into_candidates(self) -> Vec<VideoCandidate> {
        self.items
            .into_iter()
            .filter_map(|item| {
                Some(VideoCandidate {
                    video_id: item.id.video_id?,
                    title: item.snippet.title,
                    description: item.snippet.description,
                })
            })
            .collect()
    }
}

impl VideosResponse {
    fn into_view_count(self) -> Result<String, YouTubeError> {
        let item = self
            .items
            .into_iter()
            .next()
            .ok_or(YouTubeError::MissingField("items"))?;

        item.statistics
            .and_then(|s| s.view_count)
            .ok_or(YouTubeError::MissingField("statistics.viewCount"))
    }
}

impl VideoSource for YouTubeClient {
    type Error = YouTubeError;

    #[tracing::instrument(skip(self))]
    async fn search(
        &self,
        topic: &str,
        max_results: u32,
    ) -> Result<Vec<VideoCandidate>, YouTubeError> {
        let max_results = max_results.clamp(1, Self::MAX_RESULTS_LIMIT).to_string();

        let response: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("maxResults", max_results.as_str()),
                    ("q", topic),
                ],
            )
            .await?;

        let candidates = response.into_candidates();
        tracing::debug!(count = candidates.len(), "Search returned candidates");
        Ok(candidates)
    }

    #[tracing::instrument(skip(self))]
    async fn view_count(&self, video_id: &str) -> Result<String, YouTubeError> {
        let response: VideosResponse = self
            .get_json("videos", &[("part", "statistics"), ("id", video_id)])
            .await?;

        response.into_view_count()
    }
}
