use serde::{Deserialize, Serialize};

/// Body accepted by `POST /search_and_summarize`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub topic: Option<String>,
}

/// One video picked out of the search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub video_id: String,
    pub title: String,
    pub description: String,
}

impl VideoCandidate {
    const THUMBNAIL_URL_PREFIX: &'static str = "https://img.youtube.com/vi";

    /// Static thumbnail hosted by YouTube for this video. Never touches the network.
    pub fn thumbnail_url(&self) -> String {
        format!("{}/{}/hqdefault.jpg", Self::THUMBNAIL_URL_PREFIX, self.video_id)
    }
}

/// Cover shown next to the summary. The variant decides the JSON key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CoverAsset {
    /// AI generated image url, empty when generation failed
    #[serde(rename = "coverImage")]
    Generated(String),
    #[serde(rename = "thumbnail")]
    Thumbnail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsePayload {
    pub video_id: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "viewCount")]
    pub view_count: String,
    #[serde(flatten)]
    pub cover: CoverAsset,
}

/// Result of a best-effort stage. A degraded stage still carries a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    Complete(T),
    Degraded { value: T, reason: String },
}

impl<T> StageOutcome<T> {
    pub fn degraded(value: T, reason: impl ToString) -> Self {
        StageOutcome::Degraded {
            value,
            reason: reason.to_string(),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            StageOutcome::Complete(_) => None,
            StageOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            StageOutcome::Complete(value) | StageOutcome::Degraded { value, .. } => value,
        }
    }
}
