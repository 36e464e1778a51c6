pub mod builder;

use crate::{
    config::{CoverMode, PipelineOptions},
    error::AppError,
    openai::{ImageGenerator, Summarizer},
    picker::CandidatePicker,
    types::{CoverAsset, ResponsePayload, StageOutcome, VideoCandidate},
    youtube::VideoSource,
};

/// Fallback used whenever the statistics lookup fails
pub const DEFAULT_VIEW_COUNT: &str = "0";

/// Topic in, summarized video out.
///
/// Stages run one after the other. Only the search stage can fail the
/// request: statistics, summary and cover degrade to fallback values.
#[derive(Debug)]
pub struct SummaryPipeline<V, S, I, P>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    P: CandidatePicker + Send + Sync + 'static,
{
    videos: V,
    summarizer: S,
    images: I,
    picker: P,
    options: PipelineOptions,
}

impl<V, S, I, P> SummaryPipeline<V, S, I, P>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    P: CandidatePicker + Send + Sync + 'static,
{
    pub fn new(videos: V, summarizer: S, images: I, picker: P, options: PipelineOptions) -> Self {
        SummaryPipeline {
            videos,
            summarizer,
            images,
            picker,
            options,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(&self, topic: &str) -> Result<ResponsePayload, AppError> {
        let candidate = self.find_video(topic).await?;
        tracing::info!(video_id = %candidate.video_id, title = %candidate.title, "Selected video");

        let view_count = self.fetch_view_count(&candidate.video_id).await;
        let summary = self.summarize_description(&candidate.description).await;
        let cover = self.produce_cover(&candidate).await;

        for (stage, reason) in [
            ("statistics", view_count.reason()),
            ("summary", summary.reason()),
            ("cover", cover.reason()),
        ] {
            if let Some(reason) = reason {
                tracing::warn!(stage, reason, video_id = %candidate.video_id, "Returning degraded field");
            }
        }

        Ok(ResponsePayload {
            video_id: candidate.video_id,
            title: candidate.title,
            summary: summary.into_value(),
            view_count: view_count.into_value(),
            cover: cover.into_value(),
        })
    }

    /// Searches for `topic` and selects one result with the configured picker
    #[tracing::instrument(skip(self))]
    async fn find_video(&self, topic: &str) -> Result<VideoCandidate, AppError> {
        let mut candidates = self
            .videos
            .search(topic, self.options.max_results)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Video search failed");
                AppError::ExternalService(e.to_string())
            })?;

        if candidates.is_empty() {
            tracing::info!("No video matched topic");
            return Err(AppError::NotFound);
        }

        let idx = self.picker.pick(candidates.len());
        tracing::debug!(idx, count = candidates.len(), "Picked candidate");
        Ok(candidates.swap_remove(idx))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_view_count(&self, video_id: &str) -> StageOutcome<String> {
        match self.videos.view_count(video_id).await {
            Ok(count) => StageOutcome::Complete(count),
            Err(e) => StageOutcome::degraded(DEFAULT_VIEW_COUNT.to_string(), e),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn summarize_description(&self, description: &str) -> StageOutcome<String> {
        let settings = &self.options.summary;
        let content = truncate_chars(description, settings.max_description_chars);

        match self.summarizer.summarize(content, &settings.completion).await {
            Ok(summary) => StageOutcome::Complete(summary),
            Err(e) => StageOutcome::degraded(format!("Summary failed: {e}"), e),
        }
    }

    #[tracing::instrument(skip_all, fields(video_id = %candidate.video_id))]
    async fn produce_cover(&self, candidate: &VideoCandidate) -> StageOutcome<CoverAsset> {
        match self.options.cover_mode {
            CoverMode::Thumbnail => {
                StageOutcome::Complete(CoverAsset::Thumbnail(candidate.thumbnail_url()))
            }
            CoverMode::Generated => {
                match self.images.generate_image(&cover_prompt(&candidate.title)).await {
                    Ok(url) => StageOutcome::Complete(CoverAsset::Generated(url)),
                    Err(e) => StageOutcome::degraded(CoverAsset::Generated(String::new()), e),
                }
            }
        }
    }
}

pub fn cover_prompt(title: &str) -> String {
    format!(
        "Photo-realistic, cinematic cover image for: {title}. Use real-world lighting, \
         high definition detail, natural environment, modern people in work/study setting, \
         horizontal layout, sharp photo-style rendering."
    )
}

/// Longest prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
