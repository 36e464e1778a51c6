use std::sync::{Arc, Mutex};

use topic_video_summarizer::{types::VideoCandidate, youtube::VideoSource};

#[derive(Clone, Default)]
pub struct MockVideoSource {
    pub candidates: Vec<VideoCandidate>,
    pub view_count: String,
    pub search_fail_with: Option<String>,
    pub stats_fail_with: Option<String>,
    pub search_calls: Arc<Mutex<Vec<(String, u32)>>>,
    pub stats_calls: Arc<Mutex<Vec<String>>>,
}

impl MockVideoSource {
    pub fn new(candidates: Vec<VideoCandidate>, view_count: &str) -> Self {
        Self {
            candidates,
            view_count: view_count.to_string(),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), "0")
    }

    pub fn failing_search(msg: &str) -> Self {
        Self {
            search_fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_stats(mut self, msg: &str) -> Self {
        self.stats_fail_with = Some(msg.to_string());
        self
    }
}

impl VideoSource for MockVideoSource {
    type Error = anyhow::Error;

    async fn search(&self, topic: &str, max_results: u32) -> anyhow::Result<Vec<VideoCandidate>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((topic.to_string(), max_results));
        if let Some(ref msg) = self.search_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.candidates.clone())
    }

    async fn view_count(&self, video_id: &str) -> anyhow::Result<String> {
        self.stats_calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.stats_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.view_count.clone())
    }
}
