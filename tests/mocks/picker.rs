use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use topic_video_summarizer::picker::CandidatePicker;

/// Replays a fixed list of indices, then falls back to 0
#[derive(Clone, Default)]
pub struct SequencePicker {
    pub picks: Arc<Mutex<VecDeque<usize>>>,
    pub lens: Arc<Mutex<Vec<usize>>>,
}

impl SequencePicker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: Arc::new(Mutex::new(picks.into_iter().collect())),
            lens: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CandidatePicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        self.lens.lock().unwrap().push(len);
        self.picks.lock().unwrap().pop_front().unwrap_or(0)
    }
}
