use crate::{
    config::{CoverMode, PipelineOptions},
    openai::{ImageGenerator, Summarizer},
    picker::{CandidatePicker, FirstPicker},
    youtube::VideoSource,
    SummaryPipeline,
};

pub struct SummaryPipelineBuilder<V = (), S = (), I = (), P = FirstPicker> {
    videos: V,
    summarizer: S,
    images: I,
    picker: P,
    options: PipelineOptions,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            videos: (),
            summarizer: (),
            images: (),
            picker: FirstPicker,
            options: PipelineOptions::default(),
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S, I, P> SummaryPipelineBuilder<V, S, I, P> {
    pub fn videos<V2: VideoSource + Send + Sync + 'static>(
        self,
        videos: V2,
    ) -> SummaryPipelineBuilder<V2, S, I, P> {
        SummaryPipelineBuilder {
            videos,
            summarizer: self.summarizer,
            images: self.images,
            picker: self.picker,
            options: self.options,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<V, S2, I, P> {
        SummaryPipelineBuilder {
            videos: self.videos,
            summarizer,
            images: self.images,
            picker: self.picker,
            options: self.options,
        }
    }

    pub fn images<I2: ImageGenerator + Send + Sync + 'static>(
        self,
        images: I2,
    ) -> SummaryPipelineBuilder<V, S, I2, P> {
        SummaryPipelineBuilder {
            videos: self.videos,
            summarizer: self.summarizer,
            images,
            picker: self.picker,
            options: self.options,
        }
    }

    pub fn picker<P2: CandidatePicker + Send + Sync + 'static>(
        self,
        picker: P2,
    ) -> SummaryPipelineBuilder<V, S, I, P2> {
        SummaryPipelineBuilder {
            videos: self.videos,
            summarizer: self.summarizer,
            images: self.images,
            picker,
            options: self.options,
        }
    }

    pub fn options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.options.max_results = max_results;
        self
    }

    pub fn cover_mode(mut self, cover_mode: CoverMode) -> Self {
        self.options.cover_mode = cover_mode;
        self
    }
}

impl<V, S, I, P> SummaryPipelineBuilder<V, S, I, P>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    I: ImageGenerator + Send + Sync + 'static,
    P: CandidatePicker + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<V, S, I, P> {
        SummaryPipeline::new(
            self.videos,
            self.summarizer,
            self.images,
            self.picker,
            self.options,
        )
    }
}
