use std::{net::SocketAddr, time::Duration};

use clap::{Parser, ValueEnum};

use crate::{
    openai::CompletionParams,
    picker::{FirstPicker, Picker, RandomPicker},
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "topic-video-summarizer",
    about = "Finds a YouTube video for a topic and summarizes it"
)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Number of search results to request
    #[arg(long, env = "MAX_RESULTS", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..=50))]
    pub max_results: u32,

    /// How to choose among the search results
    #[arg(long, env = "SELECTION", value_enum, default_value_t = Selection::First)]
    pub selection: Selection,

    /// Cover returned with the summary
    #[arg(long = "cover", env = "COVER_MODE", value_enum, default_value_t = CoverMode::Generated)]
    pub cover_mode: CoverMode,

    /// Only origin allowed by CORS. All origins are allowed when unset
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Timeout applied to every outbound request
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    First,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoverMode {
    /// AI generated image, returned as `coverImage`
    Generated,
    /// Static YouTube thumbnail, returned as `thumbnail`
    Thumbnail,
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn picker(&self) -> Picker {
        match self.selection {
            Selection::First => Picker::First(FirstPicker),
            Selection::Random => Picker::Random(RandomPicker::new()),
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            max_results: self.max_results,
            cover_mode: self.cover_mode,
            summary: SummaryConfig::default(),
        }
    }
}

/// Per-request behaviour of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub max_results: u32,
    pub cover_mode: CoverMode,
    pub summary: SummaryConfig,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_results: 1,
            cover_mode: CoverMode::Generated,
            summary: SummaryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Characters of the description sent for summarization
    pub max_description_chars: usize,
    pub completion: CompletionParams,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_description_chars: 3000,
            completion: CompletionParams::default(),
        }
    }
}
