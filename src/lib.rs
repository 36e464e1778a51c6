pub mod config;
pub mod error;
pub mod handlers;
pub mod openai;
pub mod picker;
pub mod routes;
mod services;
pub mod types;
pub mod youtube;

pub use services::{
    builder::SummaryPipelineBuilder, cover_prompt, truncate_chars, SummaryPipeline,
    DEFAULT_VIEW_COUNT,
};
