//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, and the news ingestion pipeline.
pub mod news;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use news::{NewsPipeline, RunReport};
pub use pipeline::Pipeline;
