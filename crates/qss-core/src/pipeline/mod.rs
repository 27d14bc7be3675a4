pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{
    postprocess, run_directory, run_directory_reported, run_pipeline, run_pipeline_reported,
    saliency_for_image,
};
pub use types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};
