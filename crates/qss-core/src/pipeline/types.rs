use ndarray::Array2;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Preprocessing,
    Saliency,
    Postprocessing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Preprocessing => write!(f, "Encoding patch"),
            Self::Saliency => write!(f, "Computing saliency"),
            Self::Postprocessing => write!(f, "Post-processing map"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of running the pipeline on one image.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Post-processed map, as written to disk.
    pub map: Array2<f32>,
    /// Kernel output on the 48x64 patch, before any post-processing.
    pub raw: Array2<f32>,
    pub source_width: usize,
    pub source_height: usize,
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// (e.g. files in a directory), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// Reporter that ignores every event.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
