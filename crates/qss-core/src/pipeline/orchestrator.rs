use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use ndarray::Array2;
use tracing::{info, warn};

use crate::error::{QssError, Result};
use crate::filters::{gaussian_blur, min_max_normalize, resize_map, smoothing_sigma, ResizeFilter};
use crate::io::image_io::{patch_from_image, save_map};
use crate::sample::Sample;
use crate::saliency::qdct_saliency;

use super::config::{PipelineConfig, PostprocessConfig, Precision, ScaleOutput};
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run the pipeline on `config.input`, writing the map to `config.output`.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

/// [`run_pipeline`] with a thread-safe progress reporter.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    config.validate()?;
    process_file(&config.input, &config.output, config, reporter.as_ref())
}

/// Decode, compute and post-process one image without touching the disk.
pub fn saliency_for_image(img: &DynamicImage, config: &PipelineConfig) -> Result<PipelineOutput> {
    config.validate()?;
    compute(img, config, &NoOpReporter)
}

/// Run the pipeline on every regular file of the directory `config.input`
/// (sorted, non-recursive), writing `<stem>.<format>` into `config.output`.
///
/// Files that fail to decode are skipped with a warning, as are files whose
/// output name was already written by an earlier file (`a.jpg` then `a.png`).
/// Returns the written paths in processing order.
pub fn run_directory(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    run_directory_reported(config, Arc::new(NoOpReporter))
}

/// [`run_directory`] with a progress reporter; one work item per file.
pub fn run_directory_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(&config.input)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(QssError::EmptyInput(config.input.clone()));
    }

    std::fs::create_dir_all(&config.output)?;
    info!(
        files = files.len(),
        input = %config.input.display(),
        output = %config.output.display(),
        "Processing directory"
    );

    reporter.begin_stage(PipelineStage::Saliency, Some(files.len()));
    let mut written = Vec::with_capacity(files.len());
    let mut claimed = HashSet::new();
    for (i, path) in files.iter().enumerate() {
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(config.format.extension());
        let out = config.output.join(name);
        if claimed.contains(&out) {
            warn!(
                path = %path.display(),
                output = %out.display(),
                "Skipping file whose output name is already taken"
            );
            reporter.advance(i + 1);
            continue;
        }

        match process_file(path, &out, config, &NoOpReporter) {
            Ok(_) => {
                claimed.insert(out.clone());
                written.push(out);
            }
            Err(QssError::ImageError(e)) => {
                warn!(path = %path.display(), error = %e, "Skipping undecodable file");
            }
            Err(e) => return Err(e),
        }
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    if written.is_empty() {
        return Err(QssError::EmptyInput(config.input.clone()));
    }
    info!(written = written.len(), "Directory complete");
    Ok(written)
}

fn process_file(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let img = image::open(input)?;
    info!(
        path = %input.display(),
        width = img.width(),
        height = img.height(),
        "Image decoded"
    );
    reporter.finish_stage();

    let result = compute(&img, config, reporter)?;

    reporter.begin_stage(PipelineStage::Writing, None);
    save_map(&result.map, output)?;
    info!(path = %output.display(), "Saliency map written");
    reporter.finish_stage();

    Ok(result)
}

fn compute(
    img: &DynamicImage,
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    let (raw, source_width, source_height) = match config.saliency.precision {
        Precision::Single => saliency_at::<f32>(img, config, reporter)?,
        Precision::Double => saliency_at::<f64>(img, config, reporter)?,
    };

    reporter.begin_stage(PipelineStage::Postprocessing, None);
    let map = postprocess(&raw, &config.postprocess, (source_width, source_height))?;
    reporter.finish_stage();

    Ok(PipelineOutput {
        map,
        raw,
        source_width,
        source_height,
    })
}

fn saliency_at<T: Sample>(
    img: &DynamicImage,
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<(Array2<f32>, usize, usize)> {
    let axis = config.saliency.axis::<T>()?;

    reporter.begin_stage(PipelineStage::Preprocessing, None);
    let patch = patch_from_image::<T>(img, &config.preprocess)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Saliency, None);
    let map = qdct_saliency(&patch.image, &axis);
    info!(
        precision = T::NAME,
        color_space = %config.preprocess.color_space,
        "Saliency computed"
    );
    reporter.finish_stage();

    Ok((
        map.mapv(|v| v.as_f64() as f32),
        patch.source_width,
        patch.source_height,
    ))
}

/// Smooth, optionally resize to `source` `(width, height)`, then scale.
pub fn postprocess(
    raw: &Array2<f32>,
    config: &PostprocessConfig,
    source: (usize, usize),
) -> Result<Array2<f32>> {
    let mut map = match config.smoothing.active_fraction() {
        Some(fraction) => gaussian_blur(raw, smoothing_sigma(fraction, raw.ncols())),
        None => raw.clone(),
    };

    if config.resize_to_input {
        let (width, height) = source;
        map = resize_map(&map, width, height, ResizeFilter::default())?;
    }

    Ok(match config.scale_output {
        ScaleOutput::MinMax => min_max_normalize(&map),
        ScaleOutput::Raw => map,
    })
}
