use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use qss_core::color::ColorSpace;
use qss_core::pipeline::config::{MapFormat, PipelineConfig, Precision, ScaleOutput};
use qss_core::pipeline::{
    run_directory_reported, run_pipeline_reported, PipelineStage, ProgressReporter,
};
use tracing::debug;

use crate::summary::print_run_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorSpaceArg {
    Rgb,
    Lab,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrecisionArg {
    Single,
    Double,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Tiff,
    Png,
}

#[derive(Args)]
pub struct RunArgs {
    /// Input image file, or a directory of images
    pub input: PathBuf,

    /// Output map file, or output directory for directory input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pipeline config file (TOML); command-line flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated quaternion axis a,b,c,d (unit, pure imaginary)
    #[arg(long, allow_hyphen_values = true)]
    pub axis: Option<String>,

    /// Color encoding of the imaginary channels
    #[arg(long, value_enum)]
    pub color_space: Option<ColorSpaceArg>,

    /// Kernel floating-point precision
    #[arg(long, value_enum)]
    pub precision: Option<PrecisionArg>,

    /// Smoothing sigma as a fraction of the map width
    #[arg(long)]
    pub sigma: Option<f32>,

    /// Disable Gaussian smoothing
    #[arg(long)]
    pub no_smoothing: bool,

    /// Write raw values instead of min-max scaling
    #[arg(long)]
    pub raw: bool,

    /// Keep the 48x64 patch size instead of resizing to the input
    #[arg(long)]
    pub patch_size: bool,

    /// Map format for directory input
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Drives an indicatif bar from pipeline stage events.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        if let Some(total) = total_items {
            self.pb.set_length(total as u64);
            self.pb.set_position(0);
        }
        self.pb.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let directory = args.input.is_dir();
    let config = build_config(args, directory)?;
    print_run_summary(&config, directory);

    if directory {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        let reporter = Arc::new(BarReporter { pb: pb.clone() });
        let written = run_directory_reported(&config, reporter)?;
        pb.finish_with_message("Done");
        println!(
            "\n{} map(s) saved to {}",
            written.len(),
            config.output.display()
        );
    } else {
        let pb = ProgressBar::new_spinner();
        let reporter = Arc::new(BarReporter { pb: pb.clone() });
        let output = run_pipeline_reported(&config, reporter)?;
        pb.finish_with_message("Done");
        let (h, w) = output.map.dim();
        println!("\n{}x{} map saved to {}", w, h, config.output.display());
    }

    Ok(())
}

fn build_config(args: &RunArgs, directory: bool) -> Result<PipelineConfig> {
    let mut config = match args.config {
        Some(ref path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    config.input = args.input.clone();
    config.output = match args.output {
        Some(ref out) => out.clone(),
        None if directory => default_output_dir(&args.input),
        None if args.config.is_some() => config.output.clone(),
        None => PathBuf::from("saliency.tiff"),
    };

    if let Some(ref axis) = args.axis {
        config.saliency.axis = parse_axis(axis)?;
    }
    if let Some(space) = args.color_space {
        config.preprocess.color_space = match space {
            ColorSpaceArg::Rgb => ColorSpace::Rgb,
            ColorSpaceArg::Lab => ColorSpace::Lab,
        };
    }
    if let Some(precision) = args.precision {
        config.saliency.precision = match precision {
            PrecisionArg::Single => Precision::Single,
            PrecisionArg::Double => Precision::Double,
        };
    }
    if let Some(sigma) = args.sigma {
        config.postprocess.smoothing.sigma_fraction = sigma;
    }
    if args.no_smoothing {
        config.postprocess.smoothing.enabled = false;
    }
    if args.raw {
        config.postprocess.scale_output = ScaleOutput::Raw;
    }
    if args.patch_size {
        config.postprocess.resize_to_input = false;
    }
    if let Some(format) = args.format {
        config.format = match format {
            FormatArg::Tiff => MapFormat::Tiff,
            FormatArg::Png => MapFormat::Png,
        };
    }

    config.validate().context("Invalid pipeline config")?;
    debug!(?config, "Resolved pipeline config");
    Ok(config)
}

fn parse_axis(text: &str) -> Result<[f64; 4]> {
    let values: Vec<f64> = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid axis '{}'", text))?;
    match values.as_slice() {
        &[a, b, c, d] => Ok([a, b, c, d]),
        _ => bail!("Axis needs 4 comma-separated values, got {}", values.len()),
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "images".to_string());
    input.with_file_name(format!("{}_saliency", name))
}
