use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use qss_core::adapter::{transform_host, HostArray, HostData, MemoryOrder, TransformRequest};
use qss_core::consts::{M, N};
use qss_core::filters::{min_max_normalize, ResizeFilter};
use qss_core::io::{load_gray_plane, save_map};

#[derive(Args)]
pub struct TransformArgs {
    /// Input image (converted to grayscale and resized to 48x64)
    pub input: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "transform.png")]
    pub output: PathBuf,

    /// Run the inverse (type-III) transform
    #[arg(long)]
    pub inverse: bool,

    /// Skip orthonormal scaling
    #[arg(long)]
    pub no_normalize: bool,

    /// Transform each 48-sample column only
    #[arg(long)]
    pub one_dimensional: bool,
}

pub fn run(args: &TransformArgs) -> Result<()> {
    let (plane, (src_w, src_h)) = load_gray_plane(&args.input, ResizeFilter::default())
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let host = HostArray::new(
        vec![M, N],
        MemoryOrder::RowMajor,
        HostData::F32(plane.iter().copied().collect()),
    );
    let request = TransformRequest {
        inverse: args.inverse,
        normalize: !args.no_normalize,
        one_dimensional: args.one_dimensional,
    };
    let coefficients = transform_host(&host, request)?.to_f64();

    // Forward spectra span several decades; compress before display.
    let magnitude = if args.inverse {
        coefficients.mapv(|c| c.abs() as f32)
    } else {
        coefficients.mapv(|c| c.abs().ln_1p() as f32)
    };
    save_map(&min_max_normalize(&magnitude), &args.output)?;

    println!("Input:      {} ({}x{})", args.input.display(), src_w, src_h);
    println!(
        "Transform:  {} {}{}",
        if args.one_dimensional { "1-D" } else { "2-D" },
        if args.inverse { "DCT-III" } else { "DCT-II" },
        if args.no_normalize { "" } else { ", orthonormal" }
    );
    println!("Saved to {}", args.output.display());

    Ok(())
}
