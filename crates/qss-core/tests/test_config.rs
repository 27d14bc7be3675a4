use qss_core::color::ColorSpace;
use qss_core::error::ErrorKind;
use qss_core::filters::ResizeFilter;
use qss_core::pipeline::config::{
    MapFormat, PipelineConfig, Precision, PreprocessConfig, ScaleOutput, SmoothingConfig,
};
use qss_core::pipeline::PipelineStage;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config() {
    let config = PipelineConfig::default();
    assert_eq!(config.format, MapFormat::Tiff);
    assert_eq!(config.saliency.precision, Precision::Double);
    assert_eq!(config.preprocess, PreprocessConfig::default());
    assert_eq!(config.preprocess.resize_filter, ResizeFilter::Triangle);
    assert_eq!(config.postprocess.scale_output, ScaleOutput::MinMax);
    assert!(config.postprocess.resize_to_input);
    assert_eq!(config.postprocess.smoothing.active_fraction(), Some(0.045));

    let k = -1.0 / 3f64.sqrt();
    let [a, b, c, d] = config.saliency.axis;
    assert_eq!(a, 0.0);
    for v in [b, c, d] {
        assert!((v - k).abs() < 1e-15);
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_new_sets_paths() {
    let config = PipelineConfig::new("a.jpg", "b.png");
    assert_eq!(config.input.to_str(), Some("a.jpg"));
    assert_eq!(config.output.to_str(), Some("b.png"));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_enum_display() {
    assert_eq!(format!("{}", Precision::Single), "Single (f32)");
    assert_eq!(format!("{}", Precision::Double), "Double (f64)");
    assert_eq!(format!("{}", ScaleOutput::MinMax), "Min-max");
    assert_eq!(format!("{}", ScaleOutput::Raw), "Raw");
    assert_eq!(format!("{}", MapFormat::Tiff), "TIFF (16-bit)");
    assert_eq!(MapFormat::Png.extension(), "png");
}

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Reading), "Reading image");
    assert_eq!(format!("{}", PipelineStage::Saliency), "Computing saliency");
    assert_eq!(format!("{}", PipelineStage::Writing), "Writing output");
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip() {
    let mut config = PipelineConfig::new("in.png", "out.png");
    config.saliency.precision = Precision::Single;
    config.preprocess.color_space = ColorSpace::Lab;
    config.postprocess.smoothing = SmoothingConfig {
        enabled: false,
        sigma_fraction: 0.1,
    };
    config.postprocess.scale_output = ScaleOutput::Raw;

    let text = config.to_toml_string().unwrap();
    let parsed = PipelineConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let text = r#"
input = "photo.jpg"
output = "map.tiff"

[preprocess]
color_space = "Lab"

[postprocess.smoothing]
sigma_fraction = 0.02
"#;
    let config = PipelineConfig::from_toml_str(text).unwrap();
    assert_eq!(config.preprocess.color_space, ColorSpace::Lab);
    assert_eq!(config.preprocess.resize_filter, ResizeFilter::Triangle);
    assert_eq!(config.postprocess.smoothing.active_fraction(), Some(0.02));
    assert!(config.postprocess.resize_to_input);
    assert_eq!(config.saliency.precision, Precision::Double);
}

#[test]
fn test_bad_toml_is_config_error() {
    let err = PipelineConfig::from_toml_str("input = 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qss.toml");
    let config = PipelineConfig::new("x.png", "y.tiff");
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    assert_eq!(PipelineConfig::load(&path).unwrap(), config);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_degenerate_axis() {
    let mut config = PipelineConfig::default();
    config.saliency.axis = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::DegenerateAxis);
}

#[test]
fn test_validate_rejects_bad_sigma_only_when_enabled() {
    let mut config = PipelineConfig::default();
    config.postprocess.smoothing.sigma_fraction = -0.5;
    assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);

    config.postprocess.smoothing.enabled = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_axis_conversion_to_single() {
    let config = PipelineConfig::default();
    let axis = config.saliency.axis::<f32>().unwrap();
    let [_, b, _, _] = axis.to_array();
    assert!((b + 0.577_350_3).abs() < 1e-6);
}
