use console::Style;
use qss_core::pipeline::config::{PipelineConfig, ScaleOutput};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &PipelineConfig, directory: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("QSS Saliency"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    if directory {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Format"),
            s.method.apply_to(config.format)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Kernel"));
    let [a, b, c, d] = config.saliency.axis;
    println!(
        "    {:<12}{}",
        s.label.apply_to("Axis"),
        s.value
            .apply_to(format!("({:.4}, {:.4}, {:.4}, {:.4})", a, b, c, d))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Precision"),
        s.method.apply_to(config.saliency.precision)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Color"),
        s.method.apply_to(config.preprocess.color_space)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resize"),
        s.method.apply_to(config.preprocess.resize_filter)
    );
    println!();

    println!("  {}", s.header.apply_to("Post-processing"));
    match config.postprocess.smoothing.active_fraction() {
        Some(fraction) => println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            s.value.apply_to(format!("sigma {:.3} x width", fraction))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        if config.postprocess.resize_to_input {
            s.value.apply_to("input size")
        } else {
            s.disabled.apply_to("48x64 patch")
        }
    );
    let scale = match config.postprocess.scale_output {
        ScaleOutput::Raw => s.disabled.apply_to("raw".to_string()),
        other => s.method.apply_to(other.to_string()),
    };
    println!("    {:<12}{}", s.label.apply_to("Scale"), scale);
    println!();
}
