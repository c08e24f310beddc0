//! qrcrop entrypoint

use clap::Parser;
use qrcrop::output::{RenderedOutcome, render_error, render_extraction};
use qrcrop::{Cropper, QrCropConfig, Result, logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qrcrop",
    version,
    about = "Crop the QR code panel out of a photo using fixed fractions"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrcrop.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Image to crop
    #[arg(long, short, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Where to write the cropped image (extension selects the format)
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Left edge as a fraction of the width
    #[arg(long, value_name = "FRACTION")]
    left: Option<f64>,

    /// Top edge as a fraction of the height
    #[arg(long, value_name = "FRACTION")]
    top: Option<f64>,

    /// Right edge as a fraction of the width
    #[arg(long, value_name = "FRACTION")]
    right: Option<f64>,

    /// Bottom edge as a fraction of the height
    #[arg(long, value_name = "FRACTION")]
    bottom: Option<f64>,

    /// Output results as formatted JSON instead of a human-readable line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => {
            emit(&rendered, cli.json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "Extraction failed");
            emit(&render_error(&err), cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RenderedOutcome> {
    let mut config = QrCropConfig::load(cli.config.as_deref())?;

    if let Some(ref input) = cli.input {
        config.crop.input_path = input.clone();
    }
    if let Some(ref output) = cli.output {
        config.crop.output_path = output.clone();
    }
    if let Some(left) = cli.left {
        config.crop.left_fraction = left;
    }
    if let Some(top) = cli.top {
        config.crop.top_fraction = top;
    }
    if let Some(right) = cli.right {
        config.crop.right_fraction = right;
    }
    if let Some(bottom) = cli.bottom {
        config.crop.bottom_fraction = bottom;
    }

    logging::init(&config.logging)?;
    config.validate()?;

    let fractions = config.crop.fractions();
    info!(
        input = %config.crop.input_path.display(),
        output = %config.crop.output_path.display(),
        ?fractions,
        "Cropping image"
    );

    let cropper = Cropper::new(fractions);
    let extraction = cropper.extract(&config.crop.input_path, &config.crop.output_path)?;
    Ok(render_extraction(&extraction))
}

fn emit(rendered: &RenderedOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(&rendered.json) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{}", rendered.json),
        }
    } else {
        println!("{}", rendered.human);
    }
}
