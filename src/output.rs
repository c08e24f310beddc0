//! Console rendering of an extraction outcome

use crate::crop::Extraction;
use crate::error::Error;
use serde_json::{Value, json};

/// Combined structured and human-readable representation of an outcome
#[derive(Debug, Clone)]
pub struct RenderedOutcome {
    /// Structured JSON representation suitable for scripts
    pub json: Value,
    /// Single line for terminal presentation
    pub human: String,
}

/// Render a successful extraction.
pub fn render_extraction(extraction: &Extraction) -> RenderedOutcome {
    let (source_width, source_height) = extraction.source_dimensions;
    let (width, height) = extraction.output_dimensions();
    let json = json!({
        "input": extraction.input.display().to_string(),
        "output": extraction.output.display().to_string(),
        "source": { "width": source_width, "height": source_height },
        "crop_box": extraction.crop_box,
        "size": { "width": width, "height": height },
    });

    RenderedOutcome {
        json,
        human: format!("QR Code extracted to {}", extraction.output.display()),
    }
}

/// Render a failure. Every error kind collapses to the same one-line shape.
pub fn render_error(err: &Error) -> RenderedOutcome {
    let message = err.to_string();
    RenderedOutcome {
        human: format!("Error: {message}"),
        json: json!({ "error": message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::CropBox;
    use std::path::PathBuf;

    #[test]
    fn renders_success_line_and_json() {
        let extraction = Extraction {
            input: PathBuf::from("in/IMG_6328.jpg"),
            output: PathBuf::from("out/qrcode_extracted.jpg"),
            source_dimensions: (1000, 800),
            crop_box: CropBox {
                left: 420,
                top: 520,
                right: 580,
                bottom: 680,
            },
        };

        let rendered = render_extraction(&extraction);
        assert_eq!(
            rendered.human,
            "QR Code extracted to out/qrcode_extracted.jpg"
        );
        assert_eq!(rendered.json["crop_box"]["right"], 580);
        assert_eq!(rendered.json["size"]["width"], 160);
        assert_eq!(rendered.json["source"]["height"], 800);
    }

    #[test]
    fn renders_error_line() {
        let err = Error::NotFound(PathBuf::from("nope.jpg"));
        let rendered = render_error(&err);
        assert_eq!(rendered.human, "Error: No such file: nope.jpg");
        assert_eq!(rendered.json["error"], "No such file: nope.jpg");
    }
}
