//! Load, crop and save a single image

use crate::crop::{CropBox, CropFractions};
use crate::error::{Error, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Outcome of a successful [`Cropper::extract`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Source image path
    pub input: PathBuf,
    /// Written image path
    pub output: PathBuf,
    /// `(width, height)` of the decoded source
    pub source_dimensions: (u32, u32),
    /// Region that was retained
    pub crop_box: CropBox,
}

impl Extraction {
    /// `(width, height)` of the written image
    pub fn output_dimensions(&self) -> (u32, u32) {
        self.crop_box.dimensions()
    }
}

/// Percentage-based cropper
#[derive(Debug, Clone, Default)]
pub struct Cropper {
    fractions: CropFractions,
}

impl Cropper {
    /// Create a cropper for the given fractions
    pub fn new(fractions: CropFractions) -> Self {
        Self { fractions }
    }

    /// Fractions this cropper applies
    pub fn fractions(&self) -> &CropFractions {
        &self.fractions
    }

    /// Crop box for a decoded raster
    pub fn crop_box(&self, img: &DynamicImage) -> CropBox {
        let (width, height) = img.dimensions();
        CropBox::from_fractions(width, height, &self.fractions)
    }

    /// Extract the crop region into a new raster. The source is left untouched.
    pub fn crop(&self, img: &DynamicImage) -> (CropBox, DynamicImage) {
        let bbox = self.crop_box(img);
        let cropped = img.crop_imm(bbox.left, bbox.top, bbox.width(), bbox.height());
        (bbox, cropped)
    }

    /// Decode the image at `path`, sniffing the format from its content.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        let reader = ImageReader::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let reader = reader
            .with_guessed_format()
            .map_err(|e| Error::decode(path, e))?;

        reader.decode().map_err(|e| Error::decode(path, e))
    }

    /// Encode `img` with the codec implied by `path`'s extension and write it.
    ///
    /// Encoding happens fully in memory first, so an encoder failure never
    /// touches the destination.
    pub fn save(&self, img: &DynamicImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).map_err(|e| Error::encode(path, e))?;

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format)
            .map_err(|e| Error::encode(path, e))?;

        fs::write(path, buf.into_inner()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Run the whole operation: load, crop, save.
    pub fn extract(&self, input: &Path, output: &Path) -> Result<Extraction> {
        let img = self.load(input)?;
        let source_dimensions = img.dimensions();
        tracing::debug!(
            input = %input.display(),
            width = source_dimensions.0,
            height = source_dimensions.1,
            color = ?img.color(),
            "Decoded source image"
        );

        let (crop_box, cropped) = self.crop(&img);
        tracing::debug!(?crop_box, "Computed crop box");

        if crop_box.is_empty() {
            return Err(Error::encode(
                output,
                format!(
                    "crop box {crop_box:?} is empty for a {}x{} source",
                    source_dimensions.0, source_dimensions.1
                ),
            ));
        }

        self.save(&cropped, output)?;
        tracing::info!(
            output = %output.display(),
            width = crop_box.width(),
            height = crop_box.height(),
            "Wrote cropped image"
        );

        Ok(Extraction {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            source_dimensions,
            crop_box,
        })
    }
}
