//! qrcrop - cut a QR code panel out of a photo
//!
//! The region is not detected: it is a fixed rectangle expressed as
//! fractions of the image's width and height (by default 42%-58% across and
//! 65%-85% down), scaled onto whatever resolution the photo has.
//!
//! # Example
//!
//! ```no_run
//! use qrcrop::{Cropper, CropFractions};
//! use std::path::Path;
//!
//! fn main() -> qrcrop::Result<()> {
//!     let cropper = Cropper::new(CropFractions::default());
//!     let extraction = cropper.extract(Path::new("IMG_6328.jpg"), Path::new("qrcode.jpg"))?;
//!
//!     println!("QR Code extracted to {}", extraction.output.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod crop;
pub mod error;
pub mod logging;
pub mod output;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{CropOptions, LogRotation, LoggingOptions, QrCropConfig};
pub use crop::{CropBox, CropFractions, Cropper, Extraction};
