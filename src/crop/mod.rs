//! Fraction-based crop geometry
//!
//! The crop rectangle is expressed as fixed proportions of the source
//! image's width and height, so the same fractions scale with any
//! resolution of the photo.

mod cropper;

pub use cropper::{Cropper, Extraction};

use crate::error::{Error, Result};
use serde::Serialize;

/// Default left edge, as a fraction of the image width
pub const DEFAULT_LEFT: f64 = 0.42;
/// Default top edge, as a fraction of the image height
pub const DEFAULT_TOP: f64 = 0.65;
/// Default right edge, as a fraction of the image width
pub const DEFAULT_RIGHT: f64 = 0.58;
/// Default bottom edge, as a fraction of the image height
pub const DEFAULT_BOTTOM: f64 = 0.85;

/// Crop edges as proportions of the source dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropFractions {
    /// Left edge (fraction of width)
    pub left: f64,
    /// Top edge (fraction of height)
    pub top: f64,
    /// Right edge (fraction of width)
    pub right: f64,
    /// Bottom edge (fraction of height)
    pub bottom: f64,
}

impl Default for CropFractions {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT,
            top: DEFAULT_TOP,
            right: DEFAULT_RIGHT,
            bottom: DEFAULT_BOTTOM,
        }
    }
}

impl CropFractions {
    /// Create a new set of fractions (unchecked, see [`CropFractions::validate`])
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Check every edge lies in `[0, 1]` and that the edges are ordered.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{name} fraction must be within [0, 1], got {value}"
                )));
            }
        }

        if self.left >= self.right {
            return Err(Error::Config(format!(
                "left fraction ({}) must be smaller than right fraction ({})",
                self.left, self.right
            )));
        }
        if self.top >= self.bottom {
            return Err(Error::Config(format!(
                "top fraction ({}) must be smaller than bottom fraction ({})",
                self.top, self.bottom
            )));
        }

        Ok(())
    }
}

/// Pixel rectangle retained by a crop, half-open on both axes:
/// columns `[left, right)` and rows `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CropBox {
    /// First retained column
    pub left: u32,
    /// First retained row
    pub top: u32,
    /// One past the last retained column
    pub right: u32,
    /// One past the last retained row
    pub bottom: u32,
}

impl CropBox {
    /// Scale `fractions` onto a `width × height` raster, truncating each edge
    /// toward zero.
    pub fn from_fractions(width: u32, height: u32, fractions: &CropFractions) -> Self {
        Self {
            left: scale(width, fractions.left),
            top: scale(height, fractions.top),
            right: scale(width, fractions.right),
            bottom: scale(height, fractions.bottom),
        }
    }

    /// Number of retained columns
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Number of retained rows
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// `(width, height)` of the cropped raster
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// A box collapsed to zero area (tiny sources, e.g. 1×1)
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

fn scale(dimension: u32, fraction: f64) -> u32 {
    // float -> int `as` truncates toward zero and saturates
    (f64::from(dimension) * fraction) as u32
}
