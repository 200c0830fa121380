//! Foreground isolation for sprites
//!
//! Opaque sprites on a near-white background get a soft alpha channel derived
//! from luminance; sprites that already carry transparency use their own alpha.
//! Either way the result is reduced to a [`Mask`] of per-pixel opacity.

use crate::io::configuration::{DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_MASK_SOFTNESS};
use crate::io::error::{MosaicError, Result, ensure_nonempty, invalid_parameter};
use crate::math::interpolation::linear_stretch;
use image::{Pixel, Rgb, Rgba, RgbaImage};
use ndarray::Array2;

/// Removes a near-white background by writing a soft alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaMasker {
    threshold: u8,
    softness: u8,
}

impl Default for AlphaMasker {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BACKGROUND_THRESHOLD,
            softness: DEFAULT_MASK_SOFTNESS,
        }
    }
}

impl AlphaMasker {
    /// Create a masker with a background threshold and ramp width
    ///
    /// Pixels with luminance at or above `threshold` become fully transparent,
    /// pixels at or below `threshold - softness` fully opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `threshold` is zero
    /// - `softness` is zero or larger than `threshold`
    pub fn new(threshold: u8, softness: u8) -> Result<Self> {
        if threshold == 0 {
            return Err(invalid_parameter(
                "threshold",
                &threshold,
                &"must be greater than zero",
            ));
        }
        if softness == 0 || softness > threshold {
            return Err(invalid_parameter(
                "softness",
                &softness,
                &format!("must be between 1 and the threshold ({threshold})"),
            ));
        }
        Ok(Self {
            threshold,
            softness,
        })
    }

    /// Luminance at or above which a pixel is background
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Width of the opacity ramp below the threshold
    pub const fn softness(&self) -> u8 {
        self.softness
    }

    /// Opacity assigned to a pixel with the given RGB channels
    ///
    /// Existing alpha is ignored, which makes masking idempotent.
    pub fn opacity(&self, rgb: Rgb<u8>) -> u8 {
        let [luminance] = rgb.to_luma().0;
        let inverted = f32::from(u8::MAX - luminance);
        let low = f32::from(u8::MAX - self.threshold);
        linear_stretch(inverted, low, low + f32::from(self.softness))
    }

    /// Produce a copy of `raster` whose alpha channel marks the foreground
    ///
    /// RGB channels are preserved; the returned alpha ramps continuously near
    /// the threshold so silhouettes keep smooth edges.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRaster` if the raster has zero area
    pub fn compute_mask(&self, raster: &RgbaImage) -> Result<RgbaImage> {
        ensure_nonempty(raster.width(), raster.height())?;

        let mut masked = RgbaImage::new(raster.width(), raster.height());
        for (x, y, pixel) in raster.enumerate_pixels() {
            let [r, g, b, _] = pixel.0;
            let alpha = self.opacity(Rgb([r, g, b]));
            masked.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
        Ok(masked)
    }
}

/// How the foreground of a source raster is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSource {
    /// Use the raster's own alpha channel
    ExistingAlpha,
    /// Derive alpha from luminance against a white background
    WhiteBackground(AlphaMasker),
}

impl MaskSource {
    /// Return the raster with the alpha channel this source prescribes
    ///
    /// # Errors
    ///
    /// Returns `MalformedRaster` if the raster has zero area
    pub fn apply(&self, raster: &RgbaImage) -> Result<RgbaImage> {
        match self {
            Self::ExistingAlpha => {
                ensure_nonempty(raster.width(), raster.height())?;
                Ok(raster.clone())
            }
            Self::WhiteBackground(masker) => masker.compute_mask(raster),
        }
    }
}

/// Per-pixel opacity grid parallel to a source raster
///
/// Indexed as `(row, col)`; opacity 0 marks background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    opacity: Array2<u8>,
}

impl Mask {
    /// Extract the alpha channel of `raster` as a mask
    ///
    /// # Errors
    ///
    /// Returns `MalformedRaster` if the raster has zero area
    pub fn from_alpha(raster: &RgbaImage) -> Result<Self> {
        ensure_nonempty(raster.width(), raster.height())?;

        let rows = raster.height() as usize;
        let cols = raster.width() as usize;
        let mut opacity = Array2::zeros((rows, cols));
        for (x, y, pixel) in raster.enumerate_pixels() {
            let [_, _, _, alpha] = pixel.0;
            if let Some(cell) = opacity.get_mut((y as usize, x as usize)) {
                *cell = alpha;
            }
        }
        Ok(Self { opacity })
    }

    /// Build a mask directly from an opacity grid
    ///
    /// # Errors
    ///
    /// Returns `MalformedRaster` if the grid has zero area
    pub fn from_opacity(opacity: Array2<u8>) -> Result<Self> {
        let (rows, cols) = opacity.dim();
        if rows == 0 || cols == 0 {
            return Err(MosaicError::MalformedRaster {
                reason: format!("mask has zero area ({cols}x{rows})"),
            });
        }
        Ok(Self { opacity })
    }

    /// Mask size as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        let (rows, cols) = self.opacity.dim();
        (cols as u32, rows as u32)
    }

    /// Opacity at a position, 0 when out of bounds
    pub fn opacity(&self, row: usize, col: usize) -> u8 {
        self.opacity.get((row, col)).copied().unwrap_or(0)
    }

    /// Whether the position holds a foreground pixel
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.opacity(row, col) > 0
    }

    /// Number of foreground pixels, which is the tile budget of a mosaic
    pub fn foreground_count(&self) -> usize {
        self.opacity.iter().filter(|&&alpha| alpha > 0).count()
    }

    /// Borrow the underlying opacity grid
    pub const fn grid(&self) -> &Array2<u8> {
        &self.opacity
    }
}
