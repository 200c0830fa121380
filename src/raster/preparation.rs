//! Source and tile preparation ahead of masking and composition

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, ensure_nonempty, invalid_parameter};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbaImage};

/// Uniformly rescale a raster with bilinear filtering
///
/// Each output dimension is `floor(dimension * factor)`.
///
/// # Errors
///
/// Returns an error if:
/// - `factor` is not a finite positive number
/// - The raster, or the rescaled result, has zero area
/// - A rescaled side exceeds `MAX_CANVAS_DIMENSION`
pub fn resize_by_factor(raster: &RgbaImage, factor: f64) -> Result<RgbaImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid_parameter(
            "scale",
            &factor,
            &"must be a finite positive number",
        ));
    }
    ensure_nonempty(raster.width(), raster.height())?;

    let scaled_width = (f64::from(raster.width()) * factor).floor();
    let scaled_height = (f64::from(raster.height()) * factor).floor();
    let limit = f64::from(MAX_CANVAS_DIMENSION);
    if scaled_width > limit || scaled_height > limit {
        return Err(invalid_parameter(
            "scale",
            &factor,
            &format!(
                "rescaled {}x{} raster exceeds {MAX_CANVAS_DIMENSION} pixels per side",
                raster.width(),
                raster.height()
            ),
        ));
    }
    let width = scaled_width as u32;
    let height = scaled_height as u32;
    ensure_nonempty(width, height)?;

    if (width, height) == raster.dimensions() {
        return Ok(raster.clone());
    }
    Ok(imageops::resize(raster, width, height, FilterType::Triangle))
}

/// Convert any decoded image to an 8-bit grayscale tile
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Fit a grayscale tile inside a square cell, preserving aspect ratio
///
/// Returns the resized tile and its offset inside the cell so the tile sits centered.
///
/// # Errors
///
/// Returns an error if the tile has zero area or `cell_size` is zero
pub fn fit_to_cell(tile: &GrayImage, cell_size: u32) -> Result<(GrayImage, (u32, u32))> {
    ensure_nonempty(tile.width(), tile.height())?;
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least 1",
        ));
    }

    let (width, height) = tile.dimensions();
    let cell = f64::from(cell_size);
    let scale = (cell / f64::from(width)).min(cell / f64::from(height));
    let fitted_width = ((f64::from(width) * scale).round() as u32).clamp(1, cell_size);
    let fitted_height = ((f64::from(height) * scale).round() as u32).clamp(1, cell_size);

    let fitted = if (fitted_width, fitted_height) == (width, height) {
        tile.clone()
    } else {
        imageops::resize(tile, fitted_width, fitted_height, FilterType::Triangle)
    };

    let offset = ((cell_size - fitted_width) / 2, (cell_size - fitted_height) / 2);
    Ok((fitted, offset))
}
