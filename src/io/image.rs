//! Source sprite loading and PNG export of finished canvases

use crate::io::error::{MosaicError, Result, ensure_nonempty};
use crate::raster::preparation::resize_by_factor;
use image::RgbaImage;
use std::path::Path;

/// Load a sprite as RGBA and rescale it by `scale_factor`
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image, or the rescaled image, has zero area
/// - `scale_factor` is not a finite positive number
pub fn load_source(path: &Path, scale_factor: f64) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = image.to_rgba8();
    ensure_nonempty(rgba.width(), rgba.height())?;
    resize_by_factor(&rgba, scale_factor)
}

/// Export a canvas as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
