//! Mosaic composition: one tinted tile per foreground pixel
//!
//! The composer never returns a partial canvas. Coverage and tile resolution
//! are checked before anything is drawn, and every later failure discards the
//! canvas being built.

use crate::allocation::TileSequence;
use crate::compose::scan::ScanPlan;
use crate::io::configuration::{DEFAULT_CELL_SIZE, MAX_CANVAS_DIMENSION};
use crate::io::error::{AllocationError, MosaicError, Result, ensure_nonempty, invalid_parameter};
use crate::raster::preparation::fit_to_cell;
use crate::raster::{Mask, TileLibrary};
use crate::tint::tint_tile;
use image::imageops::overlay;
use image::{GrayImage, RgbaImage};
use std::collections::HashMap;

/// A library tile resized for the cell, with its centering offset
struct FittedTile {
    tile: GrayImage,
    offset: (u32, u32),
}

/// Draws tile mosaics onto a transparent canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicComposer {
    cell_size: u32,
}

impl Default for MosaicComposer {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl MosaicComposer {
    /// Create a composer drawing `cell_size` x `cell_size` pixels per source pixel
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero or exceeds the canvas limit
    pub fn new(cell_size: u32) -> Result<Self> {
        if cell_size == 0 || cell_size > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
            ));
        }
        Ok(Self { cell_size })
    }

    /// Edge length of one cell in canvas pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas size for a source of the given (width, height)
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas side would exceed `MAX_CANVAS_DIMENSION`
    pub fn canvas_dimensions(&self, source: (u32, u32)) -> Result<(u32, u32)> {
        let scale = |side: u32| {
            side.checked_mul(self.cell_size)
                .filter(|&scaled| scaled <= MAX_CANVAS_DIMENSION)
        };
        match (scale(source.0), scale(source.1)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!(
                    "canvas for {}x{} source exceeds {MAX_CANVAS_DIMENSION} pixels per side",
                    source.0, source.1
                ),
            )),
        }
    }

    /// Compose a mosaic, drawing one identifier per foreground pixel from `sequence`
    ///
    /// A successful call leaves `sequence` exhausted, so each mosaic needs a
    /// freshly allocated sequence. Failed calls leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source has zero area or differs in size from the mask
    /// - The canvas would exceed the size limit
    /// - `sequence` has fewer remaining identifiers than the mask has foreground pixels
    /// - A drawn identifier has no tile in `library`
    pub fn compose(
        &self,
        source: &RgbaImage,
        mask: &Mask,
        library: &TileLibrary,
        sequence: &mut TileSequence,
    ) -> Result<RgbaImage> {
        self.compose_with_progress(source, mask, library, sequence, |_, _| {})
    }

    /// Compose a mosaic, reporting `(cells_done, cells_total)` after every cell
    ///
    /// # Errors
    ///
    /// Same conditions as [`MosaicComposer::compose`]
    pub fn compose_with_progress<F>(
        &self,
        source: &RgbaImage,
        mask: &Mask,
        library: &TileLibrary,
        sequence: &mut TileSequence,
        mut on_progress: F,
    ) -> Result<RgbaImage>
    where
        F: FnMut(usize, usize),
    {
        ensure_nonempty(source.width(), source.height())?;
        if mask.dimensions() != source.dimensions() {
            return Err(MosaicError::DimensionMismatch {
                expected: source.dimensions(),
                found: mask.dimensions(),
            });
        }
        let (canvas_width, canvas_height) = self.canvas_dimensions(source.dimensions())?;

        let plan = ScanPlan::from_mask(mask);
        let coverage_error = |available_tiles| MosaicError::Coverage {
            foreground_pixels: plan.len(),
            available_tiles,
        };

        let upcoming = sequence
            .peek(plan.len())
            .ok_or_else(|| coverage_error(sequence.remaining()))?;
        let fitted = self.fit_tiles(upcoming, library)?;
        let drawn = sequence
            .take(plan.len())
            .ok_or_else(|| coverage_error(0))?;

        let mut canvas = RgbaImage::new(canvas_width, canvas_height);
        for (done, cell) in plan.cells().iter().enumerate() {
            let identifier = drawn
                .get(cell.sequence_index)
                .ok_or_else(|| coverage_error(drawn.len()))?;
            let fitted_tile = fitted.get(identifier).ok_or_else(|| {
                MosaicError::from(AllocationError::UnresolvedIdentifier {
                    identifier: identifier.clone(),
                })
            })?;
            let pixel = source
                .get_pixel_checked(cell.x, cell.y)
                .copied()
                .ok_or_else(|| MosaicError::DimensionMismatch {
                    expected: mask.dimensions(),
                    found: source.dimensions(),
                })?;

            let tinted = tint_tile(&fitted_tile.tile, pixel, cell.opacity);
            let x = cell.x * self.cell_size + fitted_tile.offset.0;
            let y = cell.y * self.cell_size + fitted_tile.offset.1;
            overlay(&mut canvas, &tinted, i64::from(x), i64::from(y));

            on_progress(done + 1, plan.len());
        }

        let leftover = sequence.remaining();
        if leftover > 0 {
            log::debug!("discarding {leftover} unused tiles");
        }
        sequence.exhaust();

        log::info!(
            "composed {} tiles onto a {canvas_width}x{canvas_height} canvas",
            plan.len()
        );
        Ok(canvas)
    }

    /// Resize each distinct upcoming tile once for this cell size
    fn fit_tiles(
        &self,
        identifiers: &[String],
        library: &TileLibrary,
    ) -> Result<HashMap<String, FittedTile>> {
        let mut fitted = HashMap::new();
        for identifier in identifiers {
            if fitted.contains_key(identifier) {
                continue;
            }
            let tile = library.get(identifier).ok_or_else(|| {
                MosaicError::from(AllocationError::UnresolvedIdentifier {
                    identifier: identifier.clone(),
                })
            })?;
            let (tile, offset) = fit_to_cell(tile, self.cell_size)?;
            fitted.insert(identifier.clone(), FittedTile { tile, offset });
        }
        Ok(fitted)
    }
}
