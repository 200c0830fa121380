//! Fixed row-major scan over a mask
//!
//! The scan order decides which tile lands where, so it is part of the
//! reproducibility contract: top to bottom, then left to right.

use crate::raster::Mask;

/// A foreground pixel visited by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCell {
    /// Column in the source raster
    pub x: u32,
    /// Row in the source raster
    pub y: u32,
    /// Mask opacity at this pixel, never zero
    pub opacity: u8,
    /// Position in the tile sequence assigned to this pixel
    pub sequence_index: usize,
}

/// Foreground pixels in scan order with their precomputed sequence positions
///
/// Each cell knows its own sequence index, so rendering a cell never depends
/// on a shared cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    cells: Vec<ScanCell>,
}

impl ScanPlan {
    /// Visit the mask row by row and number every foreground pixel
    pub fn from_mask(mask: &Mask) -> Self {
        let (width, height) = mask.dimensions();
        let mut cells = Vec::with_capacity(mask.foreground_count());

        for (row, col) in scan_order(width, height) {
            let opacity = mask.opacity(row as usize, col as usize);
            if opacity == 0 {
                continue;
            }
            cells.push(ScanCell {
                x: col,
                y: row,
                opacity,
                sequence_index: cells.len(),
            });
        }

        Self { cells }
    }

    /// Foreground cells in scan order
    pub fn cells(&self) -> &[ScanCell] {
        &self.cells
    }

    /// Number of foreground cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mask had no foreground at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Row-major `(row, col)` coordinates of a `width` x `height` grid
pub fn scan_order(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
}
