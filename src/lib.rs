//! Mosaic synthesis that rebuilds a sprite from many small weighted icon tiles
//!
//! The foreground of a source image is masked, a seeded shuffle decides which
//! icon covers each foreground pixel, and every icon is tinted to its pixel's
//! color and opacity before being blended onto the output canvas.

#![forbid(unsafe_code)]

/// Weight tables, tile counts and seeded tile sequences
pub mod allocation;
/// Scan order, composition and the end-to-end job
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Interpolation helpers for 8-bit channels
pub mod math;
/// Foreground masking, tile library and raster preparation
pub mod raster;
/// Grayscale-to-color gradients for tinting tiles
pub mod tint;

pub use io::error::{AllocationError, MosaicError, Result};
