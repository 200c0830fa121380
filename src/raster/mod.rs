//! Raster preparation and foreground masking
//!
//! This module contains raster-level functionality including:
//! - Background removal and opacity masks
//! - The tile library shared by allocation and composition
//! - Rescaling, grayscale conversion and cell fitting

/// Grayscale tile lookup by identifier
pub mod library;
/// Alpha masking and foreground opacity grids
pub mod masking;
/// Resizing and grayscale conversion helpers
pub mod preparation;

pub use library::TileLibrary;
pub use masking::{AlphaMasker, Mask, MaskSource};
