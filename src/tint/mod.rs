//! Recoloring grayscale tiles toward a source pixel

/// Color gradients and their application to tiles
pub mod gradient;

pub use gradient::{ColorMap, apply_gradient, build_gradient, tint_tile};
