//! Mosaic composition from a mask, a tile library and a tile sequence

/// Tinting and blending tiles onto the canvas
pub mod composer;
/// Masking, allocation and composition chained into one job
pub mod pipeline;
/// Fixed scan order and per-pixel sequence assignment
pub mod scan;

pub use composer::MosaicComposer;
pub use pipeline::{MosaicJob, MosaicOutput};
pub use scan::{ScanCell, ScanPlan};
