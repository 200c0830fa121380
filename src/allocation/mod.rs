//! Turning a weight table into the ordered tiles of one mosaic

/// Weighted counts and seeded shuffling
pub mod allocator;
/// Single-use tile sequence with a cursor
pub mod sequence;
/// Weight entries and validated weight tables
pub mod weights;

pub use allocator::{allocate, allocation_counts};
pub use sequence::TileSequence;
pub use weights::{WeightEntry, WeightTable};
