//! Numeric helpers shared by masking and tinting

/// Linear interpolation and byte conversions for 8-bit channels
pub mod interpolation;
