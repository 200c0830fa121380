//! Input/output operations, configuration and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and configurable defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Sprite loading and canvas export
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// Tile library loading from a directory
pub mod tiles;
/// Weight file parsing
pub mod weights;
