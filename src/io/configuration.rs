//! Synthesis constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible tile ordering
pub const DEFAULT_SEED: u64 = 12345;

/// Uniform resize applied to a source sprite before masking
///
/// A third of the sprite size keeps the tile count manageable while
/// preserving the silhouette.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0 / 3.0;

/// Edge length in canvas pixels of the cell drawn for one source pixel
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Luminance at or above which a pixel counts as white background
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 250;

/// Width of the luminance band over which opacity ramps from 0 to 255
pub const DEFAULT_MASK_SOFTNESS: u8 = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 20_000;

/// Slack subtracted before rounding tile counts up
///
/// Keeps an exact integer product such as `0.3 * 10` from gaining a tile
/// through floating-point noise.
pub const ALLOCATION_TOLERANCE: f64 = 1e-9;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix stripped from tile file stems when deriving identifiers
pub const GRAYSCALE_SUFFIX: &str = "_BW";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
