//! Error types for mosaic synthesis and its file-level collaborators

use std::fmt;
use std::path::PathBuf;

/// Reasons a weight table cannot be turned into a tile sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// No entry with a positive weight remains
    EmptyWeightTable,

    /// The same identifier appears more than once
    DuplicateIdentifier {
        /// Identifier that was repeated
        identifier: String,
    },

    /// An identifier has no tile in the library
    UnresolvedIdentifier {
        /// Identifier that could not be resolved
        identifier: String,
    },
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWeightTable => write!(f, "weight table has no entry with positive weight"),
            Self::DuplicateIdentifier { identifier } => {
                write!(f, "identifier '{identifier}' appears more than once")
            }
            Self::UnresolvedIdentifier { identifier } => {
                write!(f, "identifier '{identifier}' has no tile in the library")
            }
        }
    }
}

impl std::error::Error for AllocationError {}

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Weight table could not be allocated into a tile sequence
    Allocation(AllocationError),

    /// Tile sequence ran out before every foreground pixel was covered
    ///
    /// Composition aborts without producing a canvas.
    Coverage {
        /// Number of foreground pixels that need a tile
        foreground_pixels: usize,
        /// Number of identifiers left in the sequence
        available_tiles: usize,
    },

    /// Raster cannot be processed (zero area, unusable layout)
    MalformedRaster {
        /// Description of what is wrong with the raster
        reason: String,
    },

    /// Two rasters that must be parallel have different sizes
    DimensionMismatch {
        /// Expected (width, height)
        expected: (u32, u32),
        /// Actual (width, height)
        found: (u32, u32),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Weight file line could not be parsed
    WeightParse {
        /// File being parsed
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(reason) => write!(f, "Tile allocation failed: {reason}"),
            Self::Coverage {
                foreground_pixels,
                available_tiles,
            } => {
                write!(
                    f,
                    "Tile sequence covers {available_tiles} of {foreground_pixels} foreground pixels"
                )
            }
            Self::MalformedRaster { reason } => write!(f, "Malformed raster: {reason}"),
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Dimension mismatch: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WeightParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse weights '{}' line {line}: {reason}",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(source) => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<AllocationError> for MosaicError {
    fn from(err: AllocationError) -> Self {
        Self::Allocation(err)
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject rasters with no pixels before any component touches them
///
/// # Errors
///
/// Returns `MalformedRaster` if either dimension is zero
pub fn ensure_nonempty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MosaicError::MalformedRaster {
            reason: format!("raster has zero area ({width}x{height})"),
        });
    }
    Ok(())
}
