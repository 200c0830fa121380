//! Tile library loading from a directory of icon images

use crate::io::configuration::GRAYSCALE_SUFFIX;
use crate::io::error::{MosaicError, Result};
use crate::raster::TileLibrary;
use crate::raster::preparation::to_grayscale;
use std::path::{Path, PathBuf};

/// Extensions accepted as tile images
const TILE_EXTENSIONS: [&str; 2] = ["png", "gif"];

/// Identifier for a tile file: its stem without a trailing grayscale suffix
pub fn tile_identifier(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let identifier = stem.strip_suffix(GRAYSCALE_SUFFIX).unwrap_or(stem);
    (!identifier.is_empty()).then(|| identifier.to_string())
}

fn is_tile_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| TILE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Load every PNG or GIF in `directory` as a grayscale tile
///
/// Files are visited in sorted order; when two files map to the same
/// identifier the later one wins and a warning is logged.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - A tile image cannot be decoded
pub fn load_tile_library(directory: &Path) -> Result<TileLibrary> {
    let read_error = |e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read tile directory",
        source: e,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if is_tile_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut library = TileLibrary::new();
    for path in paths {
        let Some(identifier) = tile_identifier(&path) else {
            continue;
        };
        let image = image::open(&path).map_err(|e| MosaicError::ImageLoad {
            path: path.clone(),
            source: e,
        })?;
        if library.insert(identifier.clone(), to_grayscale(&image)).is_some() {
            log::warn!("tile '{identifier}' replaced by {}", path.display());
        }
    }

    log::debug!(
        "loaded {} tiles from {}",
        library.len(),
        directory.display()
    );
    Ok(library)
}
