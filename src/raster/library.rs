//! Grayscale tile images keyed by identifier

use image::GrayImage;
use std::collections::BTreeMap;

/// Read-only lookup from tile identifier to grayscale tile
///
/// Tiles are kept in identifier order so iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TileLibrary {
    tiles: BTreeMap<String, GrayImage>,
}

impl TileLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tile, returning the previous one
    pub fn insert(&mut self, identifier: impl Into<String>, tile: GrayImage) -> Option<GrayImage> {
        self.tiles.insert(identifier.into(), tile)
    }

    /// Look up a tile
    pub fn get(&self, identifier: &str) -> Option<&GrayImage> {
        self.tiles.get(identifier)
    }

    /// Whether an identifier resolves to a tile
    pub fn contains(&self, identifier: &str) -> bool {
        self.tiles.contains_key(identifier)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the library holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Identifiers in sorted order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.tiles.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, GrayImage)> for TileLibrary {
    fn from_iter<I: IntoIterator<Item = (S, GrayImage)>>(iter: I) -> Self {
        Self {
            tiles: iter
                .into_iter()
                .map(|(identifier, tile)| (identifier.into(), tile))
                .collect(),
        }
    }
}
