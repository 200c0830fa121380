//! End-to-end mosaic job: mask, allocate, compose

use crate::allocation::{TileSequence, WeightTable, allocate};
use crate::compose::composer::MosaicComposer;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::Result;
use crate::raster::{Mask, MaskSource, TileLibrary};
use image::RgbaImage;

/// Everything one mosaic needs besides the source raster
#[derive(Debug, Clone, Copy)]
pub struct MosaicJob<'a> {
    /// Relative frequency of each tile
    pub weights: &'a WeightTable,
    /// Grayscale tiles for every weighted identifier
    pub library: &'a TileLibrary,
    /// Seed for the tile shuffle
    pub seed: u64,
    /// How the source foreground is determined
    pub mask_source: MaskSource,
    /// Cell size and canvas limits
    pub composer: MosaicComposer,
}

/// Intermediate products of a job, kept for inspection
#[derive(Debug, Clone)]
pub struct MosaicOutput {
    /// Final composited canvas
    pub canvas: RgbaImage,
    /// Foreground mask the tiles were placed by
    pub mask: Mask,
    /// Sequence the composer drew from, fully consumed
    pub sequence: TileSequence,
}

impl<'a> MosaicJob<'a> {
    /// Job with the default seed, existing-alpha masking and default cell size
    pub fn new(weights: &'a WeightTable, library: &'a TileLibrary) -> Self {
        Self {
            weights,
            library,
            seed: DEFAULT_SEED,
            mask_source: MaskSource::ExistingAlpha,
            composer: MosaicComposer::default(),
        }
    }

    /// Synthesize the mosaic for `source`
    ///
    /// # Errors
    ///
    /// Returns an error if masking, allocation or composition fails
    pub fn run(&self, source: &RgbaImage) -> Result<MosaicOutput> {
        self.run_with_progress(source, |_, _| {})
    }

    /// Synthesize the mosaic, reporting composition progress as `(done, total)` cells
    ///
    /// # Errors
    ///
    /// Returns an error if masking, allocation or composition fails
    pub fn run_with_progress<F>(&self, source: &RgbaImage, on_progress: F) -> Result<MosaicOutput>
    where
        F: FnMut(usize, usize),
    {
        let masked = self.mask_source.apply(source)?;
        let mask = Mask::from_alpha(&masked)?;
        let pixel_budget = mask.foreground_count();

        let mut sequence = allocate(self.weights, self.library, pixel_budget, self.seed)?;
        let canvas = self.composer.compose_with_progress(
            &masked,
            &mask,
            self.library,
            &mut sequence,
            on_progress,
        )?;

        Ok(MosaicOutput {
            canvas,
            mask,
            sequence,
        })
    }
}
