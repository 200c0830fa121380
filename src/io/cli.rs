//! Command-line interface for batch mosaic synthesis of sprite images

use crate::allocation::WeightTable;
use crate::compose::{MosaicComposer, MosaicJob};
use crate::io::configuration::{
    DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_CELL_SIZE, DEFAULT_MASK_SOFTNESS, DEFAULT_SCALE_FACTOR,
    DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_canvas, load_source};
use crate::io::progress::ProgressManager;
use crate::io::tiles::load_tile_library;
use crate::io::weights::load_weight_table;
use crate::raster::{AlphaMasker, MaskSource, TileLibrary};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Extensions accepted as source sprites
const SOURCE_EXTENSIONS: [&str; 2] = ["png", "gif"];

/// How the foreground of each sprite is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Background {
    /// Sprite already has transparency; use its alpha channel
    Alpha,
    /// Sprite sits on a near-white background that should be removed
    White,
}

#[derive(Parser)]
#[command(name = "pixelmosaic")]
#[command(
    author,
    version,
    about = "Rebuild sprites as mosaics of weighted, tinted icon tiles"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Input sprite (PNG or GIF) or directory of sprites
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of tile icons, one image per identifier
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Weight file with `identifier,count` lines
    #[arg(short, long, value_name = "FILE")]
    pub weights: PathBuf,

    /// Random seed for reproducible tile order
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Resize factor applied to each sprite before tiling
    #[arg(short = 'f', long, default_value_t = DEFAULT_SCALE_FACTOR)]
    pub scale: f64,

    /// Canvas pixels per source pixel along each axis
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Foreground detection mode
    #[arg(short, long, value_enum, default_value_t = Background::Alpha)]
    pub background: Background,

    /// Luminance treated as white background (white mode only)
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_THRESHOLD)]
    pub threshold: u8,

    /// Luminance band over which edges fade in (white mode only)
    #[arg(long, default_value_t = DEFAULT_MASK_SOFTNESS)]
    pub softness: u8,

    /// Directory for output images (defaults to next to each input)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Foreground detection derived from the background options
    ///
    /// # Errors
    ///
    /// Returns an error if white-background options are out of range
    pub fn mask_source(&self) -> Result<MaskSource> {
        match self.background {
            Background::Alpha => Ok(MaskSource::ExistingAlpha),
            Background::White => Ok(MaskSource::WhiteBackground(AlphaMasker::new(
                self.threshold,
                self.softness,
            )?)),
        }
    }

    /// Output path for an input sprite
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        match (&self.output, input_path.parent()) {
            (Some(directory), _) => directory.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

fn is_source_file(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    // Earlier results in the same directory are not sprites
    let is_output = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    has_extension && !is_output
}

/// Orchestrates batch processing of sprites with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Tiles and weights are loaded only when at least one sprite needs work.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading or synthesis fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let weights = load_weight_table(&self.cli.weights)?;
        let library = load_tile_library(&self.cli.tiles)?;
        let mask_source = self.cli.mask_source()?;
        let composer = MosaicComposer::new(self.cli.cell_size)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &weights, &library, mask_source, composer)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_source_file(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG or GIF sprite",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file() && is_source_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a sprite file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.cli.output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        weights: &WeightTable,
        library: &TileLibrary,
        mask_source: MaskSource,
        composer: MosaicComposer,
    ) -> Result<()> {
        let output_path = self.cli.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_source(input_path, self.cli.scale)?;
        let job = MosaicJob {
            weights,
            library,
            seed: self.cli.seed,
            mask_source,
            composer,
        };

        let progress_manager = &mut self.progress_manager;
        let output = job.run_with_progress(&source, |placed, total| {
            if let Some(pm) = progress_manager.as_mut() {
                pm.update_tiles(index, placed, total);
            }
        })?;

        export_canvas(&output.canvas, &output_path)?;
        log::info!(
            "wrote {} ({} tiles, seed {})",
            output_path.display(),
            output.mask.foreground_count(),
            self.cli.seed
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}
