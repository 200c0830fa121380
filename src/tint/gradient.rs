//! Grayscale-to-color gradients for recoloring tiles
//!
//! Black in a tile becomes the target color, white stays white, and every
//! intensity in between is interpolated per channel. Opacity is never part of
//! the gradient itself; it is applied afterwards from the source pixel.

use crate::math::interpolation::{lerp_channel, scale_alpha};
use image::{GrayImage, Rgb, Rgba, RgbaImage};

/// Number of distinct grayscale intensities
const LEVELS: usize = 256;

/// Lookup table from grayscale intensity to an opaque RGBA color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    entries: [Rgba<u8>; LEVELS],
}

impl ColorMap {
    /// Color for a grayscale intensity
    pub fn lookup(&self, intensity: u8) -> Rgba<u8> {
        self.entries
            .get(usize::from(intensity))
            .copied()
            .unwrap_or(Rgba([u8::MAX; 4]))
    }

    /// All 256 entries, darkest first
    pub const fn entries(&self) -> &[Rgba<u8>; LEVELS] {
        &self.entries
    }
}

/// Build the gradient running from `target` at intensity 0 to white at 255
pub fn build_gradient(target: Rgb<u8>) -> ColorMap {
    let [r, g, b] = target.0;
    let mut entries = [Rgba([u8::MAX; 4]); LEVELS];
    for (intensity, entry) in (0..=u8::MAX).zip(entries.iter_mut()) {
        *entry = Rgba([
            lerp_channel(r, u8::MAX, intensity),
            lerp_channel(g, u8::MAX, intensity),
            lerp_channel(b, u8::MAX, intensity),
            u8::MAX,
        ]);
    }
    ColorMap { entries }
}

/// Recolor a grayscale tile through `color_map`, scaling opacity by `alpha_scale`
///
/// `alpha_scale` is clamped to `[0, 1]`; it usually comes from the opacity of
/// the source pixel the tile stands for.
pub fn apply_gradient(tile: &GrayImage, color_map: &ColorMap, alpha_scale: f32) -> RgbaImage {
    let mut tinted = RgbaImage::new(tile.width(), tile.height());
    for (x, y, pixel) in tile.enumerate_pixels() {
        let [intensity] = pixel.0;
        let [r, g, b, a] = color_map.lookup(intensity).0;
        tinted.put_pixel(x, y, Rgba([r, g, b, scale_alpha(a, alpha_scale)]));
    }
    tinted
}

/// Tint a tile toward one source pixel's color and opacity
pub fn tint_tile(tile: &GrayImage, source: Rgba<u8>, opacity: u8) -> RgbaImage {
    let [r, g, b, _] = source.0;
    let color_map = build_gradient(Rgb([r, g, b]));
    apply_gradient(tile, &color_map, f32::from(opacity) / f32::from(u8::MAX))
}
