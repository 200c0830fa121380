//! Linear interpolation over 8-bit channel values
//!
//! Float results are rounded and clipped to `[0, 255]` so every caller
//! produces valid channel bytes without ad-hoc casts.

use num_traits::{NumCast, clamp};

/// Interpolate a channel from `from` (intensity 0) to `to` (intensity 255)
///
/// Integer arithmetic keeps both endpoints exact.
pub const fn lerp_channel(from: u8, to: u8, intensity: u8) -> u8 {
    let t = intensity as u32;
    let start = from as u32;
    let end = to as u32;
    ((start * (255 - t) + end * t + 127) / 255) as u8
}

/// Round and clip a float to a channel byte
///
/// NaN maps to 0.
pub fn to_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    <u8 as NumCast>::from(clamp(value, 0.0, 255.0).round()).unwrap_or(0)
}

/// Map `value` linearly so that `low` becomes 0 and `high` becomes 255
///
/// Values outside the range are clipped. A degenerate range acts as a hard step at `high`.
pub fn linear_stretch(value: f32, low: f32, high: f32) -> u8 {
    if high <= low {
        return if value >= high { u8::MAX } else { 0 };
    }
    to_channel((value - low) / (high - low) * 255.0)
}

/// Multiply an alpha byte by a scale clamped to `[0, 1]`
pub fn scale_alpha(alpha: u8, scale: f32) -> u8 {
    if scale.is_nan() {
        return 0;
    }
    to_channel(<f32 as From<u8>>::from(alpha) * clamp(scale, 0.0, 1.0))
}
