mod cmyk;
mod contrast;
mod conversion;
mod string;

// cmyk
pub(crate) use cmyk::to_cmyk;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance};

// conversion
pub(crate) use conversion::{from_24bit, oklch_to_srgb, srgb_to_oklch, to_24bit};

// string
pub(crate) use string::{format_hex, parse_hex};

/// Round the value to the given number of decimal places.
#[inline]
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Determine the shortest distance between two hues on the color wheel.
#[inline]
pub(crate) fn hue_distance(h1: f64, h2: f64) -> f64 {
    let difference = (h1 - h2).abs().rem_euclid(360.0);
    difference.min(360.0 - difference)
}
