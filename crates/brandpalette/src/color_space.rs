//! Free functions converting between color representations.
//!
//! These functions are thin wrappers around the methods of
//! [`OklchColor`] and [`RgbColor`], taking and returning plain coordinates.
//! Except for [`hex_to_rgb`], none of them fail. Out-of-range inputs are
//! clamped instead.
//!
//! ```
//! # use brandpalette::color_space::{hex_to_rgb, oklch_to_srgb, rgb_to_cmyk, rgb_to_hex};
//! # use brandpalette::{CmykColor, RgbColor};
//! # use brandpalette::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! assert_eq!(oklch_to_srgb(0.0, 0.0, 123.0), RgbColor::new(0, 0, 0));
//! assert_eq!(oklch_to_srgb(1.0, 0.0, 123.0), RgbColor::new(255, 255, 255));
//! assert_eq!(rgb_to_hex(49, 120, 234), "#3178ea");
//! assert_eq!(hex_to_rgb("#3178EA")?, RgbColor::new(49, 120, 234));
//! assert_eq!(rgb_to_cmyk(0, 0, 0), CmykColor { c: 0, m: 0, y: 0, k: 100 });
//! # Ok(())
//! # }
//! ```

use crate::color::{CmykColor, OklchColor, RgbColor};
use crate::error::ColorFormatError;

/// Convert Oklch coordinates to 24-bit sRGB.
pub fn oklch_to_srgb(l: f64, c: f64, h: f64) -> RgbColor {
    OklchColor::new(l, c, h).to_rgb()
}

/// Convert 24-bit sRGB coordinates to Oklch.
pub fn srgb_to_oklch(r: u8, g: u8, b: u8) -> OklchColor {
    RgbColor::new(r, g, b).to_oklch()
}

/// Format 24-bit sRGB coordinates as a hashed hexadecimal string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    RgbColor::new(r, g, b).to_hex()
}

/// Parse a hashed hexadecimal string into 24-bit sRGB coordinates.
pub fn hex_to_rgb(s: &str) -> Result<RgbColor, ColorFormatError> {
    RgbColor::from_hex(s)
}

/// Convert 24-bit sRGB coordinates to naive CMYK.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> CmykColor {
    RgbColor::new(r, g, b).to_cmyk()
}
