//! The color representations making up a palette.
//!
//! Every palette color exists in four representations: [`OklchColor`] for
//! synthesis, [`RgbColor`] for screens, a hashed hexadecimal string for CSS,
//! and [`CmykColor`] for (approximate) print. [`PaletteColor`] bundles all four
//! and can only be created from the Oklch representation, which guarantees that
//! the other three always agree with it.

use serde::{Deserialize, Serialize};

use crate::core::{
    format_hex, from_24bit, oklch_to_srgb, parse_hex, round_to, srgb_to_oklch, to_24bit, to_cmyk,
};
use crate::error::ColorFormatError;

/// The maximum chroma for palette colors.
pub const MAX_CHROMA: f64 = 0.4;

/// A color in the perceptually uniform Oklch color space.
///
/// Lightness `l` ranges `0..=1`, chroma `c` ranges `0..=0.4`, and hue `h` is an
/// angle in degrees `0..360`. The constructor silently clamps lightness and
/// chroma and wraps the hue. Deserialization goes through the constructor, too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "OklchCoordinates")]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OklchColor {
    /// Create a new Oklch color.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        #[inline]
        fn or_zero(value: f64) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value
            }
        }

        Self {
            l: or_zero(l).clamp(0.0, 1.0),
            c: or_zero(c).clamp(0.0, MAX_CHROMA),
            h: or_zero(h).rem_euclid(360.0),
        }
    }

    /// Round the coordinates to the resolution used for palette colors, i.e.,
    /// three decimals for lightness and chroma and one decimal for hue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rounded(&self) -> Self {
        Self::new(round_to(self.l, 3), round_to(self.c, 3), round_to(self.h, 1))
    }

    /// Replace the lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(l, self.c, self.h)
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// Out-of-gamut colors are clipped channel by channel.
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from(to_24bit(&oklch_to_srgb(&[self.l, self.c, self.h])))
    }
}

#[derive(Deserialize)]
struct OklchCoordinates {
    l: f64,
    c: f64,
    h: f64,
}

impl From<OklchCoordinates> for OklchColor {
    fn from(value: OklchCoordinates) -> Self {
        Self::new(value.l, value.c, value.h)
    }
}

impl From<RgbColor> for OklchColor {
    fn from(value: RgbColor) -> Self {
        value.to_oklch()
    }
}

// ====================================================================================================================

/// A 24-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a new 24-bit color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hashed hexadecimal color such as `#3178ea`.
    ///
    /// Parsing is case-insensitive and tolerates a missing `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s).map(Self::from)
    }

    /// Format this color in lowercase hashed hexadecimal notation.
    pub fn to_hex(&self) -> String {
        format_hex(&[self.r, self.g, self.b])
    }

    /// Convert this color to Oklch.
    ///
    /// The result is neither rounded nor clamped to palette chroma, so that
    /// converting back to RGB reproduces this color within rounding error.
    pub fn to_oklch(&self) -> OklchColor {
        let [l, c, h] = srgb_to_oklch(&self.to_unit());
        OklchColor { l, c, h }
    }

    /// Convert this color to naive CMYK.
    pub fn to_cmyk(&self) -> CmykColor {
        let [c, m, y, k] = to_cmyk(self.r, self.g, self.b);
        CmykColor { c, m, y, k }
    }

    /// Get the coordinates scaled to `0..=1`.
    pub(crate) fn to_unit(self) -> [f64; 3] {
        from_24bit(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(value: RgbColor) -> Self {
        [value.r, value.g, value.b]
    }
}

impl core::str::FromStr for RgbColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl core::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ====================================================================================================================

/// A naive CMYK color with percentages `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CmykColor {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl From<RgbColor> for CmykColor {
    fn from(value: RgbColor) -> Self {
        value.to_cmyk()
    }
}

// ====================================================================================================================

/// The role a color plays within a palette.
///
/// Every palette has exactly one color per role, in the canonical order
/// returned by [`Role::all`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
    NeutralLight,
    NeutralMid,
    NeutralDark,
}

impl Role {
    /// The total number of roles.
    pub const COUNT: usize = 8;

    /// Get all roles in canonical order.
    pub const fn all() -> [Role; Role::COUNT] {
        use Role::*;
        [
            Primary,
            Secondary,
            Accent,
            Background,
            Text,
            NeutralLight,
            NeutralMid,
            NeutralDark,
        ]
    }

    /// Get this role's position in canonical order.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Get this role's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Text => "text",
            Self::NeutralLight => "neutral-light",
            Self::NeutralMid => "neutral-mid",
            Self::NeutralDark => "neutral-dark",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A palette color in all four representations.
///
/// The fields are read-only. The only way to create a palette color is from
/// Oklch coordinates, which are rounded first and then converted to the other
/// three representations. Hence `rgb == oklch.to_rgb()`, `hex == rgb.to_hex()`,
/// and `cmyk == rgb.to_cmyk()` always hold.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteColor {
    role: Role,
    oklch: OklchColor,
    rgb: RgbColor,
    hex: String,
    cmyk: CmykColor,
}

impl PaletteColor {
    /// Create a new palette color with the given role from the given Oklch
    /// coordinates.
    pub fn new(role: Role, oklch: OklchColor) -> Self {
        let oklch = oklch.rounded();
        let rgb = oklch.to_rgb();
        Self {
            role,
            oklch,
            rgb,
            hex: rgb.to_hex(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Create a new palette color from lightness, chroma, and hue.
    pub fn from_lch(role: Role, l: f64, c: f64, h: f64) -> Self {
        Self::new(role, OklchColor::new(l, c, h))
    }

    /// Create a copy with the given lightness, re-deriving all
    /// representations.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.role, self.oklch.with_lightness(l))
    }

    /// Get the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Get the Oklch coordinates.
    pub fn oklch(&self) -> &OklchColor {
        &self.oklch
    }

    /// Get the 24-bit RGB coordinates.
    pub fn rgb(&self) -> &RgbColor {
        &self.rgb
    }

    /// Get the hashed hexadecimal notation.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get the CMYK percentages.
    pub fn cmyk(&self) -> &CmykColor {
        &self.cmyk
    }
}
