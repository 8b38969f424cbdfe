//! Palettes and their colors.
//!
//! A palette goes through two stages. Palette generation produces
//! [`PaletteCandidate`]s, i.e., colors plus provenance. The constraint layer
//! turns candidates into [`Palette`]s by adding a score, an accessibility
//! report, and optionally light and dark [`ModeVariants`].

use serde::Serialize;

use crate::color::{OklchColor, PaletteColor, Role};
use crate::harmony::HarmonyScheme;
use crate::normalize::DesignVector;
use crate::wcag::{evaluate_palette, AccessibilityReport};

/// The colors of a palette.
///
/// This struct is a compromise between struct and array, with exactly one
/// color per [`Role`], stored in canonical role order. You index it with
/// roles. Since all colors are created from Oklch coordinates, each color's
/// four representations agree with each other.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Colors {
    inner: [PaletteColor; Role::COUNT],
}

impl Colors {
    /// Create new palette colors by invoking the given function for every
    /// role.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Role) -> OklchColor,
    {
        Self {
            inner: Role::all().map(|role| PaletteColor::new(role, f(role))),
        }
    }

    /// Create a copy with the given role's color updated to the given
    /// coordinates.
    #[must_use = "method returns new colors and does not mutate original value"]
    pub fn with(&self, role: Role, color: OklchColor) -> Self {
        let mut inner = self.inner.clone();
        inner[role.index()] = PaletteColor::new(role, color);
        Self { inner }
    }

    /// Get an iterator over the colors in canonical role order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteColor> {
        self.inner.iter()
    }
}

impl AsRef<[PaletteColor]> for Colors {
    fn as_ref(&self) -> &[PaletteColor] {
        &self.inner
    }
}

impl core::ops::Index<Role> for Colors {
    type Output = PaletteColor;

    fn index(&self, index: Role) -> &Self::Output {
        &self.inner[index.index()]
    }
}

impl<'a> IntoIterator for &'a Colors {
    type Item = &'a PaletteColor;
    type IntoIter = core::slice::Iter<'a, PaletteColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// ====================================================================================================================

/// The provenance of a palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteMetadata {
    pub descriptors: Vec<&'static str>,
    pub harmony_scheme: HarmonyScheme,
    pub design_vector: DesignVector,
}

/// A freshly generated, not yet scored palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteCandidate {
    pub scheme: HarmonyScheme,
    pub base_hue: f64,
    pub colors: Colors,
    pub metadata: PaletteMetadata,
}

/// One mode of a palette with its own accessibility report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeVariant {
    pub colors: Colors,
    pub accessibility: AccessibilityReport,
}

impl ModeVariant {
    /// Create a new mode variant, evaluating its accessibility.
    pub fn new(colors: Colors) -> Self {
        let accessibility = evaluate_palette(&colors);
        Self {
            colors,
            accessibility,
        }
    }
}

/// The light and dark modes of a palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeVariants {
    pub light: ModeVariant,
    pub dark: ModeVariant,
}

/// A scored and accessibility-checked palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub scheme: HarmonyScheme,
    pub base_hue: f64,
    pub colors: Colors,
    pub metadata: PaletteMetadata,
    pub score: f64,
    pub accessibility: AccessibilityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<ModeVariants>,
}

impl Palette {
    /// Get the primary color.
    pub fn primary_color(&self) -> &PaletteColor {
        &self.colors[Role::Primary]
    }

    /// Get the background color.
    pub fn background_color(&self) -> &PaletteColor {
        &self.colors[Role::Background]
    }

    /// Get the text color.
    pub fn text_color(&self) -> &PaletteColor {
        &self.colors[Role::Text]
    }

    /// Determine whether text on background meets level AA for normal text.
    pub fn is_accessible(&self) -> bool {
        self.accessibility.valid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grays() -> Colors {
        Colors::from_fn(|role| OklchColor::new(role.index() as f64 / 8.0, 0.0, 0.0))
    }

    #[test]
    fn test_colors() {
        let colors = grays();
        assert_eq!(colors.iter().count(), Role::COUNT);
        for (color, role) in colors.iter().zip(Role::all()) {
            assert_eq!(color.role(), role);
            assert_eq!(&colors[role], color);
        }
        assert_eq!(colors[Role::Text].oklch().l, 0.5);
    }

    #[test]
    fn test_with() {
        let colors = grays();
        let updated = colors.with(Role::Accent, OklchColor::new(0.7, 0.1, 42.0));
        assert_eq!(updated[Role::Accent].role(), Role::Accent);
        assert_eq!(updated[Role::Accent].oklch(), &OklchColor::new(0.7, 0.1, 42.0));
        assert_eq!(updated[Role::Primary], colors[Role::Primary]);
        assert_ne!(updated, colors);
    }

    #[test]
    fn test_mode_variant() {
        let colors = Colors::from_fn(|role| match role {
            Role::Background => OklchColor::new(1.0, 0.0, 0.0),
            Role::Text => OklchColor::new(0.0, 0.0, 0.0),
            _ => OklchColor::new(0.5, 0.1, 200.0),
        });
        let variant = ModeVariant::new(colors);
        assert!(variant.accessibility.valid);
        assert_eq!(variant.accessibility.contrast_ratio, 21.0);
    }
}
