//! Generating palette candidates from a design vector.

use tracing::debug;

use crate::color::{OklchColor, Role};
use crate::emotion::trait_colors;
use crate::harmony::HarmonyScheme;
use crate::normalize::{DesignVector, Normalized};
use crate::palette::{Colors, PaletteCandidate, PaletteMetadata};

/// The number of dominant hues per harmony scheme.
pub const MAX_DOMINANT_HUES: usize = 3;

const WARM_HUES: [f64; 3] = [30.0, 15.0, 45.0];
const COOL_HUES: [f64; 3] = [210.0, 200.0, 220.0];
const NEUTRAL_HUES: [f64; 3] = [180.0, 200.0, 280.0];

/// A generator of palette candidates.
#[derive(Debug)]
pub struct PaletteGenerator<'a> {
    normalized: &'a Normalized,
}

impl<'a> PaletteGenerator<'a> {
    /// Create a new palette generator for the given normalized brand input.
    pub fn new(normalized: &'a Normalized) -> Self {
        Self { normalized }
    }

    /// Determine the dominant hues.
    ///
    /// The dominant hues are the distinct hues associated with the primary
    /// traits, in order. Without any, they are a fixed warm, cool, or neutral
    /// triad depending on the warmth axis.
    pub fn dominant_hues(&self) -> Vec<f64> {
        let mut hues: Vec<f64> = Vec::new();
        for name in &self.normalized.primary_traits {
            if let Some(colors) = trait_colors(name) {
                for hue in colors.hues {
                    if !hues.contains(hue) {
                        hues.push(*hue);
                    }
                }
            }
        }

        if hues.is_empty() {
            let warmth = self.normalized.design_vector.warmth;
            let triad = if warmth > 0.3 {
                WARM_HUES
            } else if warmth < -0.3 {
                COOL_HUES
            } else {
                NEUTRAL_HUES
            };
            hues.extend_from_slice(&triad);
        }

        hues
    }

    /// Generate up to `count` palette candidates.
    ///
    /// Candidates are generated for every harmony scheme and, within each
    /// scheme, for every one of the first three dominant hues.
    pub fn generate(&self, count: usize) -> Vec<PaletteCandidate> {
        let hues = self.dominant_hues();
        let lightness = base_lightness(&self.normalized.design_vector);
        let chroma = base_chroma(&self.normalized.design_vector);

        debug!(
            ?hues,
            lightness,
            chroma,
            count,
            "generating palette candidates"
        );

        HarmonyScheme::all()
            .into_iter()
            .flat_map(|scheme| {
                hues.iter()
                    .take(MAX_DOMINANT_HUES)
                    .map(move |hue| (scheme, *hue))
            })
            .take(count)
            .map(|(scheme, hue)| self.candidate(scheme, hue, lightness, chroma))
            .collect()
    }

    fn candidate(
        &self,
        scheme: HarmonyScheme,
        base_hue: f64,
        lightness: f64,
        chroma: f64,
    ) -> PaletteCandidate {
        let hues = scheme.hues(base_hue);
        let h0 = hues[0];
        let h1 = hues.get(1).copied().unwrap_or(h0);
        let h2 = hues.get(2).copied().unwrap_or(h0 + 180.0);

        let colors = Colors::from_fn(|role| {
            #[rustfmt::skip]
            let (l, c, h) = match role {
                Role::Primary      => (lightness,        chroma,        h0),
                Role::Secondary    => (lightness + 0.05, chroma * 0.8,  h1),
                Role::Accent       => (lightness - 0.05, chroma * 1.1,  h2),
                Role::Background   => (0.95,             0.02,          h0),
                Role::Text         => (0.20,             0.01,          h0),
                Role::NeutralLight => (0.85,             0.03,          h0),
                Role::NeutralMid   => (0.50,             0.02,          h0),
                Role::NeutralDark  => (0.30,             0.02,          h0),
            };
            OklchColor::new(l, c, h)
        });

        PaletteCandidate {
            scheme,
            base_hue,
            colors,
            metadata: PaletteMetadata {
                descriptors: self.normalized.descriptors.clone(),
                harmony_scheme: scheme,
                design_vector: self.normalized.design_vector,
            },
        }
    }
}

/// Compute the lightness of primary colors.
pub fn base_lightness(vector: &DesignVector) -> f64 {
    (0.55 + vector.contrast * 0.1 - vector.boldness * 0.05).clamp(0.3, 0.7)
}

/// Compute the chroma of primary colors.
pub fn base_chroma(vector: &DesignVector) -> f64 {
    (0.15 + vector.saturation * 0.08 + vector.boldness * 0.05 + vector.playfulness * 0.03)
        .clamp(0.05, 0.3)
}
