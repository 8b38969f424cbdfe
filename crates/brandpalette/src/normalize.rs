//! Turning brand language into numbers.
//!
//! [`Normalizer::normalize`] folds a [`BrandInput`] into a [`DesignVector`]
//! with six axes, each in `-1..=1`. Traits, tones, audiences, keywords, the
//! industry category, and target markets all nudge the axes in a fixed order,
//! and the sum is clamped once at the end. The normalizer also derives the
//! adjectives describing the result, the primary traits, and the color
//! families hinted at by the traits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emotion::{category_priors, market_adjustment, tone_modifier, trait_colors, NEUTRAL_SATURATION};
use crate::mapper::TraitMapper;

/// The qualitative description of a brand.
///
/// All lists may be empty and the category may be missing. Missing inputs
/// simply contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandInput {
    pub brand_id: String,
    pub traits: Vec<String>,
    pub tone: Vec<String>,
    pub audiences: Vec<String>,
    pub category: Option<String>,
    pub markets: Vec<String>,
    pub keywords: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}

impl BrandInput {
    /// Create a new, empty brand input with the given ID.
    pub fn new<S: Into<String>>(brand_id: S) -> Self {
        Self {
            brand_id: brand_id.into(),
            ..Self::default()
        }
    }

    /// Set the personality traits.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        self.traits = owned(traits);
        self
    }

    /// Set the tones of voice.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_tone(mut self, tone: &[&str]) -> Self {
        self.tone = owned(tone);
        self
    }

    /// Set the audience segments.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_audiences(mut self, audiences: &[&str]) -> Self {
        self.audiences = owned(audiences);
        self
    }

    /// Set the industry category.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Set the target markets.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_markets(mut self, markets: &[&str]) -> Self {
        self.markets = owned(markets);
        self
    }

    /// Set the keywords.
    #[must_use = "method returns a new input and does not mutate original value"]
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = owned(keywords);
        self
    }
}

// ====================================================================================================================

/// A point in design space.
///
/// Every axis ranges from `-1` to `1`:
///
///   * `warmth` from cool to warm,
///   * `boldness` from subtle to bold,
///   * `playfulness` from serious to playful,
///   * `modernity` from classic to modern,
///   * `contrast` from low to high,
///   * `saturation` from muted to vibrant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignVector {
    pub warmth: f64,
    pub boldness: f64,
    pub playfulness: f64,
    pub modernity: f64,
    pub contrast: f64,
    pub saturation: f64,
}

impl DesignVector {
    /// Clamp every axis to `-1..=1`.
    #[must_use = "method returns a new vector and does not mutate original value"]
    pub fn clamped(&self) -> Self {
        let clamp = |value: f64| if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) };
        Self {
            warmth: clamp(self.warmth),
            boldness: clamp(self.boldness),
            playfulness: clamp(self.playfulness),
            modernity: clamp(self.modernity),
            contrast: clamp(self.contrast),
            saturation: clamp(self.saturation),
        }
    }

    /// Get the axes as name, value pairs.
    pub fn axes(&self) -> [(&'static str, f64); 6] {
        [
            ("warmth", self.warmth),
            ("boldness", self.boldness),
            ("playfulness", self.playfulness),
            ("modernity", self.modernity),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
        ]
    }

    /// Derive the adjectives describing this vector.
    ///
    /// An axis contributes an adjective when its magnitude exceeds 0.3. The
    /// modernity axis only has a positive adjective.
    pub fn descriptors(&self) -> Vec<&'static str> {
        const T: f64 = 0.3;

        #[rustfmt::skip]
        let candidates = [
            (self.warmth > T,       "warm"),
            (self.warmth < -T,      "cool"),
            (self.boldness > T,     "bold"),
            (self.boldness < -T,    "subtle"),
            (self.playfulness > T,  "playful"),
            (self.playfulness < -T, "serious"),
            (self.modernity > T,    "modern"),
            (self.saturation > T,   "vibrant"),
            (self.saturation < -T,  "muted"),
        ];

        candidates
            .into_iter()
            .filter_map(|(applies, name)| applies.then_some(name))
            .collect()
    }
}

/// The fuzzy resolution of an unknown trait.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitMapping {
    pub original: String,
    pub mapped: &'static str,
}

/// The result of normalizing a brand input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Normalized {
    pub design_vector: DesignVector,
    pub descriptors: Vec<&'static str>,
    /// The first three input traits, verbatim.
    pub primary_traits: Vec<String>,
    /// The deduplicated color families of all resolved traits.
    pub color_hints: Vec<&'static str>,
    pub mapped_traits: Vec<TraitMapping>,
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const KEYWORD_AXES: [(&str, &[(Axis, f64)]); 8] = [
    ("speed",       &[(Axis::Modernity, 0.3),    (Axis::Boldness, 0.2)]),
    ("automation",  &[(Axis::Modernity, 0.4),    (Axis::Warmth, -0.2)]),
    ("reliability", &[(Axis::Warmth, -0.1),      (Axis::Boldness, -0.1)]),
    ("innovation",  &[(Axis::Modernity, 0.5),    (Axis::Saturation, 0.3)]),
    ("simplicity",  &[(Axis::Contrast, -0.2),    (Axis::Saturation, -0.2)]),
    ("power",       &[(Axis::Boldness, 0.5),     (Axis::Contrast, 0.4)]),
    ("elegance",    &[(Axis::Contrast, 0.2),     (Axis::Saturation, -0.1)]),
    ("fun",         &[(Axis::Playfulness, 0.6),  (Axis::Saturation, 0.4)]),
];

const TRAIT_WEIGHT: f64 = 0.3;
const TONE_WEIGHT: f64 = 0.4;
const KEYWORD_WEIGHT: f64 = 0.25;
const CATEGORY_WEIGHT: f64 = 0.4;
const MARKET_WEIGHT: f64 = 0.5;

#[derive(Clone, Copy, Debug)]
enum Axis {
    Warmth,
    Boldness,
    Playfulness,
    Modernity,
    Contrast,
    Saturation,
}

impl Axis {
    fn of(self, vector: &mut DesignVector) -> &mut f64 {
        match self {
            Self::Warmth => &mut vector.warmth,
            Self::Boldness => &mut vector.boldness,
            Self::Playfulness => &mut vector.playfulness,
            Self::Modernity => &mut vector.modernity,
            Self::Contrast => &mut vector.contrast,
            Self::Saturation => &mut vector.saturation,
        }
    }
}

/// A normalizer from brand input to design vector.
#[derive(Debug)]
pub struct Normalizer<'a> {
    mapper: &'a TraitMapper,
}

impl<'a> Normalizer<'a> {
    /// Create a new normalizer that resolves unknown traits with the given
    /// mapper.
    pub fn new(mapper: &'a TraitMapper) -> Self {
        Self { mapper }
    }

    /// Normalize the given brand input.
    pub fn normalize(&self, input: &BrandInput) -> Normalized {
        let mut vector = DesignVector::default();
        let mut hints = Vec::new();
        let mut mapped_hints = Vec::new();
        let mut mapped_traits = Vec::new();

        // Traits
        for name in &input.traits {
            let colors = match trait_colors(name) {
                Some(colors) => {
                    hints.extend_from_slice(colors.families);
                    colors
                }
                None => {
                    let Some(mapped) = self.mapper.map_trait(name) else {
                        debug!(name = name.as_str(), "ignoring unknown trait");
                        continue;
                    };
                    let Some(colors) = trait_colors(mapped) else {
                        continue;
                    };
                    mapped_hints.extend_from_slice(colors.families);
                    mapped_traits.push(TraitMapping {
                        original: name.clone(),
                        mapped,
                    });
                    colors
                }
            };

            vector.warmth += colors.warmth * TRAIT_WEIGHT;
            vector.saturation += colors.saturation * TRAIT_WEIGHT;
        }

        // Tone
        for tone in &input.tone {
            vector.contrast += tone_modifier(tone).contrast_boost * TONE_WEIGHT;

            match tone.trim().to_lowercase().as_str() {
                "playful" => vector.playfulness += 0.5,
                "serious" | "authoritative" => vector.playfulness -= 0.4,
                "friendly" => vector.warmth += 0.3,
                "confident" => vector.boldness += 0.3,
                _ => {}
            }
        }

        // Audiences
        for audience in &input.audiences {
            match audience.trim().to_lowercase().as_str() {
                "prosumer" | "consumer" => {
                    vector.playfulness += 0.2;
                    vector.warmth += 0.2;
                }
                "enterprise" | "b2b" => {
                    vector.playfulness -= 0.3;
                    vector.modernity += 0.1;
                }
                "smb" => vector.warmth += 0.1,
                "developer" | "technical" => {
                    vector.modernity += 0.4;
                    vector.contrast += 0.2;
                }
                _ => {}
            }
        }

        // Keywords
        for keyword in &input.keywords {
            let keyword = keyword.to_lowercase();
            for (key, adjustments) in KEYWORD_AXES {
                if keyword.contains(key) {
                    for (axis, value) in adjustments {
                        *axis.of(&mut vector) += value * KEYWORD_WEIGHT;
                    }
                }
            }
        }

        // Category
        if let Some(category) = &input.category {
            vector.warmth += category_priors(category).warmth_bias * CATEGORY_WEIGHT;
        }

        // Markets
        if !input.markets.is_empty() {
            let total: f64 = input
                .markets
                .iter()
                .map(|market| market_adjustment(market).saturation_preference)
                .sum();
            let average = total / input.markets.len() as f64;
            vector.saturation += (average - NEUTRAL_SATURATION) * MARKET_WEIGHT;
        }

        let design_vector = vector.clamped();
        hints.append(&mut mapped_hints);
        let mut color_hints: Vec<&'static str> = Vec::with_capacity(hints.len());
        for hint in hints {
            if !color_hints.contains(&hint) {
                color_hints.push(hint);
            }
        }

        debug!(?design_vector, mapped = mapped_traits.len(), "normalized brand input");

        Normalized {
            design_vector,
            descriptors: design_vector.descriptors(),
            primary_traits: input.traits.iter().take(3).cloned().collect(),
            color_hints,
            mapped_traits,
        }
    }
}
