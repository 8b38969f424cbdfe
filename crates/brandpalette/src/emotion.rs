//! The frozen tables mapping brand language to color.
//!
//! There are four tables: traits map to hues, color families, warmth, and
//! saturation; tones map to lightness and contrast modifiers; categories map to
//! preferred and avoided hues plus a warmth bias; and markets map to saturation
//! and brightness preferences. All lookups ignore ASCII case. Except for
//! traits, a failed lookup returns a neutral default, since the normalizer
//! needs to know whether a trait is known before consulting the
//! [`TraitMapper`](crate::mapper::TraitMapper).

/// The color associations of a brand trait.
#[derive(Debug, PartialEq)]
pub struct TraitColors {
    /// Hues in Oklch degrees.
    pub hues: &'static [f64],
    /// Human-readable color family names.
    pub families: &'static [&'static str],
    /// Warmth from `-1` (cool) to `1` (warm).
    pub warmth: f64,
    /// Saturation from `0` (muted) to `1` (vibrant).
    pub saturation: f64,
}

/// The modifiers for a tone of voice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToneModifier {
    pub lightness_shift: f64,
    pub contrast_boost: f64,
}

/// The color priors for an industry category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryPriors {
    pub preferred_hues: &'static [f64],
    pub avoid_hues: &'static [f64],
    pub warmth_bias: f64,
}

/// The color preferences of a target market.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketAdjustment {
    pub saturation_preference: f64,
    pub brightness_preference: f64,
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! traits {
    ($( $name:literal => [$($hue:literal),*], [$($family:literal),*], $warmth:literal, $saturation:literal; )*) => {
        [$(
            ($name, TraitColors {
                hues: &[$($hue as f64),*],
                families: &[$($family),*],
                warmth: $warmth,
                saturation: $saturation,
            }),
        )*]
    };
}

#[rustfmt::skip]
static TRAITS: [(&str, TraitColors); 24] = traits! {
    // Trust & reliability
    "trustworthy"   => [210, 220, 230], ["blue"],                       -0.2, 0.6;
    "reliable"      => [210, 220],      ["blue", "slate"],              -0.1, 0.5;
    "professional"  => [210, 225, 240], ["blue", "navy"],               -0.2, 0.5;

    // Innovation & technology
    "innovative"    => [190, 200, 280], ["cyan", "blue", "purple"],      0.0, 0.7;
    "modern"        => [180, 190, 270], ["cyan", "purple"],              0.1, 0.7;
    "tech"          => [195, 205, 215], ["blue", "cyan"],               -0.1, 0.8;

    // Energy & power
    "energetic"     => [0, 15, 30],     ["red", "orange"],               0.8, 0.9;
    "powerful"      => [355, 5, 15],    ["red"],                         0.6, 0.8;
    "bold"          => [350, 0, 20],    ["red", "orange"],               0.7, 0.9;

    // Growth & nature
    "growth"        => [120, 140, 160], ["green", "teal"],               0.2, 0.6;
    "sustainable"   => [110, 130, 150], ["green"],                       0.3, 0.6;
    "natural"       => [100, 120, 140], ["green", "earth"],              0.4, 0.5;

    // Creativity & optimism
    "creative"      => [50, 280, 300],  ["yellow", "purple", "magenta"], 0.5, 0.8;
    "optimistic"    => [45, 55, 65],    ["yellow", "orange"],            0.7, 0.8;
    "cheerful"      => [40, 50, 60],    ["yellow"],                      0.8, 0.9;

    // Luxury & premium
    "premium"       => [270, 280, 0],   ["purple", "black", "gold"],     0.1, 0.6;
    "luxury"        => [275, 285, 295], ["purple", "violet"],            0.0, 0.7;
    "sophisticated" => [260, 270, 280], ["purple", "navy"],             -0.1, 0.5;

    // Approachable & friendly
    "approachable"  => [35, 160, 190],  ["orange", "teal", "cyan"],      0.4, 0.6;
    "friendly"      => [30, 150, 180],  ["orange", "teal"],              0.5, 0.7;
    "warm"          => [20, 30, 40],    ["orange", "coral"],             0.9, 0.7;

    // Calm & balance
    "calm"          => [180, 200, 220], ["blue", "teal"],               -0.2, 0.4;
    "balanced"      => [140, 160, 180], ["teal", "green"],               0.0, 0.5;
    "peaceful"      => [170, 190, 210], ["blue", "cyan"],               -0.1, 0.4;
};

#[rustfmt::skip]
static TONES: [(&str, ToneModifier); 6] = [
    ("confident",     ToneModifier { lightness_shift: -0.05, contrast_boost:  0.15 }),
    ("gentle",        ToneModifier { lightness_shift:  0.10, contrast_boost: -0.10 }),
    ("playful",       ToneModifier { lightness_shift:  0.05, contrast_boost:  0.10 }),
    ("serious",       ToneModifier { lightness_shift: -0.10, contrast_boost: -0.05 }),
    ("friendly",      ToneModifier { lightness_shift:  0.08, contrast_boost:  0.05 }),
    ("authoritative", ToneModifier { lightness_shift: -0.12, contrast_boost:  0.20 }),
];

#[rustfmt::skip]
static CATEGORIES: [(&str, CategoryPriors); 7] = [
    ("SaaS",          CategoryPriors { preferred_hues: &[200.0, 210.0, 220.0], avoid_hues: &[],      warmth_bias: -0.2 }),
    ("fintech",       CategoryPriors { preferred_hues: &[210.0, 120.0],        avoid_hues: &[0.0],   warmth_bias: -0.3 }),
    ("healthcare",    CategoryPriors { preferred_hues: &[200.0, 160.0],        avoid_hues: &[120.0], warmth_bias:  0.0 }),
    ("ecommerce",     CategoryPriors { preferred_hues: &[0.0, 30.0, 200.0],    avoid_hues: &[],      warmth_bias:  0.2 }),
    ("education",     CategoryPriors { preferred_hues: &[210.0, 120.0, 50.0],  avoid_hues: &[],      warmth_bias:  0.1 }),
    ("food",          CategoryPriors { preferred_hues: &[0.0, 30.0, 120.0],    avoid_hues: &[210.0], warmth_bias:  0.5 }),
    ("entertainment", CategoryPriors { preferred_hues: &[280.0, 0.0, 50.0],    avoid_hues: &[],      warmth_bias:  0.3 }),
];

#[rustfmt::skip]
static MARKETS: [(&str, MarketAdjustment); 5] = [
    ("US", MarketAdjustment { saturation_preference: 0.7,  brightness_preference:  0.0  }),
    ("EU", MarketAdjustment { saturation_preference: 0.6,  brightness_preference: -0.05 }),
    ("AU", MarketAdjustment { saturation_preference: 0.75, brightness_preference:  0.05 }),
    ("JP", MarketAdjustment { saturation_preference: 0.5,  brightness_preference:  0.10 }),
    ("CN", MarketAdjustment { saturation_preference: 0.8,  brightness_preference:  0.0  }),
];

const NO_CATEGORY: CategoryPriors = CategoryPriors {
    preferred_hues: &[],
    avoid_hues: &[],
    warmth_bias: 0.0,
};

/// The saturation preference of markets without specific adjustments.
pub const NEUTRAL_SATURATION: f64 = 0.7;

const NO_MARKET: MarketAdjustment = MarketAdjustment {
    saturation_preference: NEUTRAL_SATURATION,
    brightness_preference: 0.0,
};

// --------------------------------------------------------------------------------------------------------------------

fn lookup<'a, T>(table: &'a [(&str, T)], key: &str) -> Option<&'a T> {
    let key = key.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

/// Look up the color associations of the given trait.
pub fn trait_colors(name: &str) -> Option<&'static TraitColors> {
    lookup(&TRAITS, name)
}

/// Determine whether the given trait is known.
pub fn is_known_trait(name: &str) -> bool {
    trait_colors(name).is_some()
}

/// Get the names of all known traits in table order.
pub fn known_traits() -> impl Iterator<Item = &'static str> {
    TRAITS.iter().map(|(name, _)| *name)
}

/// Get the names of all traits whose color families include the given one.
pub fn traits_for_family(family: &str) -> Vec<&'static str> {
    TRAITS
        .iter()
        .filter(|(_, colors)| {
            colors
                .families
                .iter()
                .any(|f| f.eq_ignore_ascii_case(family.trim()))
        })
        .map(|(name, _)| *name)
        .collect()
}

/// Look up the modifier for the given tone. Unknown tones have no effect.
pub fn tone_modifier(name: &str) -> ToneModifier {
    lookup(&TONES, name).copied().unwrap_or_default()
}

/// Look up the priors for the given category. Unknown categories have no
/// preferences.
pub fn category_priors(name: &str) -> CategoryPriors {
    lookup(&CATEGORIES, name).copied().unwrap_or(NO_CATEGORY)
}

/// Look up the adjustment for the given market. Unknown markets have a neutral
/// saturation preference.
pub fn market_adjustment(name: &str) -> MarketAdjustment {
    lookup(&MARKETS, name).copied().unwrap_or(NO_MARKET)
}
