//! Scoring, fixing, and ranking palette candidates.
//!
//! The [`ConstraintLayer`] scores every candidate's primary color against the
//! brand's industry category, target markets, and design vector. It also
//! enforces level AA contrast between text and background by adjusting the
//! text color where necessary, ranks palettes by score, and derives dark mode
//! variants.

use tracing::{debug, info};

use crate::color::Role;
use crate::core::hue_distance;
use crate::emotion::{category_priors, CategoryPriors};
use crate::normalize::{BrandInput, DesignVector};
use crate::palette::{Colors, ModeVariant, ModeVariants, Palette, PaletteCandidate};
use crate::wcag::{adjust_for_contrast, evaluate_palette, WCAG_AA_NORMAL};

/// The score of a palette without any penalties or bonuses.
pub const BASE_SCORE: f64 = 100.0;

const AVOID_DISTANCE: f64 = 30.0;
const AVOID_PENALTY: f64 = 15.0;
const PREFERRED_DISTANCE: f64 = 40.0;
const PREFERRED_BONUS: f64 = 10.0;
const ALIGNMENT_BONUS: f64 = 5.0;

/// The constraint layer for one brand.
#[derive(Debug)]
pub struct ConstraintLayer<'a> {
    input: &'a BrandInput,
    design_vector: DesignVector,
    priors: Option<CategoryPriors>,
}

impl<'a> ConstraintLayer<'a> {
    /// Create a new constraint layer for the given brand input and its design
    /// vector.
    pub fn new(input: &'a BrandInput, design_vector: &DesignVector) -> Self {
        Self {
            input,
            design_vector: *design_vector,
            priors: input.category.as_deref().map(category_priors),
        }
    }

    /// Score, fix, and rank the given candidates.
    ///
    /// The result is sorted by descending score. Palettes with the same score
    /// retain their relative order.
    pub fn apply(&self, candidates: Vec<PaletteCandidate>) -> Vec<Palette> {
        let mut palettes: Vec<Palette> = candidates
            .into_iter()
            .map(|candidate| self.constrain(candidate))
            .collect();

        palettes.sort_by(|p1, p2| p2.score.total_cmp(&p1.score));
        palettes
    }

    fn constrain(&self, candidate: PaletteCandidate) -> Palette {
        let score = self.calculate_palette_score(&candidate.colors);

        let mut colors = candidate.colors;
        let mut accessibility = evaluate_palette(&colors);
        if !accessibility.valid {
            let before = accessibility.contrast_ratio;
            colors = fix_text_contrast(&colors);
            accessibility = evaluate_palette(&colors);
            info!(
                scheme = %candidate.scheme,
                base_hue = candidate.base_hue,
                before,
                after = accessibility.contrast_ratio,
                valid = accessibility.valid,
                "adjusted text color for contrast"
            );
        }

        Palette {
            scheme: candidate.scheme,
            base_hue: candidate.base_hue,
            colors,
            metadata: candidate.metadata,
            score,
            accessibility,
            variants: None,
        }
    }

    /// Compute the score for the given palette colors.
    ///
    /// The score starts at 100, loses the category and cultural penalties,
    /// gains the design alignment bonus, and never drops below zero. All three
    /// adjustments only consider the primary color.
    pub fn calculate_palette_score(&self, colors: &Colors) -> f64 {
        let score = BASE_SCORE - self.category_penalty(colors) - self.cultural_penalty(colors)
            + self.alignment_bonus(colors);
        score.max(0.0)
    }

    fn category_penalty(&self, colors: &Colors) -> f64 {
        let Some(priors) = &self.priors else {
            return 0.0;
        };
        let hue = colors[Role::Primary].oklch().h;

        let mut penalty = 0.0;
        for avoid in priors.avoid_hues {
            if hue_distance(hue, *avoid) < AVOID_DISTANCE {
                penalty += AVOID_PENALTY;
            }
        }
        if priors
            .preferred_hues
            .iter()
            .any(|preferred| hue_distance(hue, *preferred) < PREFERRED_DISTANCE)
        {
            penalty -= PREFERRED_BONUS;
        }

        penalty
    }

    fn cultural_penalty(&self, colors: &Colors) -> f64 {
        let primary = colors[Role::Primary].oklch();

        let mut penalty = 0.0;
        for market in &self.input.markets {
            let market = market.trim();
            if market.eq_ignore_ascii_case("CN") {
                // Red is auspicious.
                if hue_distance(primary.h, 0.0) < 30.0 {
                    penalty -= 5.0;
                }
            } else if market.eq_ignore_ascii_case("JP") {
                // Muted colors are preferred.
                if primary.c > 0.25 {
                    penalty += 5.0;
                }
            }
        }

        penalty
    }

    fn alignment_bonus(&self, colors: &Colors) -> f64 {
        let primary = colors[Role::Primary].oklch();
        let DesignVector {
            warmth, saturation, ..
        } = self.design_vector;

        let mut bonus = 0.0;
        if (saturation > 0.3 && primary.c > 0.2) || (saturation < -0.3 && primary.c < 0.15) {
            bonus += ALIGNMENT_BONUS;
        }

        let is_warm = primary.h < 60.0 || primary.h > 330.0;
        let is_cool = primary.h > 150.0 && primary.h < 270.0;
        if (warmth > 0.3 && is_warm) || (warmth < -0.3 && is_cool) {
            bonus += ALIGNMENT_BONUS;
        }

        bonus
    }

    /// Add light and dark mode variants to the given palette.
    pub fn with_mode_variants(&self, mut palette: Palette) -> Palette {
        let light = ModeVariant {
            colors: palette.colors.clone(),
            accessibility: palette.accessibility.clone(),
        };
        let dark = ModeVariant::new(dark_mode(&palette.colors));
        debug!(
            scheme = %palette.scheme,
            dark_contrast = dark.accessibility.contrast_ratio,
            "derived mode variants"
        );

        palette.variants = Some(ModeVariants { light, dark });
        palette
    }
}

/// Adjust the text color until it meets level AA on the background color.
fn fix_text_contrast(colors: &Colors) -> Colors {
    let text = colors[Role::Text].oklch();
    let background = colors[Role::Background].rgb();
    colors.with(Role::Text, adjust_for_contrast(text, background, WCAG_AA_NORMAL))
}

/// Derive the dark mode colors from the given light mode colors.
///
/// Background, light neutral, and mid neutral have their lightness inverted,
/// text becomes light, and all other colors stay the same.
pub fn dark_mode(colors: &Colors) -> Colors {
    Colors::from_fn(|role| {
        let color = colors[role].oklch();
        match role {
            Role::Background | Role::NeutralLight | Role::NeutralMid => {
                color.with_lightness(1.0 - color.l)
            }
            Role::Text => color.with_lightness(0.95),
            _ => *color,
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::OklchColor;
    use crate::harmony::HarmonyScheme;
    use crate::palette::PaletteMetadata;

    fn colors(primary: OklchColor, text: OklchColor) -> Colors {
        Colors::from_fn(|role| match role {
            Role::Primary => primary,
            Role::Background => OklchColor::new(0.95, 0.02, primary.h),
            Role::Text => text,
            _ => OklchColor::new(0.5, 0.02, primary.h),
        })
    }

    fn candidate(primary: OklchColor, text: OklchColor) -> PaletteCandidate {
        PaletteCandidate {
            scheme: HarmonyScheme::Monochromatic,
            base_hue: primary.h,
            colors: colors(primary, text),
            metadata: PaletteMetadata {
                descriptors: vec![],
                harmony_scheme: HarmonyScheme::Monochromatic,
                design_vector: DesignVector::default(),
            },
        }
    }

    fn dark_text() -> OklchColor {
        OklchColor::new(0.2, 0.01, 0.0)
    }

    #[test]
    fn test_neutral_score() {
        let input = BrandInput::default();
        let layer = ConstraintLayer::new(&input, &DesignVector::default());
        let score = layer.calculate_palette_score(&colors(OklchColor::new(0.55, 0.15, 100.0), dark_text()));
        assert_eq!(score, BASE_SCORE);
    }

    #[test]
    fn test_category_score() {
        let input = BrandInput::default().with_category("fintech");
        let layer = ConstraintLayer::new(&input, &DesignVector::default());

        // Red is avoided.
        let red = colors(OklchColor::new(0.55, 0.15, 10.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&red), 85.0);

        // Blue is preferred.
        let blue = colors(OklchColor::new(0.55, 0.15, 230.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&blue), 110.0);

        // Unknown categories are neutral.
        let input = BrandInput::default().with_category("mining");
        let layer = ConstraintLayer::new(&input, &DesignVector::default());
        assert_eq!(layer.calculate_palette_score(&red), 100.0);
    }

    #[test]
    fn test_cultural_score() {
        let input = BrandInput::default().with_markets(&["cn", "JP", "US"]);
        let layer = ConstraintLayer::new(&input, &DesignVector::default());

        let red = colors(OklchColor::new(0.55, 0.1, 350.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&red), 105.0);

        let vivid_red = colors(OklchColor::new(0.55, 0.28, 5.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&vivid_red), 100.0);

        let vivid_green = colors(OklchColor::new(0.55, 0.28, 140.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&vivid_green), 95.0);
    }

    #[test]
    fn test_alignment_score() {
        let input = BrandInput::default();
        let warm_vibrant = DesignVector {
            warmth: 0.5,
            saturation: 0.5,
            ..DesignVector::default()
        };
        let layer = ConstraintLayer::new(&input, &warm_vibrant);
        let orange = colors(OklchColor::new(0.6, 0.22, 40.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&orange), 110.0);
        let teal = colors(OklchColor::new(0.6, 0.1, 180.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&teal), 100.0);

        let cool_muted = DesignVector {
            warmth: -0.5,
            saturation: -0.5,
            ..DesignVector::default()
        };
        let layer = ConstraintLayer::new(&input, &cool_muted);
        assert_eq!(layer.calculate_palette_score(&teal), 110.0);
        assert_eq!(layer.calculate_palette_score(&orange), 100.0);
    }

    #[test]
    fn test_score_floor() {
        let input = BrandInput::default()
            .with_category("fintech")
            .with_markets(&["JP"; 30]);
        let layer = ConstraintLayer::new(&input, &DesignVector::default());
        let vivid_red = colors(OklchColor::new(0.55, 0.3, 0.0), dark_text());
        assert_eq!(layer.calculate_palette_score(&vivid_red), 0.0);
    }

    #[test]
    fn test_accessibility_fix() {
        let input = BrandInput::default();
        let layer = ConstraintLayer::new(&input, &DesignVector::default());

        // Light gray text on a near-white background
        let candidates = vec![candidate(OklchColor::new(0.55, 0.15, 200.0), OklchColor::new(0.8, 0.01, 200.0))];
        let palettes = layer.apply(candidates);
        let palette = &palettes[0];

        assert!(palette.is_accessible());
        assert!(palette.accessibility.contrast_ratio >= WCAG_AA_NORMAL);
        assert!(palette.text_color().oklch().l < 0.8);
        assert_eq!(palette.text_color().rgb(), &palette.text_color().oklch().to_rgb());
        assert_eq!(palette.text_color().hex(), palette.text_color().rgb().to_hex());
        assert!(palette.variants.is_none());
    }

    #[test]
    fn test_ranking() {
        let input = BrandInput::default().with_category("fintech");
        let layer = ConstraintLayer::new(&input, &DesignVector::default());

        let candidates = vec![
            candidate(OklchColor::new(0.55, 0.15, 100.0), dark_text()),
            candidate(OklchColor::new(0.55, 0.15, 0.0), dark_text()),
            candidate(OklchColor::new(0.55, 0.15, 210.0), dark_text()),
            candidate(OklchColor::new(0.55, 0.15, 90.0), dark_text()),
        ];
        let palettes = layer.apply(candidates);
        let hues: Vec<_> = palettes.iter().map(|p| p.base_hue).collect();
        // 100° and 90° are both near the preferred 120°.
        assert_eq!(hues, vec![100.0, 210.0, 90.0, 0.0]);
        let scores: Vec<_> = palettes.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![110.0, 110.0, 110.0, 85.0]);
    }

    #[test]
    fn test_dark_mode() {
        use crate::generate::PaletteGenerator;
        use crate::mapper::TraitMapper;
        use crate::normalize::Normalizer;

        let input = BrandInput::default().with_traits(&["calm"]);
        let normalized = Normalizer::new(&TraitMapper::disabled()).normalize(&input);
        let layer = ConstraintLayer::new(&input, &normalized.design_vector);
        let palettes = layer.apply(PaletteGenerator::new(&normalized).generate(1));
        let palette = layer.with_mode_variants(palettes[0].clone());

        let Some(variants) = &palette.variants else {
            panic!("palette should have variants");
        };
        assert_eq!(variants.light.colors, palette.colors);
        assert_eq!(variants.light.accessibility, palette.accessibility);

        let dark = &variants.dark.colors;
        let light = &palette.colors;
        assert_eq!(light[Role::Background].oklch().l, 0.95);
        assert_eq!(light[Role::NeutralLight].oklch().l, 0.85);
        assert_eq!(dark[Role::Background].oklch().l, 0.05);
        assert_eq!(dark[Role::NeutralLight].oklch().l, 0.15);
        assert_eq!(dark[Role::NeutralMid].oklch().l, 0.5);
        assert_eq!(dark[Role::Text].oklch().l, 0.95);

        for role in [Role::Background, Role::NeutralLight, Role::NeutralMid, Role::Text] {
            assert_eq!(dark[role].oklch().c, light[role].oklch().c);
            assert_eq!(dark[role].oklch().h, light[role].oklch().h);
            assert_eq!(dark[role].rgb(), &dark[role].oklch().to_rgb());
            assert_eq!(dark[role].hex(), dark[role].rgb().to_hex());
        }
        for role in [Role::Primary, Role::Secondary, Role::Accent, Role::NeutralDark] {
            assert_eq!(dark[role], light[role]);
        }
        assert_ne!(dark[Role::NeutralLight].rgb(), light[Role::NeutralLight].rgb());
        assert!(variants.dark.accessibility.valid);
    }
}
