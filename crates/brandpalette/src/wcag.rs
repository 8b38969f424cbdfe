//! Checking and fixing contrast per WCAG 2.1.
//!
//! This module computes relative luminance and contrast ratios for 24-bit
//! colors, evaluates a palette's background/text pair against the AA and AAA
//! thresholds, and nudges a color's lightness until it reaches a minimum
//! contrast against some other color.

use serde::Serialize;
use tracing::trace;

use crate::color::{OklchColor, RgbColor, Role};
use crate::core::{round_to, to_contrast_ratio, to_relative_luminance};
use crate::palette::Colors;

/// The minimum contrast for normal text at level AA.
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// The minimum contrast for large text at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;
/// The minimum contrast for normal text at level AAA.
pub const WCAG_AAA_NORMAL: f64 = 7.0;
/// The minimum contrast for large text at level AAA.
pub const WCAG_AAA_LARGE: f64 = 4.5;

const STEP: f64 = 0.02;
const MAX_STEPS: usize = 50;

/// Compute the relative luminance of the given color.
pub fn relative_luminance(color: &RgbColor) -> f64 {
    to_relative_luminance(&color.to_unit())
}

/// Compute the contrast ratio between two colors.
///
/// The arguments are interchangeable and the result ranges `1..=21`.
pub fn contrast_ratio(color1: &RgbColor, color2: &RgbColor) -> f64 {
    to_contrast_ratio(relative_luminance(color1), relative_luminance(color2))
}

/// Determine whether the colors meet level AA for normal text.
pub fn meets_aa_normal(color1: &RgbColor, color2: &RgbColor) -> bool {
    contrast_ratio(color1, color2) >= WCAG_AA_NORMAL
}

/// Determine whether the colors meet level AA for large text.
pub fn meets_aa_large(color1: &RgbColor, color2: &RgbColor) -> bool {
    contrast_ratio(color1, color2) >= WCAG_AA_LARGE
}

/// Determine whether the colors meet level AAA for normal text.
pub fn meets_aaa_normal(color1: &RgbColor, color2: &RgbColor) -> bool {
    contrast_ratio(color1, color2) >= WCAG_AAA_NORMAL
}

/// Determine whether the colors meet level AAA for large text.
pub fn meets_aaa_large(color1: &RgbColor, color2: &RgbColor) -> bool {
    contrast_ratio(color1, color2) >= WCAG_AAA_LARGE
}

// ====================================================================================================================

/// The accessibility of a palette's text on its background.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessibilityReport {
    /// Whether the palette meets level AA for normal text.
    pub valid: bool,
    /// The contrast ratio rounded to two decimals.
    pub contrast_ratio: f64,
    pub wcag_aa_normal: bool,
    pub wcag_aa_large: bool,
    pub wcag_aaa_normal: bool,
    pub wcag_aaa_large: bool,
    pub recommendations: Vec<&'static str>,
}

impl AccessibilityReport {
    /// Evaluate the given text color on the given background color.
    ///
    /// The flags are computed from the exact contrast ratio, not the rounded
    /// one included in the report.
    pub fn evaluate(background: &RgbColor, text: &RgbColor) -> Self {
        let ratio = contrast_ratio(background, text);

        let recommendations = if ratio >= WCAG_AAA_NORMAL {
            vec![]
        } else if ratio < WCAG_AA_NORMAL {
            vec!["Consider increasing contrast for better readability"]
        } else {
            vec!["Meets AA but not AAA - consider adjusting for enhanced accessibility"]
        };

        Self {
            valid: ratio >= WCAG_AA_NORMAL,
            contrast_ratio: round_to(ratio, 2),
            wcag_aa_normal: ratio >= WCAG_AA_NORMAL,
            wcag_aa_large: ratio >= WCAG_AA_LARGE,
            wcag_aaa_normal: ratio >= WCAG_AAA_NORMAL,
            wcag_aaa_large: ratio >= WCAG_AAA_LARGE,
            recommendations,
        }
    }
}

/// Evaluate the text color on the background color of the given palette
/// colors.
pub fn evaluate_palette(colors: &Colors) -> AccessibilityReport {
    AccessibilityReport::evaluate(colors[Role::Background].rgb(), colors[Role::Text].rgb())
}

/// Adjust the lightness of the given color until it has the given minimum
/// contrast with the target color.
///
/// This function takes at most 50 steps of 0.02 lightness, moving away from
/// the target's luminance. It stops early once lightness reaches 0.01 or 0.99.
/// The result is best-effort and may still fall short of the minimum contrast.
pub fn adjust_for_contrast(color: &OklchColor, target: &RgbColor, min_ratio: f64) -> OklchColor {
    let target_luminance = relative_luminance(target);
    let mut adjusted = *color;

    for step in 0..MAX_STEPS {
        let rgb = adjusted.to_rgb();
        let luminance = relative_luminance(&rgb);
        let ratio = to_contrast_ratio(luminance, target_luminance);
        if ratio >= min_ratio {
            trace!(step, lightness = adjusted.l, ratio, "reached contrast");
            return adjusted;
        }

        let l = if luminance > target_luminance {
            (adjusted.l + STEP).min(1.0)
        } else {
            (adjusted.l - STEP).max(0.0)
        };
        adjusted = adjusted.with_lightness(l);

        if adjusted.l >= 0.99 || adjusted.l <= 0.01 {
            break;
        }
    }

    adjusted
}
