/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, per WCAG 2.1.
const SRGB_LUMINANCE: &[f64; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the WCAG relative luminance for the given gamma-corrected sRGB
/// coordinates in `0..=1`.
///
/// WCAG 2.1 still specifies the 0.03928 threshold from an early sRGB draft
/// instead of 0.04045. For 24-bit colors the difference never matters.
pub(crate) fn to_relative_luminance(coordinates: &[f64; 3]) -> f64 {
    #[inline]
    fn linearize(value: f64) -> f64 {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the WCAG contrast ratio between two relative luminance values.
///
/// The arguments are interchangeable. The result ranges from 1 (no contrast)
/// to 21 (black on white).
pub(crate) fn to_contrast_ratio(luminance1: f64, luminance2: f64) -> f64 {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}
