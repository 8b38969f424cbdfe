/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert one coordinate from gamma-corrected sRGB to linear sRGB.
#[inline]
pub(crate) fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert one coordinate from linear sRGB to gamma-corrected sRGB.
#[inline]
pub(crate) fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/#converting-from-linear-srgb-to-oklab

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[f64; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[f64; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn oklch_to_oklab(value: &[f64; 3]) -> [f64; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion. The hue is always in `0..360`.
#[allow(non_snake_case)]
pub(crate) fn oklab_to_oklch(value: &[f64; 3]) -> [f64; 3] {
    let [L, a, b] = *value;

    let C = a.hypot(b);
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);

    [L, C, h]
}

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
fn oklab_to_linear_srgb(value: &[f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&LMS_TO_LINEAR_SRGB, &[l.powi(3), m.powi(3), s.powi(3)])
}

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube root.
fn linear_srgb_to_oklab(value: &[f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Oklch coordinates to gamma-corrected sRGB coordinates.
///
/// The result is not gamut-mapped. Out-of-gamut colors have coordinates
/// outside `0..=1`, which [`to_24bit`] clamps.
pub(crate) fn oklch_to_srgb(value: &[f64; 3]) -> [f64; 3] {
    let oklab = oklch_to_oklab(value);
    let [r, g, b] = oklab_to_linear_srgb(&oklab);
    [linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b)]
}

/// Convert gamma-corrected sRGB coordinates to Oklch coordinates.
pub(crate) fn srgb_to_oklch(value: &[f64; 3]) -> [f64; 3] {
    let linear = [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ];
    let oklab = linear_srgb_to_oklab(&linear);
    oklab_to_oklch(&oklab)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [f64; 3] {
    [f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0]
}

/// Convert the sRGB coordinates to 24-bit representation.
///
/// Coordinates are scaled to `0..=255`, rounded, and clamped. Not-a-number
/// coordinates become zero.
pub(crate) fn to_24bit(coordinates: &[f64; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: f64) -> u8 {
        if value.is_nan() {
            0
        } else {
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        }
    }

    [
        convert(coordinates[0]),
        convert(coordinates[1]),
        convert(coordinates[2]),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gamma() {
        for value in [0.0, 0.002, 0.04, 0.2, 0.5, 0.73, 1.0] {
            let roundtrip = linear_to_srgb(srgb_to_linear(value));
            assert!((roundtrip - value).abs() < 1e-9, "{} became {}", value, roundtrip);
        }
    }

    #[test]
    fn test_extremes() {
        for hue in [0.0, 45.0, 137.5, 270.0, 359.9] {
            assert_eq!(to_24bit(&oklch_to_srgb(&[0.0, 0.0, hue])), [0, 0, 0]);
            assert_eq!(to_24bit(&oklch_to_srgb(&[1.0, 0.0, hue])), [255, 255, 255]);
        }
    }

    #[test]
    fn test_known_colors() {
        // #ff0000 in Oklch is roughly 0.628 0.258 29.2
        let [l, c, h] = srgb_to_oklch(&from_24bit(255, 0, 0));
        assert!((l - 0.628).abs() < 0.001, "lightness {}", l);
        assert!((c - 0.258).abs() < 0.001, "chroma {}", c);
        assert!((h - 29.23).abs() < 0.1, "hue {}", h);

        let [_, _, h] = srgb_to_oklch(&from_24bit(0, 0, 255));
        assert!((h - 264.05).abs() < 0.1, "hue {}", h);
    }

    #[test]
    fn test_hue_range() {
        let [_, _, h] = oklab_to_oklch(&[0.5, 0.1, -0.1]);
        assert!((0.0..360.0).contains(&h), "hue {} out of range", h);
        assert!((h - 315.0).abs() < 1e-9, "hue {}", h);
    }

    #[test]
    fn test_to_24bit_clamps() {
        assert_eq!(to_24bit(&[-0.3, 1.7, f64::NAN]), [0, 255, 0]);
        assert_eq!(to_24bit(&[0.5, 0.2, 1.0]), [128, 51, 255]);
    }
}
