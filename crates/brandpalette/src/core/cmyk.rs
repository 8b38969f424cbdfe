/// Convert 24-bit RGB coordinates to naive CMYK percentages.
///
/// This is the textbook conversion without any ink model. Pure black maps to
/// `[0, 0, 0, 100]`, which also avoids dividing by zero.
pub(crate) fn to_cmyk(r: u8, g: u8, b: u8) -> [u8; 4] {
    let [r, g, b] = super::from_24bit(r, g, b);
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0, 0, 0, 100];
    }

    #[inline]
    fn percent(value: f64) -> u8 {
        (value * 100.0).round().clamp(0.0, 100.0) as u8
    }

    let scale = 1.0 - k;
    [
        percent((1.0 - r - k) / scale),
        percent((1.0 - g - k) / scale),
        percent((1.0 - b - k) / scale),
        percent(k),
    ]
}

#[cfg(test)]
mod test {
    use super::to_cmyk;

    #[test]
    fn test_cmyk() {
        assert_eq!(to_cmyk(0, 0, 0), [0, 0, 0, 100]);
        assert_eq!(to_cmyk(255, 255, 255), [0, 0, 0, 0]);
        assert_eq!(to_cmyk(255, 0, 0), [0, 100, 100, 0]);
        assert_eq!(to_cmyk(0, 128, 255), [100, 50, 0, 0]);
        assert_eq!(to_cmyk(128, 128, 128), [0, 0, 0, 50]);
    }
}
