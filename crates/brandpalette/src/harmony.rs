use serde::{Deserialize, Serialize};

/// A hue harmony scheme.
///
/// Each scheme derives one to four harmony hues from a base hue. The first
/// harmony hue always is the base hue itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyScheme {
    /// The base hue plus its neighbors 30° away on either side.
    Analogous,
    /// The base hue plus its opposite.
    Complementary,
    /// Three hues evenly spaced around the wheel.
    Triadic,
    /// The base hue plus the two neighbors of its opposite.
    SplitComplementary,
    /// Four hues evenly spaced around the wheel.
    Tetradic,
    /// Just the base hue.
    Monochromatic,
}

impl HarmonyScheme {
    /// The number of schemes.
    pub const COUNT: usize = 6;

    /// Get all schemes in generation order.
    pub const fn all() -> [HarmonyScheme; HarmonyScheme::COUNT] {
        use HarmonyScheme::*;
        [
            Analogous,
            Complementary,
            Triadic,
            SplitComplementary,
            Tetradic,
            Monochromatic,
        ]
    }

    /// Get this scheme's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split_complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Get the hue offsets in degrees, starting with zero for the base hue.
    pub const fn offsets(&self) -> &'static [f64] {
        match *self {
            Self::Analogous => &[0.0, 30.0, -30.0],
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Self::Monochromatic => &[0.0],
        }
    }

    /// Compute the harmony hues for the given base hue.
    ///
    /// All hues are normalized to `0..360`.
    pub fn hues(&self, base: f64) -> Vec<f64> {
        self.offsets()
            .iter()
            .map(|offset| (base + offset).rem_euclid(360.0))
            .collect()
    }
}

impl core::fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::HarmonyScheme;

    #[test]
    fn test_hues() {
        assert_eq!(HarmonyScheme::Analogous.hues(10.0), vec![10.0, 40.0, 340.0]);
        assert_eq!(HarmonyScheme::Complementary.hues(200.0), vec![200.0, 20.0]);
        assert_eq!(HarmonyScheme::Triadic.hues(0.0), vec![0.0, 120.0, 240.0]);
        assert_eq!(HarmonyScheme::SplitComplementary.hues(190.0), vec![190.0, 340.0, 40.0]);
        assert_eq!(HarmonyScheme::Tetradic.hues(300.0), vec![300.0, 30.0, 120.0, 210.0]);
        assert_eq!(HarmonyScheme::Monochromatic.hues(123.4), vec![123.4]);
    }

    #[test]
    fn test_names() {
        for scheme in HarmonyScheme::all() {
            assert_eq!(scheme.hues(0.0).len(), scheme.offsets().len());
            assert_eq!(scheme.hues(42.0)[0], 42.0);
        }
        assert_eq!(HarmonyScheme::SplitComplementary.to_string(), "split_complementary");
    }
}
