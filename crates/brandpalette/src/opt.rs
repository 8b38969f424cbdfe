//! Helper module with the options for generating palettes.
//!
//! This module provides the options for a generation run and the
//! corresponding builder. Options also deserialize from JSON, with missing
//! fields taking on their default values.
//!
//!
//! # Example
//!
//! ```
//! # use brandpalette::opt::Options;
//! let options = Options::builder()
//!     .palette_count(5)
//!     .include_dark_mode(false)
//!     .build();
//!
//! assert_eq!(options.palette_count(), 5);
//! assert!(!options.include_dark_mode());
//! assert_eq!(options.similarity_threshold(), 0.75);
//! ```

use serde::Deserialize;

use crate::mapper::SIMILARITY_THRESHOLD;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
struct OptionData {
    palette_count: usize,
    include_dark_mode: bool,
    similarity_threshold: Option<f64>,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            palette_count: 10,
            include_dark_mode: true,
            similarity_threshold: None,
        }
    }
}

impl Default for OptionData {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the maximum number of palettes.
    pub fn palette_count(&mut self, count: usize) -> &mut Self {
        self.0.palette_count = count;
        self
    }

    /// Set whether to derive light and dark mode variants.
    pub fn include_dark_mode(&mut self, include: bool) -> &mut Self {
        self.0.include_dark_mode = include;
        self
    }

    /// Set the minimum cosine similarity for fuzzy trait matches.
    ///
    /// This method clamps the threshold to `0..=1`. Once set, the threshold
    /// replaces that of any trait mapper used with these options.
    pub fn similarity_threshold(&mut self, threshold: f64) -> &mut Self {
        self.0.similarity_threshold = Some(threshold.clamp(0.0, 1.0));
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
///
/// Deserialized options go through the same validation as built ones.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "OptionData")]
pub struct Options(OptionData);

impl From<OptionData> for Options {
    fn from(value: OptionData) -> Self {
        let mut builder = OptionBuilder(value);
        if let Some(threshold) = builder.0.similarity_threshold {
            builder.similarity_threshold(threshold);
        }
        builder.build()
    }
}

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the maximum number of palettes.
    pub fn palette_count(&self) -> usize {
        self.0.palette_count
    }

    /// Determine whether to derive light and dark mode variants.
    pub fn include_dark_mode(&self) -> bool {
        self.0.include_dark_mode
    }

    /// Get the minimum cosine similarity for fuzzy trait matches.
    pub fn similarity_threshold(&self) -> f64 {
        self.0.similarity_threshold.unwrap_or(SIMILARITY_THRESHOLD)
    }

    /// Get the similarity threshold, if it was set explicitly.
    pub fn explicit_similarity_threshold(&self) -> Option<f64> {
        self.0.similarity_threshold
    }
}

#[cfg(test)]
mod test {
    use super::Options;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.palette_count(), 10);
        assert!(options.include_dark_mode());
        assert_eq!(options.similarity_threshold(), 0.75);
        assert_eq!(Options::builder().build(), options);
    }

    #[test]
    fn test_builder() {
        let options = Options::builder().similarity_threshold(1.5).build();
        assert_eq!(options.similarity_threshold(), 1.0);
        assert_eq!(options.explicit_similarity_threshold(), Some(1.0));
        assert_eq!(Options::default().explicit_similarity_threshold(), None);
    }

    #[test]
    fn test_json() -> Result<(), serde_json::Error> {
        let options: Options = serde_json::from_str(r#"{"palette_count": 5}"#)?;
        assert_eq!(options.palette_count(), 5);
        assert!(options.include_dark_mode());

        let options: Options = serde_json::from_str("{}")?;
        assert_eq!(options, Options::default());

        let options: Options = serde_json::from_str(r#"{"similarity_threshold": -3}"#)?;
        assert_eq!(options.similarity_threshold(), 0.0);
        assert_eq!(options, Options::builder().similarity_threshold(-3.0).build());

        let options: Options = serde_json::from_str(r#"{"similarity_threshold": 0.9}"#)?;
        assert_eq!(options.explicit_similarity_threshold(), Some(0.9));
        Ok(())
    }
}
