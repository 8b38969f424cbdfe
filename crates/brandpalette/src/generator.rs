//! The end-to-end palette generation pipeline.
//!
//! [`Generator`] runs the four stages in fixed order: normalizing the brand
//! input into a design vector, generating palette candidates, scoring and
//! fixing them, and finally deriving mode variants. Each stage only consumes
//! the previous stage's output plus the original brand input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::constraint::ConstraintLayer;
use crate::generate::PaletteGenerator;
use crate::mapper::TraitMapper;
use crate::normalize::{BrandInput, DesignVector, Normalized, Normalizer, TraitMapping};
use crate::opt::Options;
use crate::palette::Palette;

/// The bookkeeping for a generation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationMetadata {
    pub input: BrandInput,
    pub design_vector: DesignVector,
    pub descriptors: Vec<&'static str>,
    pub primary_traits: Vec<String>,
    pub color_hints: Vec<&'static str>,
    pub mapped_traits: Vec<TraitMapping>,
    pub generated_at: DateTime<Utc>,
}

/// The ranked palettes for a brand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratorResult {
    pub brand_id: String,
    /// The palettes sorted by descending score.
    pub palettes: Vec<Palette>,
    pub metadata: GenerationMetadata,
}

impl GeneratorResult {
    /// Get the highest-ranked palette.
    pub fn best_palette(&self) -> Option<&Palette> {
        self.palettes.first()
    }

    /// Get an iterator over the palettes meeting level AA, in rank order.
    pub fn accessible_palettes(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter().filter(|palette| palette.is_accessible())
    }
}

/// The best palette for a brand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SinglePaletteResult {
    pub brand_id: String,
    pub palette: Option<Palette>,
    pub metadata: GenerationMetadata,
}

impl From<GeneratorResult> for SinglePaletteResult {
    fn from(value: GeneratorResult) -> Self {
        Self {
            brand_id: value.brand_id,
            palette: value.palettes.into_iter().next(),
            metadata: value.metadata,
        }
    }
}

// ====================================================================================================================

/// A palette generator for one brand.
///
/// ```
/// # use brandpalette::{BrandInput, Generator, Options};
/// let input = BrandInput::new("acme")
///     .with_traits(&["trustworthy", "calm"])
///     .with_category("healthcare");
///
/// let result = Generator::new(input)
///     .with_options(Options::builder().palette_count(3).build())
///     .generate();
///
/// assert_eq!(result.brand_id, "acme");
/// assert_eq!(result.palettes.len(), 3);
/// assert!(result.palettes.windows(2).all(|pair| pair[0].score >= pair[1].score));
/// ```
#[derive(Debug)]
pub struct Generator {
    input: BrandInput,
    options: Options,
    mapper: TraitMapper,
}

impl Generator {
    /// Create a new generator with default options and without fuzzy trait
    /// resolution.
    pub fn new(input: BrandInput) -> Self {
        Self {
            input,
            options: Options::default(),
            mapper: TraitMapper::disabled(),
        }
    }

    /// Use the given options.
    ///
    /// If the options set a similarity threshold, it replaces the trait
    /// mapper's.
    #[must_use = "method returns a new generator and does not mutate original value"]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self.mapper = adjust_threshold(&self.options, self.mapper);
        self
    }

    /// Use the given trait mapper for unknown traits.
    ///
    /// The mapper keeps its own threshold unless the options set one.
    #[must_use = "method returns a new generator and does not mutate original value"]
    pub fn with_trait_mapper(mut self, mapper: TraitMapper) -> Self {
        self.mapper = adjust_threshold(&self.options, mapper);
        self
    }

    /// Get the brand input.
    pub fn input(&self) -> &BrandInput {
        &self.input
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run the pipeline.
    pub fn generate(&self) -> GeneratorResult {
        let span = info_span!("generate", brand_id = self.input.brand_id.as_str());
        let _guard = span.enter();

        // 1. Normalize
        let normalized = Normalizer::new(&self.mapper).normalize(&self.input);

        // 2. Generate candidates
        let candidates = PaletteGenerator::new(&normalized).generate(self.options.palette_count());
        debug!(candidates = candidates.len(), "generated candidates");

        // 3. Score, fix, and rank
        let layer = ConstraintLayer::new(&self.input, &normalized.design_vector);
        let mut palettes = layer.apply(candidates);

        // 4. Derive mode variants
        if self.options.include_dark_mode() {
            palettes = palettes
                .into_iter()
                .map(|palette| layer.with_mode_variants(palette))
                .collect();
        }

        self.assemble(normalized, palettes)
    }

    fn assemble(&self, normalized: Normalized, palettes: Vec<Palette>) -> GeneratorResult {
        info!(
            palettes = palettes.len(),
            accessible = palettes.iter().filter(|p| p.is_accessible()).count(),
            best_score = ?palettes.first().map(|p| p.score),
            "generated palettes"
        );

        GeneratorResult {
            brand_id: self.input.brand_id.clone(),
            palettes,
            metadata: GenerationMetadata {
                input: self.input.clone(),
                design_vector: normalized.design_vector,
                descriptors: normalized.descriptors,
                primary_traits: normalized.primary_traits,
                color_hints: normalized.color_hints,
                mapped_traits: normalized.mapped_traits,
                generated_at: Utc::now(),
            },
        }
    }

    /// Run the pipeline and keep only the best palette.
    pub fn generate_best(&self) -> SinglePaletteResult {
        self.generate().into()
    }
}

fn adjust_threshold(options: &Options, mapper: TraitMapper) -> TraitMapper {
    match options.explicit_similarity_threshold() {
        Some(threshold) => mapper.with_threshold(threshold),
        None => mapper,
    }
}

/// Generate ranked palettes for the given brand input with the given options.
pub fn generate(input: BrandInput, options: &Options) -> GeneratorResult {
    Generator::new(input).with_options(options.clone()).generate()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::EmbeddingError;
    use crate::mapper::EmbeddingCache;

    fn mapper() -> TraitMapper {
        let mut cache = EmbeddingCache::new();
        cache.insert("calm", vec![1.0, 0.0]);
        TraitMapper::new(cache, |_: &str| Ok::<_, EmbeddingError>(vec![0.8, 0.6]))
            .with_threshold(0.5)
    }

    #[test]
    fn test_mapper_threshold() {
        let input = BrandInput::new("acme").with_traits(&["serene"]);

        // The mapper's own threshold survives default options, in either order.
        let generator = Generator::new(input.clone()).with_trait_mapper(mapper());
        assert_eq!(generator.mapper.threshold(), 0.5);
        let generator = Generator::new(input.clone())
            .with_trait_mapper(mapper())
            .with_options(Options::builder().palette_count(1).build());
        assert_eq!(generator.mapper.threshold(), 0.5);
        assert_eq!(generator.generate().metadata.mapped_traits.len(), 1);

        // An explicit threshold wins, in either order.
        let strict = Options::builder().similarity_threshold(0.9).build();
        let generator = Generator::new(input.clone())
            .with_options(strict.clone())
            .with_trait_mapper(mapper());
        assert_eq!(generator.mapper.threshold(), 0.9);
        let generator = Generator::new(input)
            .with_trait_mapper(mapper())
            .with_options(strict);
        assert_eq!(generator.mapper.threshold(), 0.9);
        assert!(generator.generate().metadata.mapped_traits.is_empty());
    }
}
