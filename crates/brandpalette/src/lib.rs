//! # Brand 🎨 Palette
//!
//! Brandpalette turns a brand's personality into ranked, accessible color
//! palettes. It is a deterministic pipeline from a handful of words, such as
//! personality traits, tones of voice, audiences, industry category, target
//! markets, and keywords, to complete eight-color palettes in Oklch, sRGB,
//! hexadecimal, and CMYK, each with a WCAG contrast report and light and dark
//! mode variants.
//!
//!
//! ## 1. Overview
//!
//! The pipeline has four stages:
//!
//!   * [`Normalizer`](normalize::Normalizer) folds the [`BrandInput`] into a
//!     six-axis [`DesignVector`] using the frozen tables in [`emotion`]. Traits
//!     missing from those tables are resolved by a [`TraitMapper`], which
//!     compares embedding vectors provided by an injected
//!     [`Embedder`](mapper::Embedder).
//!   * [`PaletteGenerator`](generate::PaletteGenerator) combines the dominant
//!     hues of the brand's primary traits with six [`HarmonyScheme`]s and
//!     assigns Oklch coordinates to the eight color [`Role`]s.
//!   * [`ConstraintLayer`](constraint::ConstraintLayer) scores every candidate
//!     for category fit, cultural fit, and design alignment, fixes text
//!     colors that fail WCAG level AA, and ranks the palettes.
//!   * The same constraint layer then derives dark mode variants.
//!
//! [`Generator`] runs all four stages and [`generate()`] is a convenient
//! shorthand for it.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use brandpalette::{generate, BrandInput, Options, Role};
//! let input = BrandInput::new("acme")
//!     .with_traits(&["innovative", "approachable", "premium"])
//!     .with_tone(&["confident", "friendly"])
//!     .with_category("SaaS")
//!     .with_markets(&["US", "AU"])
//!     .with_keywords(&["automation", "reliability", "speed"]);
//!
//! let options = Options::builder().palette_count(5).build();
//! let result = generate(input, &options);
//!
//! assert_eq!(result.palettes.len(), 5);
//! let best = &result.palettes[0];
//! assert_eq!(best.colors[Role::Primary].role(), Role::Primary);
//! assert!(best.colors[Role::Background].hex().starts_with('#'));
//! assert!(best.variants.is_some());
//! ```
//!
//!
//! ## 3. Logging
//!
//! Brandpalette logs through [`tracing`](https://docs.rs/tracing) but never
//! installs a subscriber. Generation runs are wrapped in a `generate` span,
//! fuzzy trait resolutions and contrast fixes are logged at info level, and
//! stage boundaries at debug level.

mod core;

pub mod color;
pub mod color_space;
pub mod constraint;
pub mod emotion;
pub mod error;
pub mod generate;
mod generator;
pub mod harmony;
pub mod mapper;
pub mod normalize;
pub mod opt;
pub mod palette;
pub mod wcag;

pub use color::{CmykColor, OklchColor, PaletteColor, RgbColor, Role};
pub use generator::{generate, GenerationMetadata, Generator, GeneratorResult, SinglePaletteResult};
pub use harmony::HarmonyScheme;
pub use mapper::TraitMapper;
pub use normalize::{BrandInput, DesignVector, TraitMapping};
pub use opt::Options;
pub use palette::{Palette, PaletteMetadata};
pub use wcag::AccessibilityReport;
