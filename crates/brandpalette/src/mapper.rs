//! Resolving arbitrary trait words to known traits.
//!
//! Brands describe themselves with far more words than the
//! [`emotion`](crate::emotion) tables know. [`TraitMapper`] bridges the gap by
//! comparing the embedding vector of an unknown trait against precomputed
//! embeddings of all known traits and picking the most similar one, provided
//! the cosine similarity reaches a threshold.
//!
//! The mapper never talks to the network itself. Callers inject an
//! [`Embedder`] for computing new embeddings and an [`EmbeddingCache`] with the
//! embeddings of known traits. When either is missing or fails, the mapper
//! simply reports no match.
//!
//! ```
//! # use brandpalette::mapper::{EmbeddingCache, TraitMapper};
//! # use brandpalette::error::EmbeddingError;
//! let mut cache = EmbeddingCache::new();
//! cache.insert("innovative", vec![1.0, 0.0]);
//! cache.insert("calm", vec![0.0, 1.0]);
//!
//! let embed = |text: &str| -> Result<Vec<f64>, EmbeddingError> {
//!     match text {
//!         "visionary" => Ok(vec![0.9, 0.1]),
//!         _ => Err(EmbeddingError::Unavailable),
//!     }
//! };
//!
//! let mapper = TraitMapper::new(cache, embed);
//! assert_eq!(mapper.map_trait("Visionary"), Some("innovative"));
//! assert_eq!(mapper.map_trait("CALM"), Some("calm"));
//! assert_eq!(mapper.map_trait("bizarre"), None);
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::core::round_to;
use crate::emotion::{is_known_trait, known_traits};
use crate::error::{CacheError, EmbeddingError};

/// The default minimum cosine similarity for accepting a match.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// A provider of embedding vectors.
///
/// Implementations typically wrap a remote embedding API. They own any
/// timeout and retry policy. Closures with a matching signature implement this
/// trait, too.
pub trait Embedder {
    /// Compute the embedding vector for the given text.
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError>;
}

impl<F> Embedder for F
where
    F: Fn(&str) -> Result<Vec<f64>, EmbeddingError>,
{
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        self(text)
    }
}

/// An embedder that is always unavailable.
///
/// This is the embedder for deployments without embedding credentials. It
/// restricts trait resolution to exact matches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEmbedder;

impl Embedder for NoEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f64>, EmbeddingError> {
        Err(EmbeddingError::Unavailable)
    }
}

// ====================================================================================================================

/// The precomputed embeddings of known traits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbeddingCache {
    inner: HashMap<String, Vec<f64>>,
}

impl EmbeddingCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the cache from a JSON object mapping trait names to number arrays.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CacheError> {
        let inner: HashMap<String, Vec<f64>> = serde_json::from_reader(reader)?;
        Ok(Self {
            inner: inner
                .into_iter()
                .map(|(name, vector)| (name.trim().to_lowercase(), vector))
                .collect(),
        })
    }

    /// Read the cache from the JSON file with the given path.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Read the cache from the JSON file with the given path, falling back on
    /// an empty cache if the file is missing or malformed.
    pub fn from_json_file_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_json_file(path) {
            Ok(cache) => cache,
            Err(error) => {
                warn!(path = %path.display(), %error, "embeddings cache unavailable, fuzzy trait mapping disabled");
                Self::new()
            }
        }
    }

    /// Add the embedding for the given trait.
    pub fn insert<S: AsRef<str>>(&mut self, name: S, vector: Vec<f64>) -> &mut Self {
        self.inner.insert(name.as_ref().trim().to_lowercase(), vector);
        self
    }

    /// Get the embedding for the given trait, ignoring case and surrounding
    /// white space.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.inner
            .get(&name.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Get the number of embeddings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Determine whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ====================================================================================================================

/// Compute the cosine similarity between two vectors.
///
/// Vectors of different length and zero vectors have similarity zero.
pub fn cosine_similarity(v1: &[f64], v2: &[f64]) -> f64 {
    if v1.len() != v2.len() || v1.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm1 = 0.0;
    let mut norm2 = 0.0;
    for (a, b) in v1.iter().zip(v2.iter()) {
        dot = a.mul_add(*b, dot);
        norm1 = a.mul_add(*a, norm1);
        norm2 = b.mul_add(*b, norm2);
    }

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    dot / (norm1.sqrt() * norm2.sqrt())
}

/// A resolver from arbitrary trait words to known traits.
///
/// The mapper memoizes embeddings per instance, so that repeatedly resolving
/// the same unknown word calls the embedder only once. Failed embeddings are
/// not memoized.
pub struct TraitMapper {
    cache: EmbeddingCache,
    embedder: Box<dyn Embedder + Send + Sync>,
    threshold: f64,
    session: Mutex<HashMap<String, Vec<f64>>>,
}

impl TraitMapper {
    /// Create a new trait mapper with the given cache and embedder.
    pub fn new<E>(cache: EmbeddingCache, embedder: E) -> Self
    where
        E: Embedder + Send + Sync + 'static,
    {
        Self {
            cache,
            embedder: Box::new(embedder),
            threshold: SIMILARITY_THRESHOLD,
            session: Mutex::new(HashMap::new()),
        }
    }

    /// Create a new trait mapper that only recognizes known traits.
    pub fn disabled() -> Self {
        Self::new(EmbeddingCache::new(), NoEmbedder)
    }

    /// Use the given minimum similarity for accepting matches.
    ///
    /// A [`Generator`](crate::Generator) keeps this threshold unless its
    /// options set one explicitly.
    #[must_use = "method returns a new mapper and does not mutate original value"]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Get the minimum similarity for accepting matches.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Get the cache of known trait embeddings.
    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Resolve the given trait to a known trait.
    ///
    /// This method lowercases and trims the trait. If the result is a known
    /// trait, it returns that trait without computing any embedding.
    /// Otherwise, it returns the known trait with the most similar embedding,
    /// as long as the similarity reaches the threshold. Any failure results in
    /// `None`.
    pub fn map_trait(&self, name: &str) -> Option<&'static str> {
        let normalized = name.trim().to_lowercase();
        if is_known_trait(&normalized) {
            return known_traits().find(|known| *known == normalized);
        }
        if normalized.is_empty() || self.cache.is_empty() {
            return None;
        }

        let embedding = self.embedding(&normalized)?;

        let (best, similarity) = known_traits()
            .map(|known| {
                let similarity = self
                    .cache
                    .get(known)
                    .map_or(0.0, |cached| cosine_similarity(&embedding, cached));
                (known, similarity)
            })
            .fold(None, |best: Option<(&'static str, f64)>, (known, similarity)| {
                // On ties, the earlier known trait wins.
                match best {
                    Some((_, top)) if top.total_cmp(&similarity).is_ge() => best,
                    _ => Some((known, similarity)),
                }
            })?;

        if similarity >= self.threshold {
            info!(
                original = name,
                mapped = best,
                similarity = round_to(similarity, 3),
                "mapped trait"
            );
            Some(best)
        } else {
            info!(
                original = name,
                best = best,
                similarity = round_to(similarity, 3),
                "no match for trait"
            );
            None
        }
    }

    /// Resolve several traits, dropping those without match.
    pub fn map_traits<S: AsRef<str>>(&self, names: &[S]) -> Vec<&'static str> {
        names
            .iter()
            .filter_map(|name| self.map_trait(name.as_ref()))
            .collect()
    }

    fn embedding(&self, text: &str) -> Option<Vec<f64>> {
        if let Ok(session) = self.session.lock() {
            if let Some(vector) = session.get(text) {
                return Some(vector.clone());
            }
        }

        match self.embedder.embed(text) {
            Ok(vector) if vector.is_empty() => {
                warn!(text, error = %EmbeddingError::Empty, "could not embed trait");
                None
            }
            Ok(vector) => {
                if let Ok(mut session) = self.session.lock() {
                    session.insert(text.to_owned(), vector.clone());
                }
                Some(vector)
            }
            Err(error) => {
                warn!(text, %error, "could not embed trait");
                None
            }
        }
    }
}

impl Default for TraitMapper {
    fn default() -> Self {
        Self::disabled()
    }
}

impl core::fmt::Debug for TraitMapper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TraitMapper")
            .field("known_embeddings", &self.cache.len())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn cache() -> EmbeddingCache {
        let mut cache = EmbeddingCache::new();
        cache
            .insert("innovative", vec![1.0, 0.0, 0.0])
            .insert("trustworthy", vec![0.0, 1.0, 0.0])
            .insert("energetic", vec![0.0, 0.0, 1.0]);
        cache
    }

    fn embed(text: &str) -> Result<Vec<f64>, EmbeddingError> {
        match text {
            "groundbreaking" => Ok(vec![0.95, 0.1, 0.05]),
            "dependable" => Ok(vec![0.2, 0.9, 0.1]),
            "quirky" => Ok(vec![0.5, 0.5, 0.5]),
            "void" => Ok(vec![]),
            _ => Err(EmbeddingError::provider("no such word")),
        }
    }

    #[test]
    fn test_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_known_traits() {
        let mapper = TraitMapper::disabled();
        assert_eq!(mapper.map_trait("innovative"), Some("innovative"));
        assert_eq!(mapper.map_trait("INNOVATIVE"), Some("innovative"));
        assert_eq!(mapper.map_trait("  innovative  "), Some("innovative"));
        assert_eq!(mapper.map_trait("unknown_trait"), None);
    }

    #[test]
    fn test_fuzzy_matches() {
        let mapper = TraitMapper::new(cache(), embed);
        assert_eq!(mapper.map_trait("Groundbreaking"), Some("innovative"));
        assert_eq!(mapper.map_trait("dependable"), Some("trustworthy"));

        // Equally similar to everything, i.e., 0.577 at best.
        assert_eq!(mapper.map_trait("quirky"), None);
        assert_eq!(mapper.map_trait("void"), None);
        assert_eq!(mapper.map_trait("unheard-of"), None);
        assert_eq!(mapper.map_trait("   "), None);

        assert_eq!(
            mapper.map_traits(&["groundbreaking", "quirky", "calm"]),
            vec!["innovative", "calm"]
        );
    }

    #[test]
    fn test_threshold() {
        let mapper = TraitMapper::new(cache(), embed).with_threshold(0.5);
        assert_eq!(mapper.threshold(), 0.5);
        assert_eq!(mapper.map_trait("quirky"), Some("trustworthy"));
    }

    #[test]
    fn test_ties_follow_table_order() {
        // Inserted in reverse table order, all equally similar to the input.
        let mut cache = EmbeddingCache::new();
        cache
            .insert("energetic", vec![0.0, 0.0, 1.0])
            .insert("innovative", vec![1.0, 0.0, 0.0])
            .insert("trustworthy", vec![0.0, 1.0, 0.0]);
        let mapper = TraitMapper::new(cache, |_: &str| {
            Ok::<_, EmbeddingError>(vec![0.5, 0.5, 0.5])
        })
        .with_threshold(0.5);

        for _ in 0..3 {
            assert_eq!(mapper.map_trait("anything"), Some("trustworthy"));
        }
    }

    #[test]
    fn test_memoization() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let embedder = move |text: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            embed(text)
        };

        let mapper = TraitMapper::new(cache(), embedder);
        for _ in 0..3 {
            assert_eq!(mapper.map_trait("groundbreaking"), Some("innovative"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Failures are not memoized.
        assert_eq!(mapper.map_trait("unheard-of"), None);
        assert_eq!(mapper.map_trait("unheard-of"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_cache_loading() -> Result<(), CacheError> {
        let json = r#"{"Innovative": [1.0, 0.0], "calm": [0.0, 1.0]}"#;
        let cache = EmbeddingCache::from_reader(json.as_bytes())?;
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("innovative"), Some(&[1.0, 0.0][..]));
        assert_eq!(cache.get(" Innovative "), Some(&[1.0, 0.0][..]));
        assert_eq!(cache.get("CALM"), Some(&[0.0, 1.0][..]));
        assert_eq!(cache.get("energetic"), None);

        assert!(matches!(
            EmbeddingCache::from_reader("[1, 2, 3]".as_bytes()),
            Err(CacheError::Malformed(_))
        ));
        assert!(matches!(
            EmbeddingCache::from_json_file("/definitely/not/here.json"),
            Err(CacheError::Read(_))
        ));
        assert!(EmbeddingCache::from_json_file_or_empty("/definitely/not/here.json").is_empty());
        Ok(())
    }
}
