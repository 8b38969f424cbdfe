//! Utility module with brandpalette's errors.
//!
//! None of these errors escape palette generation itself. Malformed hex
//! strings only arise when parsing caller-supplied colors, and the embedding
//! errors are absorbed by the [`TraitMapper`](crate::mapper::TraitMapper),
//! which reports a failed lookup as no match.

use thiserror::Error;

/// An erroneous hashed hexadecimal color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color with the wrong number of hexadecimal digits. For example,
    /// `#fff` has three instead of six digits.
    #[error("hex color should have 6 digits but has {0}")]
    UnexpectedLength(usize),

    /// A color with non-ASCII characters, such as `#ff💩`.
    #[error("hex color should contain only ASCII characters")]
    UnexpectedCharacters,

    /// A color whose coordinate with the given zero-based index is not a
    /// hexadecimal number. For example, `#ffag09` has a malformed second
    /// coordinate.
    #[error("hex color coordinate #{} should be hexadecimal but is not", .0 + 1)]
    MalformedHex(usize),
}

// ====================================================================================================================

/// An error while computing an embedding vector.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// No embedding provider is configured, e.g., because credentials are
    /// missing.
    #[error("embedding provider is not available")]
    Unavailable,

    /// The embedding provider failed.
    #[error("embedding provider failed: {0}")]
    Provider(#[source] Box<dyn core::error::Error + Send + Sync>),

    /// The provider returned an empty vector.
    #[error("embedding provider returned an empty vector")]
    Empty,
}

impl EmbeddingError {
    /// Wrap an arbitrary provider error.
    pub fn provider<E>(error: E) -> Self
    where
        E: Into<Box<dyn core::error::Error + Send + Sync>>,
    {
        Self::Provider(error.into())
    }
}

// ====================================================================================================================

/// An error while loading the cache of known trait embeddings.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache could not be read.
    #[error("could not read embeddings cache")]
    Read(#[from] std::io::Error),

    /// The cache is not a JSON object mapping trait names to number arrays.
    #[error("embeddings cache is malformed")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, EmbeddingError};

    #[test]
    fn test_display() {
        assert_eq!(
            ColorFormatError::MalformedHex(0).to_string(),
            "hex color coordinate #1 should be hexadecimal but is not"
        );
        assert_eq!(
            ColorFormatError::UnexpectedLength(3).to_string(),
            "hex color should have 6 digits but has 3"
        );
        assert_eq!(
            EmbeddingError::provider("rate limited").to_string(),
            "embedding provider failed: rate limited"
        );
    }
}
