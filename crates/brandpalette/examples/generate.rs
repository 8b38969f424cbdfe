//! Generate palettes for a brand and print them as JSON.
//!
//! Usage: `generate [BRAND.json] [EMBEDDINGS.json]`. Without a brand file, the
//! example uses a built-in sample. Set `RUST_LOG=debug` to see the pipeline's
//! log output on standard error.

#![allow(clippy::print_stdout)]

use brandpalette::error::EmbeddingError;
use brandpalette::mapper::{EmbeddingCache, TraitMapper};
use brandpalette::{BrandInput, Generator, Options};
use tracing_subscriber::EnvFilter;

fn sample() -> BrandInput {
    BrandInput::new("sample")
        .with_traits(&["innovative", "approachable", "premium"])
        .with_tone(&["confident", "friendly"])
        .with_category("SaaS")
        .with_markets(&["US", "AU"])
        .with_keywords(&["automation", "reliability", "speed"])
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Read the brand
    let input = match args.next() {
        Some(path) => serde_json::from_reader(std::io::BufReader::new(std::fs::File::open(path)?))?,
        None => sample(),
    };

    // 2. Set up fuzzy trait resolution. The embeddings file doubles as the
    //    vocabulary of the embedder.
    let mapper = match args.next() {
        Some(path) => {
            let cache = EmbeddingCache::from_json_file_or_empty(path);
            let vocabulary = cache.clone();
            TraitMapper::new(cache, move |text: &str| {
                vocabulary
                    .get(text)
                    .map(<[f64]>::to_vec)
                    .ok_or(EmbeddingError::Unavailable)
            })
        }
        None => TraitMapper::disabled(),
    };

    // 3. Generate and print
    let result = Generator::new(input)
        .with_options(Options::builder().palette_count(3).build())
        .with_trait_mapper(mapper)
        .generate();
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
