//! Fingerprints the bundled sample texts and prints their similarities.
//!
//! ```text
//! cargo run --example compare [-- path/to/neardup.yaml]
//! RUST_LOG=neardup=debug cargo run --example compare
//! ```

use std::error::Error;

use neardup::{NearDupConfig, compare_fingerprints, fingerprint_text};
use tracing_subscriber::EnvFilter;

const FULL: &str = include_str!("../tests/fixtures/freedom_full.txt");
const PREFIX: &str = include_str!("../tests/fixtures/freedom_prefix.txt");
const UNRELATED: &str = include_str!("../tests/fixtures/unrelated.txt");

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neardup=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => NearDupConfig::from_file(path)?,
        None => NearDupConfig::default(),
    };
    let cfg = config.perceptual_config();

    let full = fingerprint_text(FULL, &cfg)?;
    let prefix = fingerprint_text(PREFIX, &cfg)?;
    let unrelated = fingerprint_text(UNRELATED, &cfg)?;

    println!(
        "Similarity (full, prefix): {}",
        compare_fingerprints(&full, &prefix)?
    );
    println!(
        "Similarity (full, unrelated): {}",
        compare_fingerprints(&full, &unrelated)?
    );

    Ok(())
}
