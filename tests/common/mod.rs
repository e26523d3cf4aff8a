//! Shared helpers for integration and property tests.

use std::path::PathBuf;

use ludex::types::{CatalogItem, NamedRef};

/// Path to a fixture file under `tests/data/`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// A populated item for tests that need more than a name.
#[allow(dead_code)]
pub fn sample_item(name: &str, rating: f64, rating_count: u64) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        summary: Some(format!("{} is a game worth playing.", name)),
        genres: vec![NamedRef::new("Adventure")],
        platforms: vec![NamedRef::new("PC")],
        rating: Some(rating),
        rating_count: Some(rating_count),
        ..CatalogItem::default()
    }
}
