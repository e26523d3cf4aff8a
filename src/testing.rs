//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It
//! provides canonical constructors so tests build items the same way.

#![doc(hidden)]

use crate::types::{CatalogItem, NamedRef};

/// A bare item with only a name.
pub fn make_item(name: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        ..CatalogItem::default()
    }
}

/// An item with rating metadata populated.
pub fn make_rated_item(name: &str, rating: f64, rating_count: u64) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        rating: Some(rating),
        rating_count: Some(rating_count),
        ..CatalogItem::default()
    }
}

/// A fully populated item for end-to-end tests.
pub fn make_full_item(name: &str, summary: &str, genres: &[&str], platforms: &[&str]) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        summary: Some(summary.to_string()),
        genres: genres.iter().map(|g| NamedRef::new(*g)).collect(),
        platforms: platforms.iter().map(|p| NamedRef::new(*p)).collect(),
        ..CatalogItem::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_item() {
        let item = make_item("Outer Wilds");
        assert_eq!(item.name, "Outer Wilds");
        assert!(item.rating.is_none());
    }

    #[test]
    fn test_make_full_item() {
        let item = make_full_item("Hades", "A roguelike.", &["Roguelike"], &["PC"]);
        assert_eq!(item.genres.len(), 1);
        assert_eq!(item.platforms[0].name, "PC");
        assert!(item.summary.is_some());
    }
}
