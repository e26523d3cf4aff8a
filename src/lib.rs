//! Relevance ranking for personal game catalogs.
//!
//! Given a free-text query and a list of catalog items, ludex computes a
//! 0–100 relevance score per item and returns the matches sorted best
//! first. Scoring is a pure function - no I/O, no caches, no shared state -
//! so it is safe to call from anywhere, including in parallel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  scoring/     │────▶│ classify.rs  │
//! │ (CatalogItem│     │ (score,       │     │ (MatchTier)  │
//! │  ScoredItem)│     │  rank_and_    │     │              │
//! └─────────────┘     │  filter)      │     └──────────────┘
//!        │            └───────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌───────────────┐
//! │  config.rs  │     │ levenshtein.rs│
//! │(RankerConfig│     │ (similarity   │
//! │  taxonomy)  │     │  fallback)    │
//! └─────────────┘     └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ludex::{rank_and_filter, classify, CatalogItem};
//!
//! let items = vec![
//!     CatalogItem { name: "Hollow Knight".to_string(), ..CatalogItem::default() },
//!     CatalogItem { name: "Unrelated".to_string(), ..CatalogItem::default() },
//! ];
//!
//! let ranked = rank_and_filter(&items, "hollow knight");
//! assert_eq!(ranked.len(), 1);
//! let tier = classify(ranked[0].relevance_score);
//! println!("{}: {}", ranked[0].item.name, tier.label);
//! ```

// Module declarations
pub mod catalog;
pub mod classify;
pub mod config;
mod levenshtein;
pub mod scoring;
pub mod testing;
pub mod types;
mod utils;

// Re-exports for the public API
pub use catalog::{parse_catalog, read_catalog, CatalogError};
pub use classify::{classify, Classification, MatchTier};
pub use config::RankerConfig;
pub use levenshtein::{edit_distance, similarity};
#[cfg(feature = "parallel")]
pub use scoring::ranking::rank_and_filter_parallel;
pub use scoring::ranking::{rank_and_filter, rank_and_filter_with};
pub use scoring::{score, score_breakdown, score_with, ScoreBreakdown};
pub use types::{CatalogItem, NamedRef, ScoredItem};
pub use utils::normalize;
