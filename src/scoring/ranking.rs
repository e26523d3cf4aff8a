// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranking over item lists: score everything, drop the zeros, sort.
//!
//! The sort is descending by score and *stable*, so items with equal scores
//! keep their catalog order. Input is never mutated; results are fresh
//! allocations carrying owned copies of the matched items.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::RankerConfig;
use crate::scoring::score_with;
use crate::types::{CatalogItem, ScoredItem};
use crate::utils::normalize;

/// Descending by score; equal scores compare equal so a stable sort
/// preserves input order.
pub fn compare_scored(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.relevance_score
        .partial_cmp(&a.relevance_score)
        .unwrap_or(Ordering::Equal)
}

fn sorted(mut scored: Vec<ScoredItem>) -> Vec<ScoredItem> {
    scored.sort_by(compare_scored);
    scored
}

/// Rank catalog items against a query with explicit configuration.
///
/// Zero-score items are filtered out; an empty or whitespace-only query
/// therefore yields an empty result.
pub fn rank_and_filter_with(
    items: &[CatalogItem],
    query: &str,
    config: &RankerConfig,
) -> Vec<ScoredItem> {
    if normalize(query).is_empty() {
        return Vec::new();
    }

    let scored = items
        .iter()
        .filter_map(|item| {
            let relevance_score = score_with(item, query, config);
            (relevance_score > 0.0).then(|| ScoredItem {
                item: item.clone(),
                relevance_score,
            })
        })
        .collect();

    sorted(scored)
}

/// Rank catalog items against a query with the default configuration.
pub fn rank_and_filter(items: &[CatalogItem], query: &str) -> Vec<ScoredItem> {
    rank_and_filter_with(items, query, &RankerConfig::default())
}

/// Parallel variant of [`rank_and_filter_with`] for large catalogs.
///
/// Same contract and same output order: per-item scoring fans out across
/// the rayon pool, then a stable sort restores the ordering guarantees.
#[cfg(feature = "parallel")]
pub fn rank_and_filter_parallel(
    items: &[CatalogItem],
    query: &str,
    config: &RankerConfig,
) -> Vec<ScoredItem> {
    if normalize(query).is_empty() {
        return Vec::new();
    }

    let scored: Vec<ScoredItem> = items
        .par_iter()
        .filter_map(|item| {
            let relevance_score = score_with(item, query, config);
            (relevance_score > 0.0).then(|| ScoredItem {
                item: item.clone(),
                relevance_score,
            })
        })
        .collect();

    sorted(scored)
}
