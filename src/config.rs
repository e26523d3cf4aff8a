// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranker configuration: taxonomy allow-lists and the similarity ceiling.
//!
//! The category multiplier penalizes non-primary catalog entries so DLC and
//! bundles rank below the game they belong to. Which taxonomy codes count
//! as primary is configuration, not logic - tests and non-default catalogs
//! supply their own sets instead of fighting a hard-coded list.

use std::collections::HashSet;

/// Taxonomy codes treated as primary entries (multiplier 1.0).
///
/// Main game, remake, remaster. Items without a category code are also
/// treated as primary.
pub const PRIMARY_CATEGORIES: &[u32] = &[0, 8, 9];

/// Taxonomy codes treated as secondary entries (multiplier 0.9).
///
/// DLC, expansion, bundle, standalone expansion, pack.
pub const SECONDARY_CATEGORIES: &[u32] = &[1, 2, 3, 4, 13];

/// Multiplier for primary categories and uncategorized items.
pub const PRIMARY_MULTIPLIER: f64 = 1.0;

/// Multiplier for secondary categories (DLC, expansions, bundles).
pub const SECONDARY_MULTIPLIER: f64 = 0.9;

/// Multiplier for any other recognized category code.
pub const OTHER_MULTIPLIER: f64 = 0.95;

/// Ceiling on the multiplier for items carrying a `parent_id`.
///
/// A variant never outranks its parent for the same query, whatever its
/// category says.
pub const VARIANT_MULTIPLIER_CAP: f64 = 0.8;

/// Default character ceiling for edit-distance similarity. Longer strings
/// skip the O(n·m) DP and score 0 similarity.
pub const DEFAULT_MAX_SIMILARITY_LEN: usize = 256;

/// Scoring configuration.
///
/// `Default` carries the standard taxonomy; construct directly to rank
/// against a custom one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Codes scored with multiplier 1.0.
    pub primary_categories: HashSet<u32>,
    /// Codes scored with multiplier 0.9.
    pub secondary_categories: HashSet<u32>,
    /// Similarity ceiling in characters; see [`crate::levenshtein::similarity`].
    pub max_similarity_len: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            primary_categories: PRIMARY_CATEGORIES.iter().copied().collect(),
            secondary_categories: SECONDARY_CATEGORIES.iter().copied().collect(),
            max_similarity_len: DEFAULT_MAX_SIMILARITY_LEN,
        }
    }
}

impl RankerConfig {
    /// Category-derived multiplier for an item, before the variant cap.
    ///
    /// Absent category → primary. The variant cap itself is applied by the
    /// scoring layer, which also knows about `parent_id`.
    pub fn category_multiplier(&self, category: Option<u32>) -> f64 {
        match category {
            None => PRIMARY_MULTIPLIER,
            Some(code) if self.primary_categories.contains(&code) => PRIMARY_MULTIPLIER,
            Some(code) if self.secondary_categories.contains(&code) => SECONDARY_MULTIPLIER,
            Some(_) => OTHER_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy() {
        let config = RankerConfig::default();
        assert_eq!(config.category_multiplier(Some(0)), PRIMARY_MULTIPLIER);
        assert_eq!(config.category_multiplier(Some(1)), SECONDARY_MULTIPLIER);
        assert_eq!(config.category_multiplier(Some(2)), SECONDARY_MULTIPLIER);
        assert_eq!(config.category_multiplier(Some(5)), OTHER_MULTIPLIER);
        assert_eq!(config.category_multiplier(None), PRIMARY_MULTIPLIER);
    }

    #[test]
    fn test_custom_taxonomy_overrides_default() {
        let config = RankerConfig {
            primary_categories: [7].into_iter().collect(),
            secondary_categories: [0].into_iter().collect(),
            ..RankerConfig::default()
        };
        assert_eq!(config.category_multiplier(Some(7)), PRIMARY_MULTIPLIER);
        assert_eq!(config.category_multiplier(Some(0)), SECONDARY_MULTIPLIER);
    }

    #[test]
    fn test_multiplier_ordering() {
        // The penalty ladder must stay strictly ordered or the ranking
        // guarantees in the scoring tests fall apart.
        assert!(PRIMARY_MULTIPLIER > OTHER_MULTIPLIER);
        assert!(OTHER_MULTIPLIER > SECONDARY_MULTIPLIER);
        assert!(SECONDARY_MULTIPLIER > VARIANT_MULTIPLIER_CAP);
    }
}
