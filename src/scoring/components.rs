// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance ranking.
//!
//! Six components, each capped, summed and scaled against a 125-point
//! maximum. Name dominates: an exact title hit is worth more than summary,
//! genre, and platform together. Getting the caps right matters more than
//! it looks - the component tests pin each one at its table value.
//!
//! # Component table
//!
//! | Component  | Max | Rule |
//! |------------|-----|------|
//! | Name       | 40  | exact 40, prefix 35, substring 25, else similarity × 20 (floor 0.5) |
//! | Summary    | 25  | min(25, occurrences × 8) |
//! | Genre      | 20  | first containing genre: exact 20, partial 10 |
//! | Platform   | 10  | first containing platform: exact 10, partial 5 |
//! | Popularity | 20  | (rating/100 × 0.6 + min(1, log10(count+1)/5) × 0.4) × 20 |
//! | Bonus      | 10  | rating ≥ 80 ∧ count ≥ 1000 → 10; rating ≥ 75 ∧ count ≥ 500 → 5 |
//!
//! All matching is against normalized strings (see [`crate::utils::normalize`]);
//! callers pass the query already normalized so it is lowered once per
//! ranking call, not once per item.

use crate::levenshtein::similarity;
use crate::types::NamedRef;
use crate::utils::{count_occurrences, normalize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// Changing any of these changes every stored expectation in the scenario
// tests. The caps sum to MAX_TOTAL_POINTS.

/// Exact full-string name match.
pub const NAME_EXACT_SCORE: f64 = 40.0;

/// Query is a prefix of the name.
pub const NAME_PREFIX_SCORE: f64 = 35.0;

/// Query occurs in the name at a later position.
pub const NAME_SUBSTRING_SCORE: f64 = 25.0;

/// Weight applied to edit-distance similarity when nothing substring-matches.
pub const NAME_SIMILARITY_WEIGHT: f64 = 20.0;

/// Similarity below this is noise, not a near-miss: it contributes nothing,
/// so genuinely unrelated titles score 0 and get filtered out entirely.
pub const NAME_SIMILARITY_FLOOR: f64 = 0.5;

/// Cap on the summary component.
pub const SUMMARY_MAX_SCORE: f64 = 25.0;

/// Points per non-overlapping occurrence of the query in the summary.
pub const SUMMARY_PER_OCCURRENCE: f64 = 8.0;

/// Genre name equals the query.
pub const GENRE_EXACT_SCORE: f64 = 20.0;

/// Genre name contains the query.
pub const GENRE_PARTIAL_SCORE: f64 = 10.0;

/// Platform name equals the query.
pub const PLATFORM_EXACT_SCORE: f64 = 10.0;

/// Platform name contains the query.
pub const PLATFORM_PARTIAL_SCORE: f64 = 5.0;

/// Cap on the popularity component.
pub const POPULARITY_MAX_SCORE: f64 = 20.0;

/// Rating share of the popularity blend.
pub const POPULARITY_RATING_WEIGHT: f64 = 0.6;

/// Rating-volume share of the popularity blend.
pub const POPULARITY_VOLUME_WEIGHT: f64 = 0.4;

/// log10 scale for rating volume: 100k ratings saturate the volume term.
pub const POPULARITY_VOLUME_LOG_SCALE: f64 = 5.0;

/// Bonus for widely played, highly rated titles.
pub const BONUS_TOP_SCORE: f64 = 10.0;
pub const BONUS_TOP_RATING: f64 = 80.0;
pub const BONUS_TOP_COUNT: u64 = 1000;

/// Smaller bonus one notch down.
pub const BONUS_MID_SCORE: f64 = 5.0;
pub const BONUS_MID_RATING: f64 = 75.0;
pub const BONUS_MID_COUNT: u64 = 500;

/// Sum of all component caps; the denominator of the percentage scale.
pub const MAX_TOTAL_POINTS: f64 = 125.0;

/// Name component: exact > prefix > substring > similarity.
///
/// `query` must be normalized and non-empty; `name` is normalized here.
/// `max_similarity_len` bounds the edit-distance fallback.
pub fn name_score(name: &str, query: &str, max_similarity_len: usize) -> f64 {
    let name = normalize(name);
    if name == query {
        NAME_EXACT_SCORE
    } else if name.starts_with(query) {
        NAME_PREFIX_SCORE
    } else if name.contains(query) {
        NAME_SUBSTRING_SCORE
    } else {
        let similarity = similarity(&name, query, max_similarity_len);
        if similarity >= NAME_SIMILARITY_FLOOR {
            similarity * NAME_SIMILARITY_WEIGHT
        } else {
            0.0
        }
    }
}

/// Summary component: 8 points per occurrence, capped at 25.
pub fn summary_score(summary: Option<&str>, query: &str) -> f64 {
    let Some(summary) = summary else {
        return 0.0;
    };
    let occurrences = count_occurrences(&normalize(summary), query);
    SUMMARY_MAX_SCORE.min(occurrences as f64 * SUMMARY_PER_OCCURRENCE)
}

/// First entry whose normalized name contains the query; `true` means the
/// names are equal. List order decides - an exact match later in the list
/// does not override an earlier partial one.
fn first_containing(refs: &[NamedRef], query: &str) -> Option<bool> {
    refs.iter().find_map(|r| {
        let name = normalize(&r.name);
        if name.contains(query) {
            Some(name == query)
        } else {
            None
        }
    })
}

/// Genre component: exact 20, partial 10, first containing entry wins.
pub fn genre_score(genres: &[NamedRef], query: &str) -> f64 {
    match first_containing(genres, query) {
        Some(true) => GENRE_EXACT_SCORE,
        Some(false) => GENRE_PARTIAL_SCORE,
        None => 0.0,
    }
}

/// Platform component: same rule as genre at half the stakes.
pub fn platform_score(platforms: &[NamedRef], query: &str) -> f64 {
    match first_containing(platforms, query) {
        Some(true) => PLATFORM_EXACT_SCORE,
        Some(false) => PLATFORM_PARTIAL_SCORE,
        None => 0.0,
    }
}

/// Popularity component: a blend of rating quality and rating volume.
///
/// Requires both fields; either one absent contributes zero. The rating is
/// clamped into [0, 100] so dirty data cannot push the component past its
/// cap, and the volume term saturates at 10^5 ratings.
pub fn popularity_score(rating: Option<f64>, rating_count: Option<u64>) -> f64 {
    let (Some(rating), Some(count)) = (rating, rating_count) else {
        return 0.0;
    };
    let quality = (rating / 100.0).clamp(0.0, 1.0);
    let volume = (((count + 1) as f64).log10() / POPULARITY_VOLUME_LOG_SCALE).min(1.0);
    (quality * POPULARITY_RATING_WEIGHT + volume * POPULARITY_VOLUME_WEIGHT)
        * POPULARITY_MAX_SCORE
}

/// Flat bonus for titles that are both highly rated and widely rated.
pub fn popularity_bonus(rating: Option<f64>, rating_count: Option<u64>) -> f64 {
    let (Some(rating), Some(count)) = (rating, rating_count) else {
        return 0.0;
    };
    if rating >= BONUS_TOP_RATING && count >= BONUS_TOP_COUNT {
        BONUS_TOP_SCORE
    } else if rating >= BONUS_MID_RATING && count >= BONUS_MID_COUNT {
        BONUS_MID_SCORE
    } else {
        0.0
    }
}
