// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring: how well a catalog item matches a free-text query.
//!
//! [`score`] produces a 0–100 relevance percentage; [`score_breakdown`]
//! exposes the intermediate component contributions for display and
//! debugging. Ranking over lists lives in [`ranking`].
//!
//! The pipeline per item: six capped components are summed, scaled to a
//! percentage of the 125-point maximum, multiplied by the category penalty,
//! and rounded to two decimals. Pure functions throughout - the same
//! `(item, query, config)` always produces the same score.

pub mod components;
pub mod ranking;

use serde::Serialize;

use crate::config::{RankerConfig, VARIANT_MULTIPLIER_CAP};
use crate::types::CatalogItem;
use crate::utils::normalize;
use components::{
    genre_score, name_score, platform_score, popularity_bonus, popularity_score, summary_score,
    MAX_TOTAL_POINTS,
};

/// Per-component contributions for one `(item, query)` pair.
///
/// `score` is the final rounded value; everything else is the raw material
/// it was computed from. Serializes camelCase for the CLI's `--explain
/// --json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub name: f64,
    pub summary: f64,
    pub genre: f64,
    pub platform: f64,
    pub popularity: f64,
    pub bonus: f64,
    /// Sum of the six components, out of 125.
    pub total_points: f64,
    /// `total_points` scaled to 0–100, before the multiplier.
    pub percentage: f64,
    /// Category multiplier after the variant cap.
    pub multiplier: f64,
    /// Final rounded score.
    pub score: f64,
}

impl ScoreBreakdown {
    fn zero(multiplier: f64) -> Self {
        ScoreBreakdown {
            name: 0.0,
            summary: 0.0,
            genre: 0.0,
            platform: 0.0,
            popularity: 0.0,
            bonus: 0.0,
            total_points: 0.0,
            percentage: 0.0,
            multiplier,
            score: 0.0,
        }
    }
}

/// Category multiplier for an item: taxonomy-derived, capped at 0.8 when
/// the item is a variant of another entry.
fn item_multiplier(item: &CatalogItem, config: &RankerConfig) -> f64 {
    let multiplier = config.category_multiplier(item.category);
    if item.parent_id.is_some() {
        multiplier.min(VARIANT_MULTIPLIER_CAP)
    } else {
        multiplier
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score an item against a query with explicit configuration, keeping the
/// per-component contributions.
pub fn score_breakdown(item: &CatalogItem, query: &str, config: &RankerConfig) -> ScoreBreakdown {
    let multiplier = item_multiplier(item, config);
    let query = normalize(query);
    if query.is_empty() {
        return ScoreBreakdown::zero(multiplier);
    }

    let name = name_score(&item.name, &query, config.max_similarity_len);
    let summary = summary_score(item.summary.as_deref(), &query);
    let genre = genre_score(&item.genres, &query);
    let platform = platform_score(&item.platforms, &query);
    let popularity = popularity_score(item.rating, item.rating_count);
    let bonus = popularity_bonus(item.rating, item.rating_count);

    let total_points = name + summary + genre + platform + popularity + bonus;
    let percentage = total_points / MAX_TOTAL_POINTS * 100.0;
    let score = round2((percentage * multiplier).clamp(0.0, 100.0));

    ScoreBreakdown {
        name,
        summary,
        genre,
        platform,
        popularity,
        bonus,
        total_points,
        percentage,
        multiplier,
        score,
    }
}

/// Score an item against a query with explicit configuration.
pub fn score_with(item: &CatalogItem, query: &str, config: &RankerConfig) -> f64 {
    score_breakdown(item, query, config).score
}

/// Score an item against a query with the default configuration.
///
/// Returns a value in [0, 100], rounded to two decimals. Empty or
/// whitespace-only queries score 0 for every item.
pub fn score(item: &CatalogItem, query: &str) -> f64 {
    score_with(item, query, &RankerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_item, make_rated_item};

    #[test]
    fn test_exact_name_only_scenario() {
        // Name component 40 of 125 → 32.0
        let item = make_item("Test Game");
        assert_eq!(score(&item, "Test Game"), 32.0);
    }

    #[test]
    fn test_empty_and_whitespace_queries_score_zero() {
        let item = make_item("Test Game");
        assert_eq!(score(&item, ""), 0.0);
        assert_eq!(score(&item, "   "), 0.0);
        assert_eq!(score(&item, "\t\n"), 0.0);
    }

    #[test]
    fn test_case_invariance() {
        let item = make_item("Test Game");
        let lower = score(&item, "test game");
        assert_eq!(score(&item, "TEST GAME"), lower);
        assert_eq!(score(&item, "Test Game"), lower);
        assert_eq!(score(&item, "tEsT gAmE"), lower);
    }

    #[test]
    fn test_whitespace_invariance() {
        let item = make_item("Test Game");
        assert_eq!(score(&item, "  test game  "), score(&item, "test game"));
    }

    #[test]
    fn test_dlc_category_applies_secondary_multiplier() {
        let primary = make_item("Test Game");
        let mut dlc = make_item("Test Game");
        dlc.category = Some(1);
        let base = score(&primary, "Test Game");
        assert_eq!(score(&dlc, "Test Game"), round2(base * 0.9));
    }

    #[test]
    fn test_unrecognized_category_applies_other_multiplier() {
        let mut item = make_item("Test Game");
        item.category = Some(6); // episode: neither primary nor secondary
        assert_eq!(score(&item, "Test Game"), round2(32.0 * 0.95));
    }

    #[test]
    fn test_parent_id_caps_multiplier() {
        let mut variant = make_item("Test Game");
        variant.parent_id = Some("parent-1".to_string());
        // Primary category would give 1.0; the variant cap pulls it to 0.8.
        variant.category = Some(0);
        assert_eq!(score(&variant, "Test Game"), round2(32.0 * 0.8));

        // Already-lower secondary multiplier is not raised by the cap.
        let mut dlc_variant = make_item("Test Game");
        dlc_variant.category = Some(1);
        dlc_variant.parent_id = Some("parent-1".to_string());
        assert_eq!(score(&dlc_variant, "Test Game"), round2(32.0 * 0.8));
    }

    #[test]
    fn test_variant_never_beats_original() {
        let plain = make_item("Zelda");
        let mut variant = make_item("Zelda");
        variant.parent_id = Some("zelda-1".to_string());
        assert!(score(&variant, "Zelda") <= score(&plain, "Zelda"));
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let item = make_rated_item("Hades", 93.0, 5000);
        let breakdown = score_breakdown(&item, "hades", &RankerConfig::default());
        let expected =
            round2(breakdown.percentage * breakdown.multiplier);
        assert_eq!(breakdown.score, expected);
        assert_eq!(score(&item, "hades"), breakdown.score);
    }

    #[test]
    fn test_breakdown_components_within_caps() {
        let mut item = make_rated_item("Deck Game", 95.0, 100_000);
        item.summary = Some("deck deck deck deck deck deck deck".to_string());
        item.genres = vec![crate::types::NamedRef::new("Deck")];
        item.platforms = vec![crate::types::NamedRef::new("Deck")];
        let b = score_breakdown(&item, "deck", &RankerConfig::default());
        assert!(b.name <= 40.0);
        assert!(b.summary <= 25.0);
        assert!(b.genre <= 20.0);
        assert!(b.platform <= 10.0);
        assert!(b.popularity <= 20.0 + 1e-9);
        assert!(b.bonus <= 10.0);
        assert!(b.total_points <= 125.0 + 1e-9);
        assert!(b.score <= 100.0);
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let mut item = make_item("Test Game");
        item.category = Some(6);
        let s = score(&item, "Test Game");
        assert_eq!(s, (s * 100.0).round() / 100.0);
    }

    #[test]
    fn test_missing_fields_contribute_zero() {
        let bare = make_item("Solitaire");
        let mut enriched = make_rated_item("Solitaire", 70.0, 100);
        enriched.summary = Some("A solitaire classic".to_string());
        assert!(score(&bare, "solitaire") < score(&enriched, "solitaire"));
    }
}
