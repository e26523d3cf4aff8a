// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Score classification: five ordered tiers for match-quality display.
//!
//! Boundaries are inclusive on the lower bound, so 80.0 is already
//! Excellent and 79.99 is still Good. Input is clamped into [0, 100]
//! before bucketing - a negative or over-100 value lands in the nearest
//! boundary tier instead of falling through.

use serde::Serialize;
use std::fmt;

/// Match-quality tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Medium,
    Weak,
    Low,
}

impl MatchTier {
    /// Human-readable label shown next to results.
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Medium => "Medium Match",
            MatchTier::Weak => "Weak Match",
            MatchTier::Low => "Low Match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified score: the (clamped) percentage plus its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub percentage: f64,
    pub label: &'static str,
    pub tier: MatchTier,
}

/// Map a 0–100 score into its tier.
///
/// Total over any finite input; NaN clamps to 0 and lands in Low.
pub fn classify(score: f64) -> Classification {
    let percentage = if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    };
    let tier = if percentage >= 80.0 {
        MatchTier::Excellent
    } else if percentage >= 60.0 {
        MatchTier::Good
    } else if percentage >= 40.0 {
        MatchTier::Medium
    } else if percentage >= 20.0 {
        MatchTier::Weak
    } else {
        MatchTier::Low
    };
    Classification {
        percentage,
        label: tier.label(),
        tier,
    }
}
