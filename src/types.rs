// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog item types and the lenient deserialization boundary.
//!
//! Catalog data originates in JSON exported by library frontends, and real
//! exports are dirty: ratings stored as strings, null genre arrays, numeric
//! parent identifiers. Rather than rejecting a whole catalog over one bad
//! field, the numeric and identifier fields deserialize *leniently* - a
//! wrong-typed value becomes `None` and simply contributes nothing to the
//! score. Validation happens once here at the edge; everything past this
//! module operates on well-typed data.
//!
//! # Invariants
//!
//! - `ScoredItem::relevance_score` is always within [0, 100].
//! - Deserialization never panics on well-formed JSON, whatever the field
//!   types inside.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named reference - a genre or platform entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        NamedRef { name: name.into() }
    }
}

/// A single searchable catalog entry (a game).
///
/// Every field except `name` is optional; an absent field contributes zero
/// to its scoring component. `category` is a taxonomy code (0 = main game,
/// 1 = DLC, 2 = expansion, ...); `parent_id` marks the item as a variant of
/// another entry and caps its category multiplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_refs", skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<NamedRef>,
    #[serde(deserialize_with = "lenient_refs", skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<NamedRef>,
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient_u64", skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    #[serde(deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    #[serde(deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A catalog item paired with its relevance score.
///
/// Serializes as the item's own fields plus `relevanceScore`, matching the
/// shape consumers of ranked results expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub relevance_score: f64,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================
// Wrong-typed values become None/empty instead of failing the whole catalog.

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_u64))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok()))
}

/// Identifiers show up as strings or numbers depending on the exporter.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Genre/platform lists: `null` and non-array shapes read as empty, and
/// entries may be `{"name": ...}` objects or bare strings. Anything else
/// in the array is skipped.
fn lenient_refs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NamedRef>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(mut map) => match map.remove("name") {
                Some(Value::String(name)) => Some(NamedRef { name }),
                _ => None,
            },
            Value::String(name) => Some(NamedRef { name }),
            _ => None,
        })
        .collect())
}
