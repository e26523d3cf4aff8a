// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading for the CLI and integration tests.
//!
//! Accepts either a bare JSON array of items or an `{"items": [...]}`
//! wrapper, since both shapes exist in the wild. The ranker itself never
//! touches I/O; this is the one place the crate reads a file.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;

use crate::types::CatalogItem;

/// Errors from loading a catalog file. The ranking core cannot fail; only
/// this I/O edge can.
#[derive(Debug)]
pub enum CatalogError {
    /// File could not be read.
    Io(io::Error),
    /// File contents were not a valid catalog.
    Json(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid catalog JSON: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Bare(Vec<CatalogItem>),
    Wrapped { items: Vec<CatalogItem> },
}

impl From<CatalogPayload> for Vec<CatalogItem> {
    fn from(payload: CatalogPayload) -> Self {
        match payload {
            CatalogPayload::Bare(items) | CatalogPayload::Wrapped { items } => items,
        }
    }
}

/// Parse catalog JSON from a string.
pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let payload: CatalogPayload = serde_json::from_str(raw)?;
    Ok(payload.into())
}

/// Read a catalog from a file path, or from stdin when the path is `-`.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    parse_catalog(&raw)
}
