// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ludex command-line interface.
//!
//! Two subcommands: `rank` to score a catalog against a query, and
//! `inspect` to summarize a catalog file. Both accept `-` as the catalog
//! path to read from stdin, so the tool composes with exporters that
//! stream JSON.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ludex",
    about = "Relevance ranking for personal game catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog items against a free-text query
    Rank {
        /// Path to catalog JSON (a bare array or {"items": [...]}; "-" for stdin)
        catalog: PathBuf,

        /// The query to rank against
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show per-component score contributions
        #[arg(long)]
        explain: bool,
    },

    /// Summarize a catalog file: counts, coverage, category spread
    Inspect {
        /// Path to catalog JSON ("-" for stdin)
        catalog: PathBuf,
    },
}
