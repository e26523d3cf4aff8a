// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use clap::Parser;
use serde_json::json;

use ludex::{
    classify, rank_and_filter_with, read_catalog, score_breakdown, CatalogError, RankerConfig,
    ScoreBreakdown, ScoredItem,
};

mod cli;
use cli::display::{dim, heading, score_value, stat_row, styled, tier_badge, BOLD};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            catalog,
            query,
            limit,
            json,
            explain,
        } => run_rank(&catalog, &query, limit, json, explain),
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run_rank(
    catalog_path: &Path,
    query: &str,
    limit: usize,
    json: bool,
    explain: bool,
) -> Result<(), CatalogError> {
    let items = read_catalog(catalog_path)?;
    let config = RankerConfig::default();
    let mut ranked = rank_and_filter_with(&items, query, &config);
    ranked.truncate(limit);

    if json {
        print_rank_json(&ranked, query, explain, &config)?;
    } else {
        print_rank_table(&ranked, query, explain, &config);
    }
    Ok(())
}

fn print_rank_json(
    ranked: &[ScoredItem],
    query: &str,
    explain: bool,
    config: &RankerConfig,
) -> Result<(), CatalogError> {
    let payload = if explain {
        let explained: Vec<_> = ranked
            .iter()
            .map(|scored| {
                json!({
                    "item": scored,
                    "breakdown": score_breakdown(&scored.item, query, config),
                })
            })
            .collect();
        serde_json::to_string_pretty(&explained)?
    } else {
        serde_json::to_string_pretty(ranked)?
    };
    println!("{}", payload);
    Ok(())
}

fn print_rank_table(ranked: &[ScoredItem], query: &str, explain: bool, config: &RankerConfig) {
    if ranked.is_empty() {
        println!("no matches for \"{}\"", query);
        return;
    }

    for (position, scored) in ranked.iter().enumerate() {
        let classification = classify(scored.relevance_score);
        println!(
            "{:>3}. {} {}  {}",
            position + 1,
            score_value(scored.relevance_score, classification.tier),
            styled(&[BOLD], &scored.item.name),
            tier_badge(classification.tier),
        );
        if explain {
            let breakdown = score_breakdown(&scored.item, query, config);
            println!("{}", dim(&format_breakdown(&breakdown)));
        }
    }
}

fn format_breakdown(b: &ScoreBreakdown) -> String {
    format!(
        "     name {:.1} · summary {:.1} · genre {:.1} · platform {:.1} · popularity {:.1} · bonus {:.1} → {:.1}/125 ×{:.2}",
        b.name, b.summary, b.genre, b.platform, b.popularity, b.bonus, b.total_points, b.multiplier
    )
}

fn run_inspect(catalog_path: &Path) -> Result<(), CatalogError> {
    let items = read_catalog(catalog_path)?;

    let with_summary = items.iter().filter(|i| i.summary.is_some()).count();
    let with_rating = items
        .iter()
        .filter(|i| i.rating.is_some() && i.rating_count.is_some())
        .count();
    let with_genres = items.iter().filter(|i| !i.genres.is_empty()).count();
    let variants = items.iter().filter(|i| i.parent_id.is_some()).count();

    let mut categories: BTreeMap<u32, usize> = BTreeMap::new();
    let mut uncategorized = 0usize;
    for item in &items {
        match item.category {
            Some(code) => *categories.entry(code).or_default() += 1,
            None => uncategorized += 1,
        }
    }

    println!("{}", heading("catalog"));
    println!("{}", stat_row("items", &items.len().to_string()));
    println!("{}", stat_row("with summary", &coverage(with_summary, items.len())));
    println!("{}", stat_row("with rating data", &coverage(with_rating, items.len())));
    println!("{}", stat_row("with genres", &coverage(with_genres, items.len())));
    println!("{}", stat_row("variants (parentId)", &variants.to_string()));

    println!("{}", heading("categories"));
    for (code, count) in &categories {
        println!("{}", stat_row(&format!("code {}", code), &count.to_string()));
    }
    if uncategorized > 0 {
        println!("{}", stat_row("uncategorized", &uncategorized.to_string()));
    }
    Ok(())
}

fn coverage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{} ({:.0}%)", count, count as f64 / total as f64 * 100.0)
}
