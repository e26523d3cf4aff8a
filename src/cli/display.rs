// Copyright 2025-present Ludex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the ludex CLI.
//!
//! Score colors follow the match tiers, so the table reads the same way
//! the classifier does. Respects `NO_COLOR` and falls back to plain text
//! when stdout is not a TTY, which keeps piped output clean.

use ludex::MatchTier;

/// ANSI reset and modifiers.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// True color escape sequence helper.
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn green() -> String {
    rgb(152, 195, 121)
}
fn blue() -> String {
    rgb(97, 175, 239)
}
fn yellow() -> String {
    rgb(229, 192, 123)
}
fn red() -> String {
    rgb(224, 108, 117)
}
fn gray() -> String {
    rgb(92, 99, 112)
}

/// Colors are used only on a TTY, and never when `NO_COLOR` is set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are on, plain text otherwise.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn tier_color(tier: MatchTier) -> String {
    match tier {
        MatchTier::Excellent => green(),
        MatchTier::Good => blue(),
        MatchTier::Medium => yellow(),
        MatchTier::Weak => red(),
        MatchTier::Low => gray(),
    }
}

/// Color-coded tier badge, e.g. `[Excellent Match]`.
pub fn tier_badge(tier: MatchTier) -> String {
    let text = format!("[{}]", tier.label());
    if use_colors() {
        format!("{}{}{}", tier_color(tier), text, RESET)
    } else {
        text
    }
}

/// Score value colored by its tier, fixed width for table alignment.
pub fn score_value(score: f64, tier: MatchTier) -> String {
    let text = format!("{:>6.2}", score);
    if use_colors() {
        format!("{}{}{}{}", BOLD, tier_color(tier), text, RESET)
    } else {
        text
    }
}

/// Dim secondary text (component breakdowns, counts).
pub fn dim(text: &str) -> String {
    styled(&[DIM], text)
}

/// Section heading for inspect output.
pub fn heading(text: &str) -> String {
    styled(&[BOLD], text)
}

/// A labelled count line, right-aligning the label column.
pub fn stat_row(label: &str, value: &str) -> String {
    format!("  {:<22} {}", label, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb(1, 2, 3), "\x1b[38;2;1;2;3m");
    }

    #[test]
    fn test_tier_colors_are_distinct() {
        assert_ne!(tier_color(MatchTier::Excellent), tier_color(MatchTier::Good));
        assert_ne!(tier_color(MatchTier::Weak), tier_color(MatchTier::Low));
    }

    #[test]
    fn test_stat_row_alignment() {
        let row = stat_row("items", "3");
        assert!(row.starts_with("  items"));
        assert!(row.ends_with('3'));
    }
}
