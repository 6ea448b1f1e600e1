//! Derived figures shared by every formatter. Nothing here is cached: each
//! formatter recomputes from the raw counts so the outputs always agree.

use std::cmp::Reverse;

use crate::models::{Contributor, LanguageStats};

pub const TOP_N: usize = 10;

/// Languages below this percentage are left out of the terminal chart.
pub const CHART_MIN_PERCENTAGE: f64 = 0.1;

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percentage_of(value: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributorShare {
    pub rank: usize,
    pub login: String,
    pub contributions: u64,
    /// Relative to the top contributor, one decimal.
    pub percentage: f64,
}

pub fn contributor_shares(contributors: &[Contributor]) -> Vec<ContributorShare> {
    let mut ranked: Vec<&Contributor> = contributors.iter().collect();
    ranked.sort_by_key(|c| Reverse(c.contributions));
    ranked.truncate(TOP_N);

    let max = ranked.iter().map(|c| c.contributions).max().unwrap_or(0);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, c)| ContributorShare {
            rank: i + 1,
            login: c.login.clone(),
            contributions: c.contributions,
            percentage: round1(percentage_of(c.contributions, max)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub bytes: u64,
    /// Share of all bytes, one decimal.
    pub percentage: f64,
    /// Unrounded share, used for chart widths and the chart cutoff.
    pub exact_percentage: f64,
}

pub fn language_shares(languages: &LanguageStats) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();

    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(name, &bytes)| {
            let exact = percentage_of(bytes, total);
            LanguageShare {
                name: name.clone(),
                bytes,
                percentage: round1(exact),
                exact_percentage: exact,
            }
        })
        .collect();

    // BTreeMap iteration is already name-ordered, a stable sort keeps that for ties
    shares.sort_by_key(|s| Reverse(s.bytes));
    shares
}

pub fn top_languages(languages: &LanguageStats) -> Vec<LanguageShare> {
    let mut shares = language_shares(languages);
    shares.truncate(TOP_N);
    shares
}
