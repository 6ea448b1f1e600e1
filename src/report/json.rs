use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{RecentActivity, Report};
use crate::report::stats::{contributor_shares, top_languages};

/// The canonical report shape. The other document formats derive the same
/// figures from the raw records, not from this structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub metadata: Metadata,
    pub overview: Overview,
    pub metrics: Metrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<ContributorEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_activity: Option<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub primary_language: Option<String>,
    pub license: Option<String>,
    pub is_private: bool,
    pub is_archived: bool,
    pub is_fork: bool,
    pub homepage_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub issues: u64,
    pub pull_requests: u64,
    pub releases: u64,
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorEntry {
    pub rank: usize,
    pub username: String,
    pub contributions: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub bytes: u64,
    pub percentage: f64,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        let repo = &report.repository;

        let contributors = report.shown_contributors().map(|c| {
            contributor_shares(c)
                .into_iter()
                .map(|s| ContributorEntry {
                    rank: s.rank,
                    username: s.login,
                    contributions: s.contributions,
                    percentage: s.percentage,
                })
                .collect()
        });

        let languages = report.shown_languages().map(|l| {
            top_languages(l)
                .into_iter()
                .map(|s| LanguageEntry {
                    name: s.name,
                    bytes: s.bytes,
                    percentage: s.percentage,
                })
                .collect()
        });

        Self {
            metadata: Metadata {
                generated_at: report.generated_at,
                repository: repo.id.to_string(),
            },
            overview: Overview {
                name: repo.id.name().to_string(),
                owner: repo.id.owner().to_string(),
                description: repo.description.clone(),
                created_at: repo.created_at,
                updated_at: repo.updated_at,
                pushed_at: repo.pushed_at,
                primary_language: repo.primary_language.clone(),
                license: repo.license.clone(),
                is_private: repo.is_private,
                is_archived: repo.is_archived,
                is_fork: repo.is_fork,
                homepage_url: repo.homepage.clone(),
            },
            metrics: Metrics {
                stars: repo.stars,
                forks: repo.forks,
                watchers: repo.watchers,
                issues: repo.open_issues,
                pull_requests: repo.pull_requests,
                releases: repo.releases,
                commits: repo.commits,
            },
            contributors,
            languages,
            recent_activity: report.activity,
        }
    }
}

pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::Value;

    #[test]
    fn test_round_trip_preserves_metrics() {
        let report = fixtures::full_report();
        let parsed: JsonReport = serde_json::from_str(&render(&report).unwrap()).unwrap();

        assert_eq!(parsed, JsonReport::from(&report));
        assert_eq!(parsed.metrics.stars, 1200);
        assert_eq!(parsed.metrics.commits, 4321);
        assert_eq!(parsed.metadata.generated_at, report.generated_at);
        assert_eq!(parsed.recent_activity, report.activity);
    }

    #[test]
    fn test_shape_uses_camel_case() {
        let value: Value = serde_json::from_str(&render(&fixtures::full_report()).unwrap()).unwrap();

        assert_eq!(value["metadata"]["repository"], "octo-org/widgets");
        assert_eq!(value["metadata"]["generatedAt"], "2024-05-02T08:00:00Z");
        assert_eq!(value["overview"]["isArchived"], false);
        assert_eq!(value["metrics"]["pullRequests"], 910);
        assert_eq!(value["contributors"][0]["username"], "alice");
        assert_eq!(value["contributors"][0]["percentage"], 100.0);
        assert_eq!(value["contributors"][1]["percentage"], 50.0);
        assert_eq!(value["languages"][0]["name"], "TypeScript");
        assert_eq!(value["languages"][0]["percentage"], 80.0);
        assert_eq!(value["recentActivity"]["pullRequests"], 3);
        assert_eq!(value["recentActivity"]["windowDays"], 7);
    }

    #[test]
    fn test_missing_fields_are_null_and_sections_omitted() {
        let mut report = fixtures::minimal_report();
        report.repository = fixtures::bare_repository();
        let value: Value = serde_json::from_str(&render(&report).unwrap()).unwrap();

        assert!(value["overview"]["description"].is_null());
        assert!(value["overview"]["license"].is_null());
        assert!(value["overview"]["primaryLanguage"].is_null());
        assert!(value["overview"]["pushedAt"].is_null());
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("contributors"));
        assert!(!object.contains_key("languages"));
        assert!(!object.contains_key("recentActivity"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let report = fixtures::full_report();
        assert_eq!(render(&report).unwrap(), render(&report).unwrap());
    }
}
