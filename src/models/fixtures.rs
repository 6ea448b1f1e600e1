//! Sample records shared by unit tests across modules.

use chrono::{TimeZone, Utc};

use super::{Contributor, LanguageStats, RecentActivity, RepoId, Report, Repository};

pub fn repository() -> Repository {
    Repository {
        id: RepoId::parse("octo-org/widgets").unwrap(),
        description: Some("Widgets, gadgets and gizmos".to_string()),
        homepage: Some("https://widgets.example.com".to_string()),
        license: Some("MIT License".to_string()),
        created_at: Utc.with_ymd_and_hms(2020, 3, 14, 9, 26, 53).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        pushed_at: Some(Utc.with_ymd_and_hms(2024, 4, 30, 18, 45, 0).unwrap()),
        stars: 1200,
        forks: 340,
        watchers: 56,
        open_issues: 78,
        pull_requests: 910,
        releases: 12,
        commits: 4321,
        primary_language: Some("TypeScript".to_string()),
        is_private: false,
        is_archived: false,
        is_fork: false,
    }
}

pub fn bare_repository() -> Repository {
    Repository {
        description: None,
        homepage: None,
        license: None,
        primary_language: None,
        pushed_at: None,
        ..repository()
    }
}

pub fn contributors() -> Vec<Contributor> {
    vec![
        contributor("alice", 50),
        contributor("bob", 25),
        contributor("carol", 10),
    ]
}

pub fn contributor(login: &str, contributions: u64) -> Contributor {
    Contributor {
        login: login.to_string(),
        contributions,
        kind: "User".to_string(),
    }
}

pub fn languages() -> LanguageStats {
    [("TypeScript", 800), ("JavaScript", 200)]
        .into_iter()
        .map(|(name, bytes)| (name.to_string(), bytes))
        .collect()
}

pub fn activity() -> RecentActivity {
    RecentActivity {
        commits: 17,
        issues: 5,
        pull_requests: 3,
        window_days: 7,
    }
}

pub fn full_report() -> Report {
    Report::new(repository())
        .with_contributors(Some(contributors()))
        .with_languages(Some(languages()))
        .with_activity(Some(activity()))
        .generated_at(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap())
}

pub fn minimal_report() -> Report {
    Report::new(repository()).generated_at(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap())
}
