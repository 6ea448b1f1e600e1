use chrono::{DateTime, Utc};

use super::repo::{Contributor, LanguageStats, RecentActivity, Repository};

/// Everything fetched for one invocation, frozen at `generated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub repository: Repository,
    pub contributors: Option<Vec<Contributor>>,
    pub languages: Option<LanguageStats>,
    pub activity: Option<RecentActivity>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            contributors: None,
            languages: None,
            activity: None,
            generated_at: Utc::now(),
        }
    }

    pub fn with_contributors(mut self, contributors: Option<Vec<Contributor>>) -> Self {
        self.contributors = contributors;
        self
    }

    pub fn with_languages(mut self, languages: Option<LanguageStats>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_activity(mut self, activity: Option<RecentActivity>) -> Self {
        self.activity = activity;
        self
    }

    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = timestamp;
        self
    }

    pub fn shown_contributors(&self) -> Option<&[Contributor]> {
        self.contributors.as_deref().filter(|c| !c.is_empty())
    }

    pub fn shown_languages(&self) -> Option<&LanguageStats> {
        self.languages.as_ref().filter(|l| !l.is_empty())
    }
}
