use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (owner, name) = trimmed.split_once('/').ok_or_else(|| {
            Error::Validation(format!(
                "'{}' is not a repository identifier, expected owner/name",
                trimmed
            ))
        })?;

        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() {
            return Err(Error::Validation(format!(
                "'{}' is missing an owner or a name, expected owner/name",
                trimmed
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_stem(&self) -> String {
        format!("{}-{}-stats", self.owner, self.name.replace('/', "-"))
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: RepoId,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub license: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub pull_requests: u64,
    pub releases: u64,
    pub commits: u64,
    pub primary_language: Option<String>,
    pub is_private: bool,
    pub is_archived: bool,
    pub is_fork: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

// Language name to byte count. Sorted keys keep every rendering deterministic.
pub type LanguageStats = BTreeMap<String, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub commits: u64,
    pub issues: u64,
    pub pull_requests: u64,
    pub window_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_id() {
        let id = RepoId::parse("rust-lang/cargo").unwrap();
        assert_eq!(id.owner(), "rust-lang");
        assert_eq!(id.name(), "cargo");
        assert_eq!(id.to_string(), "rust-lang/cargo");
        assert_eq!(id.file_stem(), "rust-lang-cargo-stats");
    }

    #[test]
    fn test_parse_splits_on_first_slash() {
        let id: RepoId = " owner/name/extra ".parse().unwrap();
        assert_eq!(id.owner(), "owner");
        assert_eq!(id.name(), "name/extra");
        assert_eq!(id.file_stem(), "owner-name-extra-stats");
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        for input in ["notarepo", "", "/name", "owner/", " / "] {
            let err = RepoId::parse(input).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "accepted {input:?}");
        }
    }

    #[test]
    fn test_contributor_requires_kind() {
        let c: Contributor = serde_json::from_str(
            r#"{"login": "octocat", "contributions": 12, "type": "User"}"#,
        )
        .unwrap();
        assert_eq!(c.kind, "User");
        assert_eq!(c.contributions, 12);

        let missing = serde_json::from_str::<Contributor>(r#"{"login": "octocat", "contributions": 12}"#);
        assert!(missing.is_err());
    }
}
