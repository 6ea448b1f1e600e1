//! Wire shapes of helper responses. Everything the formatters rely on is
//! required here so a malformed payload fails at the boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{RepoId, Repository};

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Api(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| Error::Parse("GraphQL response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name_with_owner: String,
    pub description: Option<String>,
    pub homepage_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub watchers: TotalCount,
    pub issues: TotalCount,
    pub pull_requests: TotalCount,
    pub releases: TotalCount,
    pub default_branch_ref: Option<BranchRef>,
    pub primary_language: Option<NamedNode>,
    pub license_info: Option<NamedNode>,
    pub is_private: bool,
    pub is_archived: bool,
    pub is_fork: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct BranchRef {
    pub target: Option<BranchTarget>,
}

/// Only commits carry `history`; a tag target deserializes to an empty object.
#[derive(Debug, Deserialize)]
pub struct BranchTarget {
    pub history: Option<TotalCount>,
}

#[derive(Debug, Deserialize)]
pub struct NamedNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentRepo {
    #[serde(rename = "nameWithOwner")]
    pub name_with_owner: String,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestStub {
    pub created_at: DateTime<Utc>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<RepositoryNode> for Repository {
    type Error = Error;

    fn try_from(node: RepositoryNode) -> Result<Self> {
        let id = RepoId::parse(&node.name_with_owner).map_err(|_| {
            Error::Parse(format!(
                "repository has malformed nameWithOwner '{}'",
                node.name_with_owner
            ))
        })?;

        let commits = node
            .default_branch_ref
            .and_then(|r| r.target)
            .and_then(|t| t.history)
            .map(|h| h.total_count)
            .unwrap_or(0);

        Ok(Repository {
            id,
            description: non_empty(node.description),
            homepage: non_empty(node.homepage_url),
            license: node.license_info.map(|l| l.name),
            created_at: node.created_at,
            updated_at: node.updated_at,
            pushed_at: node.pushed_at,
            stars: node.stargazer_count,
            forks: node.fork_count,
            watchers: node.watchers.total_count,
            open_issues: node.issues.total_count,
            pull_requests: node.pull_requests.total_count,
            releases: node.releases.total_count,
            commits,
            primary_language: node.primary_language.map(|l| l.name),
            is_private: node.is_private,
            is_archived: node.is_archived,
            is_fork: node.is_fork,
        })
    }
}
