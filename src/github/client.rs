use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::github::gateway::{CommandOutput, CommandRunner, ProcessRunner};
use crate::github::paginator::Paginator;
use crate::github::queries;
use crate::github::schema::{CurrentRepo, GraphQlResponse, PullRequestStub, RepositoryData};
use crate::models::{Contributor, LanguageStats, RecentActivity, RepoId, Repository};

pub const CONTRIBUTOR_LIMIT: u32 = 10;
const PAGE_SIZE: u32 = 100;

/// Stderr fragments `gh repo view` prints when the working directory has no
/// resolvable GitHub remote.
const NO_CONTEXT_MARKERS: [&str; 3] = [
    "could not determine",
    "not a git repository",
    "no git remotes",
];

pub struct GitHubClient {
    runner: Arc<dyn CommandRunner>,
    config: ClientConfig,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_runner(ProcessRunner, config)
    }

    pub fn with_runner(runner: impl CommandRunner + 'static, config: ClientConfig) -> Self {
        Self {
            runner: Arc::new(runner),
            config,
        }
    }

    async fn invoke(&self, args: Vec<String>) -> Result<CommandOutput> {
        let program = &self.config.helper_program;
        self.runner.run(program, &args).await.map_err(|e| {
            Error::Api(format!("failed to launch `{}`: {}", program, e))
        })
    }

    async fn call(&self, args: Vec<String>) -> Result<String> {
        let description = args.first().cloned().unwrap_or_default();
        let output = self.invoke(args).await?;

        if !output.success() {
            let stderr = output.stderr.trim();
            return Err(Error::Api(if stderr.is_empty() {
                format!(
                    "`{} {}` exited with status {}",
                    self.config.helper_program, description, output.code
                )
            } else {
                stderr.to_string()
            }));
        }

        Ok(output.stdout)
    }

    pub async fn api<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.call(vec!["api".to_string(), path.to_string()]).await?;
        parse_json(&body, path)
    }

    pub async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: &[(&str, &str)]) -> Result<T> {
        let mut args = vec![
            "api".to_string(),
            "graphql".to_string(),
            "-f".to_string(),
            format!("query={}", query),
        ];
        for (key, value) in variables {
            args.push("-f".to_string());
            args.push(format!("{}={}", key, value));
        }

        let body = self.call(args).await?;
        parse_json(&body, "graphql")
    }

    pub async fn view_current_repo(&self) -> Result<String> {
        let args = ["repo", "view", "--json", "nameWithOwner"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let output = self.invoke(args).await?;

        if !output.success() {
            let stderr = output.stderr.trim();
            let lowered = stderr.to_lowercase();
            if NO_CONTEXT_MARKERS.iter().any(|m| lowered.contains(m)) {
                return Err(Error::Context(
                    "run this inside a GitHub repository or pass owner/name".to_string(),
                ));
            }
            return Err(Error::Api(format!("failed to get current repository: {}", stderr)));
        }

        let current: CurrentRepo = parse_json(&output.stdout, "repo view")?;
        Ok(current.name_with_owner)
    }

    pub async fn get_current_repo(&self) -> Result<RepoId> {
        let name_with_owner = self.view_current_repo().await?;
        tracing::info!("Resolved current repository: {}", name_with_owner);
        RepoId::parse(&name_with_owner)
    }

    pub async fn get_repository_info(&self, repo: &RepoId) -> Result<Repository> {
        tracing::info!("Fetching repository: {}", repo);
        let response: GraphQlResponse<RepositoryData> = self
            .graphql(
                queries::REPOSITORY_QUERY,
                &[("owner", repo.owner()), ("name", repo.name())],
            )
            .await?;

        let node = response
            .into_data()?
            .repository
            .ok_or_else(|| Error::Api(format!("repository not found: {}", repo)))?;
        Repository::try_from(node)
    }

    pub async fn get_contributors(&self, repo: &RepoId) -> Result<Vec<Contributor>> {
        tracing::info!("Fetching contributors for: {}", repo);
        let path = queries::contributors_path(&repo.to_string(), CONTRIBUTOR_LIMIT);
        let body = self.call(vec!["api".to_string(), path.clone()]).await?;

        // empty repositories answer 204 with no body
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        parse_json(&body, &path)
    }

    pub async fn get_languages(&self, repo: &RepoId) -> Result<LanguageStats> {
        tracing::info!("Fetching languages for: {}", repo);
        self.api(&queries::languages_path(&repo.to_string())).await
    }

    pub async fn get_recent_activity(&self, repo: &RepoId, window_days: u32) -> Result<RecentActivity> {
        let cutoff = Utc::now()
            .checked_sub_signed(Duration::days(i64::from(window_days)))
            .ok_or_else(|| {
                Error::Validation(format!("activity window of {} days is too large", window_days))
            })?;
        self.get_activity_since(repo, cutoff, window_days).await
    }

    pub(crate) async fn get_activity_since(
        &self,
        repo: &RepoId,
        cutoff: DateTime<Utc>,
        window_days: u32,
    ) -> Result<RecentActivity> {
        let since = cutoff.to_rfc3339_opts(SecondsFormat::Millis, true);
        let repo_path = repo.to_string();
        tracing::info!("Fetching activity for {} since {}", repo, since);

        let paginator = Paginator::new(self, self.config.max_pages);
        let commits_path = queries::commits_since_path(&repo_path, &since);
        let issues_path = queries::issues_since_path(&repo_path, &since);
        let pulls_path = queries::pulls_path(&repo_path);

        let (commits, issues, pulls) = futures::try_join!(
            paginator.fetch_all::<IgnoredAny>(&commits_path, PAGE_SIZE),
            paginator.fetch_all::<IgnoredAny>(&issues_path, PAGE_SIZE),
            paginator.fetch_while(&pulls_path, PAGE_SIZE, |page: &[PullRequestStub]| {
                page.last().is_some_and(|pr| pr.created_at > cutoff)
            }),
        )?;

        let pull_requests = pulls.iter().filter(|pr| pr.created_at > cutoff).count();

        Ok(RecentActivity {
            commits: commits.len() as u64,
            issues: issues.len() as u64,
            pull_requests: pull_requests as u64,
            window_days,
        })
    }
}

fn parse_json<T: DeserializeOwned>(body: &str, source: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("unexpected response from {}: {}", source, e)))
}
