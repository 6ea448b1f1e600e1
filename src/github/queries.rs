pub const REPOSITORY_QUERY: &str = r#"
query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    nameWithOwner
    description
    homepageUrl
    createdAt
    updatedAt
    pushedAt
    stargazerCount
    forkCount
    watchers { totalCount }
    issues(states: OPEN) { totalCount }
    pullRequests { totalCount }
    releases { totalCount }
    defaultBranchRef {
      target {
        ... on Commit {
          history { totalCount }
        }
      }
    }
    primaryLanguage { name }
    licenseInfo { name spdxId }
    isPrivate
    isArchived
    isFork
  }
}
"#;

pub fn contributors_path(repo: &str, limit: u32) -> String {
    format!("repos/{}/contributors?per_page={}", repo, limit)
}

pub fn languages_path(repo: &str) -> String {
    format!("repos/{}/languages", repo)
}

pub fn commits_since_path(repo: &str, since: &str) -> String {
    format!("repos/{}/commits?since={}", repo, since)
}

pub fn issues_since_path(repo: &str, since: &str) -> String {
    format!("repos/{}/issues?since={}&state=all", repo, since)
}

// Newest first, so paging can stop once the cutoff is passed.
pub fn pulls_path(repo: &str) -> String {
    format!("repos/{}/pulls?state=all&sort=created&direction=desc", repo)
}
