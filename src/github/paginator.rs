use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::GitHubClient;

pub struct Paginator<'a> {
    client: &'a GitHubClient,
    max_pages: u32,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a GitHubClient, max_pages: u32) -> Self {
        Self {
            client,
            max_pages: max_pages.max(1),
        }
    }

    pub async fn fetch_all<T: DeserializeOwned>(&self, base_path: &str, per_page: u32) -> Result<Vec<T>> {
        self.fetch_while(base_path, per_page, |_: &[T]| true).await
    }

    /// Like `fetch_all`, but also stops once `more` rejects the page just read.
    pub async fn fetch_while<T, F>(&self, base_path: &str, per_page: u32, more: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fn(&[T]) -> bool,
    {
        let mut all_items = Vec::new();
        let separator = if base_path.contains('?') { "&" } else { "?" };

        for page in 1..=self.max_pages {
            let path = format!("{}{}per_page={}&page={}", base_path, separator, per_page, page);

            tracing::debug!("Fetching: {}", path);
            let items: Vec<T> = self.client.api(&path).await?;
            let items_count = items.len();
            let has_next = items_count >= per_page as usize && more(&items);
            all_items.extend(items);

            if !has_next {
                return Ok(all_items);
            }
        }

        tracing::warn!(
            "Stopped after {} pages of {}, counts may be incomplete",
            self.max_pages,
            base_path
        );
        Ok(all_items)
    }
}
