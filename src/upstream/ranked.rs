use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{OsonewsError, Result};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::upstream::{Endpoints, RankedIdSource};

/// Ranking backed by the `topstories` endpoint. No retry, no cache.
pub struct TopStories {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoints: Endpoints,
    normalizer: Normalizer,
}

impl TopStories {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints,
            normalizer: Normalizer::new(),
        }
    }
}

#[async_trait]
impl RankedIdSource for TopStories {
    async fn fetch_top_ids(&self, limit: usize) -> Result<Vec<u64>> {
        let url = self.endpoints.top_stories()?;
        let body = self
            .fetcher
            .fetch(url.as_str())
            .await
            .map_err(|e| OsonewsError::UpstreamUnavailable(e.to_string()))?;

        self.normalizer.id_list(&body, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::fake::FakeFetcher;

    const TOP: &str = "https://hacker-news.firebaseio.com/v0/topstories.json";

    #[tokio::test]
    async fn test_fetch_top_ids_truncates() {
        let fetcher = FakeFetcher::new().with_body(TOP, "[5, 4, 3, 2, 1]");
        let source = TopStories::new(Arc::new(fetcher), Endpoints::default());

        let ids = source.fetch_top_ids(3).await.unwrap();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn test_unreachable_is_upstream_unavailable() {
        let source = TopStories::new(Arc::new(FakeFetcher::new()), Endpoints::default());

        let err = source.fetch_top_ids(10).await.unwrap_err();
        assert!(matches!(err, OsonewsError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_is_upstream_unavailable() {
        let fetcher = FakeFetcher::new().with_body(TOP, "{\"oops\": true}");
        let source = TopStories::new(Arc::new(fetcher), Endpoints::default());

        let err = source.fetch_top_ids(10).await.unwrap_err();
        assert!(matches!(err, OsonewsError::UpstreamUnavailable(_)));
    }
}
