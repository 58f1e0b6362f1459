use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{OsonewsError, Result};
use crate::domain::Item;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::upstream::{Endpoints, ItemResolver};

/// Resolves ids through the `item/<id>` endpoint. Holds no mutable state, so
/// one instance can serve any number of concurrent resolutions.
pub struct HnItemResolver {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoints: Endpoints,
    normalizer: Normalizer,
}

impl HnItemResolver {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints,
            normalizer: Normalizer::new(),
        }
    }
}

#[async_trait]
impl ItemResolver for HnItemResolver {
    async fn resolve(&self, id: u64) -> Result<Item> {
        let url = self.endpoints.item(id)?;
        let body = self.fetcher.fetch(url.as_str()).await.map_err(|e| {
            tracing::debug!("Fetching item {} failed: {}", id, e);
            OsonewsError::ItemUnavailable(id)
        })?;

        self.normalizer.item(id, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::fake::FakeFetcher;

    fn item_url(id: u64) -> String {
        format!("https://hacker-news.firebaseio.com/v0/item/{}.json", id)
    }

    #[tokio::test]
    async fn test_resolve_story() {
        let fetcher = FakeFetcher::new().with_body(
            &item_url(101),
            r#"{"id": 101, "type": "story", "by": "a", "time": 1, "title": "A"}"#,
        );
        let resolver = HnItemResolver::new(Arc::new(fetcher), Endpoints::default());

        let item = resolver.resolve(101).await.unwrap();
        assert_eq!(item.title.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_item_unavailable() {
        let resolver = HnItemResolver::new(Arc::new(FakeFetcher::new()), Endpoints::default());

        let err = resolver.resolve(102).await.unwrap_err();
        assert!(matches!(err, OsonewsError::ItemUnavailable(102)));
    }

    #[tokio::test]
    async fn test_null_payload_is_item_unavailable() {
        let fetcher = FakeFetcher::new().with_body(&item_url(103), "null");
        let resolver = HnItemResolver::new(Arc::new(fetcher), Endpoints::default());

        let err = resolver.resolve(103).await.unwrap_err();
        assert!(matches!(err, OsonewsError::ItemUnavailable(103)));
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let fetcher = FakeFetcher::new().with_body(
            &item_url(7),
            r#"{"id": 7, "type": "comment", "by": "b", "time": 2, "text": "hi"}"#,
        );
        let resolver = HnItemResolver::new(Arc::new(fetcher), Endpoints::default());

        let first = resolver.resolve(7).await.unwrap();
        let second = resolver.resolve(7).await.unwrap();
        assert_eq!(first, second);
    }
}
