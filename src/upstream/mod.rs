//! Clients for the two read-only upstream endpoints.

pub mod ranked;
pub mod resolver;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::domain::Item;

pub use ranked::TopStories;
pub use resolver::HnItemResolver;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Produces the current ranking as an ordered list of item ids.
#[async_trait]
pub trait RankedIdSource {
    /// At most `limit` ids, truncated and never padded. Fails with
    /// `UpstreamUnavailable`.
    async fn fetch_top_ids(&self, limit: usize) -> Result<Vec<u64>>;
}

/// Resolves a single id into an item. Fails with `ItemUnavailable(id)`.
#[async_trait]
pub trait ItemResolver {
    async fn resolve(&self, id: u64) -> Result<Item>;
}

/// Endpoint layout of the Firebase-backed HN API.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn top_stories(&self) -> Result<Url> {
        Ok(self.base.join("topstories.json")?)
    }

    pub fn item(&self, id: u64) -> Result<Url> {
        Ok(self.base.join(&format!("item/{}.json", id))?)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.top_stories().unwrap().as_str(),
            "https://hacker-news.firebaseio.com/v0/topstories.json"
        );
        assert_eq!(
            endpoints.item(8863).unwrap().as_str(),
            "https://hacker-news.firebaseio.com/v0/item/8863.json"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:8080/v0").unwrap();
        assert_eq!(
            endpoints.item(1).unwrap().as_str(),
            "http://localhost:8080/v0/item/1.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(Endpoints::new("not a url").is_err());
    }
}
