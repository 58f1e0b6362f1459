use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::app::error::{OsonewsError, Result};
use crate::config::ApiConfig;
use crate::feed::FeedAggregator;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::store::{BookmarkStore, PersistenceClient, SqliteStore};
use crate::upstream::{Endpoints, HnItemResolver, TopStories};

pub struct AppContext {
    pub aggregator: Arc<FeedAggregator>,
    pub bookmarks: Arc<BookmarkStore>,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, api: &ApiConfig) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        Self::with_persistence(store, api)
    }

    pub fn in_memory(api: &ApiConfig) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Self::with_persistence(store, api)
    }

    pub fn with_persistence(
        persistence: Arc<dyn PersistenceClient + Send + Sync>,
        api: &ApiConfig,
    ) -> Result<Self> {
        let endpoints = Endpoints::new(&api.base_url)?;
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_timeout(
            Duration::from_secs(api.timeout_secs),
        )?);

        let ranking = Arc::new(TopStories::new(fetcher.clone(), endpoints.clone()));
        let resolver = Arc::new(HnItemResolver::new(fetcher, endpoints));
        let aggregator = Arc::new(FeedAggregator::with_workers(
            ranking,
            resolver,
            api.comment_workers,
        ));

        Ok(Self {
            aggregator,
            bookmarks: Arc::new(BookmarkStore::new(persistence)),
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| OsonewsError::Config("Could not find data directory".into()))?;
        let osonews_dir = data_dir.join("osonews");
        std::fs::create_dir_all(&osonews_dir)?;
        Ok(osonews_dir.join("osonews.db"))
    }
}
