//! In-process stand-ins for the upstream API used by tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::app::{OsonewsError, Result};
use crate::domain::{Item, ItemKind};
use crate::fetcher::Fetcher;
use crate::upstream::{ItemResolver, RankedIdSource};

#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.bodies
            .get(url)
            .map(|b| b.as_bytes().to_vec())
            .ok_or_else(|| OsonewsError::Other(format!("connection refused: {}", url)))
    }
}

pub struct FakeRanking {
    ids: Option<Vec<u64>>,
}

impl FakeRanking {
    pub fn new(ids: Vec<u64>) -> Self {
        Self { ids: Some(ids) }
    }

    pub fn unavailable() -> Self {
        Self { ids: None }
    }
}

#[async_trait]
impl RankedIdSource for FakeRanking {
    async fn fetch_top_ids(&self, limit: usize) -> Result<Vec<u64>> {
        match &self.ids {
            Some(ids) => Ok(ids.iter().copied().take(limit).collect()),
            None => Err(OsonewsError::UpstreamUnavailable("offline".into())),
        }
    }
}

/// Resolves ids it was seeded with; everything else is unavailable. Seeded
/// delays let tests control completion order.
#[derive(Default)]
pub struct FakeResolver {
    items: HashMap<u64, Item>,
    delays: HashMap<u64, Duration>,
    pub calls: AtomicUsize,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    pub fn with_delay(mut self, id: u64, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }
}

#[async_trait]
impl ItemResolver for FakeResolver {
    async fn resolve(&self, id: u64) -> Result<Item> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        self.items
            .get(&id)
            .cloned()
            .ok_or(OsonewsError::ItemUnavailable(id))
    }
}

pub fn story(id: u64, title: &str) -> Item {
    Item {
        id,
        kind: ItemKind::Story,
        by: "author".into(),
        time: 1_700_000_000,
        score: Some(1),
        url: Some(format!("https://example.com/{}", id)),
        title: Some(title.into()),
        text: None,
        kids: None,
        deleted: false,
        dead: false,
    }
}

pub fn comment(id: u64, text: &str) -> Item {
    Item {
        id,
        kind: ItemKind::Comment,
        by: "commenter".into(),
        time: 1_700_000_100,
        score: None,
        url: None,
        title: None,
        text: Some(text.into()),
        kids: None,
        deleted: false,
        dead: false,
    }
}
