use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{mpsc, Semaphore};

use crate::app::Result;
use crate::domain::{FeedWindow, Item, FEED_SIZE};
use crate::upstream::{ItemResolver, RankedIdSource};

pub const DEFAULT_WORKERS: usize = 10;

/// Outcome of one comment resolution. `story_id` and `generation` identify
/// the opening of the story it was started for, so the consumer can drop
/// results from an opening it is no longer showing.
#[derive(Debug)]
pub struct CommentResolution {
    pub story_id: u64,
    pub generation: u64,
    pub comment_id: u64,
    pub result: Result<Item>,
}

#[derive(Clone)]
pub struct FeedAggregator {
    ranking: Arc<dyn RankedIdSource + Send + Sync>,
    resolver: Arc<dyn ItemResolver + Send + Sync>,
    window_size: usize,
    comment_workers: usize,
}

impl FeedAggregator {
    pub fn new(
        ranking: Arc<dyn RankedIdSource + Send + Sync>,
        resolver: Arc<dyn ItemResolver + Send + Sync>,
    ) -> Self {
        Self::with_workers(ranking, resolver, DEFAULT_WORKERS)
    }

    /// `workers` bounds how many comments of one opened story resolve at once.
    pub fn with_workers(
        ranking: Arc<dyn RankedIdSource + Send + Sync>,
        resolver: Arc<dyn ItemResolver + Send + Sync>,
        workers: usize,
    ) -> Self {
        Self {
            ranking,
            resolver,
            window_size: FEED_SIZE,
            comment_workers: workers.max(1),
        }
    }

    /// Fetch the ranking and resolve every id in it concurrently.
    ///
    /// Stories that fail to resolve are logged and left out; the rest keep
    /// their ranking order. Only a ranking failure fails the load.
    pub async fn load_feed(&self) -> Result<FeedWindow> {
        let ids = self
            .ranking
            .fetch_top_ids(self.window_size)
            .await
            .inspect_err(|e| tracing::error!("Could not load top stories: {}", e))?;

        let resolutions = ids.iter().map(|&id| {
            let resolver = self.resolver.clone();
            async move { (id, resolver.resolve(id).await) }
        });

        let mut window = Vec::with_capacity(ids.len());
        for (id, result) in join_all(resolutions).await {
            match result {
                Ok(item) => window.push(item),
                Err(e) => tracing::warn!("Dropping story {} from feed: {}", id, e),
            }
        }

        tracing::info!("Loaded {} of {} top stories", window.len(), ids.len());
        Ok(window)
    }

    pub async fn resolve_comment(&self, id: u64) -> Result<Item> {
        self.resolver
            .resolve(id)
            .await
            .inspect_err(|e| tracing::warn!("Comment {} unavailable: {}", id, e))
    }

    /// Resolve one story outside a feed load, e.g. one opened by id.
    pub async fn resolve_story(&self, id: u64) -> Result<Item> {
        self.resolver.resolve(id).await
    }

    /// Start resolving every direct comment of `story`, one task per comment.
    ///
    /// Each result is sent on `tx` tagged with `generation` as soon as it is
    /// ready, in completion order. Every call gets its own worker pool, so
    /// comments still pending for a story the user left never hold up the
    /// next one. Tasks still waiting for a worker give up once `tx` closes.
    pub fn spawn_comment_resolutions(
        &self,
        story: &Item,
        generation: u64,
        tx: mpsc::UnboundedSender<CommentResolution>,
    ) {
        let story_id = story.id;
        let semaphore = Arc::new(Semaphore::new(self.comment_workers));

        for &comment_id in story.comment_ids() {
            let aggregator = self.clone();
            let semaphore = semaphore.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                if tx.is_closed() {
                    return;
                }

                let result = aggregator.resolve_comment(comment_id).await;
                let _ = tx.send(CommentResolution {
                    story_id,
                    generation,
                    comment_id,
                    result,
                });
            });
        }
    }

    /// Like [`spawn_comment_resolutions`](Self::spawn_comment_resolutions)
    /// with a fresh channel. The receiver closes once every comment reported.
    pub fn comments(&self, story: &Item) -> mpsc::UnboundedReceiver<CommentResolution> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.spawn_comment_resolutions(story, 0, tx);
        rx
    }
}
