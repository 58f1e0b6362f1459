pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Raw request/response capability the upstream clients are built on.
#[async_trait]
pub trait Fetcher {
    /// GET `url` and return the body. Non-2xx responses are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
