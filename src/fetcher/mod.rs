pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// A fetched page: HTTP status plus decoded body.
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Fetcher {
    /// GET a page, returning status and body.
    async fn get(&self, url: &str) -> Result<Page>;

    /// HEAD probe, returning only the status code.
    async fn head(&self, url: &str) -> Result<u16>;
}
