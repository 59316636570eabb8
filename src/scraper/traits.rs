use crate::model::{DocumentLink, ScraperError};

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Locates the newest price index document linked on the portal.
    async fn latest_document(&self) -> Result<DocumentLink, ScraperError>;
    /// Downloads the document bytes.
    async fn download(&self, link: &DocumentLink) -> Result<Vec<u8>, ScraperError>;
}
