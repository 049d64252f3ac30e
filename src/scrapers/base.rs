use crate::errors::Result;
use async_trait::async_trait;

/// Source of raw history pages
#[async_trait]
pub trait PageFetcher {
    /// Short name of the data source, used in logs
    fn source_name(&self) -> &'static str;

    /// Fetch the raw markup behind the given URL
    async fn fetch_page(&self, url: &str) -> Result<String>;
}
