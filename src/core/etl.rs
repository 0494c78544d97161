use crate::core::{Pipeline, ServiceListing};
use crate::utils::error::Result;

/// Runs a pipeline's fetch, extract and render stages in order.
pub struct LookupEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LookupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetches and extracts the listing without rendering it.
    pub async fn lookup(&self) -> Result<ServiceListing> {
        tracing::debug!("Fetching results page...");
        let page = self.pipeline.extract().await?;
        tracing::debug!("Fetched {} bytes", page.len());

        tracing::debug!("Extracting services...");
        let listing = self.pipeline.transform(&page)?;
        tracing::info!(
            "Found {} service(s) for headcode {}",
            listing.trains.len(),
            listing.headcode
        );

        Ok(listing)
    }

    /// Rendering happens only after every entry has been extracted.
    pub async fn run(&self) -> Result<String> {
        let listing = self.lookup().await?;
        self.pipeline.load(&listing)
    }
}
