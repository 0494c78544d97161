use crate::core::extract::ServiceExtractor;
use crate::core::fetch::HttpFetcher;
use crate::core::present::render_listing;
use crate::core::request::build_request_url;
use crate::core::{ConfigProvider, PageSource, Pipeline, ServiceListing};
use crate::utils::error::Result;

pub struct HeadcodePipeline<S: PageSource, C: ConfigProvider> {
    source: S,
    config: C,
    extractor: ServiceExtractor,
}

impl<S: PageSource, C: ConfigProvider> HeadcodePipeline<S, C> {
    pub fn new(source: S, config: C) -> Result<Self> {
        Ok(Self {
            source,
            config,
            extractor: ServiceExtractor::new()?,
        })
    }
}

impl<C: ConfigProvider> HeadcodePipeline<HttpFetcher, C> {
    /// Pipeline backed by a real HTTP client using the configured timeout.
    pub fn with_http(config: C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout())?;
        Self::new(fetcher, config)
    }
}

#[async_trait::async_trait]
impl<S: PageSource, C: ConfigProvider> Pipeline for HeadcodePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let url = build_request_url(&self.config);
        self.source.fetch(&url).await
    }

    fn transform(&self, page: &str) -> Result<ServiceListing> {
        self.extractor.extract(page, self.config.headcode())
    }

    fn load(&self, listing: &ServiceListing) -> Result<String> {
        Ok(render_listing(listing))
    }
}
