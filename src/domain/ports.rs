use crate::domain::model::ServiceListing;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn headcode(&self) -> &str;
    fn base_url(&self) -> &str;
    fn date(&self) -> NaiveDate;
    fn arrival(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Where result pages come from.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    fn transform(&self, page: &str) -> Result<ServiceListing>;
    fn load(&self, listing: &ServiceListing) -> Result<String>;
}
