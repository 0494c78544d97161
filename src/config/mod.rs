#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HEADCODE: &str = "2S80";
pub const DEFAULT_BASE_URL: &str = "https://live.rail-record.co.uk/headcode/";
pub const DEFAULT_DATE: &str = "2024-03-12";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    pub headcode: String,
    pub base_url: String,
    pub date: NaiveDate,
    pub arrival: String,
    pub timeout_seconds: u64,
    pub verbose: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            headcode: DEFAULT_HEADCODE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap_or(NaiveDate::MIN),
            arrival: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
        }
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        // The headcode stays free-form; it is appended to the URL untouched.
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

impl ConfigProvider for LookupConfig {
    fn headcode(&self) -> &str {
        &self.headcode
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn arrival(&self) -> &str {
        &self.arrival
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
