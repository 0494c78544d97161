pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::LookupConfig;

pub use crate::core::{etl::LookupEngine, fetch::HttpFetcher, pipeline::HeadcodePipeline};
pub use domain::headcode::headcode_meaning;
pub use domain::model::{ServiceListing, Train};
pub use utils::error::{LookupError, Result};
