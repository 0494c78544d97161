pub mod etl;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod pipeline;
pub mod present;
pub mod request;

pub use crate::domain::model::{ServiceListing, Train};
pub use crate::domain::ports::{ConfigProvider, PageSource, Pipeline};
pub use crate::utils::error::Result;
