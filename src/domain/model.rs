use serde::{Deserialize, Serialize};

/// One train service as listed on the results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub headcode: String,
    pub departure_time: Option<String>,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub operator: Option<String>,
    pub href: Option<String>,
}

impl Train {
    pub fn new(headcode: impl Into<String>) -> Self {
        Self {
            headcode: headcode.into(),
            ..Self::default()
        }
    }
}

/// Everything extracted from one results page, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub headcode: String,
    pub trains: Vec<Train>,
    /// `N` from the page's "Showing N services" banner, when present.
    pub advertised_count: Option<usize>,
}
