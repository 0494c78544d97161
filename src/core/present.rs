use crate::domain::headcode::headcode_meaning;
use crate::domain::model::{ServiceListing, Train};
use std::fmt::Write;

pub fn render_train(train: &Train) -> String {
    format!(
        "headcode: {}\n\
         departure_time: {}\n\
         from_location: {}\n\
         to_location: {}\n\
         operator: {}\n\
         headcode meaning: {}\n\
         href: {}\n",
        train.headcode,
        field(&train.departure_time),
        field(&train.from_location),
        field(&train.to_location),
        field(&train.operator),
        headcode_meaning(&train.headcode),
        field(&train.href),
    )
}

/// One block per train, each preceded by a blank line.
pub fn render_listing(listing: &ServiceListing) -> String {
    let mut out = String::new();
    for train in &listing.trains {
        let _ = writeln!(out);
        out.push_str(&render_train(train));
    }
    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
