use crate::core::html::{parse_selector, TreeQuery};
use crate::domain::model::{ServiceListing, Train};
use crate::utils::error::{LookupError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const RESULTS_SELECTOR: &str = ".service-results";
const ENTRY_SELECTOR: &str = ".service-link";
const DEPARTURE_TIME_SELECTOR: &str = ".timing-card-times > p:nth-child(2)";
const LOCATIONS_SELECTOR: &str = ".timing-card-locations > p";
const OPERATOR_SELECTOR: &str = ".operator > p";
const SHOWING_PATTERN: &str = r"Showing (\d+) services";

struct ServiceSelectors {
    results: Selector,
    entry: Selector,
    departure_time: Selector,
    locations: Selector,
    operator: Selector,
    showing: Regex,
}

impl ServiceSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            results: parse_selector(RESULTS_SELECTOR)?,
            entry: parse_selector(ENTRY_SELECTOR)?,
            departure_time: parse_selector(DEPARTURE_TIME_SELECTOR)?,
            locations: parse_selector(LOCATIONS_SELECTOR)?,
            operator: parse_selector(OPERATOR_SELECTOR)?,
            showing: Regex::new(SHOWING_PATTERN)?,
        })
    }
}

/// Pulls train records out of a rail-record headcode results page.
pub struct ServiceExtractor {
    selectors: ServiceSelectors,
}

impl ServiceExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: ServiceSelectors::new()?,
        })
    }

    /// Fails when the results container is missing or holds no entries.
    /// Missing fields inside an entry are left unset.
    pub fn extract(&self, page: &str, headcode: &str) -> Result<ServiceListing> {
        let document = Html::parse_document(page);
        let root = document.root_element();

        let results = root
            .first(&self.selectors.results)
            .ok_or(LookupError::ResultsNotFound)?;

        let entries = results.all(&self.selectors.entry);
        if entries.is_empty() {
            return Err(LookupError::NoServices);
        }

        let trains: Vec<Train> = entries
            .into_iter()
            .map(|entry| self.extract_train(entry, headcode))
            .collect();

        let advertised_count = self.advertised_count(&root.text().collect::<String>());
        match advertised_count {
            Some(count) if count != trains.len() => tracing::warn!(
                "Page advertises {} services but {} were extracted",
                count,
                trains.len()
            ),
            Some(count) => tracing::debug!("Page advertises {} services", count),
            None => tracing::debug!("No result count message on page"),
        }

        Ok(ServiceListing {
            headcode: headcode.to_string(),
            trains,
            advertised_count,
        })
    }

    /// Reads `N` out of a "Showing N services" message.
    pub fn advertised_count(&self, text: &str) -> Option<usize> {
        self.selectors
            .showing
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    fn extract_train(&self, entry: ElementRef<'_>, headcode: &str) -> Train {
        let mut train = Train::new(headcode);

        train.href = entry.value().attr("href").map(str::to_string);

        train.departure_time = entry
            .first(&self.selectors.departure_time)
            .map(|p| p.text_content());

        let locations = entry.all(&self.selectors.locations);
        match locations.as_slice() {
            [] => {}
            [from, to, ..] => {
                train.from_location = Some(from.text_content());
                train.to_location = Some(to.text_content());
            }
            [only] => {
                // Origin and destination are set together or not at all.
                tracing::warn!(
                    "Service {:?} lists a single location {:?}; leaving origin and destination unset",
                    train.href,
                    only.text_content()
                );
            }
        }

        train.operator = entry
            .first(&self.selectors.operator)
            .map(|p| p.text_content());

        tracing::debug!("Extracted service: {:?}", train);
        train
    }
}
