use crate::domain::ports::ConfigProvider;

/// Builds the results page URL by plain concatenation.
///
/// The headcode is not escaped: one containing `&`, `#` or spaces produces a
/// malformed request. Such headcodes are logged but still sent as given.
pub fn build_request_url<C: ConfigProvider + ?Sized>(config: &C) -> String {
    let headcode = config.headcode();
    if !headcode.chars().all(|c| c.is_ascii_alphanumeric()) {
        tracing::warn!(
            "Headcode {:?} contains non-alphanumeric characters; the request URL may be malformed",
            headcode
        );
    }

    format!(
        "{}?d={}&a={}&headcode={}",
        config.base_url(),
        config.date().format("%Y-%m-%d"),
        config.arrival(),
        headcode
    )
}
