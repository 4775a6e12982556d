use crate::sources::FeedSource;

pub const NAME: &str = "Politico EU";
pub const FEED_URL: &str = "https://www.politico.eu/section/energy/feed/";

/// Politico Europe's energy and climate section.
///
/// Article links carry `utm_*` campaign parameters which are cut off so the
/// same story shared elsewhere dedups against it.
pub fn source() -> FeedSource {
    FeedSource::new(NAME, FEED_URL).with_tracking_stripped()
}
