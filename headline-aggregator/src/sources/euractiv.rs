use crate::sources::FeedSource;

pub const NAME: &str = "Euractiv";
pub const FEED_URL: &str = "https://www.euractiv.com/sections/energy-environment/feed/";

pub fn source() -> FeedSource {
    FeedSource::new(NAME, FEED_URL)
}
