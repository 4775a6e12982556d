use crate::sources::FeedSource;

pub const NAME: &str = "Carbon Herald";
pub const FEED_URL: &str = "https://carbonherald.com/feed/";

/// Carbon removal and carbon market trade press; every item is on topic.
pub fn source() -> FeedSource {
    FeedSource::new(NAME, FEED_URL)
}
