pub mod carbon_herald;
pub mod euobserver;
pub mod euractiv;
pub mod feed_source;
pub mod politico_eu;

pub use feed_source::FeedSource;

use crate::traits::HeadlineSource;

/// All built-in sources in the order their results are merged. Earlier
/// sources win when two of them carry the same article.
pub fn default_sources() -> Vec<Box<dyn HeadlineSource>> {
    vec![
        Box::new(politico_eu::source()),
        Box::new(carbon_herald::source()),
        Box::new(euractiv::source()),
        Box::new(euobserver::source()),
    ]
}
