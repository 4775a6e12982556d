pub mod types;
pub mod fetcher;
pub mod parser;
pub mod filter;
pub mod traits;
pub mod sources;
pub mod aggregator;
pub mod json;
pub mod logging;
pub mod utils;

pub use types::*;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use filter::KeywordFilter;
pub use traits::HeadlineSource;
pub use sources::FeedSource;
pub use aggregator::{dedup_by_url, AggregateReport, HeadlineAggregator, SourceFailure};
