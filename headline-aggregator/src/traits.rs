use crate::types::{Headline, Result, SourceConfig};
use async_trait::async_trait;

/// A news source that can be asked for its latest headlines.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Human-readable name, also written into `Headline::source`
    fn name(&self) -> &str;

    /// Fetch the source and return at most `limit` headlines.
    ///
    /// An error means the feed could not be fetched, parsed, or was empty.
    /// A feed whose entries were all filtered out yields `Ok(vec![])`.
    async fn collect(&self, limit: usize, config: &SourceConfig) -> Result<Vec<Headline>>;
}
