use crate::sources;
use crate::traits::HeadlineSource;
use crate::types::{Headline, HeadlineError, Result, SourceConfig};
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{info, warn};

/// A source that failed during a run, kept so callers can report it.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: String,
    pub error: HeadlineError,
}

#[derive(Debug, Default)]
pub struct AggregateReport {
    pub headlines: Vec<Headline>,
    pub failures: Vec<SourceFailure>,
}

/// Runs every registered source and merges the results.
pub struct HeadlineAggregator {
    sources: Vec<Box<dyn HeadlineSource>>,
    config: SourceConfig,
}

impl HeadlineAggregator {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            sources: Vec::new(),
            config,
        }
    }

    /// Aggregator preloaded with the built-in outlets.
    pub fn with_default_sources(config: SourceConfig) -> Self {
        Self {
            sources: sources::default_sources(),
            config,
        }
    }

    pub fn add_source(&mut self, source: Box<dyn HeadlineSource>) {
        info!("Adding source: {}", source.name());
        self.sources.push(source);
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Collect from each source in turn. A failing source is logged and
    /// skipped; it never stops the others.
    pub async fn collect(&self, limit: usize) -> AggregateReport {
        let mut results = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let result = source.collect(limit, &self.config).await;
            results.push((source.name().to_string(), result));
        }
        self.merge(results)
    }

    /// Same as [`collect`](Self::collect) but with all sources in flight at
    /// once. Results are merged in registration order, so the output matches
    /// the sequential run.
    pub async fn collect_concurrent(&self, limit: usize) -> AggregateReport {
        let fetches = self.sources.iter().map(|source| async move {
            let result = source.collect(limit, &self.config).await;
            (source.name().to_string(), result)
        });
        let results = join_all(fetches).await;
        self.merge(results)
    }

    fn merge(&self, results: Vec<(String, Result<Vec<Headline>>)>) -> AggregateReport {
        let mut collected = Vec::new();
        let mut failures = Vec::new();

        for (source, result) in results {
            match result {
                Ok(headlines) => {
                    info!("{}: collected {} headlines", source, headlines.len());
                    collected.extend(headlines);
                }
                Err(error) => {
                    warn!("Failed to collect from {}: {}", source, error);
                    failures.push(SourceFailure { source, error });
                }
            }
        }

        let total = collected.len();
        let headlines = dedup_by_url(collected);

        info!(
            "Collected {} headlines ({} after dedup) from {}/{} sources",
            total,
            headlines.len(),
            self.sources.len() - failures.len(),
            self.sources.len()
        );

        AggregateReport {
            headlines,
            failures,
        }
    }
}

/// Drop headlines with an empty URL or a URL already seen earlier in the
/// sequence. Order is otherwise preserved.
pub fn dedup_by_url(headlines: Vec<Headline>) -> Vec<Headline> {
    let mut seen = HashSet::new();
    headlines
        .into_iter()
        .filter(|h| !h.url.is_empty() && seen.insert(h.url.clone()))
        .collect()
}

/// Drop headlines whose URL is in `known`, e.g. URLs from a previous run's
/// output.
pub fn exclude_urls<S: AsRef<str>>(headlines: Vec<Headline>, known: &[S]) -> Vec<Headline> {
    let known: HashSet<&str> = known.iter().map(|s| s.as_ref()).collect();
    headlines
        .into_iter()
        .filter(|h| !known.contains(h.url.as_str()))
        .collect()
}
