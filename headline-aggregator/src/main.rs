use anyhow::Context;
use carbon_headlines::aggregator::exclude_urls;
use carbon_headlines::{json, logging, Headline, HeadlineAggregator, SourceConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Collect carbon market and climate policy headlines as JSON.
#[derive(Debug, Parser)]
#[command(name = "carbon-headlines", version, about)]
struct Cli {
    /// Maximum number of headlines taken from each source
    #[arg(short, long, default_value_t = 20)]
    limit: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// User-Agent header sent to every feed
    #[arg(long)]
    user_agent: Option<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fetch all sources at the same time
    #[arg(long)]
    concurrent: bool,

    /// Earlier output file; headlines already listed there are left out
    #[arg(long)]
    exclude: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = SourceConfig {
        timeout: Duration::from_secs(cli.timeout_secs),
        ..SourceConfig::default()
    };
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let aggregator = HeadlineAggregator::with_default_sources(config);
    info!("Collecting from: {}", aggregator.source_names().join(", "));

    let report = if cli.concurrent {
        aggregator.collect_concurrent(cli.limit).await
    } else {
        aggregator.collect(cli.limit).await
    };

    let mut headlines = report.headlines;
    if let Some(path) = &cli.exclude {
        let previous: Vec<Headline> = json::read_json_file(path)
            .with_context(|| format!("reading previous output {}", path.display()))?;
        let known: Vec<&str> = previous.iter().map(|h| h.url.as_str()).collect();
        let before = headlines.len();
        headlines = exclude_urls(headlines, &known);
        info!(
            "Excluded {} headlines already present in {}",
            before - headlines.len(),
            path.display()
        );
    }

    match &cli.output {
        Some(path) => {
            json::write_json_file(path, &headlines)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {} headlines to {}", headlines.len(), path.display());
        }
        None => {
            json::write_json(std::io::stdout().lock(), &headlines)
                .context("writing headlines to stdout")?;
        }
    }

    Ok(())
}
