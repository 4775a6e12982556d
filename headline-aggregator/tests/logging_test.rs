mod common;

use carbon_headlines::logging::PrefixFormat;
use common::LogBuffer;

#[test]
fn test_prefix_format_lines() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .event_format(PrefixFormat)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("Collected {} headlines", 3);
        tracing::warn!("Failed to collect from {}: {}", "Broken", "HTTP 503");
    });

    assert_eq!(
        buffer.contents(),
        "INFO: Collected 3 headlines\nWARN: Failed to collect from Broken: HTTP 503\n"
    );
}
