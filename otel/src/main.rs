use gauge_otel::init_provider;
use gauge_otel::metrics::MetricsConfig;
use gauge_otel::metrics::delivery_delay_payload;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();

    let metrics = init_provider(MetricsConfig::default())?;

    let payload = delivery_delay_payload();
    let count = payload.len();
    // The forced flush blocks until the collector answers.
    tokio::task::spawn_blocking(move || metrics.record_gauges(&payload)).await??;

    info!("exported {count} gauge measurements");
    Ok(())
}
