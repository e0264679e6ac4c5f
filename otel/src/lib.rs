pub mod config;
pub mod metrics;

mod otlp;
mod resource;

use crate::metrics::MetricsClient;
use crate::metrics::MetricsConfig;
use crate::metrics::Result;

/// Build a metrics client and register its provider as the process-wide
/// default meter provider.
///
/// Call once at startup. The returned handle is what callers should pass
/// around; the global registration only serves code that looks meters up
/// through `opentelemetry::global`.
pub fn init_provider(config: MetricsConfig) -> Result<MetricsClient> {
    let metrics = MetricsClient::new(config)?;
    metrics.install_global();
    Ok(metrics)
}
