use crate::config::DEFAULT_EXPORT_INTERVAL;
use crate::config::DEFAULT_SERVICE_NAME;
use crate::config::DEFAULT_SERVICE_VERSION;
use crate::config::OtelExporter;
use opentelemetry_sdk::metrics::InMemoryMetricExporter;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum MetricsExporter {
    Otlp(OtelExporter),
    InMemory(InMemoryMetricExporter),
}

#[derive(Clone, Debug)]
pub struct MetricsConfig {
    pub(crate) service_name: String,
    pub(crate) service_version: String,
    pub(crate) exporter: MetricsExporter,
    pub(crate) export_interval: Duration,
}

impl MetricsConfig {
    pub fn otlp(
        service_name: impl Into<String>,
        service_version: impl Into<String>,
        exporter: OtelExporter,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            exporter: MetricsExporter::Otlp(exporter),
            export_interval: DEFAULT_EXPORT_INTERVAL,
        }
    }

    /// Create an in-memory config (used in tests).
    pub fn in_memory(
        service_name: impl Into<String>,
        service_version: impl Into<String>,
        exporter: InMemoryMetricExporter,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            exporter: MetricsExporter::InMemory(exporter),
            export_interval: DEFAULT_EXPORT_INTERVAL,
        }
    }

    /// Override the interval between periodic metric exports.
    ///
    /// Forced flushes ignore this interval.
    pub fn with_export_interval(mut self, interval: Duration) -> Self {
        self.export_interval = interval;
        self
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::otlp(
            DEFAULT_SERVICE_NAME,
            DEFAULT_SERVICE_VERSION,
            OtelExporter::default(),
        )
    }
}
