use crate::config::OtelExporter;
use crate::metrics::MetricsError;
use crate::metrics::Result;
use crate::metrics::config::MetricsConfig;
use crate::metrics::config::MetricsExporter;
use crate::metrics::measurement::Measurement;
use crate::metrics::validation::validate_metric_name;
use crate::resource::make_resource;
use opentelemetry::InstrumentationScope;
use opentelemetry::global;
use opentelemetry::metrics::Gauge;
use opentelemetry::metrics::MeterProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_otlp::WithTonicConfig;
use opentelemetry_otlp::tonic_types::metadata::MetadataMap;
use opentelemetry_otlp::tonic_types::transport::ClientTlsConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::PeriodicReader;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::metrics::Temporality;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

#[derive(Debug)]
struct MetricsClientInner {
    meter_provider: SdkMeterProvider,
    gauges: Mutex<HashMap<String, Gauge<f64>>>,
}

impl MetricsClientInner {
    fn gauge(&self, name: &str) -> Result<Gauge<f64>> {
        validate_metric_name(name)?;

        let mut gauges = self
            .gauges
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let gauge = gauges.entry(name.to_string()).or_insert_with(|| {
            let scope = InstrumentationScope::builder(name.to_string()).build();
            self.meter_provider
                .meter_with_scope(scope)
                .f64_gauge(name.to_string())
                .build()
        });
        Ok(gauge.clone())
    }

    fn record_gauges(&self, measurements: &[Measurement]) -> Result<()> {
        for measurement in measurements {
            let gauge = self.gauge(&measurement.name)?;
            gauge.record(measurement.value, &measurement.attributes());
        }
        self.force_flush()
    }

    fn force_flush(&self) -> Result<()> {
        debug!("flushing OTEL metrics");
        self.meter_provider
            .force_flush()
            .map_err(|source| MetricsError::FlushFailed { source })
    }

    fn shutdown(&self) -> Result<()> {
        self.force_flush()?;
        self.meter_provider
            .shutdown()
            .map_err(|source| MetricsError::ProviderShutdown { source })?;
        Ok(())
    }
}

/// Handle to a meter provider that exports float64 gauges.
///
/// Each handle owns its provider, periodic reader and exporter. Instruments
/// obtained through one handle never report through another.
#[derive(Clone, Debug)]
pub struct MetricsClient(Arc<MetricsClientInner>);

impl MetricsClient {
    /// Build the resource, exporter and periodic reader described by `config`.
    ///
    /// An OTLP exporter must be built from within a Tokio runtime because the
    /// gRPC channel is spawned onto it. The channel connects lazily, so an
    /// unreachable collector only surfaces on flush.
    pub fn new(config: MetricsConfig) -> Result<Self> {
        let resource = make_resource(&config.service_name, &config.service_version);

        let meter_provider = match config.exporter {
            MetricsExporter::InMemory(exporter) => {
                build_provider(resource, exporter, config.export_interval)
            }
            MetricsExporter::Otlp(exporter) => {
                let exporter = build_otlp_metric_exporter(exporter, Temporality::Delta)?;
                build_provider(resource, exporter, config.export_interval)
            }
        };

        Ok(Self(Arc::new(MetricsClientInner {
            meter_provider,
            gauges: Mutex::new(HashMap::new()),
        })))
    }

    /// Record every measurement on its gauge, then flush once.
    ///
    /// Stops at the first invalid metric name without flushing. Blocks the
    /// calling thread until the exporter has answered.
    pub fn record_gauges(&self, measurements: &[Measurement]) -> Result<()> {
        self.0.record_gauges(measurements)
    }

    /// The gauge named `name`, in the instrumentation scope of the same name.
    pub fn gauge(&self, name: &str) -> Result<Gauge<f64>> {
        self.0.gauge(name)
    }

    /// Export everything recorded so far, outside the periodic schedule.
    pub fn force_flush(&self) -> Result<()> {
        self.0.force_flush()
    }

    /// Flush metrics and stop the underlying OTEL meter provider.
    pub fn shutdown(&self) -> Result<()> {
        self.0.shutdown()
    }

    /// Make this provider the one returned by `opentelemetry::global`.
    pub fn install_global(&self) {
        global::set_meter_provider(self.0.meter_provider.clone());
    }
}

fn build_provider<E>(resource: Resource, exporter: E, interval: Duration) -> SdkMeterProvider
where
    E: opentelemetry_sdk::metrics::exporter::PushMetricExporter + 'static,
{
    let reader = PeriodicReader::builder(exporter)
        .with_interval(interval)
        .build();
    SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build()
}

fn build_otlp_metric_exporter(
    exporter: OtelExporter,
    temporality: Temporality,
) -> Result<opentelemetry_otlp::MetricExporter> {
    match exporter {
        OtelExporter::OtlpGrpc {
            endpoint,
            headers,
            insecure,
            timeout,
            tls,
        } => {
            let endpoint = crate::otlp::grpc_endpoint(&endpoint, insecure)
                .map_err(|source| MetricsError::ExporterInit { source })?;
            debug!("Using OTLP Grpc exporter for metrics: {endpoint}");

            let header_map = crate::otlp::build_header_map(&headers);

            let mut exporter_builder = opentelemetry_otlp::MetricExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint.clone())
                .with_temporality(temporality)
                .with_metadata(MetadataMap::from_headers(header_map));

            if let Some(timeout) = timeout {
                exporter_builder = exporter_builder.with_timeout(timeout);
            }

            if !insecure {
                let base_tls_config = ClientTlsConfig::new()
                    .with_enabled_roots()
                    .assume_http2(true);
                let tls_config = match tls.as_ref() {
                    Some(tls) => {
                        crate::otlp::build_grpc_tls_config(&endpoint, base_tls_config, tls)
                            .map_err(|source| MetricsError::ExporterInit { source })?
                    }
                    None => base_tls_config,
                };
                exporter_builder = exporter_builder.with_tls_config(tls_config);
            }

            exporter_builder
                .build()
                .map_err(|source| MetricsError::ExporterInit {
                    source: Box::new(source),
                })
        }
    }
}
