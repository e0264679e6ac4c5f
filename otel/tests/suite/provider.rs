use crate::harness::build_in_memory_metrics;
use crate::harness::find_metric;
use crate::harness::gauge_points;
use crate::harness::latest_metrics;
use gauge_otel::init_provider;
use gauge_otel::metrics::Measurement;
use gauge_otel::metrics::MetricsConfig;
use gauge_otel::metrics::Result;
use opentelemetry::KeyValue;
use opentelemetry::global;
use opentelemetry_sdk::metrics::InMemoryMetricExporter;
use pretty_assertions::assert_eq;
use std::time::Duration;

// Ensures a second provider never leaks its points into the first.
#[test]
fn second_provider_does_not_attach_to_first() -> Result<()> {
    let (first, first_exporter) = build_in_memory_metrics()?;
    let (second, second_exporter) = build_in_memory_metrics()?;

    second.record_gauges(&[Measurement::new("delivery.delay", 7.0)])?;
    first.force_flush()?;

    let finished = first_exporter.get_finished_metrics().unwrap();
    assert!(
        finished.is_empty(),
        "first provider exported points recorded through the second"
    );

    let resource_metrics = latest_metrics(&second_exporter);
    assert_eq!(gauge_points(&resource_metrics, "delivery.delay").len(), 1);
    Ok(())
}

// Ensures meters looked up through the global API report to the installed provider.
#[test]
fn init_provider_installs_global_default() -> Result<()> {
    let exporter = InMemoryMetricExporter::default();
    let config = MetricsConfig::in_memory("my-service", "0.1.0", exporter.clone())
        .with_export_interval(Duration::from_secs(60 * 60));
    let metrics = init_provider(config)?;

    global::meter("global-lookup")
        .f64_gauge("global.lookup")
        .build()
        .record(3.0, &[KeyValue::new("source", "global")]);
    metrics.force_flush()?;

    let resource_metrics = latest_metrics(&exporter);
    assert!(find_metric(&resource_metrics, "global.lookup").is_some());
    Ok(())
}

// Ensures an invalid name stops the pass before anything is flushed.
#[test]
fn invalid_name_aborts_before_flush() -> Result<()> {
    let (metrics, exporter) = build_in_memory_metrics()?;

    let err = metrics
        .record_gauges(&[
            Measurement::new("delivery.delay", 1.0),
            Measurement::new("", 2.0),
            Measurement::new("queue.depth", 3.0),
        ])
        .unwrap_err();
    assert!(matches!(
        err,
        gauge_otel::metrics::MetricsError::InstrumentInit { ref name, .. } if name.is_empty()
    ));

    let finished = exporter.get_finished_metrics().unwrap();
    assert!(finished.is_empty(), "nothing should be flushed on error");

    // Points recorded before the failure stay pending in the provider.
    metrics.force_flush()?;
    let resource_metrics = latest_metrics(&exporter);
    assert!(find_metric(&resource_metrics, "delivery.delay").is_some());
    assert!(find_metric(&resource_metrics, "queue.depth").is_none());
    Ok(())
}

// Ensures shutdown flushes pending points before stopping the provider.
#[test]
fn shutdown_flushes_pending_points() -> Result<()> {
    let (metrics, exporter) = build_in_memory_metrics()?;

    metrics
        .gauge("delivery.delay")?
        .record(5e9, &[KeyValue::new("delivery_id", "1")]);
    metrics.shutdown()?;

    let resource_metrics = latest_metrics(&exporter);
    assert_eq!(gauge_points(&resource_metrics, "delivery.delay").len(), 1);
    Ok(())
}
