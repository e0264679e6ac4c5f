use gauge_otel::config::OtelExporter;
use gauge_otel::metrics::Measurement;
use gauge_otel::metrics::MetricsClient;
use gauge_otel::metrics::MetricsConfig;
use gauge_otel::metrics::MetricsError;
use gauge_otel::metrics::Result;
use std::collections::HashMap;
use std::time::Duration;

/// A loopback address nothing listens on.
async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    drop(listener);
    addr.to_string()
}

// Ensures the gRPC channel is lazy: building without a collector succeeds.
#[tokio::test(flavor = "multi_thread")]
async fn grpc_exporter_builds_without_collector() -> Result<()> {
    let endpoint = closed_endpoint().await;
    let metrics = MetricsClient::new(MetricsConfig::otlp(
        "my-service",
        "0.1.0",
        OtelExporter::insecure_grpc(endpoint),
    ))?;
    drop(metrics);
    Ok(())
}

// Ensures an unreachable collector surfaces as a flush failure.
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_collector_fails_flush() -> Result<()> {
    let endpoint = closed_endpoint().await;
    let exporter = OtelExporter::OtlpGrpc {
        endpoint,
        headers: HashMap::new(),
        insecure: true,
        timeout: Some(Duration::from_secs(2)),
        tls: None,
    };
    let metrics = MetricsClient::new(MetricsConfig::otlp("my-service", "0.1.0", exporter))?;

    let measurement = Measurement::new("delivery.delay", 5e9)
        .with_tag("delivery_id", "1")
        .with_tag("env", "prod");
    let result = tokio::task::spawn_blocking(move || metrics.record_gauges(&[measurement]))
        .await
        .expect("join");

    let err = result.unwrap_err();
    assert!(
        matches!(err, MetricsError::FlushFailed { .. }),
        "unexpected error: {err:?}"
    );
    Ok(())
}
