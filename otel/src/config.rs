use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVICE_NAME: &str = "my-service";
pub const DEFAULT_SERVICE_VERSION: &str = "0.1.0";
pub const DEFAULT_OTLP_GRPC_ENDPOINT: &str = "localhost:4317";
pub const DEFAULT_EXPORT_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone, Debug, Default)]
pub struct OtelTlsConfig {
    pub ca_certificate: Option<PathBuf>,
    pub client_certificate: Option<PathBuf>,
    pub client_private_key: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub enum OtelExporter {
    /// OTLP over gRPC.
    ///
    /// `endpoint` may omit the scheme (`localhost:4317`); `http://` is assumed
    /// when `insecure` is set and `https://` otherwise.
    OtlpGrpc {
        endpoint: String,
        headers: HashMap<String, String>,
        insecure: bool,
        /// Deadline for a single export, including forced flushes. `None`
        /// keeps the exporter default.
        timeout: Option<Duration>,
        tls: Option<OtelTlsConfig>,
    },
}

impl OtelExporter {
    /// Plaintext gRPC exporter for a collector at `endpoint`.
    pub fn insecure_grpc(endpoint: impl Into<String>) -> Self {
        OtelExporter::OtlpGrpc {
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            insecure: true,
            timeout: None,
            tls: None,
        }
    }
}

impl Default for OtelExporter {
    fn default() -> Self {
        Self::insecure_grpc(DEFAULT_OTLP_GRPC_ENDPOINT)
    }
}
