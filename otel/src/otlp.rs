use crate::config::OtelTlsConfig;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Uri;
use opentelemetry_otlp::tonic_types::transport::Certificate as TonicCertificate;
use opentelemetry_otlp::tonic_types::transport::ClientTlsConfig;
use opentelemetry_otlp::tonic_types::transport::Identity as TonicIdentity;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::io;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

pub(crate) type BoxError = Box<dyn Error + Send + Sync>;

pub(crate) fn build_header_map(headers: &HashMap<String, String>) -> HeaderMap {
    let mut header_map = HeaderMap::new();
    for (key, value) in headers {
        if let Ok(name) = HeaderName::from_bytes(key.as_bytes())
            && let Ok(val) = HeaderValue::from_str(value)
        {
            header_map.insert(name, val);
        } else {
            warn!("skipping invalid OTLP header {key}");
        }
    }
    header_map
}

/// Resolve the URI the tonic channel connects to.
///
/// Collector addresses are usually written as `host:port`; the scheme is
/// derived from the transport security setting in that case.
pub(crate) fn grpc_endpoint(endpoint: &str, insecure: bool) -> Result<String, BoxError> {
    let endpoint = endpoint.trim();
    let endpoint = if endpoint.contains("://") {
        endpoint.to_string()
    } else if insecure {
        format!("http://{endpoint}")
    } else {
        format!("https://{endpoint}")
    };

    let uri: Uri = endpoint.parse()?;
    if uri.host().is_none_or(str::is_empty) {
        return Err(config_error(format!(
            "OTLP gRPC endpoint {endpoint} does not include a host"
        )));
    }
    Ok(endpoint)
}

pub(crate) fn build_grpc_tls_config(
    endpoint: &str,
    tls_config: ClientTlsConfig,
    tls: &OtelTlsConfig,
) -> Result<ClientTlsConfig, BoxError> {
    let uri: Uri = endpoint.parse()?;
    let host = uri.host().ok_or_else(|| {
        config_error(format!(
            "OTLP gRPC endpoint {endpoint} does not include a host"
        ))
    })?;

    let mut config = tls_config.domain_name(host.to_owned());

    if let Some(path) = tls.ca_certificate.as_ref() {
        let (pem, _) = read_bytes(path)?;
        config = config.ca_certificate(TonicCertificate::from_pem(pem));
    }

    match (&tls.client_certificate, &tls.client_private_key) {
        (Some(cert_path), Some(key_path)) => {
            let (cert_pem, _) = read_bytes(cert_path)?;
            let (key_pem, _) = read_bytes(key_path)?;
            config = config.identity(TonicIdentity::from_pem(cert_pem, key_pem));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(config_error(
                "client_certificate and client_private_key must both be provided for mTLS",
            ));
        }
        (None, None) => {}
    }

    Ok(config)
}

fn read_bytes(path: &Path) -> Result<(Vec<u8>, PathBuf), BoxError> {
    match fs::read(path) {
        Ok(bytes) => Ok((bytes, path.to_path_buf())),
        Err(error) => Err(Box::new(io::Error::new(
            error.kind(),
            format!("failed to read {}: {error}", path.display()),
        ))),
    }
}

fn config_error(message: impl Into<String>) -> BoxError {
    Box::new(io::Error::new(ErrorKind::InvalidData, message.into()))
}
