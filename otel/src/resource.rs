use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions as semconv;

const HOST_NAME_ATTRIBUTE: &str = "host.name";
const OS_TYPE_ATTRIBUTE: &str = "os.type";
const OS_VERSION_ATTRIBUTE: &str = "os.version";

/// Resource shared by every metric exported from one provider.
///
/// Attributes are layered SDK defaults, then host details, then the service
/// identity; later layers win on key collision.
pub(crate) fn make_resource(service_name: &str, service_version: &str) -> Resource {
    Resource::builder()
        .with_attributes(runtime_attributes())
        .with_service_name(service_name.to_string())
        .with_attributes(vec![KeyValue::new(
            semconv::attribute::SERVICE_VERSION,
            service_version.to_string(),
        )])
        .build()
}

fn runtime_attributes() -> Vec<KeyValue> {
    let mut attributes = Vec::with_capacity(3);
    let hostname = gethostname::gethostname();
    if let Some(hostname) = hostname.to_str().filter(|name| !name.is_empty()) {
        attributes.push(KeyValue::new(HOST_NAME_ATTRIBUTE, hostname.to_string()));
    }
    attributes.push(KeyValue::new(OS_TYPE_ATTRIBUTE, os_type()));
    attributes.push(KeyValue::new(
        OS_VERSION_ATTRIBUTE,
        os_info::get().version().to_string(),
    ));
    attributes
}

fn os_type() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}
