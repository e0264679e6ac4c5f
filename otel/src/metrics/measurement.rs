use crate::metrics::names::DELIVERY_DELAY_METRIC;
use crate::metrics::names::DELIVERY_ID_TAG;
use crate::metrics::names::ENV_TAG;
use opentelemetry::KeyValue;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single gauge sample. Samples sharing a name are recorded as separate
/// points on the same instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    pub tags: Vec<Tag>,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            tags: Vec::new(),
        }
    }

    /// Gauge sample holding `duration` as float64 nanoseconds.
    pub fn from_duration(name: impl Into<String>, duration: Duration) -> Self {
        Self::new(name, duration.as_nanos() as f64)
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    /// Tags in input order, one attribute per tag.
    pub(crate) fn attributes(&self) -> Vec<KeyValue> {
        self.tags
            .iter()
            .map(|tag| KeyValue::new(tag.name.clone(), tag.value.clone()))
            .collect()
    }
}

/// Payload emitted by the `gauge-otel` binary.
pub fn delivery_delay_payload() -> Vec<Measurement> {
    vec![
        Measurement::from_duration(DELIVERY_DELAY_METRIC, Duration::from_secs(5))
            .with_tag(DELIVERY_ID_TAG, "1")
            .with_tag(ENV_TAG, "prod"),
        Measurement::from_duration(DELIVERY_DELAY_METRIC, Duration::from_secs(10))
            .with_tag(DELIVERY_ID_TAG, "2")
            .with_tag(ENV_TAG, "prod"),
    ]
}
