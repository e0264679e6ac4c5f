use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to build OTLP metrics exporter")]
    ExporterInit {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to create gauge instrument {name:?}: {reason}")]
    InstrumentInit {
        name: String,
        reason: InvalidInstrumentName,
    },

    #[error("failed to flush metrics provider")]
    FlushFailed {
        #[source]
        source: opentelemetry_sdk::error::OTelSdkError,
    },

    #[error("failed to shutdown metrics provider")]
    ProviderShutdown {
        #[source]
        source: opentelemetry_sdk::error::OTelSdkError,
    },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidInstrumentName {
    #[error("metric name cannot be empty")]
    Empty,
    #[error("metric name exceeds 255 characters")]
    TooLong,
    #[error("metric name must start with an ASCII letter")]
    InvalidFirstCharacter,
    #[error("metric name contains invalid characters")]
    InvalidCharacters,
}
