mod client;
mod config;
mod error;
mod measurement;
pub mod names;
pub(crate) mod validation;

pub use crate::metrics::client::MetricsClient;
pub use crate::metrics::config::MetricsConfig;
pub use crate::metrics::config::MetricsExporter;
pub use crate::metrics::error::InvalidInstrumentName;
pub use crate::metrics::error::MetricsError;
pub use crate::metrics::error::Result;
pub use crate::metrics::measurement::Measurement;
pub use crate::metrics::measurement::Tag;
pub use crate::metrics::measurement::delivery_delay_payload;
