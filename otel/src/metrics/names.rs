pub const DELIVERY_DELAY_METRIC: &str = "delivery.delay";
pub(crate) const DELIVERY_ID_TAG: &str = "delivery_id";
pub(crate) const ENV_TAG: &str = "env";
