use crate::metrics::error::InvalidInstrumentName;
use crate::metrics::error::MetricsError;
use crate::metrics::error::Result;

pub(crate) const MAX_INSTRUMENT_NAME_LEN: usize = 255;

/// Check `name` against the OpenTelemetry instrument name syntax.
///
/// The SDK does not fail instrument creation on a bad name; it logs and hands
/// back a no-op instrument. Rejecting up front keeps such points from being
/// dropped silently.
pub(crate) fn validate_metric_name(name: &str) -> Result<()> {
    check_instrument_name(name).map_err(|reason| MetricsError::InstrumentInit {
        name: name.to_string(),
        reason,
    })
}

fn check_instrument_name(name: &str) -> std::result::Result<(), InvalidInstrumentName> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(InvalidInstrumentName::Empty);
    };
    if name.len() > MAX_INSTRUMENT_NAME_LEN {
        return Err(InvalidInstrumentName::TooLong);
    }
    if !first.is_ascii_alphabetic() {
        return Err(InvalidInstrumentName::InvalidFirstCharacter);
    }
    if !chars.all(is_metric_char) {
        return Err(InvalidInstrumentName::InvalidCharacters);
    }
    Ok(())
}

fn is_metric_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/')
}
