use crate::{ConversionRange, Error, MAX_VALUE, MIN_VALUE, Result};

/// Checks a requested range against the encodable domain.
///
/// The ordering check runs first, so `validate(5, 1)` reports
/// [`Error::InvalidRange`] even though both bounds are in the domain, and
/// `validate(5000, 0)` reports [`Error::InvalidRange`] even though neither is.
/// A single value is validated as `validate(n, n)`.
///
/// # Errors
///
/// - [`Error::InvalidRange`] if `min > max`.
/// - [`Error::OutOfRange`] if `min < 1` or `max > 3999`.
pub fn validate(min: i32, max: i32) -> Result<ConversionRange> {
    if min > max {
        #[cfg(feature = "tracing")]
        tracing::warn!("Invalid range: min ({min}) is greater than max ({max})");
        return Err(Error::InvalidRange { min, max });
    }

    if min < i32::from(MIN_VALUE) || max > i32::from(MAX_VALUE) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Out of range: min={min}, max={max}");
        return Err(Error::OutOfRange { min, max });
    }

    Ok(ConversionRange::new_unchecked(min as u16, max as u16))
}
