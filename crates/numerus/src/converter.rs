//! Entry points used by request-handling layers.
//!
//! [`RomanConverter`] wires the pipeline together: validation, then either a
//! direct encode for a single value or partition and dispatch for a range.

#[cfg(feature = "tracing")]
use crate::chunk_size;
use crate::{BatchSizePolicy, Conversion, Conversions, Result, dispatch, encode, partition, validate};

/// Converts integers in `1..=3999` to Roman numerals.
///
/// Cheap to clone; holds only the chunk sizing policy. Each range conversion
/// builds and tears down its own set of chunk tasks.
#[derive(Clone, Copy, Debug, Default)]
pub struct RomanConverter {
    policy: BatchSizePolicy,
}

impl RomanConverter {
    pub const fn new(policy: BatchSizePolicy) -> Self {
        Self { policy }
    }

    /// Builds a converter from a configured batch size; `0` selects adaptive
    /// chunk sizing.
    pub const fn with_batch_size(batch_size: usize) -> Self {
        Self::new(BatchSizePolicy::from_configured(batch_size))
    }

    pub const fn policy(&self) -> BatchSizePolicy {
        self.policy
    }

    /// Converts a single value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `number` is
    /// outside `1..=3999`.
    pub fn convert_one(&self, number: i32) -> Result<Conversion> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Converting single number: {number}");

        let range = validate(number, number)?;
        let value = range.min();
        let numeral = encode(value);

        #[cfg(feature = "tracing")]
        tracing::info!("Converted {value} to {numeral}");

        Ok(Conversion::new(value, numeral))
    }

    /// Converts every value in `min..=max`, returning them in ascending order.
    ///
    /// The range is split into chunks which are encoded concurrently on the
    /// current tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`](crate::Error::InvalidRange) if `min > max`.
    /// - [`Error::OutOfRange`](crate::Error::OutOfRange) if a bound is outside
    ///   `1..=3999`.
    /// - [`Error::Dispatch`](crate::Error::Dispatch) if a chunk task fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn convert_range(&self, min: i32, max: i32) -> Result<Conversions> {
        let range = validate(min, max)?;
        let chunks = partition(range, self.policy);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Using {} batches, with batch size of {} for {} numbers",
            chunks.len(),
            chunk_size(range.len(), self.policy),
            range.len()
        );

        dispatch::run(chunks, encode).await
    }
}
