//! Data model shared by every stage of the conversion pipeline.
//!
//! All values here are immutable once built. A [`ConversionRange`] can only be
//! obtained through [`validate`](crate::validate), so holding one proves the
//! bounds are ordered and inside [`MIN_VALUE`]..=[`MAX_VALUE`].

use core::num::NonZeroUsize;
use core::ops::RangeInclusive;

/// Smallest encodable value.
pub const MIN_VALUE: u16 = 1;

/// Largest encodable value.
pub const MAX_VALUE: u16 = 3999;

/// A single encoded integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub input: u16,
    pub output: String,
}

impl Conversion {
    pub const fn new(input: u16, output: String) -> Self {
        Self { input, output }
    }
}

/// A validated, inclusive range of values to convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionRange {
    min: u16,
    max: u16,
}

impl ConversionRange {
    /// Callers must uphold `MIN_VALUE <= min <= max <= MAX_VALUE`.
    pub(crate) const fn new_unchecked(min: u16, max: u16) -> Self {
        debug_assert!(min >= MIN_VALUE && min <= max && max <= MAX_VALUE);
        Self { min, max }
    }

    pub const fn min(&self) -> u16 {
        self.min
    }

    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Number of values covered, `max - min + 1`. Never zero.
    pub const fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn values(&self) -> RangeInclusive<u16> {
        self.min..=self.max
    }
}

/// A contiguous slice of a [`ConversionRange`]; the unit of concurrent work.
///
/// Chunks produced by [`partition`](crate::partition) are ordered so that
/// ascending `index` is also ascending `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    start: u16,
    end: u16,
}

impl Chunk {
    pub(crate) const fn new(index: usize, start: u16, end: u16) -> Self {
        debug_assert!(start <= end);
        Self { index, start, end }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn start(&self) -> u16 {
        self.start
    }

    pub const fn end(&self) -> u16 {
        self.end
    }

    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn values(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

/// How wide each [`Chunk`] should be.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchSizePolicy {
    /// Every chunk but possibly the last holds exactly this many values.
    Fixed(NonZeroUsize),
    /// Chunk width is derived from the range size.
    #[default]
    Adaptive,
}

impl BatchSizePolicy {
    /// Builds a policy from a configured batch size, where `0` selects
    /// [`BatchSizePolicy::Adaptive`].
    pub const fn from_configured(batch_size: usize) -> Self {
        match NonZeroUsize::new(batch_size) {
            Some(size) => Self::Fixed(size),
            None => Self::Adaptive,
        }
    }
}

/// The ordered output of a range conversion.
///
/// Entries are strictly ascending by `input` with no gaps or duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversions {
    conversions: Vec<Conversion>,
}

impl Conversions {
    pub(crate) const fn from_ordered(conversions: Vec<Conversion>) -> Self {
        Self { conversions }
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    pub fn as_slice(&self) -> &[Conversion] {
        &self.conversions
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Conversion> {
        self.conversions.iter()
    }

    pub fn into_vec(self) -> Vec<Conversion> {
        self.conversions
    }
}

impl IntoIterator for Conversions {
    type Item = Conversion;
    type IntoIter = std::vec::IntoIter<Conversion>;

    fn into_iter(self) -> Self::IntoIter {
        self.conversions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Conversions {
    type Item = &'a Conversion;
    type IntoIter = core::slice::Iter<'a, Conversion>;

    fn into_iter(self) -> Self::IntoIter {
        self.conversions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_batch_size_selects_adaptive() {
        assert_eq!(BatchSizePolicy::from_configured(0), BatchSizePolicy::Adaptive);
        assert_eq!(
            BatchSizePolicy::from_configured(250),
            BatchSizePolicy::Fixed(NonZeroUsize::new(250).unwrap())
        );
        assert_eq!(BatchSizePolicy::default(), BatchSizePolicy::Adaptive);
    }

    #[test]
    fn range_len_is_inclusive() {
        assert_eq!(ConversionRange::new_unchecked(6, 6).len(), 1);
        assert_eq!(ConversionRange::new_unchecked(1, 3999).len(), 3999);
        assert_eq!(Chunk::new(0, 10, 19).len(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_field_names() {
        let conversions = Conversions::from_ordered(vec![
            Conversion::new(1, "I".to_string()),
            Conversion::new(2, "II".to_string()),
        ]);
        let json = serde_json::to_value(&conversions).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "conversions": [
                    { "input": 1, "output": "I" },
                    { "input": 2, "output": "II" },
                ]
            })
        );
    }
}
