//! Splitting a [`ConversionRange`] into contiguous [`Chunk`]s.

use crate::{BatchSizePolicy, Chunk, ConversionRange};

/// In adaptive mode the range size is divided by this to get a chunk width.
pub const ADAPTIVE_DIVISOR: usize = 50;

/// Lower clamp for adaptive chunk width.
pub const MIN_ADAPTIVE_CHUNK: usize = 100;

/// Upper clamp for adaptive chunk width.
pub const MAX_ADAPTIVE_CHUNK: usize = 1000;

/// Resolves the chunk width for a range of `total` values.
///
/// Adaptive mode computes `clamp(total / 50, 100, 1000)`. This is a tuning
/// heuristic; correctness of the partition does not depend on it.
pub const fn chunk_size(total: usize, policy: BatchSizePolicy) -> usize {
    match policy {
        BatchSizePolicy::Fixed(size) => size.get(),
        BatchSizePolicy::Adaptive => {
            let derived = total / ADAPTIVE_DIVISOR;
            if derived < MIN_ADAPTIVE_CHUNK {
                MIN_ADAPTIVE_CHUNK
            } else if derived > MAX_ADAPTIVE_CHUNK {
                MAX_ADAPTIVE_CHUNK
            } else {
                derived
            }
        }
    }
}

/// Splits `range` into ordered, disjoint, jointly exhaustive chunks.
///
/// Chunk `i` covers `[min + i*S, min(min + (i+1)*S - 1, max)]` where `S` is
/// [`chunk_size`]; only the last chunk may be narrower than `S`. A single-value
/// range yields exactly one chunk.
pub fn partition(range: ConversionRange, policy: BatchSizePolicy) -> Vec<Chunk> {
    let total = range.len();
    let size = chunk_size(total, policy);
    let count = total.div_ceil(size);

    let min = usize::from(range.min());
    let max = usize::from(range.max());

    (0..count)
        .map(|index| {
            let start = min + index * size;
            let end = start.saturating_add(size - 1).min(max);
            Chunk::new(index, start as u16, end as u16)
        })
        .collect()
}
