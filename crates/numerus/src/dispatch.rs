//! Concurrent fan-out of chunk encoding and ordered fan-in of the results.
//!
//! Every call to [`run`] owns the tasks it spawns. They are joined before
//! `run` returns, and if the `run` future is dropped early (for example by a
//! caller-side timeout) every outstanding chunk task is aborted. No pool state
//! outlives a single call.
//!
//! Tasks share nothing but the encode function, which must be `Sync`. Results
//! are reassembled by chunk index, never by completion order, so output is
//! deterministic however the scheduler interleaves the tasks.

use crate::{Chunk, Conversion, Conversions, Error, Result};
use futures::future::join_all;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::task::AbortOnDropHandle;

/// Encodes every chunk concurrently and concatenates the results in chunk
/// order.
///
/// `chunks` must be ordered, contiguous and non-overlapping, as produced by
/// [`partition`](crate::partition). Blocks the calling task until every chunk
/// task has settled.
///
/// # Errors
///
/// Returns [`Error::Dispatch`] if no tokio runtime is available to spawn onto,
/// or if any chunk task panics or is cancelled. The error is only reported
/// after all other tasks have settled, and no partial result is returned.
pub async fn run<F>(chunks: Vec<Chunk>, encode: F) -> Result<Conversions>
where
    F: Fn(u16) -> String + Send + Sync + 'static,
{
    let runtime = Handle::try_current().map_err(|e| Error::Dispatch {
        context: format!("No runtime available for chunk tasks: {e}"),
    })?;

    let total: usize = chunks.iter().map(Chunk::len).sum();
    let encode = Arc::new(encode);

    let tasks: Vec<_> = chunks
        .into_iter()
        .map(|chunk| {
            let encode = Arc::clone(&encode);
            AbortOnDropHandle::new(runtime.spawn(async move { process_chunk(chunk, &*encode) }))
        })
        .collect();

    // `join_all` yields outputs in submission order, i.e. chunk index order.
    let settled = join_all(tasks).await;

    let mut conversions = Vec::with_capacity(total);
    for (index, outcome) in settled.into_iter().enumerate() {
        match outcome {
            Ok(batch) => conversions.extend(batch),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Chunk {index} failed: {e}");
                return Err(Error::Dispatch {
                    context: format!("Chunk {index} failed: {e}"),
                });
            }
        }
    }

    Ok(Conversions::from_ordered(conversions))
}

/// Encodes one chunk left to right, so the batch is ascending by input.
fn process_chunk<F>(chunk: Chunk, encode: &F) -> Vec<Conversion>
where
    F: Fn(u16) -> String,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Processing batch {} from {} to {}",
        chunk.index(),
        chunk.start(),
        chunk.end()
    );

    chunk
        .values()
        .map(|n| Conversion::new(n, encode(n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BatchSizePolicy, encode, partition, validate};
    use core::num::NonZeroUsize;
    use core::time::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn assert_ascending(conversions: &Conversions, min: u16, max: u16) {
        assert_eq!(conversions.len(), usize::from(max - min) + 1);
        for (expected, conversion) in (min..=max).zip(conversions) {
            assert_eq!(conversion.input, expected);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn reassembles_in_index_order() {
        let range = validate(1, 3999).unwrap();
        let policy = BatchSizePolicy::Fixed(NonZeroUsize::new(37).unwrap());
        let result = run(partition(range, policy), encode).await.unwrap();

        assert_ascending(&result, 1, 3999);
        assert_eq!(result.as_slice()[0], Conversion::new(1, "I".to_string()));
        assert_eq!(
            result.as_slice()[3998],
            Conversion::new(3999, "MMMCMXCIX".to_string())
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn completion_order_does_not_affect_output() {
        // Earlier chunks finish last: lower values sleep longer.
        let slow_encode = |n: u16| {
            if n % 100 == 1 {
                std::thread::sleep(Duration::from_millis(u64::from(40 - n / 100)));
            }
            encode(n)
        };
        let range = validate(1, 3999).unwrap();
        let chunks = partition(range, BatchSizePolicy::Adaptive);
        let result = run(chunks, slow_encode).await.unwrap();

        assert_ascending(&result, 1, 3999);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn task_failure_fails_the_whole_run() {
        let range = validate(1, 1000).unwrap();
        let chunks = partition(range, BatchSizePolicy::Adaptive);
        let failing = |n: u16| {
            if n == 537 {
                panic!("encoder blew up");
            }
            encode(n)
        };

        let err = run(chunks, failing).await.unwrap_err();
        assert!(matches!(err, Error::Dispatch { .. }));
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("Chunk 5"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn all_tasks_settle_before_failure_is_reported() {
        let encoded = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&encoded);
        let failing = move |n: u16| {
            if n == 1 {
                panic!("first chunk fails fast");
            }
            counter.fetch_add(1, Ordering::Relaxed);
            encode(n)
        };

        let range = validate(1, 3999).unwrap();
        let chunks = partition(range, BatchSizePolicy::Adaptive);
        assert!(run(chunks, failing).await.is_err());

        // Every value outside the failed first chunk was still encoded.
        assert_eq!(encoded.load(Ordering::Relaxed), 3999 - 100);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn dropping_the_run_aborts_outstanding_chunks() {
        let encoded = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&encoded);
        let slow_encode = move |n: u16| {
            std::thread::sleep(Duration::from_millis(2));
            counter.fetch_add(1, Ordering::Relaxed);
            encode(n)
        };

        let range = validate(1, 3999).unwrap();
        let policy = BatchSizePolicy::Fixed(NonZeroUsize::new(1).unwrap());
        let chunks = partition(range, policy);
        let outcome = tokio::time::timeout(Duration::from_millis(20), run(chunks, slow_encode)).await;
        assert!(outcome.is_err());

        let at_drop = encoded.load(Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let settled = encoded.load(Ordering::Relaxed);

        // Only chunks already running on a worker may finish; none start.
        assert!(settled - at_drop <= 2, "{at_drop} -> {settled}");
        assert!(settled < 3999);
    }

    #[test]
    fn missing_runtime_is_an_infrastructure_error() {
        let range = validate(1, 10).unwrap();
        let chunks = partition(range, BatchSizePolicy::Adaptive);

        let err = futures::executor::block_on(run(chunks, encode)).unwrap_err();
        assert!(matches!(err, Error::Dispatch { .. }));
    }
}
