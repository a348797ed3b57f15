//! Chunked concurrent processing.
//!
//! Items are split into chunks that are processed on a dedicated rayon pool.
//! Results are returned in chunk order, whatever the completion order is.
use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::Error;

/// Split `items` into chunks of `len / count` items.
///
/// When `count` exceeds the number of items, the whole slice becomes a single chunk.
/// Remaining items form a trailing, shorter chunk (`[a, b, c, d, e]` in 2 gives `[[a, b], [c, d], [e]]`).
/// No chunk is ever empty, and an empty slice yields no chunk.
pub fn calculate_chunks<T>(items: &[T], count: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut size = items.len() / count.max(1);
    if size == 0 {
        warn!(
            "{} chunks requested for {} items, using a single chunk",
            count,
            items.len()
        );
        size = items.len();
    }

    items.chunks(size).collect()
}

/// Runs a function over chunks of items on a fixed-size worker pool.
#[derive(Debug, Clone, Copy)]
pub struct ChunkProcessor {
    workers: usize,
    chunks: usize,
}

impl Default for ChunkProcessor {
    fn default() -> Self {
        Self {
            workers: 5,
            chunks: 100,
        }
    }
}

impl ChunkProcessor {
    /// `workers` is clamped to at least 1.
    pub fn new(workers: usize, chunks: usize) -> Self {
        Self {
            workers: workers.max(1),
            chunks,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Process `items` by chunks, returning one result per chunk, in chunk order.
    ///
    /// `f` gets the chunk index and the chunk.
    /// A failing chunk aborts the remaining ones, and is reported as [Error::ChunkFailed].
    pub fn process<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, Error>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &[T]) -> Result<R, Error> + Sync,
    {
        let chunks = calculate_chunks(items, self.chunks);
        debug!(
            "processing {} items in {} chunks on {} workers",
            items.len(),
            chunks.len(),
            self.workers
        );

        let pool = ThreadPoolBuilder::new().num_threads(self.workers).build()?;
        pool.install(|| {
            chunks
                .par_iter()
                .enumerate()
                .map(|(idx, chunk)| {
                    f(idx, chunk).map_err(|e| Error::ChunkFailed {
                        chunk: idx,
                        source: Box::new(e),
                    })
                })
                .collect()
        })
    }

    /// Same as [ChunkProcessor::process], with the chunk results concatenated.
    pub fn process_flat<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, Error>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &[T]) -> Result<Vec<R>, Error> + Sync,
    {
        Ok(self.process(items, f)?.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn remainder_chunk() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        let chunks = calculate_chunks(&items, 2);
        assert_eq!(chunks, vec![&['a', 'b'][..], &['c', 'd'][..], &['e'][..]]);
    }

    #[test]
    fn more_chunks_than_items() {
        let items = ['a', 'b'];
        let chunks = calculate_chunks(&items, 3);
        assert_eq!(chunks, vec![&['a', 'b'][..]]);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn zero_chunks() {
        let items = [1, 2, 3];
        assert_eq!(calculate_chunks(&items, 0), vec![&[1, 2, 3][..]]);
    }

    #[test]
    fn no_items() {
        let items: [u8; 0] = [];
        assert!(calculate_chunks(&items, 4).is_empty());
    }

    #[test]
    fn chunks_cover_items() {
        let items: Vec<usize> = (0..103).collect();
        let chunks = calculate_chunks(&items, 10);
        assert!(chunks.iter().all(|c| !c.is_empty()));
        let flat: Vec<usize> = chunks.into_iter().flatten().copied().collect();
        assert_eq!(flat, items);
    }

    #[test]
    fn order_is_preserved() {
        let items: Vec<u64> = (0..50).collect();
        let cp = ChunkProcessor::new(4, 10);
        let res = cp
            .process(&items, |idx, chunk| {
                // make early chunks finish last
                thread::sleep(Duration::from_millis(10 * (10 - idx as u64).min(10)));
                Ok(chunk.iter().sum::<u64>())
            })
            .unwrap();
        let expected: Vec<u64> = items.chunks(5).map(|c| c.iter().sum()).collect();
        assert_eq!(res, expected);
    }

    #[test]
    fn flat_results() {
        let items: Vec<u32> = (0..7).collect();
        let cp = ChunkProcessor::new(3, 3);
        let res = cp
            .process_flat(&items, |_, chunk| Ok(chunk.iter().map(|x| x * 2).collect()))
            .unwrap();
        assert_eq!(res, vec![0, 2, 4, 6, 8, 10, 12]);
    }

    #[test]
    fn bounded_workers() {
        let running = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let items: Vec<u8> = vec![0; 40];
        let cp = ChunkProcessor::new(2, 20);
        cp.process(&items, |_, _| {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(5));
            running.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[test]
    fn failing_chunk() {
        let items: Vec<u8> = (0..10).collect();
        let cp = ChunkProcessor::new(2, 5);
        let res = cp.process(&items, |idx, _| {
            if idx == 3 {
                Err(Error::Custom("boom".to_string()))
            } else {
                Ok(idx)
            }
        });
        match res {
            Err(Error::ChunkFailed { chunk, source }) => {
                assert_eq!(chunk, 3);
                assert!(matches!(*source, Error::Custom(_)));
            }
            other => panic!("expected a chunk failure, got {:?}", other),
        }
    }

    #[test]
    fn empty_input() {
        let items: Vec<u8> = Vec::new();
        let res = ChunkProcessor::default()
            .process(&items, |_, c| Ok(c.len()))
            .unwrap();
        assert!(res.is_empty());
    }
}
