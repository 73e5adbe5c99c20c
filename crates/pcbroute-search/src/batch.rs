//! Execution policy for the pure batch evaluators.
//!
//! Both evaluators are element-wise maps from an input slice to an output
//! vector of the same length, with no shared accumulator. That makes the
//! sequential and the data-parallel paths produce bit-identical output; the
//! policy only decides who does the work.

use rayon::prelude::*;

/// Batches shorter than this run on the calling thread under
/// [`Execution::Adaptive`]'s default.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 1024;

/// How a batch evaluation is carried out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Execution {
    /// Evaluate on the calling thread.
    Sequential,
    /// Evaluate on the rayon thread pool regardless of batch size.
    Parallel,
    /// Sequential below `min_parallel_len` elements, parallel at or above.
    Adaptive { min_parallel_len: usize },
}

impl Default for Execution {
    fn default() -> Self {
        Self::Adaptive {
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl Execution {
    /// Whether a batch of `len` elements would be dispatched to the pool.
    #[inline]
    pub fn is_parallel_for(self, len: usize) -> bool {
        match self {
            Self::Sequential => false,
            Self::Parallel => true,
            Self::Adaptive { min_parallel_len } => len >= min_parallel_len,
        }
    }

    /// Apply `f` to every element of `items`, preserving order.
    ///
    /// An empty input returns an empty vector without touching `f` or the
    /// thread pool. The call returns only once every element has been
    /// evaluated.
    pub fn map<T, R, F>(self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if items.is_empty() {
            return Vec::new();
        }
        let out: Vec<R> = if self.is_parallel_for(items.len()) {
            items.par_iter().map(&f).collect()
        } else {
            items.iter().map(&f).collect()
        };
        assert_eq!(
            out.len(),
            items.len(),
            "batch evaluation produced {} results for {} inputs",
            out.len(),
            items.len()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_batch_dispatches_nothing() {
        let calls = AtomicUsize::new(0);
        for exec in [Execution::Sequential, Execution::Parallel, Execution::default()] {
            let out: Vec<i32> = exec.map(&[] as &[i32], |v| {
                calls.fetch_add(1, Ordering::Relaxed);
                *v
            });
            assert!(out.is_empty());
        }
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn every_policy_preserves_order() {
        let input: Vec<u64> = (0..5000).collect();
        let seq = Execution::Sequential.map(&input, |v| v * 3 + 1);
        let par = Execution::Parallel.map(&input, |v| v * 3 + 1);
        let ada = Execution::Adaptive {
            min_parallel_len: 100,
        }
        .map(&input, |v| v * 3 + 1);
        assert_eq!(seq, par);
        assert_eq!(seq, ada);
        assert_eq!(seq[4999], 4999 * 3 + 1);
    }

    #[test]
    fn adaptive_threshold() {
        let exec = Execution::Adaptive {
            min_parallel_len: 10,
        };
        assert!(!exec.is_parallel_for(9));
        assert!(exec.is_parallel_for(10));
        assert!(!Execution::Sequential.is_parallel_for(usize::MAX));
        assert!(Execution::Parallel.is_parallel_for(1));
    }
}
