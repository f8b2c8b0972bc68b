//! Sorted collection helpers, mostly for deterministic test output.
//!
//! Parallel execution and hash-based grouping do not promise an output
//! order, so tests and final sinks that want stable output can collect
//! through these instead of sorting by hand.

use crate::{Element, PCollection};
use anyhow::Result;

impl<T: Element + Ord> PCollection<T> {
    /// Collect sequentially, then sort.
    pub fn collect_seq_sorted(self) -> Result<Vec<T>> {
        let mut v = self.collect_seq()?;
        v.sort();
        Ok(v)
    }

    /// Collect in parallel, then sort.
    pub fn collect_par_sorted(
        self,
        threads: Option<usize>,
        partitions: Option<usize>,
    ) -> Result<Vec<T>> {
        let mut v = self.collect_par(threads, partitions)?;
        v.sort();
        Ok(v)
    }
}

impl<K: Element + Ord, V: Element> PCollection<(K, V)> {
    /// Collect `(K, V)` pairs in parallel and sort by key only.
    ///
    /// Values are left untouched; only key order is enforced.
    pub fn collect_par_sorted_by_key(
        self,
        threads: Option<usize>,
        partitions: Option<usize>,
    ) -> Result<Vec<(K, V)>> {
        let mut v = self.collect_par(threads, partitions)?;
        v.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(v)
    }

    /// Collect `(K, V)` pairs sequentially and sort by key only.
    pub fn collect_seq_sorted_by_key(self) -> Result<Vec<(K, V)>> {
        let mut v = self.collect_seq()?;
        v.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(v)
    }
}
