//! Counters and timings of an optimizer run.

use lode_search::SearchMetrics;

/// What a [`Optimizer::run`](crate::Optimizer::run) did and how long it
/// took.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Worker threads used for evaluation (1 = calling thread only).
    pub workers: usize,
    /// Time spent generating the reference pool, in microseconds.
    pub pool_us: u64,
    /// Time spent searching and evaluating, in microseconds.
    pub search_us: u64,
    /// Patterns evaluated and offered to the store.
    pub patterns_evaluated: u64,
    /// Offers the store accepted.
    pub store_insertions: u64,
    /// Work done by the pattern search.
    pub search: SearchMetrics,
}

impl RunMetrics {
    /// Evaluated patterns per second over the search phase.
    pub fn patterns_per_second(&self) -> f64 {
        if self.search_us == 0 {
            return 0.0;
        }
        self.patterns_evaluated as f64 * 1_000_000.0 / self.search_us as f64
    }
}
