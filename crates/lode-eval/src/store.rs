//! Margin-tolerant Pareto frontier of evaluated patterns.

use std::fmt;

use lode_core::ConfigError;

use crate::statistics::Statistics;

/// A pattern paired with the statistics it scored.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedPattern<P> {
    /// The evaluated pattern.
    pub pattern: P,
    /// Its statistics over the reference pool.
    pub statistics: Statistics,
}

impl<P> EvaluatedPattern<P> {
    /// Pair `pattern` with `statistics`.
    pub fn new(pattern: P, statistics: Statistics) -> Self {
        Self { pattern, statistics }
    }
}

/// The best patterns found so far.
///
/// An entry is kept unless another one beats it on both efficiency and
/// thoroughness by more than the margin. Entries are held in insertion
/// order.
#[derive(Clone, Debug)]
pub struct PatternStore<P> {
    margin: f64,
    entries: Vec<EvaluatedPattern<P>>,
}

impl<P> PatternStore<P> {
    /// An empty store comparing with `margin` percentage points of slack.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::InvalidMargin)` if `margin` is negative,
    /// NaN or infinite.
    pub fn new(margin: f64) -> Result<Self, ConfigError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::InvalidMargin { value: margin });
        }
        Ok(Self {
            margin,
            entries: Vec::new(),
        })
    }

    /// The dominance margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Offer a pattern to the frontier.
    ///
    /// Rejected, leaving the store untouched, if a stored entry beats it.
    /// Otherwise every entry it beats is evicted and it is inserted.
    /// Returns whether it was inserted.
    pub fn add(&mut self, pattern: P, statistics: Statistics) -> bool {
        if self
            .entries
            .iter()
            .any(|e| e.statistics.is_better_than(&statistics, self.margin))
        {
            return false;
        }
        let before = self.entries.len();
        let margin = self.margin;
        self.entries
            .retain(|e| !statistics.is_better_than(&e.statistics, margin));
        tracing::debug!(
            %statistics,
            evicted = before - self.entries.len(),
            size = self.entries.len() + 1,
            "pattern store accepted candidate"
        );
        self.entries.push(EvaluatedPattern::new(pattern, statistics));
        true
    }

    /// Number of stored patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedPattern<P>> {
        self.entries.iter()
    }

    /// Consume the store, returning its entries.
    pub fn into_vec(self) -> Vec<EvaluatedPattern<P>> {
        self.entries
    }
}

impl<'a, P> IntoIterator for &'a PatternStore<P> {
    type Item = &'a EvaluatedPattern<P>;
    type IntoIter = std::slice::Iter<'a, EvaluatedPattern<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<P: fmt::Display> fmt::Display for PatternStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.entries.len() == 1 { "" } else { "s" };
        writeln!(f, "{} best pattern{plural}:", self.entries.len())?;
        for e in &self.entries {
            writeln!(f, "  [{}] {}", e.statistics, e.pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Statistics with the given efficiency and thoroughness, in whole
    /// percent.
    fn stats(efficiency: u64, thoroughness: u64) -> Statistics {
        Statistics::from_totals(1, 100, thoroughness, thoroughness * 100 / efficiency.max(1))
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn rejects_bad_margins() {
        assert!(PatternStore::<u8>::new(0.0).is_ok());
        for m in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PatternStore::<u8>::new(m),
                Err(ConfigError::InvalidMargin { .. })
            ));
        }
    }

    // ── Insertion ───────────────────────────────────────────────

    #[test]
    fn dominated_candidate_is_a_no_op() {
        let mut store = PatternStore::new(0.0).unwrap();
        assert!(store.add("strong", stats(50, 50)));
        assert!(!store.add("weak", stats(20, 20)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().pattern, "strong");
    }

    #[test]
    fn dominating_candidate_evicts() {
        let mut store = PatternStore::new(0.0).unwrap();
        store.add("a", stats(20, 40));
        store.add("b", stats(40, 20));
        assert_eq!(store.len(), 2);
        assert!(store.add("c", stats(50, 50)));
        let names: Vec<_> = store.iter().map(|e| e.pattern).collect();
        assert_eq!(names, ["c"]);
    }

    #[test]
    fn tradeoffs_coexist() {
        let mut store = PatternStore::new(0.0).unwrap();
        assert!(store.add("efficient", stats(80, 10)));
        assert!(store.add("thorough", stats(10, 80)));
        assert!(store.add("balanced", stats(40, 40)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn margin_keeps_near_ties() {
        let mut store = PatternStore::new(5.0).unwrap();
        store.add("a", stats(50, 50));
        assert!(store.add("b", stats(53, 53)));
        assert_eq!(store.len(), 2);
        assert!(!store.add("c", stats(40, 40)));
    }

    #[test]
    fn display_lists_entries() {
        let mut store = PatternStore::new(0.0).unwrap();
        store.add("p", Statistics::from_totals(1, 10, 5, 10));
        assert_eq!(store.to_string(), "1 best pattern:\n  [e=50.00% t=50.00%] p\n");
        assert_eq!(store.into_vec().len(), 1);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn frontier_never_holds_dominating_pairs(
            candidates in proptest::collection::vec((1u64..100, 0u64..100), 1..40),
            margin in 0.0f64..3.0,
        ) {
            let mut store = PatternStore::new(margin).unwrap();
            for (i, &(e, t)) in candidates.iter().enumerate() {
                let s = stats(e, t);
                let snapshot: Vec<_> = store.iter().map(|e| (e.pattern, e.statistics)).collect();
                let dominated = snapshot.iter().any(|(_, o)| o.is_better_than(&s, margin));
                let added = store.add(i, s);
                prop_assert_eq!(added, !dominated);
                if !added {
                    let now: Vec<_> = store.iter().map(|e| (e.pattern, e.statistics)).collect();
                    prop_assert_eq!(now, snapshot);
                }
            }
            let entries: Vec<_> = store.iter().collect();
            for a in &entries {
                for b in &entries {
                    prop_assert!(!a.statistics.is_better_than(&b.statistics, margin));
                }
            }
        }
    }
}
