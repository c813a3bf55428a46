//! Breadth-first pattern enumeration.

use std::collections::{HashSet, VecDeque};

use lode_core::{Access, ConfigError, Dimensions};
use lode_sample::{FnvBuildHasher, VoxelSample};

use crate::action::ActionSet;
use crate::constraints::GenerationConstraints;
use crate::pattern::GeneratedPattern;
use crate::range::DigRange;
use crate::state::{DiggingState, StateKey};

/// Counters describing the work done by a [`PatternSearch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// States taken off the queue.
    pub states_dequeued: u64,
    /// Dequeued states that produced at least one successor.
    pub states_expanded: u64,
    /// Successors dropped because an equal state was already queued.
    pub duplicates_pruned: u64,
    /// Canonical states returned as patterns.
    pub patterns_yielded: u64,
}

/// Lazily enumerates every pattern reachable from a set of accesses.
///
/// States are explored breadth first. A successor is queued only if no
/// equal state (same dug blocks, same heads) was queued before, so action
/// orderings that commute are explored once. Only canonical states are
/// yielded. The iterator ends when the queue empties, which the
/// [`GenerationConstraints`] guarantee happens.
///
/// ```
/// use lode_core::Dimensions;
/// use lode_search::{DigRange, GenerationConstraints, PatternSearch};
///
/// let constraints = GenerationConstraints::new(1, 10).unwrap();
/// let dims = Dimensions::new(6, 5, 6).unwrap();
/// let search = PatternSearch::centered(dims, constraints, DigRange::Strict).unwrap();
/// // The initial state plus one pattern per first dig.
/// assert!(search.count() > 1);
/// ```
pub struct PatternSearch {
    actions: ActionSet,
    constraints: GenerationConstraints,
    queue: VecDeque<DiggingState>,
    seen: HashSet<StateKey, FnvBuildHasher>,
    metrics: SearchMetrics,
    done: bool,
}

impl PatternSearch {
    /// Search from `accesses` opened in a copy of `base`.
    ///
    /// If opening the accesses already exceeds `max_dug_blocks`, the
    /// search yields nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::NoAccesses)` for an empty access list and
    /// `Err(ConfigError::AccessOutOfBounds)` if an access does not fit in
    /// `base`.
    pub fn new(
        base: &VoxelSample,
        accesses: &[Access],
        constraints: GenerationConstraints,
        range: DigRange,
    ) -> Result<Self, ConfigError> {
        if accesses.is_empty() {
            return Err(ConfigError::NoAccesses);
        }
        if let Some(access) = accesses
            .iter()
            .find(|a| !a.blocks().iter().all(|&p| base.contains(p)))
        {
            return Err(ConfigError::AccessOutOfBounds {
                access: access.to_string(),
                dimensions: base.dimensions().to_string(),
            });
        }

        let initial = DiggingState::initial(base, accesses);
        let mut queue = VecDeque::new();
        let mut seen = HashSet::default();
        if initial.sample().dug_count() <= constraints.max_dug_blocks() {
            seen.insert(initial.key());
            queue.push_back(initial);
        }
        Ok(Self {
            actions: ActionSet::new(range),
            constraints,
            queue,
            seen,
            metrics: SearchMetrics::default(),
            done: false,
        })
    }

    /// Search a stone sample of `dims` from a single access centered on
    /// its `z = 0` face.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::AccessOutOfBounds)` if the sample is too
    /// small to hold a player.
    pub fn centered(
        dims: Dimensions,
        constraints: GenerationConstraints,
        range: DigRange,
    ) -> Result<Self, ConfigError> {
        let access = Access::new(dims.width() as i32 / 2, dims.height() as i32 / 2);
        Self::new(&VoxelSample::new(dims), &[access], constraints, range)
    }

    /// Work done so far.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// States waiting to be explored.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn enqueue_successors(&mut self, state: &DiggingState) {
        let successors = state.expand(&self.actions, &self.constraints);
        if !successors.is_empty() {
            self.metrics.states_expanded += 1;
        }
        for next in successors {
            if self.seen.insert(next.key()) {
                self.queue.push_back(next);
            } else {
                self.metrics.duplicates_pruned += 1;
            }
        }
    }
}

impl Iterator for PatternSearch {
    type Item = GeneratedPattern;

    fn next(&mut self) -> Option<GeneratedPattern> {
        while let Some(state) = self.queue.pop_front() {
            self.metrics.states_dequeued += 1;
            self.enqueue_successors(&state);
            if state.is_canonical() {
                self.metrics.patterns_yielded += 1;
                return Some(state.to_pattern());
            }
        }
        if !self.done {
            self.done = true;
            tracing::debug!(
                dequeued = self.metrics.states_dequeued,
                expanded = self.metrics.states_expanded,
                pruned = self.metrics.duplicates_pruned,
                yielded = self.metrics.patterns_yielded,
                "pattern search exhausted"
            );
        }
        None
    }
}
