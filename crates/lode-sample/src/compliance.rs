//! Sample invariant checks shared by the test modules of this crate.

use crate::sample::VoxelSample;
use crate::wrapping::Wrapping;
use indexmap::IndexSet;

/// Assert that the incremental ore/dug counters match a full re-scan.
pub fn assert_counters_consistent(sample: &VoxelSample) {
    let (ore, dug) = sample.scan_counts();
    assert_eq!(
        (sample.ore_count(), sample.dug_count()),
        (ore, dug),
        "incremental counters (ore, dug) diverged from a full scan"
    );
}

/// Assert that `b in adjacent(a)` implies `a in adjacent(b)`.
pub fn assert_adjacency_symmetric(sample: &VoxelSample, wrapping: Wrapping) {
    for p in sample.dimensions().positions() {
        for n in sample.adjacent(p, wrapping) {
            assert!(
                sample.adjacent(n, wrapping).contains(&p),
                "adjacency asymmetric under {wrapping:?}: {n} in N({p}) but not the reverse"
            );
        }
    }
}

/// Assert that neighbor lists never repeat a position or contain the
/// queried position itself.
pub fn assert_adjacency_unique(sample: &VoxelSample, wrapping: Wrapping) {
    for p in sample.dimensions().positions() {
        let adj = sample.adjacent(p, wrapping);
        let unique: IndexSet<_> = adj.iter().copied().collect();
        assert_eq!(unique.len(), adj.len(), "duplicate neighbors of {p} under {wrapping:?}");
        assert!(!unique.contains(&p), "{p} listed as its own neighbor under {wrapping:?}");
    }
}

/// Assert that no undug block carries an accessibility flag.
pub fn assert_no_solid_accessible(sample: &VoxelSample) {
    for (p, b) in sample.iter() {
        assert!(
            b.is_dug() || !(b.head_accessible || b.feet_accessible),
            "solid block {p} ({}) marked accessible",
            b.kind
        );
    }
}
