//! Benchmark profiles for the Lode mining-pattern optimizer.
//!
//! - [`reference_evaluator`]: the default 16×5×16 sample with a classic
//!   ore pool
//! - [`reference_search`]: a search over the same sample from its centered
//!   access
//! - [`ored_sample`]: one classic ored sample for sample-level benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lode_core::Dimensions;
use lode_eval::{EvaluatorConfig, PatternEvaluator};
use lode_ore::{OreGenerator, VeinGenerator};
use lode_sample::VoxelSample;
use lode_search::{DigRange, GenerationConstraints, PatternSearch};

/// Vertical offset used by every profile.
pub const VERTICAL_OFFSET: i32 = 5;

/// A classic reference pool of `sample_count` samples of
/// [`Dimensions::DEFAULT_SAMPLE`].
///
/// # Panics
///
/// If `sample_count` is 0.
pub fn reference_evaluator(sample_count: usize, seed: u64) -> PatternEvaluator {
    let config = EvaluatorConfig {
        sample_count,
        vertical_offset: VERTICAL_OFFSET,
        seed,
    };
    let base = VoxelSample::new(Dimensions::DEFAULT_SAMPLE);
    PatternEvaluator::new(&VeinGenerator::classic(), &base, &config)
        .unwrap_or_else(|e| panic!("invalid benchmark pool: {e}"))
}

/// A strict-range search over [`Dimensions::DEFAULT_SAMPLE`] limited to
/// `max_actions` actions and `max_dug_blocks` dug blocks.
///
/// # Panics
///
/// If either limit is 0.
pub fn reference_search(max_actions: usize, max_dug_blocks: usize) -> PatternSearch {
    GenerationConstraints::new(max_actions, max_dug_blocks)
        .and_then(|c| PatternSearch::centered(Dimensions::DEFAULT_SAMPLE, c, DigRange::Strict))
        .unwrap_or_else(|e| panic!("invalid benchmark search: {e}"))
}

/// One classic ored sample of [`Dimensions::DEFAULT_SAMPLE`].
pub fn ored_sample(seed: u64) -> VoxelSample {
    let base = VoxelSample::new(Dimensions::DEFAULT_SAMPLE);
    VeinGenerator::classic().generate(&base, VERTICAL_OFFSET, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_usable() {
        let eval = reference_evaluator(2, 7);
        assert_eq!(eval.sample_count(), 2);
        assert!(eval.total_ore() > 0);
        assert!(reference_search(1, 4).count() > 1);
        assert_eq!(ored_sample(3), ored_sample(3));
    }
}
