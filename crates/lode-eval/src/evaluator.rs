//! Monte-Carlo evaluation against a fixed pool of ored samples.

use std::hash::Hasher;

use lode_core::ConfigError;
use lode_ore::OreGenerator;
use lode_sample::{DiggingPattern, FnvHasher, VoxelSample};

use crate::statistics::Statistics;

/// Reference pool parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Number of ored reference samples. Default: 50.
    pub sample_count: usize,
    /// Height of the sample's floor inside the generation unit. Default: 5.
    pub vertical_offset: i32,
    /// Base seed. Reference sample `i` is generated from `seed ^ i`.
    /// Default: 0.
    pub seed: u64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            sample_count: 50,
            vertical_offset: 5,
            seed: 0,
        }
    }
}

impl EvaluatorConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::ZeroSampleCount)` if `sample_count` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        Ok(())
    }
}

/// Scores patterns against the same ored samples.
///
/// The reference samples are generated once and never mutated; each
/// evaluation digs into its own copy. The evaluator is `Sync`, so worker
/// threads can share it by reference.
#[derive(Clone, Debug)]
pub struct PatternEvaluator {
    references: Vec<VoxelSample>,
    fingerprint: u64,
    total_ore: u64,
}

impl PatternEvaluator {
    /// Generate `config.sample_count` ored copies of `base`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`EvaluatorConfig::validate`].
    pub fn new<G: OreGenerator + ?Sized>(
        generator: &G,
        base: &VoxelSample,
        config: &EvaluatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let references: Vec<VoxelSample> = (0..config.sample_count as u64)
            .map(|i| generator.generate(base, config.vertical_offset, config.seed ^ i))
            .collect();
        let mut hasher = FnvHasher::default();
        for r in &references {
            hasher.write_u64(r.content_hash());
        }
        let total_ore = references.iter().map(|r| r.ore_count() as u64).sum();
        Ok(Self {
            references,
            fingerprint: hasher.finish(),
            total_ore,
        })
    }

    /// Dig `pattern` into a copy of every reference sample and accumulate
    /// the results.
    pub fn evaluate<P: DiggingPattern + ?Sized>(&self, pattern: &P) -> Statistics {
        let mut scratch = None;
        self.evaluate_into(pattern, &mut scratch)
    }

    /// Like [`evaluate`](Self::evaluate), digging into `scratch` instead of
    /// allocating a copy per sample. A `None` or mismatched scratch is
    /// replaced by a fresh copy.
    pub fn evaluate_into<P: DiggingPattern + ?Sized>(
        &self,
        pattern: &P,
        scratch: &mut Option<VoxelSample>,
    ) -> Statistics {
        let mut stats = Statistics::default();
        for reference in &self.references {
            if scratch.as_mut().map_or(true, |s| s.reset_to(reference).is_err()) {
                *scratch = None;
            }
            let sample = scratch.get_or_insert_with(|| reference.clone());
            let ore_before = sample.ore_count() as u64;
            pattern.dig(sample);
            let found = ore_before - sample.ore_count() as u64;
            stats.record(ore_before, found, sample.dug_count() as u64);
        }
        stats
    }

    /// The read-only reference samples.
    pub fn references(&self) -> &[VoxelSample] {
        &self.references
    }

    /// Number of reference samples.
    pub fn sample_count(&self) -> usize {
        self.references.len()
    }

    /// Ore in the whole pool.
    pub fn total_ore(&self) -> u64 {
        self.total_ore
    }

    /// FNV-1a digest of the pool contents, identifying it in logs.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}
