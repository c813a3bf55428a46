//! Optimizer configuration.

use lode_core::{ConfigError, Dimensions};
use lode_eval::EvaluatorConfig;
use lode_search::{DigRange, GenerationConstraints};

/// Everything an [`Optimizer`](crate::Optimizer) run depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerConfig {
    /// Size of the searched and evaluated sample. Default: 16×5×16.
    pub sample_dims: Dimensions,
    /// Reference pool. Default: 50 samples, vertical offset 5, seed 0.
    pub evaluator: EvaluatorConfig,
    /// Search limits. Default: 40 actions, 20 dug blocks.
    pub constraints: GenerationConstraints,
    /// How far the player reaches. Default: [`DigRange::Strict`].
    pub dig_range: DigRange,
    /// Dominance slack, in percentage points. Default: 0.001.
    pub margin: f64,
    /// Evaluation worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Log progress every this many evaluated patterns. Default: 10 000.
    pub progress_interval: u64,
    /// Stop after this many evaluated patterns. Default: `None`, run the
    /// search to exhaustion.
    pub pattern_limit: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            sample_dims: Dimensions::DEFAULT_SAMPLE,
            evaluator: EvaluatorConfig::default(),
            constraints: GenerationConstraints::default(),
            dig_range: DigRange::Strict,
            margin: 0.001,
            worker_count: None,
            progress_interval: 10_000,
            pattern_limit: None,
        }
    }
}

impl OptimizerConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: the evaluator's
    /// [`validate`](EvaluatorConfig::validate) error,
    /// `ConfigError::InvalidMargin` or `ConfigError::ZeroProgressInterval`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.evaluator.validate()?;
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidMargin { value: self.margin });
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::ZeroProgressInterval);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. One worker evaluates on
    /// the calling thread.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(2);
                (cpus / 2).clamp(1, 16)
            }
        }
    }
}
