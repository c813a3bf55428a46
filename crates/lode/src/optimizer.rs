//! The search → evaluate → rank driver.

use std::ops::ControlFlow;
use std::time::Instant;

use lode_core::ConfigError;
use lode_eval::{evaluate_all, EvaluatedPattern, PatternEvaluator, PatternStore};
use lode_ore::{OreGenerator, VeinGenerator};
use lode_sample::VoxelSample;
use lode_search::{GeneratedPattern, PatternSearch};

use crate::config::OptimizerConfig;
use crate::metrics::RunMetrics;

/// Outcome of a run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The best patterns found, in the order they entered the store.
    pub frontier: Vec<EvaluatedPattern<GeneratedPattern>>,
    /// FNV-1a digest of the reference pool.
    pub pool_fingerprint: u64,
    /// Ore in the whole reference pool.
    pub pool_ore: u64,
    /// Counters and timings.
    pub metrics: RunMetrics,
}

/// Searches every pattern reachable from an access centered on the
/// sample, scores each one against a reference pool and keeps the best.
///
/// ```no_run
/// use lode::{Optimizer, OptimizerConfig};
///
/// let report = Optimizer::classic(OptimizerConfig::default()).unwrap().run().unwrap();
/// for best in &report.frontier {
///     println!("{}\n{}", best.pattern.render(), best.statistics.report());
/// }
/// ```
#[derive(Debug)]
pub struct Optimizer<G> {
    config: OptimizerConfig,
    generator: G,
}

impl Optimizer<VeinGenerator> {
    /// An optimizer using the classic ore distribution.
    ///
    /// # Errors
    ///
    /// Returns the error of [`OptimizerConfig::validate`].
    pub fn classic(config: OptimizerConfig) -> Result<Self, ConfigError> {
        Self::new(config, VeinGenerator::classic())
    }
}

impl<G: OreGenerator> Optimizer<G> {
    /// An optimizer filling its reference pool with `generator`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`OptimizerConfig::validate`].
    pub fn new(config: OptimizerConfig, generator: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    /// The validated configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Run to completion, or until `pattern_limit` patterns are evaluated.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::AccessOutOfBounds)` if the sample is too
    /// small to hold the centered access.
    pub fn run(&self) -> Result<RunReport, ConfigError> {
        self.run_observed(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_improvement` with the store
    /// every time it accepts a pattern.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_observed<F>(&self, mut on_improvement: F) -> Result<RunReport, ConfigError>
    where
        F: FnMut(&PatternStore<GeneratedPattern>),
    {
        let config = &self.config;
        let dims = config.sample_dims;
        let workers = config.resolved_worker_count();
        tracing::info!(
            dimensions = %dims,
            samples = config.evaluator.sample_count,
            vertical_offset = config.evaluator.vertical_offset,
            constraints = %config.constraints,
            range = %config.dig_range,
            workers,
            "optimizer starting"
        );

        let started = Instant::now();
        let evaluator =
            PatternEvaluator::new(&self.generator, &VoxelSample::new(dims), &config.evaluator)?;
        let pool_us = started.elapsed().as_micros() as u64;
        tracing::info!(
            fingerprint = format_args!("{:016x}", evaluator.fingerprint()),
            total_ore = evaluator.total_ore(),
            elapsed_us = pool_us,
            "reference pool ready"
        );

        let mut search = PatternSearch::centered(dims, config.constraints, config.dig_range)?;
        let mut store = PatternStore::new(config.margin)?;
        let mut evaluated = 0u64;
        let mut insertions = 0u64;
        let searching = Instant::now();
        evaluate_all(&evaluator, &mut search, workers, |pattern, statistics| {
            evaluated += 1;
            if store.add(pattern, statistics) {
                insertions += 1;
                on_improvement(&store);
            }
            if evaluated % config.progress_interval == 0 {
                tracing::info!(evaluated, frontier = store.len(), "evaluation progress");
            }
            match config.pattern_limit {
                Some(limit) if evaluated >= limit => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        });

        let metrics = RunMetrics {
            workers,
            pool_us,
            search_us: searching.elapsed().as_micros() as u64,
            patterns_evaluated: evaluated,
            store_insertions: insertions,
            search: search.metrics().clone(),
        };
        tracing::info!(
            evaluated,
            frontier = store.len(),
            elapsed_us = metrics.search_us,
            "optimizer finished"
        );
        Ok(RunReport {
            frontier: store.into_vec(),
            pool_fingerprint: evaluator.fingerprint(),
            pool_ore: evaluator.total_ore(),
            metrics,
        })
    }
}
