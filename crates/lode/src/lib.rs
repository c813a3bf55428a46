//! Lode: search and Monte-Carlo ranking of voxel mining patterns.
//!
//! This is the top-level facade crate. It re-exports the public API of
//! the Lode sub-crates and adds the [`Optimizer`], which wires them
//! together: enumerate every digging pattern reachable within the search
//! limits, score each against a fixed pool of ored samples, and keep the
//! ones no other pattern beats on both efficiency and thoroughness.
//!
//! # Quick start
//!
//! ```rust
//! use lode::prelude::*;
//!
//! let config = OptimizerConfig {
//!     sample_dims: Dimensions::new(6, 4, 6).unwrap(),
//!     evaluator: EvaluatorConfig { sample_count: 4, ..EvaluatorConfig::default() },
//!     constraints: GenerationConstraints::new(2, 6).unwrap(),
//!     worker_count: Some(1),
//!     ..OptimizerConfig::default()
//! };
//! let report = Optimizer::classic(config).unwrap().run().unwrap();
//! assert!(!report.frontier.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lode-core` | Positions, blocks, accesses, dimensions, errors |
//! | [`sample`] | `lode-sample` | Voxel samples, exploration, the pattern contract |
//! | [`ore`] | `lode-ore` | Seeded ore vein generation |
//! | [`search`] | `lode-search` | Actions, digging states, the pattern search |
//! | [`eval`] | `lode-eval` | Statistics, evaluation, the Pareto store |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod optimizer;

pub use config::OptimizerConfig;
pub use metrics::RunMetrics;
pub use optimizer::{Optimizer, RunReport};

/// Positions, blocks, accesses and dimensions (`lode-core`).
pub use lode_core as types;

/// Voxel samples, the Explorer and the [`sample::DiggingPattern`]
/// contract (`lode-sample`).
pub use lode_sample as sample;

/// Ore generation (`lode-ore`).
///
/// [`ore::VeinGenerator`] with [`ore::OreDistribution::classic`] is what
/// [`Optimizer::classic`] uses.
pub use lode_ore as ore;

/// The breadth-first pattern search (`lode-search`).
pub use lode_search as search;

/// Monte-Carlo evaluation and ranking (`lode-eval`).
pub use lode_eval as eval;

/// Common imports for typical Lode usage.
///
/// ```rust
/// use lode::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lode_core::{Access, BlockType, ConfigError, Dimensions, OreKind, Position};

    // Samples and patterns
    pub use lode_sample::{DigEverythingPattern, DiggingPattern, VoxelSample, Wrapping};

    // Ore
    pub use lode_ore::{OreDistribution, OreGenerator, VeinGenerator};

    // Search
    pub use lode_search::{DigRange, GeneratedPattern, GenerationConstraints, PatternSearch};

    // Evaluation
    pub use lode_eval::{EvaluatorConfig, PatternEvaluator, PatternStore, Statistics};

    // Driver
    pub use crate::{Optimizer, OptimizerConfig, RunMetrics, RunReport};
}
