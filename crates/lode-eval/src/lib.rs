//! Monte-Carlo evaluation of digging patterns.
//!
//! A [`PatternEvaluator`] generates a fixed pool of ored reference samples
//! once, then scores any [`DiggingPattern`](lode_sample::DiggingPattern)
//! by digging it into a copy of each. The resulting [`Statistics`] carry
//! two competing objectives, efficiency and thoroughness, and a
//! [`PatternStore`] keeps the patterns no other pattern beats on both by
//! more than a margin.
//!
//! [`evaluate_all`] spreads evaluation of a pattern stream over a pool of
//! worker threads while keeping the caller as the single writer of the
//! store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod evaluator;
pub mod parallel;
pub mod statistics;
pub mod store;

pub use evaluator::{EvaluatorConfig, PatternEvaluator};
pub use parallel::evaluate_all;
pub use statistics::Statistics;
pub use store::{EvaluatedPattern, PatternStore};
