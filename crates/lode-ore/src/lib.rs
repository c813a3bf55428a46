//! Seeded ore generation for Lode samples.
//!
//! The evaluator only depends on the [`OreGenerator`] contract: given a
//! base sample, a vertical offset and a seed, return a new sample where
//! some stone has become ore. [`VeinGenerator`] implements it by stamping
//! ellipsoid-chain veins according to an [`OreDistribution`].
//!
//! Generation is deterministic: every call seeds its own ChaCha8 RNG
//! from the given seed, so identical inputs produce identical samples.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distribution;
pub mod error;
pub mod generator;
pub mod vein;

pub use distribution::{OreDistribution, VeinPlacement, VeinSpec};
pub use error::OreError;
pub use generator::{OreGenerator, VeinGenerator, VeinGeneratorBuilder};
