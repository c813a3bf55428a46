//! Voxel samples and the operations patterns are built from.
//!
//! This crate owns the mutable world representation of Lode:
//!
//! - [`VoxelSample`]: a dense block grid with O(1) ore/dug counters and
//!   [`Wrapping`]-aware relative lookups
//! - [`explore`]: breadth-first visibility and accessibility propagation
//!   from miner [`Access`](lode_core::Access)es
//! - [`DiggingPattern`]: the tiling contract shared by hand-written and
//!   generated patterns, with [`collect_visible_ore`] as its ore pass
//! - [`DigEverythingPattern`]: a baseline pattern that digs every block

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dig_everything;
pub mod explorer;
pub mod hash;
pub mod pattern;
mod render;
pub mod sample;
pub mod wrapping;

#[cfg(test)]
pub(crate) mod compliance;

pub use dig_everything::DigEverythingPattern;
pub use explorer::explore;
pub use hash::{FnvBuildHasher, FnvHasher};
pub use pattern::{collect_visible_ore, DiggingPattern};
pub use sample::VoxelSample;
pub use wrapping::Wrapping;
