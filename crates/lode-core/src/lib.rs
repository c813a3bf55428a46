//! Core types for the Lode mining-pattern optimizer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other Lode crate speaks: integer [`Position`]s and
//! [`Offset`]s, sample [`Dimensions`], block contents ([`BlockType`],
//! [`OreKind`]) and per-block exploration flags ([`Block`]), miner entry
//! points ([`Access`]), and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod block;
pub mod dims;
pub mod error;
pub mod position;

pub use access::{Access, PLAYER_HEIGHT};
pub use block::{Block, BlockType, OreKind};
pub use dims::Dimensions;
pub use error::{ConfigError, SampleError};
pub use position::{Offset, Position};
