//! State-space search over digging sequences.
//!
//! A search starts from one or more [`Access`](lode_core::Access)es opened
//! in a stone sample. Each [`DiggingState`] tracks the sample dug so far
//! and where every access's player stands; expanding it applies every
//! legal [`Action`] (a one-block [`MoveAction`] or a [`DigAction`] within
//! the player's [`DigRange`]). [`PatternSearch`] walks the resulting graph
//! breadth first, deduplicating states that differ only by action order,
//! and yields a [`GeneratedPattern`] for every canonical state until the
//! [`GenerationConstraints`] stop it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod constraints;
pub mod error;
pub mod pattern;
pub mod range;
pub mod search;
mod sight;
pub mod state;

pub use action::{Action, ActionSet, DigAction, MoveAction};
pub use constraints::GenerationConstraints;
pub use error::ActionError;
pub use pattern::GeneratedPattern;
pub use range::DigRange;
pub use search::{PatternSearch, SearchMetrics};
pub use state::{AccessTrack, DiggingState, StateKey};
