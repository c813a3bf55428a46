//! Errors from ore generator configuration.

use std::error::Error;
use std::fmt;

use lode_core::OreKind;

/// Invalid vein or generator parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OreError {
    /// A vein spec would stamp zero blocks.
    ZeroVeinSize {
        /// The offending ore kind.
        kind: OreKind,
    },
    /// A uniform placement has `max_y <= min_y`.
    EmptyYRange {
        /// The offending ore kind.
        kind: OreKind,
        /// Configured lower bound.
        min_y: i32,
        /// Configured upper bound.
        max_y: i32,
    },
    /// A triangular placement has a non-positive spread.
    ZeroSpread {
        /// The offending ore kind.
        kind: OreKind,
    },
    /// The generation chunk has a zero-sized horizontal axis.
    ZeroChunkSize,
}

impl fmt::Display for OreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVeinSize { kind } => write!(f, "{kind} veins must have a positive size"),
            Self::EmptyYRange { kind, min_y, max_y } => {
                write!(f, "{kind} height range [{min_y}, {max_y}) is empty")
            }
            Self::ZeroSpread { kind } => write!(f, "{kind} spread must be positive"),
            Self::ZeroChunkSize => write!(f, "chunk width and depth must be at least 1"),
        }
    }
}

impl Error for OreError {}
