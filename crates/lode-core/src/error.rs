//! Error types shared across the Lode workspace.

use std::error::Error;
use std::fmt;

/// Errors arising from sample construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// One of the dimensions is zero.
    EmptySample,
    /// The sample volume does not fit a `u32` index.
    DimensionTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Requested depth.
        depth: u32,
    },
    /// Two samples that must share dimensions do not.
    DimensionMismatch {
        /// Dimensions of the destination sample.
        expected: String,
        /// Dimensions of the source sample.
        found: String,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "sample must have at least one block on every axis"),
            Self::DimensionTooLarge {
                width,
                height,
                depth,
            } => write!(f, "sample {width}x{height}x{depth} is too large to index"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "sample dimensions differ: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for SampleError {}

/// Errors detected while validating search, evaluation or optimizer
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_actions` is zero.
    ZeroMaxActions,
    /// `max_dug_blocks` is zero.
    ZeroMaxDugBlocks,
    /// The evaluator was asked for zero reference samples.
    ZeroSampleCount,
    /// The dominance margin is NaN, infinite or negative.
    InvalidMargin {
        /// The invalid value.
        value: f64,
    },
    /// The progress interval is zero.
    ZeroProgressInterval,
    /// The sample dimensions are invalid.
    InvalidDimensions(SampleError),
    /// No access was declared for the search.
    NoAccesses,
    /// An access does not fit inside the sample.
    AccessOutOfBounds {
        /// Human-readable access description.
        access: String,
        /// Human-readable sample dimensions.
        dimensions: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxActions => write!(f, "max_actions must be at least 1"),
            Self::ZeroMaxDugBlocks => write!(f, "max_dug_blocks must be at least 1"),
            Self::ZeroSampleCount => write!(f, "sample_count must be at least 1"),
            Self::InvalidMargin { value } => {
                write!(f, "margin must be finite and >= 0, got {value}")
            }
            Self::ZeroProgressInterval => write!(f, "progress_interval must be at least 1"),
            Self::InvalidDimensions(e) => write!(f, "invalid dimensions: {e}"),
            Self::NoAccesses => write!(f, "at least one access is required"),
            Self::AccessOutOfBounds { access, dimensions } => {
                write!(f, "{access} does not fit in a {dimensions} sample")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDimensions(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SampleError> for ConfigError {
    fn from(e: SampleError) -> Self {
        Self::InvalidDimensions(e)
    }
}
