//! Limits that keep the pattern search finite.

use std::fmt;

use lode_core::ConfigError;

/// Bounds on the states the search will expand.
///
/// A state is never expanded once its accesses have taken `max_actions`
/// actions in total, or once its sample holds `max_dug_blocks` dug
/// blocks. Both limits are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConstraints {
    max_actions: usize,
    max_dug_blocks: usize,
}

impl GenerationConstraints {
    /// Create validated constraints.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError::ZeroMaxActions)` or
    /// `Err(ConfigError::ZeroMaxDugBlocks)` for zero limits.
    pub fn new(max_actions: usize, max_dug_blocks: usize) -> Result<Self, ConfigError> {
        if max_actions == 0 {
            return Err(ConfigError::ZeroMaxActions);
        }
        if max_dug_blocks == 0 {
            return Err(ConfigError::ZeroMaxDugBlocks);
        }
        Ok(Self {
            max_actions,
            max_dug_blocks,
        })
    }

    /// Maximum number of actions summed over all accesses.
    pub fn max_actions(&self) -> usize {
        self.max_actions
    }

    /// Maximum number of dug blocks in the sample.
    pub fn max_dug_blocks(&self) -> usize {
        self.max_dug_blocks
    }

    /// Whether a state with these totals may still be expanded.
    pub fn allows(&self, actions: usize, dug_blocks: usize) -> bool {
        actions < self.max_actions && dug_blocks < self.max_dug_blocks
    }
}

impl Default for GenerationConstraints {
    /// 20 dug blocks and 40 actions.
    fn default() -> Self {
        Self {
            max_actions: 40,
            max_dug_blocks: 20,
        }
    }
}

impl fmt::Display for GenerationConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {} actions, max {} dug blocks",
            self.max_actions, self.max_dug_blocks
        )
    }
}
