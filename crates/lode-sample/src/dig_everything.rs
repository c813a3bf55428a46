//! A reference pattern that digs every block.

use lode_core::{Access, Dimensions, Position, PLAYER_HEIGHT};

use crate::pattern::DiggingPattern;
use crate::sample::VoxelSample;

/// Digs every single block: one player-sized column per cell, with an
/// access at every cell. Not a realistic strategy, but its statistics are
/// easy to predict, which makes it a baseline for tests and benchmarks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigEverythingPattern;

impl DiggingPattern for DigEverythingPattern {
    fn dimensions(&self) -> Dimensions {
        Dimensions::PLAYER
    }

    fn accesses(&self, origin_x: i32, origin_y: i32) -> Vec<Access> {
        vec![Access::new(origin_x, origin_y)]
    }

    fn dig_cell(&self, sample: &mut VoxelSample, origin: Position) {
        for dy in 0..PLAYER_HEIGHT {
            sample.dig_if_inside(Position::new(origin.x, origin.y + dy, origin.z));
        }
    }
}
