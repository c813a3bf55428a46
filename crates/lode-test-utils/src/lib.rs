//! Test fixtures for Lode development.
//!
//! Sample builders for the shapes tests keep needing (stone blocks,
//! opened accesses, tunnels) and stub [`OreGenerator`]s with fully
//! predictable output, in [`fixtures`].
//!
//! [`OreGenerator`]: lode_ore::OreGenerator

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingGenerator, FixedOre, NoOre, SeedMarkerOre};

use lode_core::{Access, Dimensions, Position};
use lode_sample::VoxelSample;

/// A stone sample of the given size.
///
/// # Panics
///
/// If the size is not valid [`Dimensions`].
pub fn stone(width: u32, height: u32, depth: u32) -> VoxelSample {
    match Dimensions::new(width, height, depth) {
        Ok(dims) => VoxelSample::new(dims),
        Err(e) => panic!("invalid fixture size {width}x{height}x{depth}: {e}"),
    }
}

/// Dig the feet and head blocks of `access`.
pub fn open_access(sample: &mut VoxelSample, access: Access) {
    for p in access.blocks() {
        sample.dig(p);
    }
}

/// Dig a player-high tunnel of `length` blocks along +x, feet first at
/// `start`. Blocks beyond the sample are skipped.
pub fn tunnel_x(sample: &mut VoxelSample, start: Position, length: i32) {
    for dx in 0..length {
        let feet = Position::new(start.x + dx, start.y, start.z);
        sample.dig_if_inside(feet);
        sample.dig_if_inside(feet.above());
    }
}

/// Dig a player-high tunnel of `length` blocks along +z.
pub fn tunnel_z(sample: &mut VoxelSample, start: Position, length: i32) {
    for dz in 0..length {
        let feet = Position::new(start.x, start.y, start.z + dz);
        sample.dig_if_inside(feet);
        sample.dig_if_inside(feet.above());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tunnels_are_two_high() {
        let mut s = stone(5, 3, 5);
        tunnel_x(&mut s, Position::new(1, 0, 0), 10);
        assert_eq!(s.dug_count(), 8);
        tunnel_z(&mut s, Position::new(0, 1, 0), 2);
        assert_eq!(s.dug_count(), 12);
    }

    #[test]
    fn open_access_digs_both_blocks() {
        let mut s = stone(3, 3, 3);
        open_access(&mut s, Access::new(1, 1));
        assert!(s.is_dug(Position::new(1, 1, 0)) && s.is_dug(Position::new(1, 2, 0)));
    }
}
