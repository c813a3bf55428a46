//! The digging-pattern contract and the ore collection pass.

use lode_core::{Access, Dimensions, Position};

use crate::explorer::explore;
use crate::sample::VoxelSample;
use crate::wrapping::Wrapping;

/// A way of digging into stone, repeated over a sample.
///
/// A pattern describes one tiling cell of size [`dimensions`]: the blocks
/// dug inside the cell and the accesses a miner uses to enter it. The
/// provided [`dig`] method tiles the cell over a whole sample starting at
/// `(0, 0, 0)`, explores the result from every access and collects the
/// visible ore.
///
/// [`dimensions`]: DiggingPattern::dimensions
/// [`dig`]: DiggingPattern::dig
pub trait DiggingPattern {
    /// The tiling period along x, y and z.
    fn dimensions(&self) -> Dimensions;

    /// The accesses of the cell placed at `(origin_x, origin_y)` on the
    /// `z = 0` face.
    fn accesses(&self, origin_x: i32, origin_y: i32) -> Vec<Access>;

    /// Dig one cell whose lowest corner is `origin`, stopping at the
    /// sample's edges.
    fn dig_cell(&self, sample: &mut VoxelSample, origin: Position);

    /// Dig every tiled cell into `sample` and return the accesses of all
    /// cells. Does not explore.
    fn dig_tiles(&self, sample: &mut VoxelSample) -> Vec<Access> {
        let period = self.dimensions();
        let dims = sample.dimensions();
        let mut accesses = Vec::new();
        for x in (0..dims.width()).step_by(period.width() as usize) {
            for y in (0..dims.height()).step_by(period.height() as usize) {
                accesses.extend(self.accesses(x as i32, y as i32));
                for z in (0..dims.depth()).step_by(period.depth() as usize) {
                    self.dig_cell(sample, Position::new(x as i32, y as i32, z as i32));
                }
            }
        }
        accesses
    }

    /// Dig the full tiling into `sample`, explore it from the accesses and
    /// collect every visible ore. Returns the number of ore blocks
    /// collected by the flood pass.
    fn dig(&self, sample: &mut VoxelSample) -> usize {
        let accesses = self.dig_tiles(sample);
        explore(sample, &accesses);
        collect_visible_ore(sample)
    }
}

/// Dig every visible ore block and, transitively, every ore block touching
/// a collected one.
///
/// Collecting an ore block reveals its face neighbors, so a vein is
/// followed to its end once any part of it is visible. Neighbors are taken
/// with [`Wrapping::Cut`]. Returns the number of blocks collected.
pub fn collect_visible_ore(sample: &mut VoxelSample) -> usize {
    let mut pending = sample.positions_matching(|b| b.is_ore() && b.visible);
    let mut collected = 0;
    while let Some(p) = pending.pop() {
        if !sample.block(p).is_ore() {
            continue;
        }
        sample.dig(p);
        sample.block_mut(p).visible = true;
        collected += 1;
        for n in sample.adjacent(p, Wrapping::Cut) {
            let block = sample.block_mut(n);
            block.visible = true;
            if block.is_ore() {
                pending.push(n);
            }
        }
    }
    collected
}
