//! Line-of-sight checks for digging.

use lode_core::{Offset, Position};
use lode_sample::{VoxelSample, Wrapping};

/// Samples taken per block of the longest axis when tracing a ray.
const RAY_RESOLUTION: i32 = 4;

/// Whether the player whose head is at `head` can see the block at
/// `head + offset`.
///
/// Targets touching the head, and targets touching the feet diagonally,
/// are always visible. A target one block up diagonally is visible when
/// either the block above the head or the block below the target is open.
/// Anything else needs a clear ray: every block crossed between the head
/// and the target must be dug.
pub(crate) fn is_clear(sample: &VoxelSample, head: Position, offset: Offset) -> bool {
    match (offset.sq_norm(), offset.dy) {
        (1, _) => true,
        (2, -1) => true,
        (2, 1) => {
            sample.is_dug_relative(head, Offset::UP, Wrapping::Cut)
                || sample.is_dug_relative(head, offset + Offset::DOWN, Wrapping::WrapXz)
        }
        _ => ray_is_clear(sample, head, offset),
    }
}

/// Walk the segment between block centers, checking every crossed block.
///
/// Sample points are computed in units of `1 / (2 * steps)` of a block. A
/// point lying exactly on a block boundary belongs to the block nearer the
/// head, so mirrored offsets see mirrored blocks. Blocks beyond the top or
/// bottom of the sample count as solid.
fn ray_is_clear(sample: &VoxelSample, head: Position, offset: Offset) -> bool {
    let longest = offset.dx.abs().max(offset.dy.abs()).max(offset.dz.abs());
    let steps = longest * RAY_RESOLUTION;
    let cell = |d: i32, i: i32| round_half_toward_zero(i * d, steps);

    (1..steps).all(|i| {
        let crossed = Offset::new(cell(offset.dx, i), cell(offset.dy, i), cell(offset.dz, i));
        if crossed == Offset::ZERO || crossed == offset {
            return true;
        }
        sample.is_dug_relative(head, crossed, Wrapping::WrapXz)
    })
}

/// `num / den` rounded to the nearest integer, ties toward zero.
/// `den` must be positive.
fn round_half_toward_zero(num: i32, den: i32) -> i32 {
    let doubled = 2 * num + den;
    let rounded = doubled.div_euclid(2 * den);
    if num > 0 && doubled.rem_euclid(2 * den) == 0 {
        rounded - 1
    } else {
        rounded
    }
}
