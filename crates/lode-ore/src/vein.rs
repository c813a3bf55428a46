//! Ellipsoid-chain vein stamping.
//!
//! A vein is a chain of `size + 1` spheres strung along a short segment
//! of random horizontal orientation and small vertical slope. Sphere radii
//! swell towards the middle of the segment (a half sine) and are jittered
//! per sphere. Only stone blocks inside the sample are replaced.

use std::f64::consts::PI;

use lode_core::{BlockType, OreKind, Position};
use lode_sample::VoxelSample;
use rand::Rng;

/// Stamp one vein of `kind` centered near `center`, in sample coordinates.
///
/// Returns the number of blocks turned into ore. The center may lie
/// outside the sample; only the overlapping part is stamped.
pub fn stamp_vein<R: Rng + ?Sized>(
    sample: &mut VoxelSample,
    rng: &mut R,
    kind: OreKind,
    size: u32,
    center: Position,
) -> usize {
    let size_f = f64::from(size);
    let angle = rng.gen::<f64>() * PI;
    let reach_x = angle.sin() * size_f / 8.0;
    let reach_z = angle.cos() * size_f / 8.0;

    let (cx, cz) = (f64::from(center.x), f64::from(center.z));
    let (start_x, end_x) = (cx + reach_x, cx - reach_x);
    let (start_z, end_z) = (cz + reach_z, cz - reach_z);
    let start_y = f64::from(center.y + rng.gen_range(0..3) - 2);
    let end_y = f64::from(center.y + rng.gen_range(0..3) - 2);

    let mut placed = 0;
    for step in 0..=size {
        let t = f64::from(step) / size_f;
        let px = start_x + (end_x - start_x) * t;
        let py = start_y + (end_y - start_y) * t;
        let pz = start_z + (end_z - start_z) * t;

        let jitter = rng.gen::<f64>() * size_f / 16.0;
        let radius = ((t * PI).sin() + 1.0) * jitter / 2.0 + 0.5;
        placed += stamp_sphere(sample, kind, (px, py, pz), radius);
    }
    placed
}

/// Replace stone with `kind` inside the open ball of `radius` around
/// `center`, measuring from block centers.
fn stamp_sphere(sample: &mut VoxelSample, kind: OreKind, center: (f64, f64, f64), radius: f64) -> usize {
    let (px, py, pz) = center;
    let lo = |c: f64| (c - radius).floor() as i32;
    let hi = |c: f64| (c + radius).floor() as i32;
    let norm = |v: i32, c: f64| {
        let d = (f64::from(v) + 0.5 - c) / radius;
        d * d
    };

    let mut placed = 0;
    for x in lo(px)..=hi(px) {
        let dx = norm(x, px);
        if dx >= 1.0 {
            continue;
        }
        for y in lo(py)..=hi(py) {
            let dy = norm(y, py);
            if dx + dy >= 1.0 {
                continue;
            }
            for z in lo(pz)..=hi(pz) {
                if dx + dy + norm(z, pz) >= 1.0 {
                    continue;
                }
                let p = Position::new(x, y, z);
                if sample.get(p).is_some_and(|b| b.kind == BlockType::Stone) {
                    sample.set_block(p, BlockType::Ore(kind));
                    placed += 1;
                }
            }
        }
    }
    placed
}
