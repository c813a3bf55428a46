//! The ore generator contract and the vein-based implementation.

use lode_core::Position;
use lode_sample::VoxelSample;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::distribution::OreDistribution;
use crate::error::OreError;
use crate::vein::stamp_vein;

/// Produces ored copies of a base sample.
///
/// Implementations must be deterministic in `seed`, must not mutate
/// `base`, and may only turn stone into ore: every non-stone block of
/// `base` is unchanged in the result. `vertical_offset` is the world
/// height of the sample's lowest layer.
pub trait OreGenerator {
    /// Return a copy of `base` with ore added.
    fn generate(&self, base: &VoxelSample, vertical_offset: i32, seed: u64) -> VoxelSample;
}

/// Stamps ellipsoid-chain veins following an [`OreDistribution`].
///
/// The sample is treated as a slice of a world divided into chunk columns
/// of `chunk_width × chunk_depth`. For every chunk column overlapping the
/// sample, each vein spec draws its centers within the chunk; a center is
/// kept when it lies within `margin` blocks of the sample, since veins
/// centered just outside may still bleed into it.
///
/// Constructed via [`VeinGenerator::builder`] or [`VeinGenerator::classic`].
#[derive(Clone, Debug)]
pub struct VeinGenerator {
    distribution: OreDistribution,
    chunk_width: u32,
    chunk_depth: u32,
    margin: i32,
}

/// Builder for [`VeinGenerator`].
pub struct VeinGeneratorBuilder {
    distribution: OreDistribution,
    chunk_width: u32,
    chunk_depth: u32,
    margin: i32,
}

impl VeinGenerator {
    /// Create a new builder with the classic distribution, 16×16 chunks and
    /// a 5-block margin.
    pub fn builder() -> VeinGeneratorBuilder {
        VeinGeneratorBuilder {
            distribution: OreDistribution::classic(),
            chunk_width: 16,
            chunk_depth: 16,
            margin: 5,
        }
    }

    /// The classic generator, equivalent to `builder().build()`.
    pub fn classic() -> Self {
        Self {
            distribution: OreDistribution::classic(),
            chunk_width: 16,
            chunk_depth: 16,
            margin: 5,
        }
    }

    /// The distribution this generator follows.
    pub fn distribution(&self) -> &OreDistribution {
        &self.distribution
    }

    fn inject(&self, sample: &mut VoxelSample, vertical_offset: i32, rng: &mut ChaCha8Rng) -> usize {
        let dims = sample.dimensions();
        let (w, h, d) = (dims.width() as i32, dims.height() as i32, dims.depth() as i32);
        let mut veins = 0;
        for chunk_x in (0..w).step_by(self.chunk_width as usize) {
            for chunk_z in (0..d).step_by(self.chunk_depth as usize) {
                for spec in self.distribution.veins() {
                    for _ in 0..spec.veins_per_chunk {
                        let x = chunk_x + rng.gen_range(0..self.chunk_width as i32);
                        let y = spec.placement.sample_y(rng);
                        let z = chunk_z + rng.gen_range(0..self.chunk_depth as i32);

                        let y = y - vertical_offset;
                        let near_x = x < w + self.margin;
                        let near_z = z < d + self.margin;
                        let near_y = -self.margin <= y && y < h + self.margin;
                        if near_x && near_z && near_y {
                            stamp_vein(sample, rng, spec.kind, spec.max_vein_size, Position::new(x, y, z));
                            veins += 1;
                        }
                    }
                }
            }
        }
        veins
    }
}

impl Default for VeinGenerator {
    fn default() -> Self {
        Self::classic()
    }
}

impl VeinGeneratorBuilder {
    /// Set the vein distribution (default: classic).
    pub fn distribution(mut self, distribution: OreDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set the chunk column size (default: 16×16).
    pub fn chunk_size(mut self, width: u32, depth: u32) -> Self {
        self.chunk_width = width;
        self.chunk_depth = depth;
        self
    }

    /// Set how far outside the sample a vein center may fall (default: 5).
    pub fn margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Build the generator.
    ///
    /// # Errors
    ///
    /// Returns `Err(OreError::ZeroChunkSize)` if either chunk axis is zero
    /// or does not fit an `i32`.
    pub fn build(self) -> Result<VeinGenerator, OreError> {
        let fits = |v: u32| v > 0 && v <= i32::MAX as u32;
        if !fits(self.chunk_width) || !fits(self.chunk_depth) {
            return Err(OreError::ZeroChunkSize);
        }
        Ok(VeinGenerator {
            distribution: self.distribution,
            chunk_width: self.chunk_width,
            chunk_depth: self.chunk_depth,
            margin: self.margin.max(0),
        })
    }
}

impl OreGenerator for VeinGenerator {
    fn generate(&self, base: &VoxelSample, vertical_offset: i32, seed: u64) -> VoxelSample {
        let mut sample = base.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let veins = self.inject(&mut sample, vertical_offset, &mut rng);
        tracing::trace!(
            seed,
            veins,
            ore = sample.ore_count() - base.ore_count(),
            "generated ore sample"
        );
        sample
    }
}
