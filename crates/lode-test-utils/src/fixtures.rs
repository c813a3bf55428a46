//! Stub ore generators.
//!
//! - [`NoOre`]: returns the base sample unchanged.
//! - [`FixedOre`]: places the same ore blocks whatever the seed.
//! - [`SeedMarkerOre`]: places one coal block whose position encodes the
//!   seed, to check how callers derive seeds.
//! - [`CountingGenerator`]: wraps another generator and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use lode_core::{BlockType, OreKind, Position};
use lode_ore::OreGenerator;
use lode_sample::VoxelSample;

/// Never places ore.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOre;

impl OreGenerator for NoOre {
    fn generate(&self, base: &VoxelSample, _vertical_offset: i32, _seed: u64) -> VoxelSample {
        base.clone()
    }
}

/// Places a fixed list of ore blocks, replacing stone only.
#[derive(Clone, Debug, Default)]
pub struct FixedOre {
    pub blocks: Vec<(Position, OreKind)>,
}

impl FixedOre {
    pub fn new(blocks: Vec<(Position, OreKind)>) -> Self {
        Self { blocks }
    }

    /// A single ore block.
    pub fn single(p: Position, kind: OreKind) -> Self {
        Self::new(vec![(p, kind)])
    }
}

impl OreGenerator for FixedOre {
    fn generate(&self, base: &VoxelSample, _vertical_offset: i32, _seed: u64) -> VoxelSample {
        let mut sample = base.clone();
        for &(p, kind) in &self.blocks {
            if sample.get(p).is_some_and(|b| b.kind == BlockType::Stone) {
                sample.set_block(p, BlockType::Ore(kind));
            }
        }
        sample
    }
}

/// Places one coal block at dense index `seed % volume`, if stone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedMarkerOre;

impl SeedMarkerOre {
    /// Where the marker for `seed` lands in a sample of `sample`'s size.
    pub fn marker(sample: &VoxelSample, seed: u64) -> Position {
        let dims = sample.dimensions();
        dims.position_of((seed % dims.volume() as u64) as usize)
    }
}

impl OreGenerator for SeedMarkerOre {
    fn generate(&self, base: &VoxelSample, _vertical_offset: i32, seed: u64) -> VoxelSample {
        let mut sample = base.clone();
        let p = Self::marker(base, seed);
        if sample.block(p).kind == BlockType::Stone {
            sample.set_block(p, BlockType::Ore(OreKind::Coal));
        }
        sample
    }
}

/// Delegates to an inner generator and counts the calls.
pub struct CountingGenerator<G> {
    pub inner: G,
    calls: AtomicUsize,
}

impl<G> CountingGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<G: OreGenerator> OreGenerator for CountingGenerator<G> {
    fn generate(&self, base: &VoxelSample, vertical_offset: i32, seed: u64) -> VoxelSample {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.generate(base, vertical_offset, seed)
    }
}
