//! Dense voxel samples with incrementally maintained counters.

use std::fmt;

use lode_core::{Block, BlockType, Dimensions, Offset, Position, SampleError};
use smallvec::SmallVec;

use crate::hash;
use crate::wrapping::{resolve_axis, Wrapping};

/// A finite 3D grid of blocks.
///
/// The ore and dug counters are updated on every mutation, so reading
/// them is O(1) during evaluation. Cloning performs a full deep copy;
/// two samples never share blocks.
///
/// Equality compares dimensions and block contents only. Exploration
/// flags are scratch state and are ignored.
#[derive(Clone, Debug)]
pub struct VoxelSample {
    dims: Dimensions,
    blocks: Vec<Block>,
    ore_count: usize,
    dug_count: usize,
}

impl VoxelSample {
    /// A sample of the given dimensions, full of stone.
    pub fn new(dims: Dimensions) -> Self {
        Self::filled(dims, BlockType::Stone)
    }

    /// A sample of the given dimensions where every block is `kind`.
    pub fn filled(dims: Dimensions, kind: BlockType) -> Self {
        let volume = dims.volume();
        Self {
            dims,
            blocks: vec![Block::new(kind); volume],
            ore_count: if kind.is_ore() { volume } else { 0 },
            dug_count: if kind.is_dug() { volume } else { 0 },
        }
    }

    /// A stone sample from raw sizes.
    ///
    /// Returns `Err` if the sizes are not valid [`Dimensions`].
    pub fn from_size(width: u32, height: u32, depth: u32) -> Result<Self, SampleError> {
        Ok(Self::new(Dimensions::new(width, height, depth)?))
    }

    /// The sample's dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of ore blocks currently in the sample.
    pub fn ore_count(&self) -> usize {
        self.ore_count
    }

    /// Number of dug (air) blocks currently in the sample.
    pub fn dug_count(&self) -> usize {
        self.dug_count
    }

    /// Whether `(x, y, z)` lies inside the sample.
    pub fn has_block(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(x, y, z)
    }

    /// Whether `p` lies inside the sample.
    pub fn contains(&self, p: Position) -> bool {
        self.dims.contains(p.x, p.y, p.z)
    }

    /// The block at `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the sample.
    pub fn block(&self, p: Position) -> &Block {
        &self.blocks[self.dims.index(p)]
    }

    /// The block at `p`, or `None` outside the sample.
    pub fn get(&self, p: Position) -> Option<&Block> {
        self.dims.index_of(p).map(|i| &self.blocks[i])
    }

    pub(crate) fn block_mut(&mut self, p: Position) -> &mut Block {
        let i = self.dims.index(p);
        &mut self.blocks[i]
    }

    /// Whether the block at `p` has been dug.
    ///
    /// # Panics
    ///
    /// If `p` is outside the sample.
    pub fn is_dug(&self, p: Position) -> bool {
        self.block(p).is_dug()
    }

    /// Resolve `origin + offset` under `wrapping`.
    ///
    /// Returns `None` when a cut axis leaves the sample.
    pub fn relative(&self, origin: Position, offset: Offset, wrapping: Wrapping) -> Option<Position> {
        let h = wrapping.wraps_horizontally();
        let v = wrapping.wraps_vertically();
        Some(Position::new(
            resolve_axis(origin.x + offset.dx, self.dims.width(), h)?,
            resolve_axis(origin.y + offset.dy, self.dims.height(), v)?,
            resolve_axis(origin.z + offset.dz, self.dims.depth(), h)?,
        ))
    }

    /// The block at `origin + offset` under `wrapping`, or `None` when a
    /// cut axis leaves the sample.
    pub fn relative_block(&self, origin: Position, offset: Offset, wrapping: Wrapping) -> Option<&Block> {
        self.relative(origin, offset, wrapping).map(|p| self.block(p))
    }

    /// Whether `origin + offset` exists under `wrapping` and is dug.
    pub fn is_dug_relative(&self, origin: Position, offset: Offset, wrapping: Wrapping) -> bool {
        self.relative_block(origin, offset, wrapping)
            .is_some_and(Block::is_dug)
    }

    /// Distinct face neighbors of `p`, excluding `p` itself.
    ///
    /// Under [`Wrapping::Cut`] neighbors outside the sample are dropped.
    /// Axes of size 1 or 2 may collapse wrapped neighbors together, so the
    /// result holds at most six positions.
    pub fn adjacent(&self, p: Position, wrapping: Wrapping) -> SmallVec<[Position; 6]> {
        self.neighbors_in(p, &Offset::FACES, wrapping)
    }

    /// Distinct horizontal face neighbors of `p` (same y), excluding `p`.
    pub fn horizontal_neighbors(&self, p: Position, wrapping: Wrapping) -> SmallVec<[Position; 6]> {
        self.neighbors_in(p, &Offset::HORIZONTAL, wrapping)
    }

    fn neighbors_in(&self, p: Position, dirs: &[Offset], wrapping: Wrapping) -> SmallVec<[Position; 6]> {
        let mut out = SmallVec::new();
        for &d in dirs {
            if let Some(n) = self.relative(p, d, wrapping) {
                if n != p && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Replace the content of the block at `p`, keeping counters in sync.
    ///
    /// Exploration flags are left untouched.
    ///
    /// # Panics
    ///
    /// If `p` is outside the sample.
    pub fn set_block(&mut self, p: Position, kind: BlockType) {
        let i = self.dims.index(p);
        self.change_kind(i, kind);
    }

    /// Dig the block at `p`. Digging an already dug block is a no-op.
    ///
    /// # Panics
    ///
    /// If `p` is outside the sample.
    pub fn dig(&mut self, p: Position) {
        self.set_block(p, BlockType::Air);
    }

    /// Dig `p` if it lies inside the sample. Returns whether it did.
    pub fn dig_if_inside(&mut self, p: Position) -> bool {
        match self.dims.index_of(p) {
            Some(i) => {
                self.change_kind(i, BlockType::Air);
                true
            }
            None => false,
        }
    }

    /// Set every block to `kind` and clear all exploration flags.
    pub fn fill(&mut self, kind: BlockType) {
        self.blocks.fill(Block::new(kind));
        let volume = self.blocks.len();
        self.ore_count = if kind.is_ore() { volume } else { 0 };
        self.dug_count = if kind.is_dug() { volume } else { 0 };
    }

    /// Overwrite this sample with the contents and flags of `source`,
    /// reusing this sample's allocation.
    ///
    /// Returns `Err(SampleError::DimensionMismatch)` if the dimensions
    /// differ.
    pub fn reset_to(&mut self, source: &VoxelSample) -> Result<(), SampleError> {
        if self.dims != source.dims {
            return Err(SampleError::DimensionMismatch {
                expected: self.dims.to_string(),
                found: source.dims.to_string(),
            });
        }
        self.blocks.copy_from_slice(&source.blocks);
        self.ore_count = source.ore_count;
        self.dug_count = source.dug_count;
        Ok(())
    }

    /// Every block with its position, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(move |(i, b)| (self.dims.position_of(i), b))
    }

    /// Positions of every block satisfying `pred`, in index order.
    pub fn positions_matching(&self, mut pred: impl FnMut(&Block) -> bool) -> Vec<Position> {
        self.iter()
            .filter(|(_, b)| pred(*b))
            .map(|(p, _)| p)
            .collect()
    }

    /// FNV-1a fingerprint of the dimensions and block contents.
    ///
    /// Exploration flags do not contribute, so equal samples share a
    /// fingerprint.
    pub fn content_hash(&self) -> u64 {
        let mut h = hash::FNV_OFFSET;
        h = hash::fnv1a_u32(h, self.dims.width());
        h = hash::fnv1a_u32(h, self.dims.height());
        h = hash::fnv1a_u32(h, self.dims.depth());
        for b in &self.blocks {
            h = hash::fnv1a_byte(h, b.kind.tag());
        }
        h
    }

    /// Count ore and dug blocks by scanning the whole grid.
    ///
    /// Returns `(ore, dug)`. Only used to cross-check the incremental
    /// counters.
    pub fn scan_counts(&self) -> (usize, usize) {
        self.blocks.iter().fold((0, 0), |(ore, dug), b| {
            (ore + usize::from(b.is_ore()), dug + usize::from(b.is_dug()))
        })
    }

    fn change_kind(&mut self, index: usize, kind: BlockType) {
        let block = &mut self.blocks[index];
        let former = block.kind;
        if former == kind {
            return;
        }
        block.kind = kind;
        match (former.is_ore(), kind.is_ore()) {
            (false, true) => self.ore_count += 1,
            (true, false) => self.ore_count -= 1,
            _ => {}
        }
        match (former.is_dug(), kind.is_dug()) {
            (false, true) => self.dug_count += 1,
            (true, false) => self.dug_count -= 1,
            _ => {}
        }
    }
}

impl PartialEq for VoxelSample {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
            && self
                .blocks
                .iter()
                .zip(&other.blocks)
                .all(|(a, b)| a.kind == b.kind)
    }
}

impl Eq for VoxelSample {}

impl fmt::Display for VoxelSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {}  Dug: {}  Ore: {}",
            self.dims, self.dug_count, self.ore_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use lode_core::OreKind;
    use proptest::prelude::*;

    fn dims(w: u32, h: u32, d: u32) -> Dimensions {
        Dimensions::new(w, h, d).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_sample_is_stone() {
        let s = VoxelSample::new(dims(3, 4, 5));
        assert_eq!(s.ore_count(), 0);
        assert_eq!(s.dug_count(), 0);
        assert!(s.iter().all(|(_, b)| b.kind == BlockType::Stone));
        assert_eq!(s.iter().count(), 60);
    }

    #[test]
    fn filled_counts_everything() {
        let ore = VoxelSample::filled(dims(2, 2, 2), BlockType::Ore(OreKind::Iron));
        assert_eq!(ore.ore_count(), 8);
        let air = VoxelSample::filled(dims(2, 2, 2), BlockType::Air);
        assert_eq!(air.dug_count(), 8);
    }

    #[test]
    fn from_size_rejects_empty() {
        assert_eq!(VoxelSample::from_size(0, 1, 1), Err(SampleError::EmptySample));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = VoxelSample::new(dims(2, 2, 2));
        let b = a.clone();
        a.dig(Position::new(1, 1, 1));
        assert_ne!(a, b);
        assert_eq!(b.dug_count(), 0);
        assert!(!b.is_dug(Position::new(1, 1, 1)));
    }

    // ── Lookups ─────────────────────────────────────────────────

    #[test]
    fn has_block_bounds() {
        let s = VoxelSample::new(dims(2, 3, 4));
        assert!(s.has_block(1, 2, 3));
        assert!(!s.has_block(2, 0, 0));
        assert!(!s.has_block(0, -1, 0));
        assert!(s.get(Position::new(0, 3, 0)).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn absolute_lookup_out_of_bounds_panics() {
        let s = VoxelSample::new(dims(2, 2, 2));
        s.block(Position::new(2, 0, 0));
    }

    #[test]
    fn wrap_xz_cuts_vertically() {
        let s = VoxelSample::new(dims(4, 4, 4));
        let top = Position::new(0, 3, 0);
        assert_eq!(s.relative(top, Offset::UP, Wrapping::WrapXz), None);
        assert_eq!(s.relative(top, Offset::UP, Wrapping::Wrap), Some(Position::new(0, 0, 0)));
        assert_eq!(
            s.relative(top, Offset::new(0, 0, -1), Wrapping::WrapXz),
            Some(Position::new(0, 3, 3))
        );
    }

    #[test]
    fn adjacent_counts() {
        let s = VoxelSample::new(dims(4, 4, 4));
        let corner = Position::new(0, 0, 0);
        let inner = Position::new(1, 1, 1);
        assert_eq!(s.adjacent(corner, Wrapping::Cut).len(), 3);
        assert_eq!(s.adjacent(corner, Wrapping::WrapXz).len(), 5);
        assert_eq!(s.adjacent(corner, Wrapping::Wrap).len(), 6);
        assert_eq!(s.adjacent(inner, Wrapping::Cut).len(), 6);
        assert_eq!(s.horizontal_neighbors(inner, Wrapping::Cut).len(), 4);
    }

    #[test]
    fn thin_axes_collapse_wrapped_neighbors() {
        let s = VoxelSample::new(dims(1, 1, 2));
        let p = Position::new(0, 0, 0);
        // x and y wrap onto p itself; both z directions reach the same block.
        assert_eq!(s.adjacent(p, Wrapping::Wrap).as_slice(), &[Position::new(0, 0, 1)]);
    }

    #[test]
    fn neighbor_symmetry_all_modes() {
        let s = VoxelSample::new(dims(3, 4, 2));
        for mode in [Wrapping::Cut, Wrapping::Wrap, Wrapping::WrapXz] {
            compliance::assert_adjacency_symmetric(&s, mode);
            compliance::assert_adjacency_unique(&s, mode);
        }
    }

    // ── Mutation ────────────────────────────────────────────────

    #[test]
    fn set_block_updates_counters() {
        let mut s = VoxelSample::new(dims(3, 3, 3));
        let p = Position::new(1, 1, 1);
        s.set_block(p, BlockType::Ore(OreKind::Gold));
        assert_eq!((s.ore_count(), s.dug_count()), (1, 0));
        s.set_block(p, BlockType::Ore(OreKind::Coal));
        assert_eq!((s.ore_count(), s.dug_count()), (1, 0));
        s.dig(p);
        assert_eq!((s.ore_count(), s.dug_count()), (0, 1));
        s.set_block(p, BlockType::Stone);
        assert_eq!((s.ore_count(), s.dug_count()), (0, 0));
        compliance::assert_counters_consistent(&s);
    }

    #[test]
    fn dig_is_idempotent() {
        let mut s = VoxelSample::new(dims(3, 3, 3));
        let p = Position::new(2, 0, 1);
        s.dig(p);
        let snapshot = s.clone();
        s.dig(p);
        assert_eq!(s, snapshot);
        assert_eq!(s.dug_count(), snapshot.dug_count());
        assert_eq!(s.ore_count(), snapshot.ore_count());
    }

    #[test]
    fn dig_if_inside_ignores_outside() {
        let mut s = VoxelSample::new(dims(2, 2, 2));
        assert!(!s.dig_if_inside(Position::new(5, 0, 0)));
        assert!(s.dig_if_inside(Position::new(1, 0, 0)));
        assert_eq!(s.dug_count(), 1);
    }

    #[test]
    fn fill_resets_flags_and_counters() {
        let mut s = VoxelSample::new(dims(2, 2, 2));
        s.dig(Position::new(0, 0, 0));
        s.block_mut(Position::new(1, 1, 1)).visible = true;
        s.fill(BlockType::Stone);
        assert_eq!(s.dug_count(), 0);
        assert!(s.iter().all(|(_, b)| !b.visible));
    }

    #[test]
    fn reset_to_copies_contents() {
        let mut reference = VoxelSample::new(dims(2, 2, 2));
        reference.set_block(Position::new(0, 1, 0), BlockType::Ore(OreKind::Lapis));
        let mut scratch = VoxelSample::new(dims(2, 2, 2));
        scratch.dig(Position::new(1, 1, 1));
        scratch.reset_to(&reference).unwrap();
        assert_eq!(scratch, reference);
        assert_eq!(scratch.ore_count(), 1);
        assert_eq!(scratch.dug_count(), 0);
    }

    #[test]
    fn reset_to_rejects_mismatch() {
        let mut a = VoxelSample::new(dims(2, 2, 2));
        let b = VoxelSample::new(dims(2, 2, 3));
        assert!(matches!(a.reset_to(&b), Err(SampleError::DimensionMismatch { .. })));
    }

    // ── Equality and hashing ────────────────────────────────────

    #[test]
    fn equality_ignores_flags() {
        let a = VoxelSample::new(dims(2, 2, 2));
        let mut b = a.clone();
        b.block_mut(Position::new(0, 0, 0)).explored = true;
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn content_hash_tracks_contents() {
        let a = VoxelSample::new(dims(2, 2, 2));
        let mut b = a.clone();
        b.dig(Position::new(1, 0, 0));
        assert_ne!(a.content_hash(), b.content_hash());
        let mut c = a.clone();
        c.dig(Position::new(1, 0, 0));
        assert_eq!(b.content_hash(), c.content_hash());
    }

    #[test]
    fn content_hash_includes_dimensions() {
        let a = VoxelSample::new(dims(2, 4, 1));
        let b = VoxelSample::new(dims(4, 2, 1));
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn positions_matching_filters() {
        let mut s = VoxelSample::new(dims(3, 1, 1));
        s.dig(Position::new(2, 0, 0));
        assert_eq!(s.positions_matching(Block::is_dug), vec![Position::new(2, 0, 0)]);
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_kind() -> impl Strategy<Value = BlockType> {
        prop_oneof![
            Just(BlockType::Air),
            Just(BlockType::Stone),
            (0usize..6).prop_map(|i| BlockType::Ore(OreKind::ALL[i])),
        ]
    }

    proptest! {
        #[test]
        fn counters_match_rescan(ops in prop::collection::vec((0i32..4, 0i32..3, 0i32..5, arb_kind()), 0..64)) {
            let mut s = VoxelSample::new(dims(4, 3, 5));
            for (x, y, z, kind) in ops {
                s.set_block(Position::new(x, y, z), kind);
            }
            prop_assert_eq!(s.scan_counts(), (s.ore_count(), s.dug_count()));
        }

        #[test]
        fn wrap_lands_on_opposite_face(w in 1u32..6, h in 1u32..6, d in 1u32..6, a in 0u32..36, b in 0u32..36) {
            let s = VoxelSample::new(dims(w, h, d));
            let (w, h, d) = (w as i32, h as i32, d as i32);
            let y = (a as i32) % h;
            let z = (b as i32) % d;
            // Across the -x face.
            let west = Position::new(0, y, z);
            prop_assert_eq!(
                s.relative(west, Offset::new(-1, 0, 0), Wrapping::Wrap),
                Some(Position::new(w - 1, y, z))
            );
            prop_assert_eq!(s.relative(west, Offset::new(-1, 0, 0), Wrapping::Cut), None);
            // Across the +y face.
            let x = (a as i32) % w;
            let top = Position::new(x, h - 1, z);
            prop_assert_eq!(s.relative(top, Offset::UP, Wrapping::Wrap), Some(Position::new(x, 0, z)));
            prop_assert_eq!(s.relative(top, Offset::UP, Wrapping::Cut), None);
            // Across the +z face.
            let north = Position::new(x, y, d - 1);
            prop_assert_eq!(
                s.relative(north, Offset::new(0, 0, 1), Wrapping::Wrap),
                Some(Position::new(x, y, 0))
            );
            prop_assert_eq!(s.relative(north, Offset::new(0, 0, 1), Wrapping::Cut), None);
        }

        #[test]
        fn digging_twice_changes_nothing(x in 0i32..4, y in 0i32..4, z in 0i32..4) {
            let mut s = VoxelSample::new(dims(4, 4, 4));
            s.set_block(Position::new(1, 1, 1), BlockType::Ore(OreKind::Diamond));
            s.dig(Position::new(x, y, z));
            let before = s.clone();
            s.dig(Position::new(x, y, z));
            prop_assert_eq!(&s, &before);
            prop_assert_eq!(s.dug_count(), before.dug_count());
            prop_assert_eq!(s.ore_count(), before.ore_count());
        }
    }
}
