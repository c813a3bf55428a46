//! Visibility and accessibility propagation from miner entry points.
//!
//! [`explore`] runs a breadth-first traversal from each access's head
//! block. Every visited block gets its `visible` flag: it is dug, or one
//! of its wrapped face neighbors is. The traversal only expands from dug
//! blocks, so undug blocks next to an opening are visited once as leaves
//! (that is how ore becomes visible) and the walk never tunnels through
//! stone. Each block is explored at most once, which bounds the traversal
//! by the sample volume.
//!
//! Dug blocks additionally resolve whether a player's head or feet could
//! occupy them. The rule is local and order dependent: it consults only
//! the vertical partner block and horizontal neighbors explored earlier in
//! the same traversal.

use std::collections::VecDeque;

use lode_core::{Access, Block, Offset, Position};

use crate::sample::VoxelSample;
use crate::wrapping::Wrapping;

/// Which half of the player a block is being tested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Head,
    Feet,
}

impl Slot {
    /// Direction from this slot to the other half of the player.
    fn toward_partner(self) -> Offset {
        match self {
            Slot::Head => Offset::DOWN,
            Slot::Feet => Offset::UP,
        }
    }

    fn holds(self, block: &Block) -> bool {
        match self {
            Slot::Head => block.head_accessible,
            Slot::Feet => block.feet_accessible,
        }
    }

    fn partner(self) -> Slot {
        match self {
            Slot::Head => Slot::Feet,
            Slot::Feet => Slot::Head,
        }
    }
}

/// Explore `sample` from every access, updating visibility and
/// accessibility flags. Returns the number of blocks visited.
///
/// Accesses lying partly outside the sample are skipped.
///
/// # Panics
///
/// If an access inside the sample has not been dug at feet or head level.
pub fn explore<'a, I>(sample: &mut VoxelSample, accesses: I) -> usize
where
    I: IntoIterator<Item = &'a Access>,
{
    let mut visited = 0;
    let mut frontier = VecDeque::new();
    for access in accesses {
        if !sample.contains(access.feet) || !sample.contains(access.head) {
            continue;
        }
        assert!(
            sample.is_dug(access.feet),
            "{access} has not been dug at feet level"
        );
        assert!(
            sample.is_dug(access.head),
            "{access} has not been dug at head level"
        );
        sample.block_mut(access.feet).feet_accessible = true;
        sample.block_mut(access.head).head_accessible = true;

        frontier.push_back(access.head);
        while let Some(p) = frontier.pop_front() {
            if sample.block(p).explored {
                continue;
            }
            explore_block(sample, p, &mut frontier);
            visited += 1;
        }
    }
    tracing::trace!(visited, "exploration finished");
    visited
}

fn explore_block(sample: &mut VoxelSample, p: Position, frontier: &mut VecDeque<Position>) {
    let neighbors = sample.adjacent(p, Wrapping::Wrap);
    let dug = sample.is_dug(p);
    let visible = dug || neighbors.iter().any(|&n| sample.is_dug(n));
    let (head, feet) = if dug {
        (
            can_hold(sample, p, Slot::Head),
            can_hold(sample, p, Slot::Feet),
        )
    } else {
        (false, false)
    };

    let block = sample.block_mut(p);
    block.visible |= visible;
    block.head_accessible |= head;
    block.feet_accessible |= feet;
    block.explored = true;

    if dug {
        for n in neighbors {
            if !sample.block(n).explored {
                frontier.push_back(n);
            }
        }
    }
}

/// Whether the dug block at `p` can hold the given half of the player.
///
/// For the head (the feet rule mirrors it vertically):
/// - the block below is feet-accessible;
/// - walk: an explored horizontal neighbor is head-accessible;
/// - jump-down: an explored horizontal neighbor is feet-accessible and the
///   block above `p` is dug;
/// - jump-up: an explored horizontal neighbor of the block below `p` is
///   head-accessible and the block above that neighbor is dug.
fn can_hold(sample: &VoxelSample, p: Position, slot: Slot) -> bool {
    let toward = slot.toward_partner();
    let partner = sample.relative(p, toward, Wrapping::Cut);
    if partner.is_some_and(|q| slot.partner().holds(sample.block(q))) {
        return true;
    }

    let away_dug = sample.is_dug_relative(p, -toward, Wrapping::Cut);
    let same_level = sample.horizontal_neighbors(p, Wrapping::WrapXz);
    let from_same_level = same_level.iter().any(|&n| {
        let nb = sample.block(n);
        nb.explored && (slot.holds(nb) || (slot.partner().holds(nb) && away_dug))
    });
    if from_same_level {
        return true;
    }

    let Some(partner) = partner else {
        return false;
    };
    sample
        .horizontal_neighbors(partner, Wrapping::WrapXz)
        .iter()
        .any(|&m| {
            let mb = sample.block(m);
            mb.explored && slot.holds(mb) && sample.is_dug_relative(m, -toward, Wrapping::Cut)
        })
}
