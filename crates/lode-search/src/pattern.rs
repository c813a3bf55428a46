//! Patterns produced by the search.

use std::fmt;

use lode_core::{Access, Dimensions, Position};
use lode_sample::{DiggingPattern, VoxelSample};

use crate::action::Action;

/// A digging pattern found by [`PatternSearch`](crate::PatternSearch).
///
/// The pattern remembers the blocks dug inside its tiling cell, which has
/// the dimensions of the search sample, together with the accesses and the
/// actions each of them took. Digging it into a sample replays the dug
/// blocks, not the actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPattern {
    dims: Dimensions,
    tracks: Vec<(Access, Vec<Action>)>,
    /// Sorted, inside `dims`.
    dug: Vec<Position>,
}

impl GeneratedPattern {
    pub(crate) fn from_state(
        dims: Dimensions,
        tracks: Vec<(Access, Vec<Action>)>,
        dug: Vec<Position>,
    ) -> Self {
        Self { dims, tracks, dug }
    }

    /// Number of blocks dug per cell, accesses included.
    pub fn dug_count(&self) -> usize {
        self.dug.len()
    }

    /// Blocks dug inside the cell at the origin.
    pub fn dug_positions(&self) -> &[Position] {
        &self.dug
    }

    /// Total number of actions taken to produce this pattern.
    pub fn action_count(&self) -> usize {
        self.tracks.iter().map(|(_, h)| h.len()).sum()
    }

    /// Accesses of the cell at the origin, in declaration order.
    pub fn cell_accesses(&self) -> impl Iterator<Item = &Access> + '_ {
        self.tracks.iter().map(|(a, _)| a)
    }

    /// The actions `access` took, oldest first.
    pub fn history(&self, access: &Access) -> Option<&[Action]> {
        self.tracks
            .iter()
            .find(|(a, _)| a == access)
            .map(|(_, h)| h.as_slice())
    }

    /// Dig the pattern into a stone sample of its own dimensions and
    /// render it as text. For inspection only.
    pub fn render(&self) -> String {
        let mut sample = VoxelSample::new(self.dims);
        self.dig_tiles(&mut sample);
        sample.render()
    }
}

impl DiggingPattern for GeneratedPattern {
    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn accesses(&self, origin_x: i32, origin_y: i32) -> Vec<Access> {
        self.tracks
            .iter()
            .map(|(a, _)| Access::new(a.feet.x + origin_x, a.feet.y + origin_y))
            .collect()
    }

    fn dig_cell(&self, sample: &mut VoxelSample, origin: Position) {
        for p in &self.dug {
            sample.dig_if_inside(Position::new(p.x + origin.x, p.y + origin.y, p.z + origin.z));
        }
    }
}

impl fmt::Display for GeneratedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dug blocks", self.dug.len())?;
        for (access, history) in &self.tracks {
            write!(f, "  {access}:")?;
            if history.is_empty() {
                write!(f, " -")?;
            }
            for action in history {
                write!(f, " {action}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DigAction, MoveAction};

    fn pattern() -> GeneratedPattern {
        let access = Access::new(1, 0);
        let dug = vec![
            Position::new(1, 0, 0),
            Position::new(2, 0, 0),
            Position::new(1, 1, 0),
        ];
        let history = vec![
            Action::Dig(DigAction::new(1, -1, 0).unwrap()),
            Action::Move(MoveAction::new(0, 0, 1).unwrap()),
        ];
        GeneratedPattern::from_state(
            Dimensions::new(3, 2, 2).unwrap(),
            vec![(access, history)],
            dug,
        )
    }

    #[test]
    fn accessors() {
        let p = pattern();
        assert_eq!(p.dug_count(), 3);
        assert_eq!(p.action_count(), 2);
        assert_eq!(p.cell_accesses().count(), 1);
        assert!(p.history(&Access::new(0, 0)).is_none());
    }

    #[test]
    fn tiles_with_its_own_period() {
        let p = pattern();
        let mut s = VoxelSample::new(Dimensions::new(6, 2, 4).unwrap());
        let accesses = p.dig_tiles(&mut s);
        assert_eq!(s.dug_count(), 3 * 4);
        assert_eq!(accesses, vec![Access::new(1, 0), Access::new(4, 0)]);
        assert!(s.is_dug(Position::new(5, 0, 2)));
    }

    #[test]
    fn dig_explores_from_accesses() {
        let p = pattern();
        let mut s = VoxelSample::new(Dimensions::new(3, 2, 2).unwrap());
        s.set_block(Position::new(0, 0, 0), lode_core::BlockType::Ore(lode_core::OreKind::Coal));
        assert_eq!(p.dig(&mut s), 1);
    }

    #[test]
    fn render_and_display() {
        let p = pattern();
        assert_eq!(p.render(), "y=1\n#.#\n###\ny=0\n#..\n###\n");
        assert_eq!(p.to_string(), "3 dug blocks  Access(1,0): Dig(1,-1,0) MoveOf(0,0,1)");
    }
}
