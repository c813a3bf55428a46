//! Actions a miner can take from its current head position.
//!
//! Actions are relative: the same [`Action`] means different blocks
//! depending on where the head is. Moves change the head position, digs
//! change the sample.

use std::fmt;

use lode_core::{Offset, Position};
use lode_sample::{VoxelSample, Wrapping};

use crate::error::ActionError;
use crate::range::DigRange;
use crate::sight;

// ── MoveAction ─────────────────────────────────────────────────────

/// A one-block horizontal step, optionally climbing or dropping one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveAction {
    offset: Offset,
}

impl MoveAction {
    /// Create a move.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] unless exactly one of `dx`, `dz` is `±1`,
    /// the other is zero and `|dy| <= 1`.
    pub fn new(dx: i32, dy: i32, dz: i32) -> Result<Self, ActionError> {
        if dy.abs() > 1 {
            return Err(ActionError::ClimbTooHigh { dy });
        }
        if dx == 0 && dz == 0 {
            return Err(ActionError::ZeroMove);
        }
        if dx != 0 && dz != 0 {
            return Err(ActionError::DiagonalMove);
        }
        if dx.abs() > 1 || dz.abs() > 1 {
            return Err(ActionError::MoveTooLong);
        }
        Ok(Self {
            offset: Offset::new(dx, dy, dz),
        })
    }

    /// The 12 legal moves: 4 directions, each level, up or down.
    pub fn all() -> Vec<MoveAction> {
        const STEPS: [i32; 3] = [0, 1, -1];
        let mut moves = Vec::with_capacity(12);
        for dy in STEPS {
            for dx in STEPS {
                for dz in STEPS {
                    if (dx == 0) == (dz == 0) {
                        continue;
                    }
                    moves.push(MoveAction {
                        offset: Offset::new(dx, dy, dz),
                    });
                }
            }
        }
        moves
    }

    /// Displacement of the head.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Where the head lands when moving from `head`, or `None` if the
    /// destination leaves the sample vertically.
    pub fn destination(&self, sample: &VoxelSample, head: Position) -> Option<Position> {
        sample.relative(head, self.offset, Wrapping::WrapXz)
    }

    /// Whether the player can take this step from `head`.
    ///
    /// Both destination blocks must be dug. Climbing also needs the block
    /// above the current head open, dropping needs the block above the
    /// destination head open.
    pub fn is_valid_for(&self, sample: &VoxelSample, head: Position) -> bool {
        let Some(dest) = self.destination(sample, head) else {
            return false;
        };
        if !sample.is_dug(dest) || !sample.is_dug_relative(dest, Offset::DOWN, Wrapping::Cut) {
            return false;
        }
        match self.offset.dy {
            1 => sample.is_dug_relative(head, Offset::UP, Wrapping::Cut),
            -1 => sample.is_dug_relative(dest, Offset::UP, Wrapping::Cut),
            _ => true,
        }
    }

    /// Whether `other` undoes this move.
    pub fn is_inverse_of(&self, other: &MoveAction) -> bool {
        self.offset == -other.offset
    }
}

impl fmt::Display for MoveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Offset { dx, dy, dz } = self.offset;
        write!(f, "MoveOf({dx},{dy},{dz})")
    }
}

// ── DigAction ──────────────────────────────────────────────────────

/// Digging one block at an offset from the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigAction {
    offset: Offset,
}

impl DigAction {
    /// Create a dig.
    ///
    /// # Errors
    ///
    /// Returns `Err(ActionError::VerticalDig)` for targets straight above
    /// or below the player, and `Err(ActionError::OutOfReach)` for targets
    /// beyond the widest [`DigRange`].
    pub fn new(dx: i32, dy: i32, dz: i32) -> Result<Self, ActionError> {
        let offset = Offset::new(dx, dy, dz);
        if offset.is_vertical() {
            return Err(ActionError::VerticalDig);
        }
        if !DigRange::PressingShift.contains(offset) {
            return Err(ActionError::OutOfReach {
                offset: offset.to_string(),
            });
        }
        Ok(Self { offset })
    }

    /// Every dig within `range`, nearest first.
    ///
    /// Ties in squared distance keep the range's enumeration order, so the
    /// result is deterministic.
    pub fn all(range: DigRange) -> Vec<DigAction> {
        let mut digs: Vec<DigAction> = range
            .offsets()
            .filter(|o| !o.is_vertical())
            .map(|offset| DigAction { offset })
            .collect();
        digs.sort_by_key(|d| d.offset.sq_norm());
        digs
    }

    /// Displacement of the target from the head.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The block dug from `head`, or `None` if it leaves the sample
    /// vertically.
    pub fn target(&self, sample: &VoxelSample, head: Position) -> Option<Position> {
        sample.relative(head, self.offset, Wrapping::WrapXz)
    }

    /// Whether the target exists, is still solid and can be seen from
    /// `head`.
    pub fn is_valid_for(&self, sample: &VoxelSample, head: Position) -> bool {
        self.target(sample, head)
            .is_some_and(|t| !sample.is_dug(t) && sight::is_clear(sample, head, self.offset))
    }
}

impl fmt::Display for DigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Offset { dx, dy, dz } = self.offset;
        write!(f, "Dig({dx},{dy},{dz})")
    }
}

// ── Action ─────────────────────────────────────────────────────────

/// Either kind of action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Change the head position.
    Move(MoveAction),
    /// Dig a block.
    Dig(DigAction),
}

impl Action {
    /// Whether the action can be taken with the head at `head`.
    pub fn is_valid_for(&self, sample: &VoxelSample, head: Position) -> bool {
        match self {
            Action::Move(m) => m.is_valid_for(sample, head),
            Action::Dig(d) => d.is_valid_for(sample, head),
        }
    }

    /// Whether this action undoes `previous`. Digs have no inverse.
    pub fn is_inverse_of(&self, previous: &Action) -> bool {
        match (self, previous) {
            (Action::Move(m), Action::Move(p)) => m.is_inverse_of(p),
            _ => false,
        }
    }

    /// Whether this is a dig.
    pub fn is_dig(&self) -> bool {
        matches!(self, Action::Dig(_))
    }
}

impl From<MoveAction> for Action {
    fn from(m: MoveAction) -> Self {
        Action::Move(m)
    }
}

impl From<DigAction> for Action {
    fn from(d: DigAction) -> Self {
        Action::Dig(d)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(m) => fmt::Display::fmt(m, f),
            Action::Dig(d) => fmt::Display::fmt(d, f),
        }
    }
}

// ── ActionSet ──────────────────────────────────────────────────────

/// The catalogue of actions tried when expanding a search state: every
/// move, then every dig within a [`DigRange`] nearest first.
#[derive(Clone, Debug)]
pub struct ActionSet {
    range: DigRange,
    actions: Vec<Action>,
}

impl ActionSet {
    /// The catalogue for `range`.
    pub fn new(range: DigRange) -> Self {
        let moves = MoveAction::all().into_iter().map(Action::from);
        let digs = DigAction::all(range).into_iter().map(Action::from);
        Self {
            range,
            actions: moves.chain(digs).collect(),
        }
    }

    /// The dig range the catalogue was built for.
    pub fn range(&self) -> DigRange {
        self.range
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalogue is empty. Never true for a real range.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The actions, moves first.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionSet {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_core::Dimensions;

    fn stone(w: u32, h: u32, d: u32) -> VoxelSample {
        VoxelSample::new(Dimensions::new(w, h, d).unwrap())
    }

    /// A 2-high tunnel along x at z = 0, feet at y = 1.
    fn tunnel(len: i32) -> VoxelSample {
        let mut s = stone(8, 5, 4);
        for x in 0..len {
            s.dig(Position::new(x, 1, 0));
            s.dig(Position::new(x, 2, 0));
        }
        s
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn move_constructor_rejects_malformed() {
        assert_eq!(MoveAction::new(0, 0, 0), Err(ActionError::ZeroMove));
        assert_eq!(MoveAction::new(0, 1, 0), Err(ActionError::ZeroMove));
        assert_eq!(MoveAction::new(1, 0, 1), Err(ActionError::DiagonalMove));
        assert_eq!(MoveAction::new(2, 0, 0), Err(ActionError::MoveTooLong));
        assert_eq!(MoveAction::new(1, 2, 0), Err(ActionError::ClimbTooHigh { dy: 2 }));
        assert!(MoveAction::new(0, -1, 1).is_ok());
    }

    #[test]
    fn dig_constructor_rejects_malformed() {
        assert_eq!(DigAction::new(0, 1, 0), Err(ActionError::VerticalDig));
        assert!(matches!(DigAction::new(9, 0, 0), Err(ActionError::OutOfReach { .. })));
        assert!(DigAction::new(1, 0, 0).is_ok());
    }

    #[test]
    fn twelve_moves() {
        let moves = MoveAction::all();
        assert_eq!(moves.len(), 12);
        for m in &moves {
            let o = m.offset();
            assert_eq!(MoveAction::new(o.dx, o.dy, o.dz).as_ref(), Ok(m));
        }
    }

    #[test]
    fn digs_sorted_by_distance() {
        let digs = DigAction::all(DigRange::Strict);
        assert!(digs.windows(2).all(|w| w[0].offset().sq_norm() <= w[1].offset().sq_norm()));
        assert!(digs.iter().all(|d| !d.offset().is_vertical()));
        assert_eq!(digs[0].offset().sq_norm(), 1);
        assert_eq!(digs.iter().filter(|d| d.offset().sq_norm() == 1).count(), 4);
    }

    #[test]
    fn action_set_layout() {
        let set = ActionSet::new(DigRange::Strict);
        assert_eq!(set.len(), 12 + DigAction::all(DigRange::Strict).len());
        assert!(set.iter().take(12).all(|a| !a.is_dig()));
        assert!(set.iter().skip(12).all(Action::is_dig));
        assert!(ActionSet::new(DigRange::PressingShift).len() > set.len());
    }

    // ── Moves ───────────────────────────────────────────────────

    #[test]
    fn walk_along_tunnel() {
        let s = tunnel(3);
        let head = Position::new(0, 2, 0);
        let east = MoveAction::new(1, 0, 0).unwrap();
        let north = MoveAction::new(0, 0, 1).unwrap();
        assert!(east.is_valid_for(&s, head));
        assert_eq!(east.destination(&s, head), Some(Position::new(1, 2, 0)));
        assert!(!north.is_valid_for(&s, head));
    }

    #[test]
    fn moves_wrap_horizontally() {
        let mut s = tunnel(1);
        s.dig(Position::new(7, 1, 0));
        s.dig(Position::new(7, 2, 0));
        let west = MoveAction::new(-1, 0, 0).unwrap();
        let head = Position::new(0, 2, 0);
        assert!(west.is_valid_for(&s, head));
        assert_eq!(west.destination(&s, head), Some(Position::new(7, 2, 0)));
    }

    #[test]
    fn climbing_needs_headroom() {
        let mut s = tunnel(1);
        // Step up: feet (1,2,0), head (1,3,0).
        s.dig(Position::new(1, 2, 0));
        s.dig(Position::new(1, 3, 0));
        let head = Position::new(0, 2, 0);
        let up = MoveAction::new(1, 1, 0).unwrap();
        assert!(!up.is_valid_for(&s, head));
        s.dig(Position::new(0, 3, 0));
        assert!(up.is_valid_for(&s, head));
    }

    #[test]
    fn dropping_needs_room_ahead() {
        let mut s = tunnel(1);
        // Step down: feet (1,0,0), head (1,1,0).
        s.dig(Position::new(1, 0, 0));
        s.dig(Position::new(1, 1, 0));
        let head = Position::new(0, 2, 0);
        let down = MoveAction::new(1, -1, 0).unwrap();
        assert!(!down.is_valid_for(&s, head));
        s.dig(Position::new(1, 2, 0));
        assert!(down.is_valid_for(&s, head));
    }

    #[test]
    fn cannot_leave_vertically() {
        let mut s = stone(3, 2, 3);
        s.dig(Position::new(0, 0, 0));
        s.dig(Position::new(0, 1, 0));
        let up = MoveAction::new(1, 1, 0).unwrap();
        assert_eq!(up.destination(&s, Position::new(0, 1, 0)), None);
        assert!(!up.is_valid_for(&s, Position::new(0, 1, 0)));
    }

    #[test]
    fn inverse_moves() {
        let a = MoveAction::new(1, 1, 0).unwrap();
        let b = MoveAction::new(-1, -1, 0).unwrap();
        let c = MoveAction::new(-1, 0, 0).unwrap();
        assert!(a.is_inverse_of(&b));
        assert!(!a.is_inverse_of(&c));
        let dig = Action::Dig(DigAction::new(1, 0, 0).unwrap());
        assert!(!dig.is_inverse_of(&dig));
        assert!(!Action::Move(a).is_inverse_of(&dig));
        assert!(Action::Move(b).is_inverse_of(&Action::Move(a)));
    }

    // ── Digs ────────────────────────────────────────────────────

    #[test]
    fn dig_requires_solid_target() {
        let s = tunnel(2);
        let head = Position::new(0, 2, 0);
        let east = DigAction::new(1, 0, 0).unwrap();
        assert!(!east.is_valid_for(&s, head));
        let north = DigAction::new(0, 0, 1).unwrap();
        assert!(north.is_valid_for(&s, head));
        assert_eq!(north.target(&s, head), Some(Position::new(0, 2, 1)));
    }

    #[test]
    fn dig_outside_vertically_is_invalid() {
        let mut s = stone(4, 3, 4);
        s.dig(Position::new(1, 1, 1));
        s.dig(Position::new(1, 2, 1));
        let head = Position::new(1, 2, 1);
        // Above-diagonal with the ceiling outside the sample.
        let up = DigAction::new(1, 1, 0).unwrap();
        assert!(!up.is_valid_for(&s, head));
    }

    #[test]
    fn far_dig_needs_line_of_sight() {
        let s = tunnel(1);
        let head = Position::new(0, 2, 0);
        let far = DigAction::new(3, 0, 0).unwrap();
        assert!(!far.is_valid_for(&s, head));
        let s = tunnel(3);
        assert!(far.is_valid_for(&s, head));
    }

    #[test]
    fn display_forms() {
        assert_eq!(MoveAction::new(1, -1, 0).unwrap().to_string(), "MoveOf(1,-1,0)");
        assert_eq!(Action::from(DigAction::new(0, 1, -2).unwrap()).to_string(), "Dig(0,1,-2)");
    }
}
