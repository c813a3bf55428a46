//! Miner entry points.

use std::fmt;

use crate::position::Position;

/// Height of the player in blocks: feet plus head.
pub const PLAYER_HEIGHT: i32 = 2;

/// A place where a miner enters the sample: two stacked blocks, feet below
/// head.
///
/// By convention accesses sit on the `z = 0` face, so patterns must be
/// oriented with their entry on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Access {
    /// Block holding the player's feet.
    pub feet: Position,
    /// Block holding the player's head.
    pub head: Position,
}

impl Access {
    /// An access with the feet at `(x, y, 0)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            feet: Position::new(x, y, 0),
            head: Position::new(x, y + PLAYER_HEIGHT - 1, 0),
        }
    }

    /// Both blocks of the access, feet first.
    pub const fn blocks(&self) -> [Position; 2] {
        [self.feet, self.head]
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Access({},{})", self.feet.x, self.feet.y)
    }
}
