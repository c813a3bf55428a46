//! How far a player can reach when digging.

use std::fmt;

use lode_core::Offset;

/// `STRICT[|dy|][|dx|]` is the largest reachable `|dz|`; `-1` means none.
const STRICT: [&[i32]; 4] = [
    &[5, 5, 5, 5, 4, 3],
    &[5, 5, 5, 5, 4, 3],
    &[5, 5, 5, 4, 3, 2],
    &[4, 4, 4, 4, 3, -1],
];

const PRESSING_SHIFT: [&[i32]; 4] = [
    &[6, 6, 6, 5, 5, 4, 2],
    &[6, 6, 6, 5, 5, 4, 2],
    &[6, 6, 5, 5, 5, 4, 1],
    &[5, 5, 5, 5, 4, 3, -1],
];

/// The set of offsets from the head a player can dig.
///
/// Both ranges are symmetric in `±x`, `±y` and `±z`, and narrow as the
/// target gets further from the head's layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigRange {
    /// The player stands on the middle of its block.
    #[default]
    Strict,
    /// The player leans over the edge of its block while sneaking, which
    /// extends the reach by about one block.
    PressingShift,
}

impl DigRange {
    fn rows(self) -> &'static [&'static [i32]; 4] {
        match self {
            DigRange::Strict => &STRICT,
            DigRange::PressingShift => &PRESSING_SHIFT,
        }
    }

    /// Largest reachable `|dy|`.
    pub fn max_dy(self) -> i32 {
        self.rows().len() as i32 - 1
    }

    /// Largest reachable `|dx|` on the layer `dy`, or `None` if the layer
    /// is out of reach.
    pub fn max_dx(self, dy: i32) -> Option<i32> {
        self.row(dy).map(|row| row.len() as i32 - 1)
    }

    fn row(self, dy: i32) -> Option<&'static [i32]> {
        self.rows().get(dy.unsigned_abs() as usize).copied()
    }

    /// Whether `offset` is within reach.
    pub fn contains(self, offset: Offset) -> bool {
        let Some(row) = self.row(offset.dy) else {
            return false;
        };
        row.get(offset.dx.unsigned_abs() as usize)
            .is_some_and(|&max_dz| offset.dz.abs() <= max_dz)
    }

    /// Every offset within reach, layer by layer from the lowest, `x`
    /// then `z` ascending.
    pub fn offsets(self) -> impl Iterator<Item = Offset> {
        let max_dy = self.max_dy();
        (-max_dy..=max_dy).flat_map(move |dy| {
            let max_dx = self.max_dx(dy).unwrap_or(-1);
            (-max_dx..=max_dx).flat_map(move |dx| {
                let max_dz = self
                    .row(dy)
                    .and_then(|row| row.get(dx.unsigned_abs() as usize))
                    .copied()
                    .unwrap_or(-1);
                (-max_dz..=max_dz).map(move |dz| Offset::new(dx, dy, dz))
            })
        })
    }
}

impl fmt::Display for DigRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigRange::Strict => write!(f, "strict"),
            DigRange::PressingShift => write!(f, "pressing-shift"),
        }
    }
}
