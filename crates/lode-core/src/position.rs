//! Integer positions and relative offsets inside a voxel sample.

use std::fmt;
use std::ops::{Add, Neg};

/// An absolute block position `(x, y, z)`.
///
/// `y` is the vertical axis. Positions are plain values: equality and
/// hashing are by coordinates, and nothing checks them against a sample
/// until they are used for a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal coordinate along the sample width.
    pub x: i32,
    /// Vertical coordinate along the sample height.
    pub y: i32,
    /// Horizontal coordinate along the sample depth.
    pub z: i32,
}

impl Position {
    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position one block up.
    pub const fn above(self) -> Self {
        Self::new(self.x, self.y + 1, self.z)
    }

    /// The position one block down.
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    /// The offset leading from `self` to `other`, without any wrapping.
    pub const fn offset_to(self, other: Position) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy, self.z + rhs.dz)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A relative displacement `(dx, dy, dz)` between two block positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Displacement along x.
    pub dx: i32,
    /// Displacement along y (vertical).
    pub dy: i32,
    /// Displacement along z.
    pub dz: i32,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Offset = Offset::new(0, 0, 0);
    /// One block up.
    pub const UP: Offset = Offset::new(0, 1, 0);
    /// One block down.
    pub const DOWN: Offset = Offset::new(0, -1, 0);
    /// The six face directions, in `+x, -x, +y, -y, +z, -z` order.
    pub const FACES: [Offset; 6] = [
        Offset::new(1, 0, 0),
        Offset::new(-1, 0, 0),
        Offset::new(0, 1, 0),
        Offset::new(0, -1, 0),
        Offset::new(0, 0, 1),
        Offset::new(0, 0, -1),
    ];
    /// The four horizontal face directions, in `+x, -x, +z, -z` order.
    pub const HORIZONTAL: [Offset; 4] = [
        Offset::new(1, 0, 0),
        Offset::new(-1, 0, 0),
        Offset::new(0, 0, 1),
        Offset::new(0, 0, -1),
    ];

    /// Create an offset from its three components.
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// Squared Euclidean length.
    pub const fn sq_norm(self) -> i32 {
        self.dx * self.dx + self.dy * self.dy + self.dz * self.dz
    }

    /// Whether the offset has no horizontal component.
    pub const fn is_vertical(self) -> bool {
        self.dx == 0 && self.dz == 0
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.dx + rhs.dx, self.dy + rhs.dy, self.dz + rhs.dz)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.dx, -self.dy, -self.dz)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}, {:+}, {:+}", self.dx, self.dy, self.dz)
    }
}
