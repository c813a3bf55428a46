//! Sample dimensions and the dense index layout.

use std::fmt;

use crate::access::PLAYER_HEIGHT;
use crate::error::SampleError;
use crate::position::Position;

/// Size of a sample along each axis.
///
/// Blocks are stored densely with `index(x, y, z) = x + y·width +
/// z·width·height`. Construction rejects empty sizes and volumes that
/// do not fit a `u32` index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
    depth: u32,
}

impl Dimensions {
    /// The space taken by one player: 1 wide, [`PLAYER_HEIGHT`] tall, 1 deep.
    pub const PLAYER: Dimensions = Dimensions {
        width: 1,
        height: PLAYER_HEIGHT as u32,
        depth: 1,
    };

    /// One chunk wide and deep, five blocks tall.
    pub const DEFAULT_SAMPLE: Dimensions = Dimensions {
        width: 16,
        height: 5,
        depth: 16,
    };

    /// Create validated dimensions.
    ///
    /// Returns `Err(SampleError::EmptySample)` if any axis is zero and
    /// `Err(SampleError::DimensionTooLarge)` if the volume overflows `u32`.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, SampleError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(SampleError::EmptySample);
        }
        let volume = u64::from(width) * u64::from(height) * u64::from(depth);
        // Coordinates are i32, so every axis must fit too.
        if volume > u64::from(u32::MAX) || width.max(height).max(depth) > i32::MAX as u32 {
            return Err(SampleError::DimensionTooLarge {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Size along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Size along y (vertical).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size along z.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total number of blocks.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Whether `(x, y, z)` lies inside the sample.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.width as i32).contains(&x)
            && (0..self.height as i32).contains(&y)
            && (0..self.depth as i32).contains(&z)
    }

    /// Dense index of an in-bounds position, or `None`.
    pub fn index_of(&self, p: Position) -> Option<usize> {
        if !self.contains(p.x, p.y, p.z) {
            return None;
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Some(p.x as usize + p.y as usize * w + p.z as usize * w * h)
    }

    /// Dense index of `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the sample.
    pub fn index(&self, p: Position) -> usize {
        match self.index_of(p) {
            Some(i) => i,
            None => panic!("position {p} out of bounds for sample {self}"),
        }
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    ///
    /// If `index >= volume()`.
    pub fn position_of(&self, index: usize) -> Position {
        assert!(
            index < self.volume(),
            "index {index} out of bounds for sample {self}"
        );
        let (w, h) = (self.width as usize, self.height as usize);
        Position::new(
            (index % w) as i32,
            ((index / w) % h) as i32,
            (index / (w * h)) as i32,
        )
    }

    /// Every position, in index order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.volume()).map(move |i| self.position_of(i))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}
