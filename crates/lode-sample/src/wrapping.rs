//! Boundary handling for relative lookups.

/// How a relative lookup treats coordinates that leave the sample.
///
/// Samples are slices of a larger world whose horizontal layout repeats,
/// so x and z usually wrap. The vertical axis does not repeat (ore
/// frequencies depend on height), so lookups that must stay physical use
/// [`Wrapping::Cut`] or [`Wrapping::WrapXz`].
///
/// # Examples
///
/// ```
/// use lode_core::{Dimensions, Offset, Position};
/// use lode_sample::{VoxelSample, Wrapping};
///
/// let sample = VoxelSample::new(Dimensions::new(4, 4, 4).unwrap());
/// let corner = Position::new(0, 0, 0);
///
/// // Cut: stepping off the edge finds nothing.
/// assert!(sample.relative(corner, Offset::new(-1, 0, 0), Wrapping::Cut).is_none());
///
/// // Wrap: stepping off the edge lands on the opposite face.
/// let wrapped = sample.relative(corner, Offset::new(-1, 0, 0), Wrapping::Wrap);
/// assert_eq!(wrapped, Some(Position::new(3, 0, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wrapping {
    /// Out-of-bounds targets do not exist.
    Cut,
    /// Every axis is periodic.
    Wrap,
    /// x and z are periodic, y is cut.
    WrapXz,
}

impl Wrapping {
    /// Whether the horizontal axes wrap.
    pub const fn wraps_horizontally(self) -> bool {
        matches!(self, Wrapping::Wrap | Wrapping::WrapXz)
    }

    /// Whether the vertical axis wraps.
    pub const fn wraps_vertically(self) -> bool {
        matches!(self, Wrapping::Wrap)
    }
}

/// Resolve one axis value against `len`, wrapping when `wrap` is set.
/// Returns `None` for an out-of-range value on a cut axis.
pub(crate) fn resolve_axis(val: i32, len: u32, wrap: bool) -> Option<i32> {
    let n = len as i32;
    if (0..n).contains(&val) {
        return Some(val);
    }
    if wrap {
        Some(val.rem_euclid(n))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_untouched() {
        for wrap in [false, true] {
            assert_eq!(resolve_axis(0, 4, wrap), Some(0));
            assert_eq!(resolve_axis(3, 4, wrap), Some(3));
        }
    }

    #[test]
    fn cut_drops_out_of_range() {
        assert_eq!(resolve_axis(-1, 4, false), None);
        assert_eq!(resolve_axis(4, 4, false), None);
    }

    #[test]
    fn wrap_is_periodic() {
        assert_eq!(resolve_axis(-1, 4, true), Some(3));
        assert_eq!(resolve_axis(4, 4, true), Some(0));
        assert_eq!(resolve_axis(-9, 4, true), Some(3));
        assert_eq!(resolve_axis(13, 4, true), Some(1));
    }

    #[test]
    fn mode_flags() {
        assert!(!Wrapping::Cut.wraps_horizontally());
        assert!(!Wrapping::Cut.wraps_vertically());
        assert!(Wrapping::Wrap.wraps_horizontally());
        assert!(Wrapping::Wrap.wraps_vertically());
        assert!(Wrapping::WrapXz.wraps_horizontally());
        assert!(!Wrapping::WrapXz.wraps_vertically());
    }
}
