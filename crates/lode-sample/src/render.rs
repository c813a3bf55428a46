//! Debug text dumps of samples.
//!
//! The layout is a diagnostic convenience and carries no compatibility
//! guarantee.

use lode_core::Position;

use crate::sample::VoxelSample;

impl VoxelSample {
    /// Render the sample as horizontal slices, top layer first.
    ///
    /// Each slice starts with a `y=<n>` line followed by one row per z,
    /// one glyph per x: `.` air, `#` stone, ore initials otherwise.
    pub fn render(&self) -> String {
        let dims = self.dimensions();
        let (w, h, d) = (dims.width() as i32, dims.height() as i32, dims.depth() as i32);
        let mut out = String::with_capacity(dims.volume() + (h * (d + 1)) as usize * 4);
        for y in (0..h).rev() {
            out.push_str(&format!("y={y}\n"));
            for z in 0..d {
                out.extend((0..w).map(|x| self.block(Position::new(x, y, z)).kind.glyph()));
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use lode_core::{BlockType, Dimensions, OreKind, Position};

    use crate::sample::VoxelSample;

    #[test]
    fn layers_top_down() {
        let mut s = VoxelSample::new(Dimensions::new(3, 2, 2).unwrap());
        s.dig(Position::new(0, 0, 0));
        s.set_block(Position::new(2, 1, 1), BlockType::Ore(OreKind::Diamond));
        assert_eq!(s.render(), "y=1\n###\n##D\ny=0\n.##\n###\n");
    }

    #[test]
    fn summary_line() {
        let mut s = VoxelSample::new(Dimensions::new(2, 2, 2).unwrap());
        s.dig(Position::new(1, 1, 1));
        assert_eq!(s.to_string(), "Size: 2x2x2  Dug: 1  Ore: 0");
    }
}
