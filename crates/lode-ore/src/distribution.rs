//! Per-ore vein parameters.

use lode_core::OreKind;
use rand::Rng;

use crate::error::OreError;

/// How the height of a vein center is drawn, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VeinPlacement {
    /// Uniform over `[min_y, max_y)`.
    Uniform {
        /// Lowest possible center height.
        min_y: i32,
        /// One past the highest possible center height.
        max_y: i32,
    },
    /// Sum of two uniform draws over `[0, spread)`, shifted so the mode is
    /// `center`. Concentrates veins around one layer.
    Triangular {
        /// Most likely center height.
        center: i32,
        /// Half-width of the distribution.
        spread: i32,
    },
}

impl VeinPlacement {
    /// Draw a vein center height.
    pub fn sample_y<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        match *self {
            VeinPlacement::Uniform { min_y, max_y } => rng.gen_range(min_y..max_y),
            VeinPlacement::Triangular { center, spread } => {
                rng.gen_range(0..spread) + rng.gen_range(0..spread) + center - spread
            }
        }
    }

    /// Lowest and highest center height this placement can produce.
    pub fn y_bounds(&self) -> (i32, i32) {
        match *self {
            VeinPlacement::Uniform { min_y, max_y } => (min_y, max_y - 1),
            VeinPlacement::Triangular { center, spread } => {
                (center - spread, center + spread - 2)
            }
        }
    }
}

/// Generation parameters for one ore kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VeinSpec {
    /// Ore placed by these veins.
    pub kind: OreKind,
    /// Upper bound on the blocks stamped by a single vein.
    pub max_vein_size: u32,
    /// Veins attempted per generation chunk.
    pub veins_per_chunk: u32,
    /// Where vein centers are placed vertically.
    pub placement: VeinPlacement,
}

impl VeinSpec {
    fn validate(&self) -> Result<(), OreError> {
        if self.max_vein_size == 0 {
            return Err(OreError::ZeroVeinSize { kind: self.kind });
        }
        match self.placement {
            VeinPlacement::Uniform { min_y, max_y } if max_y <= min_y => {
                Err(OreError::EmptyYRange {
                    kind: self.kind,
                    min_y,
                    max_y,
                })
            }
            VeinPlacement::Triangular { spread, .. } if spread <= 0 => {
                Err(OreError::ZeroSpread { kind: self.kind })
            }
            _ => Ok(()),
        }
    }
}

/// The set of veins generated into every chunk, in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OreDistribution {
    veins: Vec<VeinSpec>,
}

impl OreDistribution {
    /// A validated distribution.
    ///
    /// Returns `Err` if a spec has a zero vein size or an empty height
    /// range.
    pub fn new(veins: Vec<VeinSpec>) -> Result<Self, OreError> {
        veins.iter().try_for_each(VeinSpec::validate)?;
        Ok(Self { veins })
    }

    /// The classic overworld distribution: coal, iron, gold, redstone and
    /// diamond at uniform heights, lapis around layer 16.
    pub fn classic() -> Self {
        let uniform = |kind, max_vein_size, veins_per_chunk, max_y| VeinSpec {
            kind,
            max_vein_size,
            veins_per_chunk,
            placement: VeinPlacement::Uniform { min_y: 0, max_y },
        };
        Self {
            veins: vec![
                uniform(OreKind::Coal, 16, 20, 128),
                uniform(OreKind::Iron, 8, 20, 64),
                uniform(OreKind::Gold, 8, 2, 32),
                uniform(OreKind::Redstone, 7, 8, 16),
                uniform(OreKind::Diamond, 7, 1, 16),
                VeinSpec {
                    kind: OreKind::Lapis,
                    max_vein_size: 6,
                    veins_per_chunk: 1,
                    placement: VeinPlacement::Triangular {
                        center: 16,
                        spread: 16,
                    },
                },
            ],
        }
    }

    /// An empty distribution. Generators using it never place ore.
    pub fn empty() -> Self {
        Self { veins: Vec::new() }
    }

    /// The vein specs, in generation order.
    pub fn veins(&self) -> &[VeinSpec] {
        &self.veins
    }

    /// The spec for `kind`, if present.
    pub fn spec(&self, kind: OreKind) -> Option<&VeinSpec> {
        self.veins.iter().find(|v| v.kind == kind)
    }
}

impl Default for OreDistribution {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn classic_covers_every_ore() {
        let d = OreDistribution::classic();
        for kind in OreKind::ALL {
            assert!(d.spec(kind).is_some(), "{kind} missing");
        }
        assert_eq!(d.spec(OreKind::Coal).unwrap().veins_per_chunk, 20);
        assert_eq!(d.spec(OreKind::Diamond).unwrap().max_vein_size, 7);
        assert_eq!(OreDistribution::default(), d);
    }

    #[test]
    fn classic_is_valid() {
        let d = OreDistribution::classic();
        assert!(OreDistribution::new(d.veins().to_vec()).is_ok());
    }

    #[test]
    fn empty_range_rejected() {
        let spec = VeinSpec {
            kind: OreKind::Gold,
            max_vein_size: 4,
            veins_per_chunk: 1,
            placement: VeinPlacement::Uniform { min_y: 10, max_y: 10 },
        };
        assert_eq!(
            OreDistribution::new(vec![spec]),
            Err(OreError::EmptyYRange {
                kind: OreKind::Gold,
                min_y: 10,
                max_y: 10
            })
        );
    }

    #[test]
    fn zero_spread_and_size_rejected() {
        let spread = VeinSpec {
            kind: OreKind::Lapis,
            max_vein_size: 4,
            veins_per_chunk: 1,
            placement: VeinPlacement::Triangular { center: 5, spread: 0 },
        };
        assert_eq!(
            OreDistribution::new(vec![spread]),
            Err(OreError::ZeroSpread { kind: OreKind::Lapis })
        );
        let size = VeinSpec {
            max_vein_size: 0,
            placement: VeinPlacement::Uniform { min_y: 0, max_y: 4 },
            ..spread
        };
        assert_eq!(
            OreDistribution::new(vec![size]),
            Err(OreError::ZeroVeinSize { kind: OreKind::Lapis })
        );
    }

    proptest! {
        #[test]
        fn drawn_heights_stay_in_bounds(seed: u64, center in -20i32..40, spread in 1i32..20, min in -10i32..10, len in 1i32..30) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for placement in [
                VeinPlacement::Triangular { center, spread },
                VeinPlacement::Uniform { min_y: min, max_y: min + len },
            ] {
                let (lo, hi) = placement.y_bounds();
                for _ in 0..32 {
                    let y = placement.sample_y(&mut rng);
                    prop_assert!(lo <= y && y <= hi, "{y} outside [{lo}, {hi}]");
                }
            }
        }
    }
}
