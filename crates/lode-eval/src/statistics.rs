//! Evaluation statistics and dominance.

use std::fmt;

/// Ore and digging totals accumulated over evaluation samples.
///
/// Efficiency is the share of dug blocks that were ore, thoroughness the
/// share of ore present that was found, both in percent. Each is 100 when
/// its denominator is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    samples: u64,
    total_ore: u64,
    found_ore: u64,
    dug_blocks: u64,
}

impl Statistics {
    /// Statistics from raw totals over `samples` samples.
    pub fn from_totals(samples: u64, total_ore: u64, found_ore: u64, dug_blocks: u64) -> Self {
        Self {
            samples,
            total_ore,
            found_ore,
            dug_blocks,
        }
    }

    /// Account for one more evaluated sample.
    pub fn record(&mut self, total_ore: u64, found_ore: u64, dug_blocks: u64) {
        self.samples += 1;
        self.total_ore += total_ore;
        self.found_ore += found_ore;
        self.dug_blocks += dug_blocks;
    }

    /// Add another accumulator's totals to this one.
    pub fn merge(&mut self, other: &Statistics) {
        self.samples += other.samples;
        self.total_ore += other.total_ore;
        self.found_ore += other.found_ore;
        self.dug_blocks += other.dug_blocks;
    }

    /// Number of samples accounted for.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Ore present in the samples before digging.
    pub fn total_ore(&self) -> u64 {
        self.total_ore
    }

    /// Ore collected by the pattern.
    pub fn found_ore(&self) -> u64 {
        self.found_ore
    }

    /// Blocks dug, collected ore included.
    pub fn dug_blocks(&self) -> u64 {
        self.dug_blocks
    }

    /// Found ore per dug block, in percent.
    pub fn efficiency(&self) -> f64 {
        percent(self.found_ore, self.dug_blocks)
    }

    /// Found ore per ore present, in percent.
    pub fn thoroughness(&self) -> f64 {
        percent(self.found_ore, self.total_ore)
    }

    /// Whether `self` beats `other` by more than `margin` points on both
    /// efficiency and thoroughness.
    pub fn is_better_than(&self, other: &Statistics, margin: f64) -> bool {
        self.efficiency() > other.efficiency() + margin
            && self.thoroughness() > other.thoroughness() + margin
    }

    /// A multi-line table of per-sample averages and totals followed by
    /// the two ratios.
    pub fn report(&self) -> String {
        let per_sample = |v: u64| {
            if self.samples == 0 {
                0.0
            } else {
                v as f64 / self.samples as f64
            }
        };
        let mut out = String::new();
        out.push_str(&format!("            {:>10}  {:>12}\n", "Avg/sample", "Total"));
        for (label, value) in [
            ("Total ores:", self.total_ore),
            ("Found ores:", self.found_ore),
            ("Dug blocks:", self.dug_blocks),
        ] {
            out.push_str(&format!(
                "{label} {:>10.2}  {:>12}\n",
                per_sample(value),
                grouped(value)
            ));
        }
        out.push('\n');
        if self.dug_blocks == 0 {
            out.push_str("/!\\ The pattern didn't dig anything!\n");
        } else {
            out.push_str(&format!("Efficiency:    {:6.2}%\n", self.efficiency()));
            out.push_str(&format!("Thoroughness:  {:6.2}%\n", self.thoroughness()));
        }
        out
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// `1234567` as `1,234,567`.
fn grouped(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e={:.2}% t={:.2}%", self.efficiency(), self.thoroughness())
    }
}
