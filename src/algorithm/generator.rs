//! Tower footprint and color sources
//!
//! The simulation pulls every new tower from a [`FootprintSource`]. The random
//! source reproduces the classic generator: a random anchor cell and a random
//! extent that always stays inside the grid.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::TOWER_ALPHA;
use crate::spatial::Footprint;

/// RGBA display color of a tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TowerColor(pub [u8; 4]);

impl TowerColor {
    /// Opaque-channel constructor with the standard tower alpha
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, TOWER_ALPHA])
    }

    /// Hex notation `#rrggbb` (alpha omitted)
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Composite this color over an opaque base color
    pub fn blend_over(self, base: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = self.0;
        let alpha = u32::from(a);
        let mix = |top: u8, bottom: u8| {
            ((u32::from(top) * alpha + u32::from(bottom) * (255 - alpha) + 127) / 255) as u8
        };
        [
            mix(r, base[0]),
            mix(g, base[1]),
            mix(b, base[2]),
            base[3].max(a),
        ]
    }
}

/// Supplies footprints and colors for successive towers
pub trait FootprintSource {
    /// Next footprint for a grid of the given dimensions
    ///
    /// Implementations must stay inside `width x length`; the simulation
    /// rejects anything else with a bounds error.
    fn next_footprint(&mut self, width: usize, length: usize) -> Footprint;

    /// Display color for the next tower
    fn next_color(&mut self) -> TowerColor;
}

/// Seeded random tower generator
pub struct RandomTowers {
    rng: StdRng,
}

impl RandomTowers {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FootprintSource for RandomTowers {
    fn next_footprint(&mut self, width: usize, length: usize) -> Footprint {
        let width = width.max(1);
        let length = length.max(1);

        let x = self.rng.random_range(0..width);
        let y = self.rng.random_range(0..length);
        let tower_width = self.rng.random_range(1..=width - x);
        let tower_height = self.rng.random_range(1..=length - y);

        Footprint {
            x,
            y,
            width: tower_width,
            height: tower_height,
        }
    }

    fn next_color(&mut self) -> TowerColor {
        TowerColor::rgb(self.rng.random(), self.rng.random(), self.rng.random())
    }
}

/// Replays a fixed list of towers, then repeats the last one
///
/// Used to drive the simulation deterministically.
pub struct ScriptedTowers {
    towers: VecDeque<(Footprint, TowerColor)>,
    last: Option<(Footprint, TowerColor)>,
}

impl ScriptedTowers {
    /// Script the given towers in order
    pub fn new(towers: impl IntoIterator<Item = (Footprint, TowerColor)>) -> Self {
        Self {
            towers: towers.into_iter().collect(),
            last: None,
        }
    }

    /// Number of scripted towers not yet handed out
    pub fn remaining(&self) -> usize {
        self.towers.len()
    }

    fn advance(&mut self) -> Option<(Footprint, TowerColor)> {
        if let Some(next) = self.towers.pop_front() {
            self.last = Some(next);
        }
        self.last
    }
}

impl FootprintSource for ScriptedTowers {
    fn next_footprint(&mut self, width: usize, length: usize) -> Footprint {
        self.advance().map_or(
            Footprint {
                x: 0,
                y: 0,
                width,
                height: length,
            },
            |(footprint, _)| footprint,
        )
    }

    fn next_color(&mut self) -> TowerColor {
        self.last
            .map_or(TowerColor::rgb(0, 0, 0), |(_, color)| color)
    }
}
